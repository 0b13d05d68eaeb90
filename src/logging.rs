//! tracing initialisation for the `fs-facade` binary.

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config file set one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins over `level`; `level` falls back to `warn`. A second call
/// is a no-op so tests can initialise freely.
pub fn init_logging(level: Option<&str>) {
    if tracing::dispatcher::has_been_set() {
        return;
    }

    let subscriber = fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
    tracing::debug!("tracing initialized");
}

fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Some("error"));
        init_logging(None);
        assert!(tracing::dispatcher::has_been_set());
    }

    #[test]
    fn test_invalid_level_falls_back() {
        if std::env::var_os("RUST_LOG").is_none() {
            assert_eq!(build_filter(Some("fs_facade=loud")).to_string(), DEFAULT_LOG_LEVEL);
        }
    }
}
