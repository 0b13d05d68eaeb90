mod cli;

use anyhow::{Context, Result};
use cli::Args;
use fs_facade::adapters::outbound::console::StdoutPresenter;
use fs_facade::adapters::outbound::native::NativeFileSystem;
use fs_facade::application::dto::OutputFormat;
use fs_facade::application::factories::FormatterFactory;
use fs_facade::application::use_cases::ExecuteCommandUseCase;
use fs_facade::config::{self, ConfigFile};
use fs_facade::logging;
use fs_facade::ports::outbound::OutputPresenter;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let (config, config_path) = load_config(&args)?;
    logging::init_logging(config.log_level.as_deref());
    if let Some(path) = config_path {
        tracing::info!("Loaded config from: {}", path.display());
    }
    config.warn_unknown_fields();

    // Command-line flags override config values
    let format = args.format.or_else(|| config.format()).unwrap_or_default();
    let encoding = args.encoding.or_else(|| config.encoding());
    let log_streams = args.log_streams || config.log_streams.unwrap_or(false);
    let overwrite = config.overwrite.unwrap_or(false);

    // Create adapters (Dependency Injection)
    let fs = NativeFileSystem::new().with_stream_logging(log_streams);
    let use_case = ExecuteCommandUseCase::new(fs);

    let command = args.command.into_fs_command(encoding, overwrite);
    let name = command.name();
    let response = use_case
        .execute(command)
        .with_context(|| format!("Command '{}' failed", name))?;

    let formatter = FormatterFactory::create(format, use_color(format));
    let output = formatter.format(&response)?;

    StdoutPresenter::new().present(&output)?;

    Ok(())
}

/// Loads `--config`, or the config file in the current directory when present.
fn load_config(args: &Args) -> Result<(ConfigFile, Option<PathBuf>)> {
    if let Some(path) = args.config.as_deref() {
        return Ok((config::load_config_from_path(path)?, Some(path.to_path_buf())));
    }
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    match config::discover_config(&current_dir)? {
        Some(found) => Ok((found, Some(current_dir.join(config::CONFIG_FILENAME)))),
        None => Ok((ConfigFile::default(), None)),
    }
}

fn use_color(format: OutputFormat) -> bool {
    format == OutputFormat::Text
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
