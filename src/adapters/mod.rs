/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports: the native
/// platform, the in-memory fake, stream codecs and logging decorators.
pub mod outbound;
