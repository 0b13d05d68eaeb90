/// Application layer - Use cases, factories and DTOs
///
/// This layer orchestrates the filesystem ports on behalf of callers and
/// renders results; it performs no I/O of its own.
pub mod dto;
pub mod factories;
pub mod use_cases;
