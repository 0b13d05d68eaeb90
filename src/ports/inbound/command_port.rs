use crate::application::dto::{CommandResponse, FsCommand};
use crate::shared::Result;

/// CommandPort - Inbound port for executing filesystem commands
///
/// This port defines the interface that external adapters (the CLI, scripts,
/// tests) use to drive the application. It represents the application's
/// public API.
pub trait CommandPort {
    /// Executes a single command
    ///
    /// # Errors
    /// Returns an error if:
    /// - The target path does not exist or has the wrong kind
    /// - The platform rejects the operation (permissions, sharing, full disk)
    /// - An argument such as a search pattern or drive name is invalid
    fn execute(&self, command: FsCommand) -> Result<CommandResponse>;
}
