/// Data Transfer Objects for application layer
///
/// DTOs carry commands in and results out, keeping the ports free of
/// presentation concerns.
mod command_response;
mod fs_command;
mod output_format;

pub use command_response::{CommandResponse, DriveSummary, EntryStat, EntryType};
pub use fs_command::FsCommand;
pub use output_format::OutputFormat;
