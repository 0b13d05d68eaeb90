/// Use cases module containing application business logic orchestration
mod execute_command;

pub use execute_command::ExecuteCommandUseCase;
