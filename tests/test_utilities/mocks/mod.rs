/// Mock implementations for testing
mod mock_output_presenter;
mod recording_file_system;

pub use mock_output_presenter::MockOutputPresenter;
pub use recording_file_system::RecordingFileSystem;
