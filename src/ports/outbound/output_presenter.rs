use crate::shared::Result;

/// OutputPresenter port for presenting rendered command output
///
/// This port abstracts the output destination (stdout, a captured buffer in
/// tests, etc.) where the CLI's rendered result is written.
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
