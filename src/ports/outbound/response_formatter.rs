use crate::application::dto::CommandResponse;
use crate::shared::Result;

/// ResponseFormatter port for rendering command results
///
/// This port abstracts the rendering of a `CommandResponse` into text or a
/// machine-readable document.
pub trait ResponseFormatter {
    /// Renders a command response
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &CommandResponse) -> Result<String>;
}
