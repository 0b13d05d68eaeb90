use crate::application::dto::CommandResponse;
use crate::ports::outbound::ResponseFormatter;
use crate::shared::error::FsError;
use crate::shared::Result;

/// JsonFormatter adapter producing one pretty-printed JSON document per response
///
/// The document carries a `kind` tag naming the response variant.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatter for JsonFormatter {
    fn format(&self, response: &CommandResponse) -> Result<String> {
        serde_json::to_string_pretty(response).map_err(|e| FsError::Render {
            details: e.to_string(),
        })
    }
}
