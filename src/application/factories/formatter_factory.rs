use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::application::dto::{CommandResponse, OutputFormat};
use crate::ports::outbound::ResponseFormatter;
use crate::shared::Result;

/// Factory for creating response formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `color` - Whether text output may contain ANSI colors (ignored for JSON)
    ///
    /// # Examples
    /// ```
    /// use fs_facade::application::dto::OutputFormat;
    /// use fs_facade::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Json, false);
    /// ```
    pub fn create(format: OutputFormat, color: bool) -> Box<dyn ResponseFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new().with_color(color)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Renders a response in the given format without colors.
///
/// # Examples
/// ```
/// use fs_facade::application::dto::{CommandResponse, OutputFormat};
/// use fs_facade::application::factories::render;
///
/// let response = CommandResponse::Name { name: "a1b2c3d4.e5f".to_string() };
/// assert_eq!(render(&response, OutputFormat::Text).unwrap(), "a1b2c3d4.e5f");
/// ```
pub fn render(response: &CommandResponse, format: OutputFormat) -> Result<String> {
    FormatterFactory::create(format, false).format(response)
}
