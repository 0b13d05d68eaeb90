/// Logging decorators for text readers and writers
mod logging_text_reader;
mod logging_text_writer;

pub use logging_text_reader::LoggingTextReader;
pub use logging_text_writer::LoggingTextWriter;
