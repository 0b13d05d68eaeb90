/// Buffered text reader/writer over byte streams, shared by every backend
mod text_reader;
mod text_writer;

pub use text_reader::StreamTextReader;
pub use text_writer::StreamTextWriter;
