use crate::ports::outbound::OutputPresenter;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutPresenter adapter for writing command output to stdout
///
/// A trailing newline is added when the content lacks one.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
        Ok(())
    }
}
