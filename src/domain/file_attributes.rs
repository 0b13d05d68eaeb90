use serde::Serialize;

/// Attribute flags of a file or directory.
///
/// Only `read_only` can be changed through `set_attributes`; the other flags
/// describe what the platform reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FileAttributes {
    read_only: bool,
    hidden: bool,
    directory: bool,
    symlink: bool,
}

impl FileAttributes {
    /// Attributes of a plain, writable, visible file.
    pub fn normal() -> Self {
        Self::default()
    }

    pub fn new(read_only: bool, hidden: bool, directory: bool, symlink: bool) -> Self {
        Self {
            read_only,
            hidden,
            directory,
            symlink,
        }
    }

    pub fn read_only(&self) -> bool {
        self.read_only
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_directory(&self) -> bool {
        self.directory
    }

    pub fn is_symlink(&self) -> bool {
        self.symlink
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_directory(mut self, directory: bool) -> Self {
        self.directory = directory;
        self
    }

    /// Unix convention: dot-files are hidden.
    pub fn is_hidden_name(name: &str) -> bool {
        name.starts_with('.') && name != "." && name != ".."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_has_no_flags() {
        let attrs = FileAttributes::normal();
        assert!(!attrs.read_only());
        assert!(!attrs.hidden());
        assert!(!attrs.is_directory());
        assert!(!attrs.is_symlink());
    }

    #[test]
    fn test_builder_methods() {
        let attrs = FileAttributes::normal()
            .with_read_only(true)
            .with_directory(true);
        assert!(attrs.read_only());
        assert!(attrs.is_directory());
        assert!(!attrs.with_read_only(false).read_only());
    }

    #[test]
    fn test_hidden_name() {
        assert!(FileAttributes::is_hidden_name(".gitignore"));
        assert!(!FileAttributes::is_hidden_name("visible.txt"));
        assert!(!FileAttributes::is_hidden_name("."));
        assert!(!FileAttributes::is_hidden_name(".."));
    }
}
