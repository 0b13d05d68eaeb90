use owo_colors::OwoColorize;
use std::fmt::Write;
use std::path::Path;

use crate::application::dto::{CommandResponse, DriveSummary, EntryStat, EntryType};
use crate::domain::FileAttributes;
use crate::ports::outbound::ResponseFormatter;
use crate::shared::Result;

/// Width of the label column in `stat` output
const LABEL_WIDTH: usize = 12;

/// TextFormatter adapter for human-readable output
///
/// Colors are only emitted when enabled, so piped output stays plain.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { color: false }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    fn paint_ok(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_missing(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_label(&self, text: &str) -> String {
        let padded = format!("{:<width$}", text, width = LABEL_WIDTH);
        if self.color {
            padded.bold().to_string()
        } else {
            padded
        }
    }

    fn format_exists(&self, path: &Path, entry_type: EntryType) -> String {
        let status = match entry_type {
            EntryType::File => self.paint_ok("file"),
            EntryType::Directory => self.paint_ok("directory"),
            EntryType::Missing => self.paint_missing("missing"),
        };
        format!("{}: {}", path.display(), status)
    }

    fn format_stat(&self, stat: &EntryStat) -> String {
        let mut output = String::new();
        let entry_type = match stat.entry_type {
            EntryType::File => "file",
            EntryType::Directory => "directory",
            EntryType::Missing => "missing",
        };
        let _ = writeln!(output, "{}{}", self.paint_label("Path:"), stat.path.display());
        let _ = writeln!(output, "{}{}", self.paint_label("Type:"), entry_type);
        if let Some(length) = stat.length {
            let _ = writeln!(output, "{}{} bytes", self.paint_label("Length:"), length);
        }
        let _ = writeln!(
            output,
            "{}{}",
            self.paint_label("Attributes:"),
            describe_attributes(&stat.attributes)
        );
        let _ = writeln!(
            output,
            "{}{}",
            self.paint_label("Modified:"),
            stat.last_write_time.to_rfc3339()
        );
        output
    }

    fn format_drives(&self, drives: &[DriveSummary]) -> String {
        let mut output = String::new();
        let header = format!(
            "{:<24} {:<10} {:<10} {:>16} {:>16}",
            "Name", "Type", "Format", "Total", "Available"
        );
        let _ = writeln!(output, "{}", if self.color { header.bold().to_string() } else { header });

        for drive in drives {
            let _ = writeln!(
                output,
                "{:<24} {:<10} {:<10} {:>16} {:>16}",
                drive.name,
                drive.drive_type.to_string(),
                drive.drive_format,
                format_size(drive.total_size),
                format_size(drive.available_free_space)
            );
        }
        output
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_attributes(attributes: &FileAttributes) -> String {
    let mut flags = Vec::new();
    if attributes.is_directory() {
        flags.push("directory");
    }
    if attributes.read_only() {
        flags.push("read-only");
    }
    if attributes.hidden() {
        flags.push("hidden");
    }
    if attributes.is_symlink() {
        flags.push("symlink");
    }
    if flags.is_empty() {
        "normal".to_string()
    } else {
        flags.join(", ")
    }
}

fn format_size(size: Option<u64>) -> String {
    size.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

impl ResponseFormatter for TextFormatter {
    fn format(&self, response: &CommandResponse) -> Result<String> {
        let output = match response {
            CommandResponse::Exists { path, entry_type } => self.format_exists(path, *entry_type),
            CommandResponse::Entries { entries, .. } => entries
                .iter()
                .map(|entry| format!("{}\n", entry.display()))
                .collect(),
            CommandResponse::Text { content, .. } => content.clone(),
            CommandResponse::Done { message } => format!("✅ {}", self.paint_ok(message)),
            CommandResponse::Stat(stat) => self.format_stat(stat),
            CommandResponse::Drives { drives } => self.format_drives(drives),
            CommandResponse::Path { path } => path.display().to_string(),
            CommandResponse::Name { name } => name.clone(),
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DriveType;
    use chrono::{DateTime, Utc};
    use std::path::PathBuf;

    #[test]
    fn test_exists_output() {
        let formatter = TextFormatter::new();
        let output = formatter
            .format(&CommandResponse::Exists {
                path: PathBuf::from("/a.txt"),
                entry_type: EntryType::Missing,
            })
            .unwrap();
        assert_eq!(output, "/a.txt: missing");
    }

    #[test]
    fn test_entries_one_per_line() {
        let output = TextFormatter::new()
            .format(&CommandResponse::Entries {
                path: PathBuf::from("/d"),
                entries: vec![PathBuf::from("/d/a"), PathBuf::from("/d/b")],
            })
            .unwrap();
        assert_eq!(output, "/d/a\n/d/b\n");
    }

    #[test]
    fn test_stat_output() {
        let output = TextFormatter::new()
            .format(&CommandResponse::Stat(EntryStat {
                path: PathBuf::from("/f.txt"),
                entry_type: EntryType::File,
                length: Some(42),
                attributes: FileAttributes::normal().with_read_only(true).with_hidden(true),
                last_write_time: DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
            }))
            .unwrap();

        assert!(output.contains("Path:       /f.txt"));
        assert!(output.contains("42 bytes"));
        assert!(output.contains("read-only, hidden"));
        assert!(output.contains("1970-01-01T00:00:00+00:00"));
    }

    #[test]
    fn test_drives_table() {
        let output = TextFormatter::new()
            .format(&CommandResponse::Drives {
                drives: vec![DriveSummary {
                    name: "/".to_string(),
                    root_directory: PathBuf::from("/"),
                    drive_type: DriveType::Fixed,
                    drive_format: "ext4".to_string(),
                    volume_label: "/dev/sda1".to_string(),
                    is_ready: true,
                    total_size: Some(1000),
                    total_free_space: Some(500),
                    available_free_space: None,
                }],
            })
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].contains("fixed"));
        assert!(lines[1].contains("ext4"));
        assert!(lines[1].contains("1000"));
        assert!(lines[1].trim_end().ends_with('-'));
    }

    #[test]
    fn test_color_only_when_enabled() {
        let response = CommandResponse::Done {
            message: "Created /x".to_string(),
        };
        let plain = TextFormatter::new().format(&response).unwrap();
        assert_eq!(plain, "✅ Created /x");

        let colored = TextFormatter::new().with_color(true).format(&response).unwrap();
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_describe_normal_attributes() {
        assert_eq!(describe_attributes(&FileAttributes::normal()), "normal");
    }
}
