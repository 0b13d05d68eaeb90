use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fs_facade::application::dto::{FsCommand, OutputFormat};
use fs_facade::domain::TextEncoding;

/// Inspect and manipulate files through the fs-facade ports
#[derive(Parser, Debug)]
#[command(name = "fs-facade")]
#[command(version)]
#[command(about = "Inspect and manipulate files through the fs-facade ports", long_about = None)]
pub struct Args {
    /// Config file (defaults to ./fs-facade.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Text encoding for cat and write: utf-8, utf-8-bom, utf-16le, utf-16be, latin1
    #[arg(short, long, global = true, value_name = "ENC")]
    pub encoding: Option<TextEncoding>,

    /// Log every call made on text streams (visible with RUST_LOG=debug)
    #[arg(long, global = true)]
    pub log_streams: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Report whether a path is a file, a directory, or missing
    Exists { path: PathBuf },
    /// List files (or directories) in a directory
    Ls {
        dir: PathBuf,
        /// Wildcard pattern, e.g. "*.txt"
        #[arg(short, long)]
        pattern: Option<String>,
        /// Include subdirectories
        #[arg(short, long)]
        recursive: bool,
        /// List directories instead of files
        #[arg(short, long)]
        dirs: bool,
    },
    /// Print a text file
    Cat { path: PathBuf },
    /// Write text to a file, replacing it unless --append is given
    Write {
        path: PathBuf,
        text: String,
        #[arg(short, long)]
        append: bool,
    },
    /// Copy a file
    Cp {
        source: PathBuf,
        destination: PathBuf,
        /// Replace an existing destination
        #[arg(long)]
        overwrite: bool,
    },
    /// Move a file or directory
    Mv {
        source: PathBuf,
        destination: PathBuf,
    },
    /// Remove a file or directory
    Rm {
        path: PathBuf,
        /// Remove a non-empty directory and its contents
        #[arg(short, long)]
        recursive: bool,
    },
    /// Create a directory and any missing parents
    Mkdir { path: PathBuf },
    /// Show length, attributes and last write time
    Stat { path: PathBuf },
    /// List mounted volumes
    Drives,
    /// Join path parts
    Combine {
        #[arg(required = true)]
        parts: Vec<String>,
    },
    /// Print a random file name
    RandomName,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Command {
    /// Converts the parsed subcommand into an application command.
    ///
    /// `encoding` and `overwrite` are the effective defaults after merging
    /// flags with the config file.
    pub fn into_fs_command(self, encoding: Option<TextEncoding>, overwrite: bool) -> FsCommand {
        match self {
            Command::Exists { path } => FsCommand::Exists { path },
            Command::Ls {
                dir,
                pattern,
                recursive,
                dirs,
            } => FsCommand::List {
                path: dir,
                pattern,
                recursive,
                directories: dirs,
            },
            Command::Cat { path } => FsCommand::Cat { path, encoding },
            Command::Write { path, text, append } => FsCommand::Write {
                path,
                text,
                append,
                encoding,
            },
            Command::Cp {
                source,
                destination,
                overwrite: flag,
            } => FsCommand::Copy {
                source,
                destination,
                overwrite: flag || overwrite,
            },
            Command::Mv {
                source,
                destination,
            } => FsCommand::Move {
                source,
                destination,
            },
            Command::Rm { path, recursive } => FsCommand::Remove { path, recursive },
            Command::Mkdir { path } => FsCommand::MakeDirectory { path },
            Command::Stat { path } => FsCommand::Stat { path },
            Command::Drives => FsCommand::Drives,
            Command::Combine { parts } => FsCommand::Combine { parts },
            Command::RandomName => FsCommand::RandomName,
        }
    }
}
