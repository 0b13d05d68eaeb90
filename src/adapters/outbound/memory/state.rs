use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::memory_drive::FakeDrive;
use crate::domain::FileAttributes;
use crate::ports::outbound::path_operations::normalize_path;
use crate::shared::error::FsError;
use crate::shared::Result;

/// Bytes and metadata of one in-memory file.
#[derive(Debug)]
pub(super) struct FileContent {
    pub(super) bytes: Vec<u8>,
    pub(super) read_only: bool,
    pub(super) modified: DateTime<Utc>,
}

impl FileContent {
    fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            read_only: false,
            modified: Utc::now(),
        }
    }
}

/// Content shared between the node table and every open handle.
pub(super) type SharedContent = Arc<RwLock<FileContent>>;

#[derive(Debug, Clone, Copy)]
pub(super) struct DirectoryMeta {
    pub(super) read_only: bool,
    pub(super) modified: DateTime<Utc>,
}

impl DirectoryMeta {
    fn new() -> Self {
        Self {
            read_only: false,
            modified: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub(super) enum Node {
    File(SharedContent),
    Directory(DirectoryMeta),
}

impl Node {
    pub(super) fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub(super) fn attributes(&self, path: &Path) -> FileAttributes {
        let hidden = path
            .file_name()
            .map(|name| FileAttributes::is_hidden_name(&name.to_string_lossy()))
            .unwrap_or(false);
        match self {
            Node::File(content) => FileAttributes::new(content.read().read_only, hidden, false, false),
            Node::Directory(meta) => FileAttributes::new(meta.read_only, hidden, true, false),
        }
    }

    pub(super) fn modified(&self) -> DateTime<Utc> {
        match self {
            Node::File(content) => content.read().modified,
            Node::Directory(meta) => meta.modified,
        }
    }
}

/// State shared by every port of one `InMemoryFileSystem` and its clones.
///
/// Keys of `nodes` are always normalized absolute paths. Node values are
/// cloned out before any mutation so no map guard is held across calls.
#[derive(Debug)]
pub(super) struct MemoryState {
    nodes: DashMap<PathBuf, Node>,
    current_dir: RwLock<PathBuf>,
    drives: RwLock<Vec<FakeDrive>>,
    root: PathBuf,
}

impl MemoryState {
    pub(super) fn new() -> Self {
        let root = normalize_path(Path::new("/"), Path::new("/"));
        let nodes = DashMap::new();
        nodes.insert(root.clone(), Node::Directory(DirectoryMeta::new()));

        Self {
            nodes,
            current_dir: RwLock::new(root.clone()),
            drives: RwLock::new(vec![FakeDrive::new(root.clone())]),
            root,
        }
    }

    pub(super) fn root(&self) -> &Path {
        &self.root
    }

    pub(super) fn temp_dir(&self) -> PathBuf {
        self.root.join("tmp")
    }

    /// Absolute, normalized form of `path` relative to the fake's current directory.
    pub(super) fn resolve(&self, path: &Path) -> PathBuf {
        normalize_path(&self.current_dir.read(), path)
    }

    pub(super) fn current_dir(&self) -> PathBuf {
        self.current_dir.read().clone()
    }

    pub(super) fn set_current_dir(&self, path: PathBuf) {
        *self.current_dir.write() = path;
    }

    pub(super) fn node(&self, path: &Path) -> Option<Node> {
        self.nodes.get(path).map(|node| node.value().clone())
    }

    pub(super) fn is_file(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::File(_)))
    }

    pub(super) fn is_directory(&self, path: &Path) -> bool {
        matches!(self.node(path), Some(Node::Directory(_)))
    }

    pub(super) fn require_node(&self, path: &Path) -> Result<Node> {
        self.node(path).ok_or_else(|| not_found(path))
    }

    pub(super) fn require_file(&self, path: &Path) -> Result<SharedContent> {
        match self.node(path) {
            Some(Node::File(content)) => Ok(content),
            Some(Node::Directory(_)) => Err(is_a_directory(path)),
            None => Err(not_found(path)),
        }
    }

    pub(super) fn require_directory(&self, path: &Path) -> Result<DirectoryMeta> {
        match self.node(path) {
            Some(Node::Directory(meta)) => Ok(meta),
            Some(Node::File(_)) => Err(not_a_directory(path)),
            None => Err(not_found(path)),
        }
    }

    /// Checks that the parent of `path` exists and is a directory.
    pub(super) fn require_parent(&self, path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) => self.require_directory(parent).map(|_| ()),
            None => Ok(()),
        }
    }

    /// Creates an empty file or fails with `AlreadyExists`.
    pub(super) fn create_file(&self, path: &Path, bytes: Vec<u8>) -> Result<SharedContent> {
        self.require_parent(path)?;
        let content = Arc::new(RwLock::new(FileContent::new(bytes)));
        match self.nodes.entry(path.to_path_buf()) {
            Entry::Occupied(_) => return Err(already_exists(path)),
            Entry::Vacant(vacant) => {
                vacant.insert(Node::File(Arc::clone(&content)));
            }
        }
        self.touch_parent(path);
        Ok(content)
    }

    /// Creates `path` and every missing ancestor as directories.
    pub(super) fn create_directory_all(&self, path: &Path) -> Result<()> {
        let mut ancestors: Vec<&Path> = path.ancestors().collect();
        ancestors.reverse();

        for ancestor in ancestors {
            let created = match self.nodes.entry(ancestor.to_path_buf()) {
                Entry::Occupied(occupied) => match occupied.get() {
                    Node::Directory(_) => false,
                    Node::File(_) if ancestor == path => return Err(already_exists(path)),
                    Node::File(_) => return Err(not_a_directory(ancestor)),
                },
                Entry::Vacant(vacant) => {
                    vacant.insert(Node::Directory(DirectoryMeta::new()));
                    true
                }
            };
            if created {
                self.touch_parent(ancestor);
            }
        }
        Ok(())
    }

    /// Inserts a node, replacing whatever is at `path` and turning every
    /// ancestor into a directory. Used by the builder helpers.
    pub(super) fn insert_forced(&self, path: &Path, node: Node) {
        for ancestor in path.ancestors().skip(1) {
            if !self.is_directory(ancestor) {
                self.nodes
                    .insert(ancestor.to_path_buf(), Node::Directory(DirectoryMeta::new()));
            }
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    pub(super) fn new_file_node(bytes: Vec<u8>) -> Node {
        Node::File(Arc::new(RwLock::new(FileContent::new(bytes))))
    }

    pub(super) fn new_directory_node() -> Node {
        Node::Directory(DirectoryMeta::new())
    }

    pub(super) fn remove(&self, path: &Path) {
        self.nodes.remove(path);
        self.touch_parent(path);
    }

    pub(super) fn has_children(&self, path: &Path) -> bool {
        self.nodes
            .iter()
            .any(|entry| entry.key().parent() == Some(path))
    }

    /// Paths below `path` (excluding `path` itself), either direct children
    /// or the whole subtree.
    pub(super) fn descendants(&self, path: &Path, recursive: bool) -> Vec<(PathBuf, bool)> {
        self.nodes
            .iter()
            .filter(|entry| {
                let key = entry.key();
                if recursive {
                    key != path && key.starts_with(path)
                } else {
                    key.parent() == Some(path)
                }
            })
            .map(|entry| (entry.key().clone(), entry.value().is_directory()))
            .collect()
    }

    pub(super) fn remove_subtree(&self, path: &Path) {
        let keys: Vec<PathBuf> = self
            .nodes
            .iter()
            .filter(|entry| entry.key().starts_with(path))
            .map(|entry| entry.key().clone())
            .collect();
        for key in keys {
            self.nodes.remove(&key);
        }
        self.touch_parent(path);
    }

    /// Re-keys `source` and everything below it under `destination`.
    pub(super) fn move_subtree(&self, source: &Path, destination: &Path) {
        let moved: Vec<(PathBuf, Node)> = self
            .nodes
            .iter()
            .filter(|entry| entry.key().starts_with(source))
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect();

        for (key, _) in &moved {
            self.nodes.remove(key);
        }
        for (key, node) in moved {
            let target = match key.strip_prefix(source) {
                Ok(relative) if !relative.as_os_str().is_empty() => destination.join(relative),
                _ => destination.to_path_buf(),
            };
            self.nodes.insert(target, node);
        }
        self.touch_parent(source);
        self.touch_parent(destination);
    }

    pub(super) fn set_modified(&self, path: &Path, time: DateTime<Utc>) -> Result<()> {
        match self.nodes.get_mut(path) {
            Some(mut entry) => {
                match entry.value_mut() {
                    Node::File(content) => content.write().modified = time,
                    Node::Directory(meta) => meta.modified = time,
                }
                Ok(())
            }
            None => Err(not_found(path)),
        }
    }

    pub(super) fn set_read_only(&self, path: &Path, read_only: bool) -> Result<()> {
        match self.nodes.get_mut(path) {
            Some(mut entry) => {
                match entry.value_mut() {
                    Node::File(content) => content.write().read_only = read_only,
                    Node::Directory(meta) => meta.read_only = read_only,
                }
                Ok(())
            }
            None => Err(not_found(path)),
        }
    }

    fn touch_parent(&self, path: &Path) {
        let Some(parent) = path.parent() else {
            return;
        };
        if let Some(mut entry) = self.nodes.get_mut(parent) {
            if let Node::Directory(meta) = entry.value_mut() {
                meta.modified = Utc::now();
            }
        }
    }

    pub(super) fn drives(&self) -> Vec<FakeDrive> {
        self.drives.read().clone()
    }

    /// Adds a drive, replacing one with the same name.
    pub(super) fn add_drive(&self, drive: FakeDrive) {
        let mut drives = self.drives.write();
        drives.retain(|existing| existing.name_str() != drive.name_str());
        drives.push(drive);
    }
}

fn io_error(kind: io::ErrorKind, message: &str, path: &Path) -> FsError {
    io::Error::new(kind, format!("{}: {}", message, path.display())).into()
}

pub(super) fn not_found(path: &Path) -> FsError {
    io_error(io::ErrorKind::NotFound, "No such file or directory", path)
}

pub(super) fn already_exists(path: &Path) -> FsError {
    io_error(io::ErrorKind::AlreadyExists, "File exists", path)
}

pub(super) fn permission_denied(path: &Path) -> FsError {
    io_error(io::ErrorKind::PermissionDenied, "Permission denied", path)
}

pub(super) fn is_a_directory(path: &Path) -> FsError {
    io_error(io::ErrorKind::IsADirectory, "Is a directory", path)
}

pub(super) fn not_a_directory(path: &Path) -> FsError {
    io_error(io::ErrorKind::NotADirectory, "Not a directory", path)
}

pub(super) fn directory_not_empty(path: &Path) -> FsError {
    io_error(io::ErrorKind::DirectoryNotEmpty, "Directory not empty", path)
}

pub(super) fn invalid_input(message: &str, path: &Path) -> FsError {
    io_error(io::ErrorKind::InvalidInput, message, path)
}
