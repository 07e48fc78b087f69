//! File System Types
//!
//! Core types shared across the virtual file system.

use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: file already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("EISDIR: illegal operation on a directory, {operation} '{path}'")]
    IsDirectory { path: String, operation: String },

    #[error("ENOTDIR: not a directory, {operation} '{path}'")]
    NotDirectory { path: String, operation: String },

    #[error("ENOTEMPTY: directory not empty, {operation} '{path}'")]
    NotEmpty { path: String, operation: String },

    #[error("EPERM: operation not permitted on root, {operation} '{path}'")]
    RootImmutable { path: String, operation: String },

    #[error("EINVAL: cannot move into own subtree, {operation} '{path}'")]
    CyclicMove { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidArgument { path: String, operation: String },

    #[error("corrupt snapshot: {reason}")]
    Serialization { reason: String },
}

/// What a node is. Fixed at creation; a file never becomes a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

impl NodeKind {
    pub fn is_file(self) -> bool {
        matches!(self, NodeKind::File)
    }

    pub fn is_directory(self) -> bool {
        matches!(self, NodeKind::Directory)
    }
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub name: String,
    pub kind: NodeKind,
    /// Content length in characters; always 0 for directories.
    pub size: usize,
}

// ============================================================================
// Tests
// ============================================================================
