// src/fs/mod.rs
pub mod json;
pub mod path;
pub mod snapshot;
pub mod tree;
pub mod types;
pub mod vfs;

pub use tree::{Node, NodeId, Tree};
pub use types::{FsError, ListEntry, NodeKind};
pub use vfs::Vfs;
