//! Path resolution
//!
//! Translates textual paths into tree positions. A leading `/` starts the
//! walk at the root, anything else at the cwd cursor; the path is split on
//! `/`, empty segments are skipped, `.` is a no-op and `..` steps to the
//! parent (staying put at the root).

use super::tree::{NodeId, Tree};
use super::types::{FsError, NodeKind};

/// Resolve `path` to a node. The empty path resolves to `cwd`, `"/"` to the
/// root. A missing component fails with `NotFound`; a non-terminal
/// component that is a file fails with `NotDirectory` rather than letting
/// the next lookup report a misleading `NotFound`.
pub fn resolve(tree: &Tree, cwd: NodeId, path: &str, operation: &str) -> Result<NodeId, FsError> {
    let mut current = if path.starts_with('/') { tree.root() } else { cwd };
    for token in path.split('/').filter(|t| !t.is_empty()) {
        match token {
            "." => {}
            ".." => {
                current = tree.node(current).parent.unwrap_or_else(|| tree.root());
            }
            name => {
                if tree.node(current).kind != NodeKind::Directory {
                    return Err(FsError::NotDirectory {
                        path: path.to_string(),
                        operation: operation.to_string(),
                    });
                }
                current = tree.find_child(current, name).ok_or_else(|| FsError::NotFound {
                    path: path.to_string(),
                    operation: operation.to_string(),
                })?;
            }
        }
    }
    Ok(current)
}

/// Split the final path component from everything before it and resolve the
/// leading part: `"name"` resolves against `cwd`, `"/name"` against the
/// root. Returns the resolved parent and the literal basename; the caller
/// decides what to do with the name (create, rename, lookup).
pub fn split_parent_and_name<'a>(
    tree: &Tree,
    cwd: NodeId,
    path: &'a str,
    operation: &str,
) -> Result<(NodeId, &'a str), FsError> {
    match path.rfind('/') {
        None => Ok((cwd, path)),
        Some(idx) => {
            let dirname = &path[..idx];
            let basename = &path[idx + 1..];
            let parent = if dirname.is_empty() {
                tree.root()
            } else {
                resolve(tree, cwd, dirname, operation)?
            };
            Ok((parent, basename))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
