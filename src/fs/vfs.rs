//! Virtual filesystem session
//!
//! Owns the node tree plus the current-directory cursor and exposes the
//! path-addressed operations the shell dispatches to. Every operation
//! either succeeds or returns an [`FsError`] leaving the tree unchanged.

use super::path;
use super::tree::{NodeId, Tree};
use super::types::{FsError, ListEntry, NodeKind};

/// Sibling names are capped; longer names are rejected outright.
pub const MAX_NAME_LEN: usize = 99;

/// A single-session view over a [`Tree`]: the root handle lives in the
/// tree, the cwd cursor lives here.
pub struct Vfs {
    tree: Tree,
    cwd: NodeId,
}

impl Vfs {
    /// Fresh session over a root-only tree.
    pub fn new() -> Self {
        Self::from_tree(Tree::new())
    }

    /// Session over a previously built (e.g. loaded) tree, with the cursor
    /// at the root.
    pub fn from_tree(tree: Tree) -> Self {
        let cwd = tree.root();
        Self { tree, cwd }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Create a directory. Fails loudly when a same-named sibling of any
    /// kind already exists.
    pub fn mkdir(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path, "mkdir")?;
        if self.tree.find_child(parent, name).is_some() {
            return Err(FsError::AlreadyExists {
                path: path.to_string(),
                operation: "mkdir".to_string(),
            });
        }
        validate_name(name, path, "mkdir")?;
        let dir = self.tree.alloc(NodeKind::Directory, name);
        self.tree.attach(parent, dir);
        Ok(())
    }

    /// Create an empty file. An existing target of any kind is a no-op
    /// success, matching conventional touch semantics.
    pub fn touch(&mut self, path: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path, "touch")?;
        if self.tree.find_child(parent, name).is_some() {
            return Ok(());
        }
        validate_name(name, path, "touch")?;
        let file = self.tree.alloc(NodeKind::File, name);
        self.tree.attach(parent, file);
        Ok(())
    }

    /// Replace a file's content wholesale, creating the file first when the
    /// target does not exist (touch rules apply to the parent).
    pub fn write_file(&mut self, path: &str, text: &str) -> Result<(), FsError> {
        let (parent, name) = self.resolve_parent(path, "write")?;
        let target = match self.tree.find_child(parent, name) {
            Some(id) => {
                if self.tree.node(id).kind.is_directory() {
                    return Err(FsError::IsDirectory {
                        path: path.to_string(),
                        operation: "write".to_string(),
                    });
                }
                id
            }
            None => {
                validate_name(name, path, "write")?;
                let file = self.tree.alloc(NodeKind::File, name);
                self.tree.attach(parent, file);
                file
            }
        };
        self.tree.node_mut(target).content = text.to_string();
        Ok(())
    }

    /// Read a file's content; empty string when nothing was ever written.
    pub fn read_file(&self, path: &str) -> Result<String, FsError> {
        let target = path::resolve(&self.tree, self.cwd, path, "read")?;
        let node = self.tree.node(target);
        if node.kind.is_directory() {
            return Err(FsError::IsDirectory {
                path: path.to_string(),
                operation: "read".to_string(),
            });
        }
        Ok(node.content.clone())
    }

    /// Remove a file or an empty directory and free its subtree.
    pub fn rm(&mut self, path: &str) -> Result<(), FsError> {
        let target = path::resolve(&self.tree, self.cwd, path, "rm")?;
        if target == self.tree.root() {
            return Err(FsError::RootImmutable {
                path: path.to_string(),
                operation: "rm".to_string(),
            });
        }
        let (is_nonempty_dir, parent) = {
            let node = self.tree.node(target);
            (node.kind.is_directory() && !node.children.is_empty(), node.parent)
        };
        if is_nonempty_dir {
            return Err(FsError::NotEmpty {
                path: path.to_string(),
                operation: "rm".to_string(),
            });
        }
        // Removing the directory the cursor sits in would strand it; step
        // up to the parent first. Only the target itself can hold the
        // cursor here, since the target has no children.
        if self.cwd == target {
            if let Some(parent) = parent {
                self.cwd = parent;
            }
        }
        self.tree.detach(target);
        self.tree.destroy_subtree(target);
        Ok(())
    }

    /// Move or rename. A destination that names an existing directory means
    /// "into it, keeping the source name"; anything else splits into parent
    /// plus new name. Attach is the last step, so a failed move never
    /// leaves the source detached.
    pub fn mv(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        let source = path::resolve(&self.tree, self.cwd, src, "mv")?;
        if source == self.tree.root() {
            return Err(FsError::RootImmutable {
                path: src.to_string(),
                operation: "mv".to_string(),
            });
        }
        let (dest_parent, new_name) = self.destination(dst, source, "mv")?;
        if self.tree.find_child(dest_parent, &new_name).is_some() {
            return Err(FsError::AlreadyExists {
                path: dst.to_string(),
                operation: "mv".to_string(),
            });
        }
        if self.tree.is_self_or_ancestor(source, dest_parent) {
            return Err(FsError::CyclicMove {
                path: src.to_string(),
                operation: "mv".to_string(),
            });
        }
        validate_name(&new_name, dst, "mv")?;
        self.tree.detach(source);
        self.tree.node_mut(source).name = new_name;
        self.tree.attach(dest_parent, source);
        Ok(())
    }

    /// Deep-copy a subtree. Same destination rules as [`Vfs::mv`]; the
    /// clone shares nothing with the original.
    pub fn cp(&mut self, src: &str, dst: &str) -> Result<(), FsError> {
        let source = path::resolve(&self.tree, self.cwd, src, "cp")?;
        let (dest_parent, new_name) = self.destination(dst, source, "cp")?;
        if self.tree.find_child(dest_parent, &new_name).is_some() {
            return Err(FsError::AlreadyExists {
                path: dst.to_string(),
                operation: "cp".to_string(),
            });
        }
        validate_name(&new_name, dst, "cp")?;
        let clone = self.tree.deep_copy(source);
        self.tree.node_mut(clone).name = new_name;
        self.tree.attach(dest_parent, clone);
        Ok(())
    }

    /// List a directory's children in insertion order, or the single entry
    /// for a file target.
    pub fn ls(&self, path: &str) -> Result<Vec<ListEntry>, FsError> {
        let target = path::resolve(&self.tree, self.cwd, path, "ls")?;
        let node = self.tree.node(target);
        match node.kind {
            NodeKind::File => Ok(vec![self.entry(target)]),
            NodeKind::Directory => {
                Ok(node.children.iter().map(|&child| self.entry(child)).collect())
            }
        }
    }

    /// Move the cursor. The cursor is untouched when resolution fails or
    /// the target is a file.
    pub fn cd(&mut self, path: &str) -> Result<(), FsError> {
        let target = path::resolve(&self.tree, self.cwd, path, "cd")?;
        if !self.tree.node(target).kind.is_directory() {
            return Err(FsError::NotDirectory {
                path: path.to_string(),
                operation: "cd".to_string(),
            });
        }
        self.cwd = target;
        Ok(())
    }

    /// Absolute path of the cursor, `/` when it sits on the root.
    pub fn pwd(&self) -> String {
        let mut segments = Vec::new();
        let mut cursor = self.cwd;
        while let Some(parent) = self.tree.node(cursor).parent {
            segments.push(self.tree.node(cursor).name.clone());
            cursor = parent;
        }
        if segments.is_empty() {
            "/".to_string()
        } else {
            segments.reverse();
            format!("/{}", segments.join("/"))
        }
    }

    fn entry(&self, id: NodeId) -> ListEntry {
        let node = self.tree.node(id);
        ListEntry {
            name: node.name.clone(),
            kind: node.kind,
            size: node.content.chars().count(),
        }
    }

    /// Resolve the parent position for a creation/rename, insisting it is
    /// a directory.
    fn resolve_parent<'a>(&self, path: &'a str, operation: &str) -> Result<(NodeId, &'a str), FsError> {
        let (parent, name) = path::split_parent_and_name(&self.tree, self.cwd, path, operation)?;
        if !self.tree.node(parent).kind.is_directory() {
            return Err(FsError::NotDirectory {
                path: path.to_string(),
                operation: operation.to_string(),
            });
        }
        Ok((parent, name))
    }

    /// Destination rule shared by mv and cp.
    fn destination(&self, dst: &str, source: NodeId, operation: &str) -> Result<(NodeId, String), FsError> {
        if let Ok(target) = path::resolve(&self.tree, self.cwd, dst, operation) {
            if self.tree.node(target).kind.is_directory() {
                return Ok((target, self.tree.node(source).name.clone()));
            }
        }
        let (parent, name) = self.resolve_parent(dst, operation)?;
        Ok((parent, name.to_string()))
    }
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_name(name: &str, path: &str, operation: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.chars().count() > MAX_NAME_LEN {
        return Err(FsError::InvalidArgument {
            path: path.to_string(),
            operation: operation.to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
