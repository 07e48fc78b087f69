//! Binary snapshot codec
//!
//! Pre-order prefix walk: each node emits its kind tag, length-prefixed
//! name, length-prefixed content and child count, immediately followed by
//! the encoded children in sibling order, so one forward pass rebuilds the
//! tree. All integers are little-endian; lengths are u64, child counts u32.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use super::tree::{NodeId, Tree};
use super::types::{FsError, NodeKind};

const KIND_FILE: u8 = 0;
const KIND_DIRECTORY: u8 = 1;

/// Serialize the whole tree starting at the root.
pub fn encode(tree: &Tree) -> Vec<u8> {
    let mut out = Vec::new();
    encode_node(tree, tree.root(), &mut out);
    out
}

fn encode_node(tree: &Tree, id: NodeId, out: &mut Vec<u8>) {
    let node = tree.node(id);
    out.push(match node.kind {
        NodeKind::File => KIND_FILE,
        NodeKind::Directory => KIND_DIRECTORY,
    });
    put_bytes(out, node.name.as_bytes());
    // content_len is 0 for directories, always; content-less files still
    // carry their zero length prefix
    match node.kind {
        NodeKind::File => put_bytes(out, node.content.as_bytes()),
        NodeKind::Directory => put_bytes(out, b""),
    }
    out.extend_from_slice(&(node.children.len() as u32).to_le_bytes());
    for &child in &node.children {
        encode_node(tree, child, out);
    }
}

fn put_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    out.extend_from_slice(bytes);
}

/// Rebuild a tree from `bytes`. Any inconsistency fails with
/// [`FsError::Serialization`]; the partial result is dropped and the
/// caller falls back to a fresh tree.
pub fn decode(bytes: &[u8]) -> Result<Tree, FsError> {
    let mut reader = Reader { buf: bytes, pos: 0 };
    let header = read_header(&mut reader)?;
    if header.kind != NodeKind::Directory {
        return Err(corrupt("root is not a directory"));
    }
    let mut tree = Tree::new();
    let root = tree.root();
    tree.node_mut(root).name = header.name;
    for _ in 0..header.child_count {
        decode_node(&mut reader, &mut tree, root)?;
    }
    if reader.pos != reader.buf.len() {
        return Err(corrupt("trailing bytes after root subtree"));
    }
    Ok(tree)
}

fn decode_node(reader: &mut Reader<'_>, tree: &mut Tree, parent: NodeId) -> Result<(), FsError> {
    let header = read_header(reader)?;
    let id = tree.alloc(header.kind, &header.name);
    tree.node_mut(id).content = header.content;
    tree.attach(parent, id);
    for _ in 0..header.child_count {
        decode_node(reader, tree, id)?;
    }
    Ok(())
}

struct NodeHeader {
    kind: NodeKind,
    name: String,
    content: String,
    child_count: u32,
}

fn read_header(reader: &mut Reader<'_>) -> Result<NodeHeader, FsError> {
    let kind = match reader.u8("kind tag")? {
        KIND_FILE => NodeKind::File,
        KIND_DIRECTORY => NodeKind::Directory,
        other => return Err(corrupt(format!("unknown kind tag {other}"))),
    };
    let name = reader.string("name")?;
    let content = reader.string("content")?;
    if kind == NodeKind::Directory && !content.is_empty() {
        return Err(corrupt("directory with content"));
    }
    let child_count = u32::from_le_bytes(reader.array("child count")?);
    if kind == NodeKind::File && child_count != 0 {
        return Err(corrupt("file with children"));
    }
    Ok(NodeHeader { kind, name, content, child_count })
}

fn corrupt(reason: impl Into<String>) -> FsError {
    FsError::Serialization { reason: reason.into() }
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], FsError> {
        if len > self.buf.len() - self.pos {
            return Err(corrupt(format!("truncated {what}")));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn u8(&mut self, what: &str) -> Result<u8, FsError> {
        Ok(self.take(1, what)?[0])
    }

    fn array<const N: usize>(&mut self, what: &str) -> Result<[u8; N], FsError> {
        let slice = self.take(N, what)?;
        let mut arr = [0u8; N];
        arr.copy_from_slice(slice);
        Ok(arr)
    }

    /// Length-prefixed UTF-8 text.
    fn string(&mut self, what: &str) -> Result<String, FsError> {
        let len = u64::from_le_bytes(self.array(what)?);
        let len = usize::try_from(len).map_err(|_| corrupt(format!("oversized {what}")))?;
        let bytes = self.take(len, what)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| corrupt(format!("non-utf8 {what}")))
    }
}

// ============================================================================
// Snapshot file I/O
// ============================================================================

/// Load the snapshot at `path`. A missing file is not an error and a
/// corrupt one is discarded with a warning; both fall back to a fresh,
/// root-only tree.
pub fn load_or_init(path: &Path) -> Tree {
    match fs::read(path) {
        Ok(bytes) => match decode(&bytes) {
            Ok(tree) => {
                info!(path = %path.display(), bytes = bytes.len(), "snapshot loaded");
                tree
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding corrupt snapshot, starting fresh");
                Tree::new()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no snapshot found, starting fresh");
            Tree::new()
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "cannot read snapshot, starting fresh");
            Tree::new()
        }
    }
}

/// Write the whole tree to `path`, replacing any previous snapshot.
pub fn save(tree: &Tree, path: &Path) -> io::Result<()> {
    let bytes = encode(tree);
    fs::write(path, &bytes)?;
    info!(path = %path.display(), bytes = bytes.len(), "snapshot saved");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
