//! JSON tree export
//!
//! Read-only view over the tree serialized with serde. Directories with no
//! children omit the `children` key, files with no content omit `content`,
//! and all text goes through full JSON escaping.

use serde::Serialize;

use super::tree::{NodeId, Tree};
use super::types::NodeKind;

#[derive(Serialize)]
struct JsonNode<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<JsonNode<'a>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
}

/// Render the whole tree as one JSON object per node, pre-order.
pub fn export_json(tree: &Tree) -> String {
    let view = node_view(tree, tree.root());
    serde_json::to_string(&view).expect("tree view serialization cannot fail")
}

fn node_view(tree: &Tree, id: NodeId) -> JsonNode<'_> {
    let node = tree.node(id);
    match node.kind {
        NodeKind::Directory => JsonNode {
            name: &node.name,
            kind: "directory",
            children: if node.children.is_empty() {
                None
            } else {
                Some(node.children.iter().map(|&c| node_view(tree, c)).collect())
            },
            content: None,
        },
        NodeKind::File => JsonNode {
            name: &node.name,
            kind: "file",
            children: None,
            content: if node.content.is_empty() { None } else { Some(&node.content) },
        },
    }
}

// ============================================================================
// Tests
// ============================================================================
