//! Render snapshot loading.
//!
//! A snapshot is the JSON a headless browser writes after rendering a
//! document:
//!
//! ```json
//! { "root": { "tag": "html", "children": [
//!     { "tag": "body", "children": [
//!         { "tag": "p", "attrs": { "class": "title" },
//!           "style": { "display": "block", "lineHeight": "normal" },
//!           "inline": { "left": "100px", "top": "40px" },
//!           "rect": { "x": 100, "y": 40, "width": 400, "height": 48 },
//!           "children": [ { "text": "Quarterly results" } ] } ] } ] } }
//! ```
//!
//! Every element field except `tag` is optional.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    AttributesMap, ClientRect, DomTree, ElementData, InlineGeometry, NodeId, NodeType,
    RenderedStyle,
};

/// Error type for snapshot loading.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON or does not have the snapshot shape.
    #[error("malformed render snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level snapshot document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The document element (normally `<html>`).
    pub root: SnapshotNode,
}

/// One node of a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SnapshotNode {
    /// A text node.
    Text {
        /// The character data.
        text: String,
    },
    /// An element node.
    Element(Box<SnapshotElement>),
}

/// An element as dumped by the rendering engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotElement {
    /// Local name.
    pub tag: String,
    /// Attribute list.
    #[serde(default)]
    pub attrs: AttributesMap,
    /// Resolved style values.
    #[serde(default)]
    pub style: RenderedStyle,
    /// Authored inline geometry.
    #[serde(default)]
    pub inline: InlineGeometry,
    /// Rendered client rect.
    #[serde(default)]
    pub rect: ClientRect,
    /// Child nodes in document order.
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

impl DomTree {
    /// Parse a snapshot from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when the input is not a snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Parse a snapshot from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when the input is not a snapshot
    /// or cannot be read.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Parse a snapshot from an already-decoded JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Malformed`] when the value is not a snapshot.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_value(value)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Flatten a nested snapshot into the arena, in document order.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut tree = Self::new();
        // Explicit stack instead of recursion: generated slides can nest deeply.
        let mut stack = vec![(NodeId::ROOT, snapshot.root)];
        while let Some((parent, node)) = stack.pop() {
            let (node_type, children) = match node {
                SnapshotNode::Text { text } => (NodeType::Text(text), Vec::new()),
                SnapshotNode::Element(element) => {
                    let SnapshotElement {
                        tag,
                        attrs,
                        style,
                        inline,
                        rect,
                        children,
                    } = *element;
                    let data = ElementData {
                        tag_name: tag.to_ascii_lowercase(),
                        attrs,
                        style,
                        inline,
                        rect,
                    };
                    (NodeType::Element(data), children)
                }
            };
            let id = tree.alloc(node_type);
            tree.append_child(parent, id);
            // Reverse so the first child is popped (and allocated) first.
            stack.extend(children.into_iter().rev().map(|child| (id, child)));
        }
        tree
    }
}
