//! Resolved, render-ready navigation tree

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A document node with its validated identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavDocument {
    /// Validated document identifier
    pub id: String,

    /// Authored label, passed through unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Zero-based index among siblings
    pub position: usize,
}

/// A category node mirroring the authored category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavCategory {
    /// Authored label
    pub label: String,

    /// Authored collapsed flag
    pub collapsed: bool,

    /// Zero-based index among siblings
    pub position: usize,

    /// Children in authored order
    pub children: Vec<NavNode>,
}

/// A node in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavNode {
    /// Category with nested nodes
    Category(NavCategory),

    /// Leaf document
    Doc(NavDocument),
}

impl NavNode {
    /// Position of this node among its siblings.
    pub fn position(&self) -> usize {
        match self {
            NavNode::Category(c) => c.position,
            NavNode::Doc(d) => d.position,
        }
    }

    /// Text shown for this node.
    pub fn display_label(&self) -> &str {
        match self {
            NavNode::Category(c) => &c.label,
            NavNode::Doc(d) => d.label.as_deref().unwrap_or(&d.id),
        }
    }
}

/// One resolved sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSidebar {
    /// Root-level nodes in authored order
    pub items: Vec<NavNode>,
}

impl NavSidebar {
    /// Depth-first document nodes in authored order.
    pub fn documents(&self) -> Vec<&NavDocument> {
        fn walk<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a NavDocument>) {
            for node in nodes {
                match node {
                    NavNode::Doc(doc) => out.push(doc),
                    NavNode::Category(cat) => walk(&cat.children, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Depth-first document identifiers in authored order.
    pub fn document_ids(&self) -> Vec<&str> {
        self.documents().into_iter().map(|d| d.id.as_str()).collect()
    }
}

/// Validated navigation for every sidebar, in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    sidebars: IndexMap<String, NavSidebar>,
}

impl NavTree {
    pub(crate) fn from_sidebars(sidebars: IndexMap<String, NavSidebar>) -> Self {
        Self { sidebars }
    }

    /// Look up a sidebar by name.
    pub fn sidebar(&self, name: &str) -> Option<&NavSidebar> {
        self.sidebars.get(name)
    }

    /// Check if a sidebar exists.
    pub fn contains(&self, name: &str) -> bool {
        self.sidebars.contains_key(name)
    }

    /// Iterate sidebars in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavSidebar)> {
        self.sidebars.iter().map(|(name, s)| (name.as_str(), s))
    }

    /// Sidebar names in authored order.
    pub fn names(&self) -> Vec<&str> {
        self.sidebars.keys().map(String::as_str).collect()
    }

    /// Number of sidebars.
    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    /// Check if the tree has no sidebars.
    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}

impl fmt::Display for NavTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[NavNode], indent: usize) -> fmt::Result {
            for node in nodes {
                match node {
                    NavNode::Category(cat) => {
                        let marker = if cat.collapsed { "+" } else { "-" };
                        writeln!(f, "{:indent$}{} {}", "", marker, cat.label, indent = indent)?;
                        write_nodes(f, &cat.children, indent + 2)?;
                    }
                    NavNode::Doc(doc) => match &doc.label {
                        Some(label) => {
                            writeln!(f, "{:indent$}* {} ({})", "", label, doc.id, indent = indent)?
                        }
                        None => writeln!(f, "{:indent$}* {}", "", doc.id, indent = indent)?,
                    },
                }
            }
            Ok(())
        }

        for (name, sidebar) in &self.sidebars {
            writeln!(f, "{}", name)?;
            write_nodes(f, &sidebar.items, 2)?;
        }
        Ok(())
    }
}
