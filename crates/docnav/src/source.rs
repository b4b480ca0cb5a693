//! Sidebar specification sources
//!
//! This module defines the `SpecSource` trait that turns authored sidebar
//! files into a [`SidebarSpec`].
//!
//! # Architecture
//!
//! ```text
//! sidebars.json → [SpecSource] → SidebarSpec → [Resolver] → NavTree
//! ```
//!
//! Sources are responsible for:
//! - Parsing the authored format
//! - Keeping repeated sidebar names visible instead of overwriting them
//! - Reporting parse failures with a location
//!
//! The accepted item shapes follow the Docusaurus sidebar format:
//!
//! ```json
//! {
//!   "docsSidebar": [
//!     "intro",
//!     { "type": "doc", "id": "intro", "label": "Welcome" },
//!     { "type": "category", "label": "Guides", "collapsed": true, "items": ["guides/go-live"] }
//!   ]
//! }
//! ```

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::spec::{Category, Child, DocumentRef, SidebarSpec};

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred while reading a sidebar source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// A format that sidebar specifications can be authored in.
pub trait SpecSource {
    /// Format name (for diagnostics).
    fn name(&self) -> &str;

    /// Parse authored text into a specification.
    ///
    /// `file` is only used to label error locations.
    fn load(&self, file: &str, text: &str) -> Result<SidebarSpec, ParseError>;
}

/// Sidebar specifications authored as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl SpecSource for JsonSource {
    fn name(&self) -> &str {
        "json"
    }

    fn load(&self, file: &str, text: &str) -> Result<SidebarSpec, ParseError> {
        serde_json::from_str(text).map_err(|e| {
            ParseError::new(e.to_string()).with_location(SourceLocation::new(file, e.line(), e.column()))
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// WIRE FORMAT
// ═══════════════════════════════════════════════════════════════════════

/// Accepted item shapes, named in parse errors.
const ITEM_SHAPES: &str =
    "a document id string, or an object with \"type\": \"doc\" or \"type\": \"category\"";

enum RawItem {
    Id(String),
    Tagged(TaggedItem),
}

struct RawItemVisitor;

impl<'de> Visitor<'de> for RawItemVisitor {
    type Value = RawItem;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ITEM_SHAPES)
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RawItem::Id(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(RawItem::Id(v))
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        TaggedItem::deserialize(MapAccessDeserializer::new(map)).map(RawItem::Tagged)
    }
}

impl<'de> Deserialize<'de> for RawItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawItemVisitor)
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum TaggedItem {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        collapsed: bool,
        // Required: an empty category must be authored as `"items": []`.
        items: Vec<RawItem>,
    },
}

impl From<RawItem> for Child {
    fn from(raw: RawItem) -> Self {
        match raw {
            RawItem::Id(id) => Child::doc(id),
            RawItem::Tagged(TaggedItem::Doc { id, label }) => Child::Document(DocumentRef { id, label }),
            RawItem::Tagged(TaggedItem::Category {
                label,
                collapsed,
                items,
            }) => Child::Category(Category {
                label,
                collapsed,
                children: items.into_iter().map(Child::from).collect(),
            }),
        }
    }
}

struct SpecVisitor;

impl<'de> Visitor<'de> for SpecVisitor {
    type Value = SidebarSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of sidebar names to item lists")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut spec = SidebarSpec::new();
        // Repeated keys reach us one by one; SidebarSpec records them.
        while let Some((name, items)) = map.next_entry::<String, Vec<RawItem>>()? {
            spec.insert(name, items.into_iter().map(Child::from).collect());
        }
        Ok(spec)
    }
}

impl<'de> Deserialize<'de> for SidebarSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SpecVisitor)
    }
}
