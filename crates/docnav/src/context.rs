//! Resolution context configuration

use std::fmt;
use std::str::FromStr;

/// Default maximum category nesting depth (no limit).
pub const DEFAULT_MAX_DEPTH: usize = usize::MAX;

/// Where document uniqueness is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateScope {
    /// A document may appear once per sidebar, at any depth
    #[default]
    Sidebar,

    /// A document may appear once among its siblings
    Category,
}

impl fmt::Display for DuplicateScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateScope::Sidebar => write!(f, "sidebar"),
            DuplicateScope::Category => write!(f, "category"),
        }
    }
}

impl FromStr for DuplicateScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sidebar" => Ok(DuplicateScope::Sidebar),
            "category" => Ok(DuplicateScope::Category),
            other => Err(format!(
                "unknown duplicate scope '{}' (expected 'sidebar' or 'category')",
                other
            )),
        }
    }
}

/// Configuration for a resolution pass.
///
/// This is passed to the [`Resolver`](crate::Resolver) and controls
/// behavior like the nesting limit and duplicate detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveContext {
    /// Maximum category nesting depth; unbounded unless set
    pub max_depth: usize,

    /// Scope in which a document may appear only once
    pub duplicate_scope: DuplicateScope,

    /// Whether to trace every node (for debugging)
    pub trace: bool,
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            duplicate_scope: DuplicateScope::default(),
            trace: false,
        }
    }
}

impl ResolveContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context that refuses categories nested deeper than `max_depth`.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Set the duplicate detection scope.
    pub fn duplicate_scope(mut self, scope: DuplicateScope) -> Self {
        self.duplicate_scope = scope;
        self
    }

    /// Enable or disable per-node tracing.
    pub fn trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
