//! Error types for sidebar resolution and site configuration

use std::fmt;

use thiserror::Error;

use crate::source::ParseError;

/// A single problem found while resolving a sidebar specification.
///
/// Locations are breadcrumbs of the form `sidebar > Category > Sub`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// The specification contains no sidebars at all
    #[error("sidebar specification is empty")]
    EmptySpec,

    /// The same sidebar name was authored more than once
    #[error("duplicate sidebar name '{name}'")]
    DuplicateSidebarName {
        /// The repeated sidebar name
        name: String,
    },

    /// A document reference names a document that does not exist
    #[error("unresolved document '{id}' at {location}")]
    UnresolvedDocumentRef {
        /// Document identifier
        id: String,
        /// Breadcrumb leading to the reference
        location: String,
    },

    /// A document reference appears more than once in the same scope
    #[error(
        "duplicate document '{id}' at {duplicate} [{duplicate_position}], \
         first listed at {first} [{first_position}]"
    )]
    DuplicateDocumentRef {
        /// Document identifier
        id: String,
        /// Breadcrumb of the first occurrence
        first: String,
        /// Sibling position of the first occurrence
        first_position: usize,
        /// Breadcrumb of the repeated occurrence
        duplicate: String,
        /// Sibling position of the repeated occurrence
        duplicate_position: usize,
    },

    /// Categories are nested deeper than the configured limit
    #[error("categories nested deeper than {max_depth} levels at {location}")]
    NestingTooDeep {
        /// Breadcrumb of the category that could not be entered
        location: String,
        /// Configured maximum depth
        max_depth: usize,
    },
}

impl Problem {
    /// Short machine-friendly name of the problem kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Problem::EmptySpec => "empty-spec",
            Problem::DuplicateSidebarName { .. } => "duplicate-sidebar-name",
            Problem::UnresolvedDocumentRef { .. } => "unresolved-document-ref",
            Problem::DuplicateDocumentRef { .. } => "duplicate-document-ref",
            Problem::NestingTooDeep { .. } => "nesting-too-deep",
        }
    }
}

/// Every problem found in one resolution pass.
///
/// Resolution never produces a partial tree: a single problem makes the
/// whole pass fail, and all of them are reported together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    problems: Vec<Problem>,
}

impl ValidationError {
    /// Wrap a list of problems.
    pub fn new(problems: Vec<Problem>) -> Self {
        Self { problems }
    }

    /// Problems in the order they were found.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Consume the error, returning its problems.
    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }

    /// Number of problems.
    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// True when no problem was recorded.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sidebar validation failed with {} problem{}",
            self.problems.len(),
            if self.problems.len() == 1 { "" } else { "s" }
        )?;
        for problem in &self.problems {
            write!(f, "\n  - {}", problem)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Errors in the site configuration itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A navbar item points at a sidebar that was not resolved
    #[error("navbar item '{label}' references unknown sidebar '{sidebar_id}'")]
    UnknownSidebar {
        /// Navbar label
        label: String,
        /// Referenced sidebar id
        sidebar_id: String,
    },

    /// No preset with the given name
    #[error("unknown preset '{0}' (expected one of: {1})")]
    UnknownPreset(String, String),
}

/// Main error type for docnav operations
#[derive(Error, Debug)]
pub enum DocnavError {
    /// The sidebar specification did not resolve
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The sidebar source could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The site configuration is inconsistent
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for docnav operations
pub type Result<T> = std::result::Result<T, DocnavError>;
