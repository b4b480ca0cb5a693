//! Breadcrumb of category labels visited while walking a sidebar

mod guard;

pub use guard::CrumbGuard;

use crate::error::Problem;

/// Separator used when rendering a breadcrumb.
pub const SEPARATOR: &str = " > ";

/// The path from a sidebar root to the node currently being visited.
///
/// The first segment is always the sidebar name; each category entered
/// pushes its label and leaving pops it again.
///
/// # Example
///
/// ```
/// use docnav::Breadcrumb;
///
/// let mut crumbs = Breadcrumb::new("docsSidebar", 8);
/// {
///     let guard = crumbs.enter("Getting Started").unwrap();
///     assert_eq!(guard.render(), "docsSidebar > Getting Started");
/// }
/// assert_eq!(crumbs.render(), "docsSidebar");
/// ```
#[derive(Debug, Clone)]
pub struct Breadcrumb {
    /// Sidebar name followed by category labels
    segments: Vec<String>,

    /// Maximum number of categories that may be entered
    max_depth: usize,
}

impl Breadcrumb {
    /// Start a breadcrumb at the root of a sidebar.
    pub fn new(sidebar: impl Into<String>, max_depth: usize) -> Self {
        Self {
            segments: vec![sidebar.into()],
            max_depth,
        }
    }

    /// Enter a category.
    ///
    /// # Errors
    ///
    /// Returns `NestingTooDeep` if entering would exceed the limit.
    pub fn push(&mut self, label: impl Into<String>) -> Result<(), Problem> {
        let label = label.into();
        if self.depth() >= self.max_depth {
            return Err(Problem::NestingTooDeep {
                location: format!("{}{}{}", self.render(), SEPARATOR, label),
                max_depth: self.max_depth,
            });
        }
        self.segments.push(label);
        Ok(())
    }

    /// Leave the current category.
    ///
    /// Does nothing at the sidebar root (won't pop the sidebar name).
    pub fn pop(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop();
        }
    }

    /// Number of categories entered.
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    /// Check if we're at the sidebar root.
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// The sidebar this breadcrumb belongs to.
    pub fn sidebar(&self) -> &str {
        &self.segments[0]
    }

    /// Segments from the sidebar name down.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render as `sidebar > Category > Sub`.
    pub fn render(&self) -> String {
        self.segments.join(SEPARATOR)
    }
}
