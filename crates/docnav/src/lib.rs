//! # docnav
//!
//! Sidebar navigation resolver for the X-Pay developer documentation site.
//!
//! The docs site itself is built by an off-the-shelf static-site framework.
//! This crate owns the one piece of logic the site has: turning the authored
//! sidebar taxonomy into a validated, ordered navigation tree, and catching
//! references to documents that do not exist before the build does.
//!
//! ## Architecture
//!
//! - **Sources**: Parse authored sidebar files into a [`SidebarSpec`]
//! - **Resolver**: Check every reference against [`KnownDocs`] and build a [`NavTree`]
//! - **Site config**: Typed navbar/footer chrome, selected through a [`Preset`]
//!
//! ```
//! use docnav::{Preset, KnownDocs, Resolver, ResolveContext};
//!
//! let preset = Preset::XPay;
//! let known: KnownDocs = preset.documents().into_iter().collect();
//!
//! let tree = Resolver::new(ResolveContext::new())
//!     .resolve(&preset.sidebars(), &known)
//!     .unwrap();
//! assert!(tree.contains("docsSidebar"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod breadcrumb;
pub mod config;
pub mod context;
pub mod error;
pub mod known;
pub mod nav;
pub mod preset;
pub mod resolve;
pub mod source;
pub mod spec;

// Re-export main types
pub use breadcrumb::{Breadcrumb, CrumbGuard};
pub use config::{
    BrokenLinkPolicy, Footer, FooterColumn, FooterLink, LinkTarget, Logo, Navbar, NavbarItem,
    Position, SiteConfig,
};
pub use context::{DuplicateScope, ResolveContext};
pub use error::{ConfigError, DocnavError, Problem, Result, ValidationError};
pub use known::KnownDocs;
pub use nav::{NavCategory, NavDocument, NavNode, NavSidebar, NavTree};
pub use preset::Preset;
pub use resolve::{resolve, Resolver};
pub use source::{JsonSource, ParseError, SourceLocation, SpecSource};
pub use spec::{Category, Child, DocumentRef, SidebarSpec};

/// docnav version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
