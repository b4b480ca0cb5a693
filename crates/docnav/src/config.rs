//! Site configuration
//!
//! One typed [`SiteConfig`] describes the branding and navigation chrome of
//! the docs site. Variants of the same site are expressed as
//! [`Preset`](crate::Preset)s rather than separate configuration files.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::nav::NavTree;

/// What the site build does when it finds a broken internal link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build
    #[default]
    Throw,
    /// Log and continue
    Warn,
    /// Continue silently
    Ignore,
}

/// Which side of the navbar an item sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Left side
    #[default]
    Left,
    /// Right side
    Right,
}

/// An entry in the top navigation bar.
///
/// Links may be written with or without `"type": "link"`; they are written
/// back without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NavbarItemRepr", into = "NavbarItemRepr")]
pub enum NavbarItem {
    /// Opens the first document of a sidebar
    DocSidebar {
        /// Sidebar name, must exist in the resolved tree
        sidebar_id: String,
        /// Display label
        label: String,
        /// Navbar side
        position: Position,
    },

    /// External link
    Link {
        /// Target URL
        href: String,
        /// Display label
        label: String,
        /// Navbar side
        position: Position,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged, expecting = "a navbar item: `{ \"type\": \"docSidebar\", \"sidebarId\", \"label\" }` or `{ \"href\", \"label\" }`")]
enum NavbarItemRepr {
    Typed(TypedNavbarItem),
    Href {
        href: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum TypedNavbarItem {
    #[serde(rename_all = "camelCase")]
    DocSidebar {
        sidebar_id: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
    Link {
        href: String,
        label: String,
        #[serde(default)]
        position: Position,
    },
}

impl From<NavbarItemRepr> for NavbarItem {
    fn from(repr: NavbarItemRepr) -> Self {
        match repr {
            NavbarItemRepr::Typed(TypedNavbarItem::DocSidebar {
                sidebar_id,
                label,
                position,
            }) => NavbarItem::DocSidebar {
                sidebar_id,
                label,
                position,
            },
            NavbarItemRepr::Typed(TypedNavbarItem::Link {
                href,
                label,
                position,
            })
            | NavbarItemRepr::Href {
                href,
                label,
                position,
            } => NavbarItem::Link {
                href,
                label,
                position,
            },
        }
    }
}

impl From<NavbarItem> for NavbarItemRepr {
    fn from(item: NavbarItem) -> Self {
        match item {
            NavbarItem::DocSidebar {
                sidebar_id,
                label,
                position,
            } => NavbarItemRepr::Typed(TypedNavbarItem::DocSidebar {
                sidebar_id,
                label,
                position,
            }),
            NavbarItem::Link {
                href,
                label,
                position,
            } => NavbarItemRepr::Href {
                href,
                label,
                position,
            },
        }
    }
}

impl NavbarItem {
    /// Display label of the item.
    pub fn label(&self) -> &str {
        match self {
            NavbarItem::DocSidebar { label, .. } | NavbarItem::Link { label, .. } => label,
        }
    }
}

/// Logo shown next to the navbar title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    /// Alt text
    pub alt: String,
    /// Image path relative to the static directory
    pub src: String,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navbar {
    /// Title text
    pub title: String,
    /// Optional logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<NavbarItem>,
}

/// Target of a footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Route inside the docs site
    To(String),
    /// External URL (including `mailto:`)
    Href(String),
}

/// One footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterLink {
    /// Display label
    pub label: String,
    /// Where the link points
    #[serde(flatten)]
    pub target: LinkTarget,
}

impl FooterLink {
    /// Link to a route inside the site.
    pub fn to(label: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::To(route.into()),
        }
    }

    /// Link to an external URL.
    pub fn href(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: LinkTarget::Href(url.into()),
        }
    }
}

/// A titled column of footer links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    /// Column heading
    pub title: String,
    /// Links in display order
    pub items: Vec<FooterLink>,
}

/// Site footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Link columns in display order
    pub links: Vec<FooterColumn>,
    /// Copyright line
    pub copyright: String,
}

/// Branding and navigation chrome of the docs site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title
    pub title: String,
    /// Tagline shown under the title
    pub tagline: String,
    /// Favicon path relative to the static directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Production URL without trailing path
    pub url: String,
    /// Base path the site is served under
    pub base_url: String,
    /// GitHub owner the site deploys under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    /// GitHub repository the site deploys from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Route prefix for documentation pages
    pub route_base_path: String,
    /// Prefix for "edit this page" links; the doc path is appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Broken-link handling during the build
    #[serde(default)]
    pub on_broken_links: BrokenLinkPolicy,
    /// Top navigation bar
    pub navbar: Navbar,
    /// Footer
    pub footer: Footer,
}

impl SiteConfig {
    /// Check that every `docSidebar` navbar item names a resolved sidebar.
    ///
    /// # Errors
    ///
    /// `UnknownSidebar` for the first item that does not.
    pub fn validate_navbar(&self, tree: &NavTree) -> Result<(), ConfigError> {
        for item in &self.navbar.items {
            if let NavbarItem::DocSidebar { sidebar_id, label, .. } = item {
                if !tree.contains(sidebar_id) {
                    return Err(ConfigError::UnknownSidebar {
                        label: label.clone(),
                        sidebar_id: sidebar_id.clone(),
                    });
                }
                debug!(sidebar = %sidebar_id, label = %label, "navbar sidebar resolved");
            }
        }
        Ok(())
    }

    /// Sidebar names referenced from the navbar, in display order.
    pub fn referenced_sidebars(&self) -> Vec<&str> {
        self.navbar
            .items
            .iter()
            .filter_map(|item| match item {
                NavbarItem::DocSidebar { sidebar_id, .. } => Some(sidebar_id.as_str()),
                NavbarItem::Link { .. } => None,
            })
            .collect()
    }
}
