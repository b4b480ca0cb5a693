//! Built-in site presets
//!
//! Each preset is a named variant of the same documentation site, picked at
//! build time. Presets share the sidebar taxonomy and differ in where the
//! site is served and how strictly broken links are treated.

use std::fmt;
use std::str::FromStr;

use crate::config::{
    BrokenLinkPolicy, Footer, FooterColumn, FooterLink, Logo, Navbar, NavbarItem, Position,
    SiteConfig,
};
use crate::error::ConfigError;
use crate::spec::{Category, Child, DocumentRef, SidebarSpec};

const SWAGGER_URL: &str = "https://server.xpay-bits.com/swagger/index.html";
const DASHBOARD_URL: &str = "https://dashboard.xpay-bits.com";
const GITHUB_URL: &str = "https://github.com/sir-george2500/xpay-developer-platform";

/// Name of the main documentation sidebar.
pub const DOCS_SIDEBAR: &str = "docsSidebar";

/// A named variant of the docs site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Production X-Pay developer docs
    XPay,

    /// X-Pay docs served by a local dev server
    Local,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Preset; 2] = [Preset::XPay, Preset::Local];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Preset::XPay => "xpay",
            Preset::Local => "local",
        }
    }

    /// Site configuration for this preset.
    pub fn site_config(self) -> SiteConfig {
        let (url, on_broken_links) = match self {
            Preset::XPay => ("https://docs.xpay-bits.com", BrokenLinkPolicy::Throw),
            Preset::Local => ("http://localhost:3000", BrokenLinkPolicy::Warn),
        };

        SiteConfig {
            title: "X-Pay Developer Docs".into(),
            tagline: "Payment Infrastructure Built for Developers".into(),
            favicon: Some("img/favicon.ico".into()),
            url: url.into(),
            base_url: "/".into(),
            organization_name: Some("sir-george2500".into()),
            project_name: Some("xpay-developer-docs".into()),
            route_base_path: "/".into(),
            edit_url: Some(
                "https://github.com/sir-george2500/xpay-developer-docs/tree/main/".into(),
            ),
            on_broken_links,
            navbar: navbar(),
            footer: footer(),
        }
    }

    /// Sidebar specification for this preset.
    pub fn sidebars(self) -> SidebarSpec {
        SidebarSpec::new().with_sidebar(DOCS_SIDEBAR, docs_sidebar())
    }

    /// Document identifiers the preset's content corpus provides.
    pub fn documents(self) -> Vec<&'static str> {
        vec![
            "intro",
            "getting-started/registration",
            "getting-started/api-keys",
            "getting-started/your-first-payment",
            "payments/overview",
            "payments/stripe",
            "payments/mobile-money",
            "sdks/javascript",
            "sdks/python",
            "sdks/go",
            "guides/webhooks",
            "guides/error-handling",
            "guides/go-live",
            "api/endpoints",
            "api/errors",
            "api/rate-limits",
        ]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                ConfigError::UnknownPreset(s.to_string(), names.join(", "))
            })
    }
}

fn docs_sidebar() -> Vec<Child> {
    vec![
        DocumentRef::new("intro").with_label("👋 Welcome").into(),
        Category::new("🚀 Getting Started")
            .children([
                "getting-started/registration",
                "getting-started/api-keys",
                "getting-started/your-first-payment",
            ])
            .into(),
        Category::new("💳 Payments")
            .children(["payments/overview", "payments/stripe", "payments/mobile-money"])
            .into(),
        Category::new("📦 SDKs")
            .children(["sdks/javascript", "sdks/python", "sdks/go"])
            .into(),
        Category::new("🔔 Webhooks").child("guides/webhooks").into(),
        Category::new("📖 Guides")
            .children(["guides/error-handling", "guides/go-live"])
            .into(),
        Category::new("🔧 API Reference")
            .children(["api/endpoints", "api/errors", "api/rate-limits"])
            .into(),
    ]
}

fn navbar() -> Navbar {
    Navbar {
        title: "X-Pay".into(),
        logo: Some(Logo {
            alt: "X-Pay Logo".into(),
            src: "img/logo.svg".into(),
        }),
        items: vec![
            NavbarItem::DocSidebar {
                sidebar_id: DOCS_SIDEBAR.into(),
                label: "Documentation".into(),
                position: Position::Left,
            },
            NavbarItem::Link {
                href: SWAGGER_URL.into(),
                label: "API Reference".into(),
                position: Position::Left,
            },
            NavbarItem::Link {
                href: DASHBOARD_URL.into(),
                label: "Dashboard".into(),
                position: Position::Right,
            },
            NavbarItem::Link {
                href: GITHUB_URL.into(),
                label: "GitHub".into(),
                position: Position::Right,
            },
        ],
    }
}

fn footer() -> Footer {
    Footer {
        links: vec![
            FooterColumn {
                title: "Documentation".into(),
                items: vec![
                    FooterLink::to("Getting Started", "/"),
                    FooterLink::to("Authentication", "/authentication"),
                    FooterLink::href("API Reference", SWAGGER_URL),
                ],
            },
            FooterColumn {
                title: "Guides".into(),
                items: vec![
                    FooterLink::to("Accept Payments", "/guides/accept-payments"),
                    FooterLink::to("Webhooks", "/guides/webhooks"),
                    FooterLink::to("Go Live", "/guides/go-live"),
                ],
            },
            FooterColumn {
                title: "Resources".into(),
                items: vec![
                    FooterLink::href("Developer Dashboard", DASHBOARD_URL),
                    FooterLink::href("Status Page", "https://status.xpay-bits.com"),
                    FooterLink::href("GitHub", GITHUB_URL),
                ],
            },
            FooterColumn {
                title: "Company".into(),
                items: vec![
                    FooterLink::href("About X-Pay", "https://xpay-bits.com/about"),
                    FooterLink::href("Contact Support", "mailto:support@xpay-bits.com"),
                    FooterLink::href("Terms of Service", "https://xpay-bits.com/terms"),
                ],
            },
        ],
        copyright: "Copyright © X-Pay Technologies. Built with Docusaurus.".into(),
    }
}
