//! Declarative navigation model for documentation sites.
//!
//! This crate provides:
//! - [`SiteConfig`]: the full site structure (nav bar, sidebars, footer,
//!   search and theme toggles) as plain data
//! - Route-prefix sidebar resolution and active nav highlighting
//! - Build-time validation that reports every violation at once
//!
//! The configuration is constructed once at build time, validated, and then
//! used as an immutable value. Resolution never fails: pages outside every
//! declared prefix fall back to the root sidebar (or an empty one).
//!
//! # Quick Start
//!
//! ```
//! use docnav_site::SiteConfig;
//!
//! let config: SiteConfig = toml::from_str(r#"
//! title = "Project Docs"
//!
//! [[nav]]
//! title = "Guide"
//! link = "/guide/"
//!
//! [[sidebar]]
//! prefix = "/guide/"
//!
//! [[sidebar.groups]]
//! title = "Getting Started"
//!
//! [[sidebar.groups.items]]
//! title = "Installation"
//! link = "/guide/installation"
//! "#).unwrap();
//!
//! assert!(config.validate().is_empty());
//!
//! let groups = config.sidebar_for("/guide/installation");
//! assert_eq!(groups[0].title, "Getting Started");
//! ```

pub(crate) mod config;
pub(crate) mod resolve;
pub(crate) mod validation;

pub use config::{
    DocFooterLabels, FooterConfig, NavItem, OutlineConfig, SearchProvider, Sidebar, SidebarGroup,
    SiteConfig, SocialLink,
};
pub use validation::ValidationError;
