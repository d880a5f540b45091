//! Site configuration types.
//!
//! The whole navigation structure of a documentation site as plain data:
//! authored once, deserialized from TOML at build time, and never mutated
//! afterwards. Sequence ordering is significant everywhere and preserved
//! exactly as authored.

use serde::{Deserialize, Serialize};

/// A single navigation link.
///
/// `link` is either a site-relative path starting with `/` or an absolute
/// external URL with a scheme (e.g. `https://github.com/...`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target.
    pub link: String,
}

/// A titled, optionally collapsible cluster of links in a sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Group heading.
    pub title: String,
    /// Whether the group starts collapsed.
    #[serde(default)]
    pub collapsed: bool,
    /// Links in this group, rendered top to bottom.
    #[serde(default)]
    pub items: Vec<NavItem>,
}

/// One sidebar tree, keyed by a route prefix.
///
/// Stored as a sequence rather than a map so that duplicate prefixes are
/// representable (and reported by validation) and authored order survives a
/// serialization round trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    /// Route prefix this tree applies to (e.g. `/guide/`). Must start with `/`.
    pub prefix: String,
    /// Link groups, rendered top to bottom.
    #[serde(default)]
    pub groups: Vec<SidebarGroup>,
}

/// Footer text shown on every page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Free-form footer message.
    pub message: String,
    /// Copyright line.
    pub copyright: String,
}

/// Search backend toggle. Indexing itself is owned by the site framework.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchProvider {
    /// Local full-text index built at site-build time.
    #[default]
    Local,
    /// No search widget.
    Disabled,
}

/// Icon link shown in the nav bar (e.g. a GitHub repository).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier understood by the theme (e.g. `github`).
    pub icon: String,
    /// Absolute URL.
    pub link: String,
}

/// Labels for the previous/next links at the bottom of each page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocFooterLabels {
    /// Label for the previous-page link.
    pub prev: String,
    /// Label for the next-page link.
    pub next: String,
}

impl Default for DocFooterLabels {
    fn default() -> Self {
        Self {
            prev: "Previous page".to_owned(),
            next: "Next page".to_owned(),
        }
    }
}

/// Heading outline ("on this page") settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    /// Smallest heading level included in the outline.
    pub min_level: u8,
    /// Largest heading level included in the outline.
    pub max_level: u8,
    /// Outline widget label.
    pub label: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
            label: "On this page".to_owned(),
        }
    }
}

/// Full site configuration.
///
/// Aggregate root for everything the navigation layer needs: the top nav bar,
/// the route-prefix-keyed sidebar trees, footer text, and the toggles passed
/// through to the framework (search, dead-link policy, base path).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,
    /// Site description (meta tag content).
    pub description: String,
    /// Deployment base path. Must start and end with `/`.
    pub base: String,
    /// When true, the external dead-link checker warns instead of failing.
    pub ignore_dead_links: bool,
    /// Search backend toggle.
    pub search: SearchProvider,
    /// Top nav bar entries, rendered left to right.
    pub nav: Vec<NavItem>,
    /// Sidebar trees keyed by route prefix.
    #[serde(rename = "sidebar")]
    pub sidebars: Vec<Sidebar>,
    /// Icon links shown next to the nav bar.
    pub social_links: Vec<SocialLink>,
    /// Footer text.
    pub footer: FooterConfig,
    /// Previous/next link labels.
    pub doc_footer: DocFooterLabels,
    /// Heading outline settings.
    pub outline: OutlineConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".to_owned(),
            ignore_dead_links: false,
            search: SearchProvider::default(),
            nav: Vec::new(),
            sidebars: Vec::new(),
            social_links: Vec::new(),
            footer: FooterConfig::default(),
            doc_footer: DocFooterLabels::default(),
            outline: OutlineConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Sidebar tree keyed exactly `/`, used as the fallback when no longer
    /// prefix matches a page path.
    #[must_use]
    pub(crate) fn root_sidebar(&self) -> Option<&Sidebar> {
        self.sidebars.iter().find(|s| s.prefix == "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.base, "/");
        assert_eq!(config.search, SearchProvider::Local);
        assert!(!config.ignore_dead_links);
        assert!(config.nav.is_empty());
        assert!(config.sidebars.is_empty());
        assert_eq!(config.outline.min_level, 2);
        assert_eq!(config.outline.max_level, 3);
        assert_eq!(config.doc_footer.prev, "Previous page");
    }

    #[test]
    fn parse_minimal() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn parse_nav_and_sidebar() {
        let config: SiteConfig = toml::from_str(
            r#"
title = "Laravel-Supabase Documentation"
description = "Documentation complète du projet"

[[nav]]
title = "Accueil"
link = "/"

[[nav]]
title = "Docker"
link = "/docker/"

[[sidebar]]
prefix = "/docker/"

[[sidebar.groups]]
title = "Docker"

[[sidebar.groups.items]]
title = "Commandes Docker"
link = "/docker/commands"

[[sidebar.groups.items]]
title = "Docker Compose"
link = "/docker/compose"

[footer]
message = "Documentation Laravel-Supabase"
copyright = "Copyright © 2024 Laravel-Supabase Project"
"#,
        )
        .unwrap_or_else(|e| panic!("parse failed: {e}"));

        assert_eq!(config.nav.len(), 2);
        assert_eq!(config.nav[0].title, "Accueil");
        assert_eq!(config.sidebars.len(), 1);
        assert_eq!(config.sidebars[0].prefix, "/docker/");
        assert_eq!(config.sidebars[0].groups[0].items.len(), 2);
        assert_eq!(config.footer.message, "Documentation Laravel-Supabase");
    }

    #[test]
    fn parse_search_provider() {
        let config: SiteConfig = toml::from_str(r#"search = "disabled""#).unwrap();
        assert_eq!(config.search, SearchProvider::Disabled);

        let config: SiteConfig = toml::from_str(r#"search = "local""#).unwrap();
        assert_eq!(config.search, SearchProvider::Local);
    }

    #[test]
    fn collapsed_defaults_to_false() {
        let config: SiteConfig = toml::from_str(
            r#"
[[sidebar]]
prefix = "/"

[[sidebar.groups]]
title = "Open"

[[sidebar.groups]]
title = "Folded"
collapsed = true
"#,
        )
        .unwrap();
        assert!(!config.sidebars[0].groups[0].collapsed);
        assert!(config.sidebars[0].groups[1].collapsed);
    }

    fn sample_config() -> SiteConfig {
        SiteConfig {
            title: "Dashboard Madinia".to_owned(),
            description: "Documentation technique".to_owned(),
            nav: vec![
                NavItem {
                    title: "Accueil".to_owned(),
                    link: "/".to_owned(),
                },
                NavItem {
                    title: "Développement".to_owned(),
                    link: "/dev/".to_owned(),
                },
            ],
            sidebars: vec![Sidebar {
                prefix: "/dev/".to_owned(),
                groups: vec![SidebarGroup {
                    title: "Développement".to_owned(),
                    collapsed: false,
                    items: vec![NavItem {
                        title: "Vue d'ensemble".to_owned(),
                        link: "/dev/overview".to_owned(),
                    }],
                }],
            }],
            social_links: vec![SocialLink {
                icon: "github".to_owned(),
                link: "https://github.com/madinia/dashboard".to_owned(),
            }],
            footer: FooterConfig {
                message: "Documentation Dashboard Madinia".to_owned(),
                copyright: "Copyright © 2024 Madinia".to_owned(),
            },
            ..SiteConfig::default()
        }
    }

    #[test]
    fn toml_round_trip() {
        let config = sample_config();
        let serialized = toml::to_string(&config).unwrap();
        let decoded: SiteConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn json_round_trip() {
        let config = sample_config();
        let serialized = serde_json::to_string(&config).unwrap();
        let decoded: SiteConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn round_trip_preserves_order() {
        // Nav and group entries render in authored order; a round trip must
        // not sort them.
        let config: SiteConfig = toml::from_str(
            r#"
[[nav]]
title = "Zulu"
link = "/zulu/"

[[nav]]
title = "Alpha"
link = "/alpha/"
"#,
        )
        .unwrap();
        let decoded: SiteConfig = toml::from_str(&toml::to_string(&config).unwrap()).unwrap();
        let titles: Vec<&str> = decoded.nav.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["Zulu", "Alpha"]);
    }
}
