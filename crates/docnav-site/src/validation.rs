//! Build-time configuration validation.
//!
//! Every invariant is checked in one pass and all violations are returned
//! together, so the operator fixes the config from a single list instead of
//! replaying the build once per mistake. Validation runs at build time only;
//! resolution never re-checks.

use std::collections::HashSet;

use crate::config::SiteConfig;

/// A single invariant violation found in a [`SiteConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Two sidebars share the same route prefix.
    #[error("duplicate sidebar prefix: {prefix}")]
    DuplicatePrefix {
        /// The repeated prefix.
        prefix: String,
    },
    /// A sidebar prefix is not a site-relative path.
    #[error("sidebar prefix must start with '/': {prefix}")]
    PrefixMissingSlash {
        /// The offending prefix.
        prefix: String,
    },
    /// A link is neither an absolute URL nor a site-relative path.
    #[error("{location}: link must be an absolute URL or start with '/': {link}")]
    MalformedLink {
        /// Where the link was authored (nav entry, sidebar item, ...).
        location: String,
        /// The offending link.
        link: String,
    },
    /// Two entries in the same sidebar group point at the same target.
    #[error(
        "sidebar {prefix}, group \"{group}\": entries \"{first}\" and \"{second}\" share link {link}"
    )]
    DuplicateLinkInGroup {
        /// Prefix of the containing sidebar.
        prefix: String,
        /// Group heading.
        group: String,
        /// Title of the first entry with this link.
        first: String,
        /// Title of the duplicate entry.
        second: String,
        /// The shared link.
        link: String,
    },
    /// The deployment base path is malformed.
    #[error("base must start and end with '/': {base}")]
    MalformedBase {
        /// The offending base path.
        base: String,
    },
}

/// True when `link` carries a URI scheme (`https://...`, `mailto:...`).
pub(crate) fn has_scheme(link: &str) -> bool {
    link.split_once(':').is_some_and(|(scheme, _)| {
        let mut chars = scheme.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// True when `link` is a well-formed target: an absolute URL or a
/// site-relative path.
fn link_is_valid(link: &str) -> bool {
    link.starts_with('/') || has_scheme(link)
}

impl SiteConfig {
    /// Check every invariant and return all violations.
    ///
    /// An empty vector means the configuration is valid. Callers building a
    /// site must treat a non-empty result as fatal.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !(self.base.starts_with('/') && self.base.ends_with('/')) {
            errors.push(ValidationError::MalformedBase {
                base: self.base.clone(),
            });
        }

        for item in &self.nav {
            if !link_is_valid(&item.link) {
                errors.push(ValidationError::MalformedLink {
                    location: format!("nav entry \"{}\"", item.title),
                    link: item.link.clone(),
                });
            }
        }

        for social in &self.social_links {
            if !link_is_valid(&social.link) {
                errors.push(ValidationError::MalformedLink {
                    location: format!("social link \"{}\"", social.icon),
                    link: social.link.clone(),
                });
            }
        }

        let mut seen_prefixes = HashSet::new();
        for sidebar in &self.sidebars {
            if !sidebar.prefix.starts_with('/') {
                errors.push(ValidationError::PrefixMissingSlash {
                    prefix: sidebar.prefix.clone(),
                });
            }
            if !seen_prefixes.insert(sidebar.prefix.as_str()) {
                errors.push(ValidationError::DuplicatePrefix {
                    prefix: sidebar.prefix.clone(),
                });
            }

            for group in &sidebar.groups {
                // link -> title of the first entry using it
                let mut seen_links: Vec<(&str, &str)> = Vec::new();
                for item in &group.items {
                    if !link_is_valid(&item.link) {
                        errors.push(ValidationError::MalformedLink {
                            location: format!(
                                "sidebar {}, group \"{}\", entry \"{}\"",
                                sidebar.prefix, group.title, item.title
                            ),
                            link: item.link.clone(),
                        });
                    }
                    match seen_links.iter().find(|(link, _)| *link == item.link) {
                        Some(&(_, first)) => errors.push(ValidationError::DuplicateLinkInGroup {
                            prefix: sidebar.prefix.clone(),
                            group: group.title.clone(),
                            first: first.to_owned(),
                            second: item.title.clone(),
                            link: item.link.clone(),
                        }),
                        None => seen_links.push((&item.link, &item.title)),
                    }
                }
            }
        }

        errors
    }
}
