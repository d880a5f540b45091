//! Path-to-navigation resolution.
//!
//! Pure lookups on an immutable [`SiteConfig`]: which sidebar tree a page
//! path gets, and which nav bar entry is highlighted. Both are total — an
//! unmatched path degrades to a documented default instead of erroring,
//! because a documentation site must always render some navigation.

use crate::config::{NavItem, SidebarGroup, SiteConfig};
use crate::validation::has_scheme;

/// Length of the matched prefix if `prefix` covers `path` at a segment
/// boundary, `None` otherwise.
///
/// A trailing `/` on the prefix is insignificant: `/dev/` and `/dev` name the
/// same route family. Matching is segment-exact, so `/dev/` covers
/// `/dev/clients/01` but never `/developer/overview`.
fn route_match_len(prefix: &str, path: &str) -> Option<usize> {
    if !prefix.starts_with('/') {
        return None;
    }
    let trimmed = prefix.trim_end_matches('/');
    if path == trimmed {
        return Some(trimmed.len());
    }
    match path.strip_prefix(trimmed) {
        Some(rest) if rest.starts_with('/') => Some(trimmed.len()),
        _ => None,
    }
}

impl SiteConfig {
    /// Sidebar tree for a page path.
    ///
    /// Selects the sidebar whose route prefix is the longest segment-exact
    /// prefix of `path`; on a tie in matched length, the first declared
    /// sidebar wins. Paths outside every declared prefix (including the
    /// empty string) fall back to the sidebar keyed `/`, or an empty tree
    /// when none exists.
    #[must_use]
    pub fn sidebar_for(&self, path: &str) -> &[SidebarGroup] {
        let mut best: Option<(&[SidebarGroup], usize)> = None;
        for sidebar in &self.sidebars {
            if let Some(len) = route_match_len(&sidebar.prefix, path)
                && best.is_none_or(|(_, l)| len > l)
            {
                best = Some((&sidebar.groups, len));
            }
        }
        match best {
            Some((groups, _)) => groups,
            None => self.root_sidebar().map_or(&[], |s| &s.groups),
        }
    }

    /// Nav bar entry to highlight for a page path.
    ///
    /// Selects the entry whose link is the longest segment-exact prefix of
    /// `path`; ties break to declaration order. External links (scheme
    /// present) are highlighted only on literal equality — they never
    /// prefix-match a site path. Returns `None` when nothing matches.
    #[must_use]
    pub fn active_nav_item(&self, path: &str) -> Option<&NavItem> {
        let mut best: Option<(&NavItem, usize)> = None;
        for item in &self.nav {
            let len = if has_scheme(&item.link) {
                (item.link == path).then_some(item.link.len())
            } else {
                route_match_len(&item.link, path)
            };
            if let Some(len) = len
                && best.is_none_or(|(_, l)| len > l)
            {
                best = Some((item, len));
            }
        }
        best.map(|(item, _)| item)
    }
}
