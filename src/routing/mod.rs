//! Path resolution for internal links
//!
//! An internal sidebar link is accepted when the application router knows the
//! path, or when the path is one of the full-reload paths served outside the
//! client-side router.

mod table;

pub use table::RouteTable;

use once_cell::sync::Lazy;
use regex::Regex;

/// Result of resolving a path against the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Named(String),
    Unknown,
}

impl RouteMatch {
    pub fn is_known(&self) -> bool {
        matches!(self, RouteMatch::Named(_))
    }

    pub fn name(&self) -> &str {
        match self {
            RouteMatch::Named(name) => name,
            RouteMatch::Unknown => "unknown",
        }
    }
}

/// Router collaborator used by link validation.
pub trait RouteResolver: Send + Sync {
    fn resolve(&self, path: &str) -> RouteMatch;
}

/// Paths that bypass the route table because they trigger a full page load.
static FULL_RELOAD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"^/my/[a-z_\-/]+$", r"^/pub/[a-z_\-/]+$", r"^/safe-mode$"]
        .iter()
        .filter_map(|p| Regex::new(p).ok())
        .collect()
});

pub fn is_full_reload_path(path: &str) -> bool {
    FULL_RELOAD_PATTERNS.iter().any(|re| re.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_reload_paths() {
        assert!(is_full_reload_path("/my/preferences/account"));
        assert!(is_full_reload_path("/my/activity"));
        assert!(is_full_reload_path("/pub/some-page"));
        assert!(is_full_reload_path("/safe-mode"));

        assert!(!is_full_reload_path("/my/"));
        assert!(!is_full_reload_path("/my/Preferences"));
        assert!(!is_full_reload_path("/my/page?x=1"));
        assert!(!is_full_reload_path("/safe-mode/extra"));
        assert!(!is_full_reload_path("/pubs/page"));
    }

    #[test]
    fn test_route_match_name() {
        assert_eq!(RouteMatch::Unknown.name(), "unknown");
        assert!(!RouteMatch::Unknown.is_known());
        let latest = RouteMatch::Named("discovery.latest".into());
        assert_eq!(latest.name(), "discovery.latest");
        assert!(latest.is_known());
    }
}
