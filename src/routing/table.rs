//! Route table backed by `matchit`
//!
//! Patterns use `matchit` syntax:
//! - `/latest`: static segment
//! - `/u/{username}`: exactly one non-empty segment
//! - `/c/{*path}`: the rest of the path (must be last)
//!
//! Static segments win over parameters. Two routes whose patterns overlap
//! ambiguously are rejected when added. Query string and fragment are ignored,
//! as is one trailing slash. Paths with empty segments (`//u/alice`) never
//! match: a leading `//` is a protocol-relative link to another host.

use tracing::debug;

use super::{RouteMatch, RouteResolver};
use crate::config::RoutesConfig;
use crate::errors::{Result, SidebarError};

/// Client-side routes a sidebar link may point at.
const DEFAULT_ROUTES: &[(&str, &str)] = &[
    ("discovery.index", "/"),
    ("discovery.latest", "/latest"),
    ("discovery.new", "/new"),
    ("discovery.unread", "/unread"),
    ("discovery.top", "/top"),
    ("discovery.hot", "/hot"),
    ("discovery.categories", "/categories"),
    ("discovery.category", "/c/{*category_slug_path_with_id}"),
    ("tags.index", "/tags"),
    ("tag.show", "/tag/{*tag_id}"),
    ("topicBySlugOrId", "/t/{slug}"),
    ("topic.fromParams", "/t/{slug}/{id}"),
    ("topic.fromParamsNear", "/t/{slug}/{id}/{near_post}"),
    ("users", "/u"),
    ("user.index", "/u/{username}"),
    ("user.section", "/u/{username}/{*section}"),
    ("groups.index", "/g"),
    ("group.index", "/g/{name}"),
    ("group.section", "/g/{name}/{*section}"),
    ("badges.index", "/badges"),
    ("badges.show", "/badges/{id}/{slug}"),
    ("review.index", "/review"),
    ("full-page-search", "/search"),
    ("about", "/about"),
    ("faq", "/faq"),
    ("guidelines", "/guidelines"),
    ("tos", "/tos"),
    ("privacy", "/privacy"),
    ("admin", "/admin"),
    ("admin.section", "/admin/{*section}"),
];

/// Route matcher, values are route names
pub struct RouteTable {
    matcher: matchit::Router<String>,
    count: usize,
}

impl RouteTable {
    /// Empty table; every path resolves to [`RouteMatch::Unknown`].
    pub fn new() -> Self {
        Self {
            matcher: matchit::Router::new(),
            count: 0,
        }
    }

    /// Table with the built-in forum routes.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (name, pattern) in DEFAULT_ROUTES {
            let added = table.add(name, pattern);
            debug_assert!(added.is_ok(), "built-in route {} rejected", name);
            if let Err(e) = added {
                debug!("Skipping built-in route: {}", e);
            }
        }
        table
    }

    /// Built-in routes plus `[routes.extra]` from configuration.
    pub fn from_config(config: &RoutesConfig) -> Result<Self> {
        let mut table = Self::with_defaults();
        for (name, pattern) in &config.extra {
            table.add(name, pattern)?;
        }
        debug!("Route table ready with {} routes", table.len());
        Ok(table)
    }

    /// Register a route. Patterns must start with `/` and must not conflict
    /// with a route already in the table.
    pub fn add(&mut self, name: &str, pattern: &str) -> Result<()> {
        if !pattern.starts_with('/') {
            return Err(SidebarError::config(format!(
                "Route '{}' pattern must start with '/': {}",
                name, pattern
            )));
        }

        self.matcher
            .insert(pattern, name.to_string())
            .map_err(|e| {
                SidebarError::config(format!("Route '{}' ({}) rejected: {}", name, pattern, e))
            })?;
        self.count += 1;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.count)
            .finish_non_exhaustive()
    }
}

impl RouteResolver for RouteTable {
    fn resolve(&self, path: &str) -> RouteMatch {
        let Some(path) = normalize(path) else {
            return RouteMatch::Unknown;
        };
        self.matcher
            .at(path)
            .map(|m| RouteMatch::Named(m.value.clone()))
            .unwrap_or(RouteMatch::Unknown)
    }
}

/// Path part without query/fragment and one trailing slash, or `None` when
/// it is not an absolute path with non-empty segments.
fn normalize(path: &str) -> Option<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    if !path.starts_with('/') || path.contains("//") {
        return None;
    }
    Some(path)
}
