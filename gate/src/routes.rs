//! Console route table and navigation targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! One unauthenticated entry point (`/login`) and the protected views nested
//! under the authenticated layout at `/`. The table resolves a requested path
//! into a [`NavigationTarget`] that the guard evaluates.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::LOGIN_PATH;

/// A single entry in the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    /// Route name (`products`).
    pub name: &'static str,
    /// Absolute path (`/products`).
    pub path: &'static str,
    /// Where this record forwards to instead of rendering.
    pub redirect: Option<&'static str>,
    /// Records rendered inside this one's layout.
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    #[must_use]
    pub fn leaf(name: &'static str, path: &'static str) -> Self {
        Self { name, path, redirect: None, children: Vec::new() }
    }
}

/// The destination of one navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Normalized path (no query, no trailing slash except `/`).
    pub path: String,
    /// Matched records from outermost layout to leaf; empty for unknown paths.
    pub matched: Vec<RouteRecord>,
}

impl NavigationTarget {
    /// Target with no matched records, for callers without a route table.
    #[must_use]
    pub fn unmatched(path: &str) -> Self {
        Self { path: normalize_path(path), matched: Vec::new() }
    }

    /// Name of the leaf record, if anything matched.
    #[must_use]
    pub fn name(&self) -> Option<&'static str> {
        self.matched.last().map(|record| record.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    records: Vec<RouteRecord>,
}

impl RouteTable {
    #[must_use]
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self { records }
    }

    /// The admin console: login plus five protected views under `/`.
    #[must_use]
    pub fn admin_console() -> Self {
        Self::new(vec![
            RouteRecord::leaf("login", LOGIN_PATH),
            RouteRecord {
                name: "home",
                path: "/",
                redirect: Some("/dashboard"),
                children: vec![
                    RouteRecord::leaf("dashboard", "/dashboard"),
                    RouteRecord::leaf("products", "/products"),
                    RouteRecord::leaf("licenses", "/licenses"),
                    RouteRecord::leaf("clients", "/clients"),
                    RouteRecord::leaf("audit-logs", "/audit-logs"),
                ],
            },
        ])
    }

    #[must_use]
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Resolve `path`, following record redirects.
    #[must_use]
    pub fn resolve(&self, path: &str) -> NavigationTarget {
        let mut path = normalize_path(path);
        // Redirect chains in a static table are short; the bound guards cycles.
        for _ in 0..8 {
            let matched = match_path(&self.records, &path);
            match matched.last().and_then(|record| record.redirect) {
                Some(next) if next != path => path = next.to_owned(),
                _ => return NavigationTarget { path, matched },
            }
        }
        NavigationTarget::unmatched(&path)
    }

    /// Leaf records reachable from the navigation menu.
    #[must_use]
    pub fn menu(&self) -> Vec<&RouteRecord> {
        self.records
            .iter()
            .flat_map(|record| record.children.iter())
            .collect()
    }
}

fn match_path(records: &[RouteRecord], path: &str) -> Vec<RouteRecord> {
    for record in records {
        if record.path == path {
            return vec![record.clone()];
        }
        let nested = match_path(&record.children, path);
        if !nested.is_empty() {
            let mut chain = vec![record.clone()];
            chain.extend(nested);
            return chain;
        }
    }
    Vec::new()
}

/// Strip query/fragment and trailing slashes; empty becomes `/`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
