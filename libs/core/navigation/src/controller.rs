use crate::RouteTable;
use tracing::debug;

/// Navigation controller: a route table, a fallback view, and a
/// browser-style history.
///
/// Resolving always yields exactly one view. Paths that match no route (or
/// fall outside the configured base path) mount the fallback view.
#[derive(Debug, Clone)]
pub struct NavigationController<V> {
    table: RouteTable<V>,
    fallback: V,
    base_path: String,
    history: Vec<String>,
}

impl<V> NavigationController<V> {
    /// Create a controller with no base path prefix.
    pub fn new(table: RouteTable<V>, fallback: V) -> Self {
        Self {
            table,
            fallback,
            base_path: String::new(),
            history: Vec::new(),
        }
    }

    /// Set the deployment base path, e.g. `/shop`.
    ///
    /// Incoming paths must start with the prefix; the remainder is matched
    /// against the table. Paths outside the prefix resolve to the fallback.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base = base_path.into();
        self.base_path = base.trim_end_matches('/').to_string();
        self
    }

    /// Resolve a path without touching the history.
    ///
    /// Returns the matched view, or the fallback when nothing matches.
    pub fn resolve(&self, path: &str) -> &V {
        self.try_resolve(path).unwrap_or(&self.fallback)
    }

    /// Resolve a path, `None` when only the fallback applies.
    pub fn try_resolve(&self, path: &str) -> Option<&V> {
        let relative = self.strip_base(path)?;
        self.table.resolve(relative)
    }

    /// Navigate to a path: resolve it and push it onto the history.
    pub fn navigate(&mut self, path: &str) -> &V {
        debug!(path, "navigating");
        self.history.push(path.to_string());
        self.resolve_last_entry()
    }

    /// Pop the current history entry and return the previous view.
    ///
    /// `None` when there is no earlier entry to go back to.
    pub fn back(&mut self) -> Option<&V> {
        if self.history.len() < 2 {
            return None;
        }
        self.history.pop();
        Some(self.resolve_last_entry())
    }

    /// The view for the current history entry; the fallback before any
    /// navigation has happened.
    pub fn current(&self) -> &V {
        match self.history.last() {
            Some(path) => self.resolve(path),
            None => &self.fallback,
        }
    }

    /// The configured base path prefix (empty when unset).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    fn resolve_last_entry(&self) -> &V {
        // history is non-empty here; navigate() pushed before calling
        let path = self.history.last().map(String::as_str).unwrap_or("/");
        self.resolve(path)
    }

    fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base_path.is_empty() {
            return Some(path);
        }
        match path.strip_prefix(self.base_path.as_str()) {
            Some("") => Some("/"),
            Some(rest) if rest.starts_with('/') => Some(rest),
            _ => None,
        }
    }
}
