/// A single `{path, view}` entry in the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<V> {
    path: String,
    view: V,
}

impl<V> Route<V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Immutable, ordered mapping from URL path to view.
///
/// Matching is exact-path: no prefixes, no parameters. When the same path is
/// registered twice the earlier entry wins, matching the ordered-sequence
/// semantics of the table.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder { routes: Vec::new() }
    }

    /// Resolve a path to its view. `None` when no route matches.
    pub fn resolve(&self, path: &str) -> Option<&V> {
        let path = normalize(path);
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| &route.view)
    }

    /// Registered routes, in declaration order.
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder collecting `{path, view}` pairs in declaration order.
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTableBuilder<V> {
    pub fn route(mut self, path: impl Into<String>, view: V) -> Self {
        self.routes.push(Route {
            path: normalize(&path.into()),
            view,
        });
        self
    }

    pub fn build(self) -> RouteTable<V> {
        RouteTable {
            routes: self.routes,
        }
    }
}

/// Canonical form used for matching: leading slash, no trailing slash
/// (except for the root path itself).
fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Debug, PartialEq)]
    enum Page {
        Home,
        About,
        Products,
    }

    fn table() -> RouteTable<Page> {
        RouteTable::builder()
            .route("/", Page::Home)
            .route("/about", Page::About)
            .route("/products", Page::Products)
            .build()
    }

    #[test]
    fn resolves_exact_paths() {
        let table = table();
        assert_eq!(table.resolve("/"), Some(&Page::Home));
        assert_eq!(table.resolve("/about"), Some(&Page::About));
        assert_eq!(table.resolve("/products"), Some(&Page::Products));
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        let table = table();
        assert_eq!(table.resolve("/missing"), None);
        // Exact match only - no prefix matching
        assert_eq!(table.resolve("/products/42"), None);
    }

    #[test]
    fn trailing_slashes_are_normalized() {
        let table = table();
        assert_eq!(table.resolve("/about/"), Some(&Page::About));
        assert_eq!(table.resolve(""), Some(&Page::Home));
    }

    #[test]
    fn earlier_routes_shadow_later_duplicates() {
        let table = RouteTable::builder()
            .route("/page", Page::Home)
            .route("/page", Page::About)
            .build();
        assert_eq!(table.resolve("/page"), Some(&Page::Home));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let table = table();
        let paths: Vec<_> = table.routes().iter().map(|r| r.path()).collect();
        assert_eq!(paths, ["/", "/about", "/products"]);
    }
}
