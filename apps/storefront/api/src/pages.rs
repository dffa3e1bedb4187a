//! Page shells for the storefront single-page front-end.
//!
//! The route table maps `/`, `/about`, and `/products` to page views the way
//! the browser router would; the Axum fallback funnels every unmatched
//! non-API path through the navigation controller, so an unknown path mounts
//! exactly one view - the NotFound shell - never an empty page.

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use navigation::{NavigationController, RouteTable};
use std::sync::Arc;

/// Page-level views of the storefront shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Products,
    NotFound,
}

impl Page {
    fn title(self) -> &'static str {
        match self {
            Page::Home => "Framery",
            Page::About => "About - Framery",
            Page::Products => "Products - Framery",
            Page::NotFound => "Page not found - Framery",
        }
    }

    fn status(self) -> StatusCode {
        match self {
            Page::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::OK,
        }
    }

    fn body(self) -> &'static str {
        match self {
            Page::Home => {
                r#"<h1>Framery</h1>
<p>Picture frames for prints, portraits and everything in between.</p>
<nav><a href="/">Home</a> <a href="/about">About</a> <a href="/products">Products</a></nav>"#
            }
            Page::About => {
                r#"<h1>About Framery</h1>
<p>A small storefront for handmade picture frames.</p>"#
            }
            Page::Products => {
                r#"<h1>Products</h1>
<div id="featured-products" data-endpoint="/api/products/featured">
  <p>Loading featured products&hellip;</p>
</div>"#
            }
            Page::NotFound => {
                r#"<h1>Page not found</h1>
<p>The page you are looking for does not exist. <a href="/">Back to the shop</a></p>"#
            }
        }
    }
}

/// The storefront route table: ordered, immutable, exact-path.
pub fn route_table() -> RouteTable<Page> {
    RouteTable::builder()
        .route("/", Page::Home)
        .route("/about", Page::About)
        .route("/products", Page::Products)
        .build()
}

/// Navigation controller over the storefront table, honoring an optional
/// deployment base path.
pub fn controller(base_path: Option<String>) -> NavigationController<Page> {
    let controller = NavigationController::new(route_table(), Page::NotFound);
    match base_path {
        Some(base) => controller.with_base_path(base),
        None => controller,
    }
}

/// Router serving the page shells.
///
/// Registered as a fallback so it picks up every path the API and docs
/// routers do not claim.
pub fn router(controller: NavigationController<Page>) -> Router {
    let controller = Arc::new(controller);
    Router::new().fallback(shell_handler).with_state(controller)
}

async fn shell_handler(
    State(controller): State<Arc<NavigationController<Page>>>,
    uri: Uri,
) -> Response {
    let page = *controller.resolve(uri.path());
    (page.status(), Html(render(page))).into_response()
}

fn render(page: Page) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{}</title>
</head>
<body>
{}
</body>
</html>
"#,
        page.title(),
        page.body()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn get_page(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn route_table_covers_the_three_pages() {
        let table = route_table();
        assert_eq!(table.resolve("/"), Some(&Page::Home));
        assert_eq!(table.resolve("/about"), Some(&Page::About));
        assert_eq!(table.resolve("/products"), Some(&Page::Products));
        assert_eq!(table.resolve("/checkout"), None);
    }

    #[tokio::test]
    async fn products_path_serves_the_products_shell() {
        let app = router(controller(None));
        let (status, body) = get_page(app, "/products").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("featured-products"));
        assert!(body.contains("/api/products/featured"));
    }

    #[tokio::test]
    async fn unknown_path_serves_exactly_the_not_found_shell() {
        let app = router(controller(None));
        let (status, body) = get_page(app, "/unknown-path").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
        // Only one view is mounted
        assert!(!body.contains("featured-products"));
    }

    #[tokio::test]
    async fn base_path_is_honoured() {
        let app = router(controller(Some("/shop".to_string())));

        let (status, body) = get_page(app.clone(), "/shop/about").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("About Framery"));

        // Outside the base path only the fallback applies
        let (status, _) = get_page(app, "/about").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn home_page_links_the_other_views() {
        let app = router(controller(None));
        let (status, body) = get_page(app, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("href=\"/about\""));
        assert!(body.contains("href=\"/products\""));
    }
}
