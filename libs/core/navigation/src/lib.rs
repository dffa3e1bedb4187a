//! Client-style navigation over an immutable route table.
//!
//! A [`RouteTable`] is an ordered sequence of `{path, view}` pairs built once
//! at startup; matching is exact-path. A [`NavigationController`] owns a
//! table plus a mandatory fallback view, so resolving a path always yields
//! exactly one view - an unknown path mounts the fallback, never an empty
//! view area.
//!
//! # Example
//!
//! ```
//! use navigation::{NavigationController, RouteTable};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Page { Home, About, NotFound }
//!
//! let table = RouteTable::builder()
//!     .route("/", Page::Home)
//!     .route("/about", Page::About)
//!     .build();
//!
//! let mut nav = NavigationController::new(table, Page::NotFound);
//! assert_eq!(*nav.navigate("/about"), Page::About);
//! assert_eq!(*nav.navigate("/missing"), Page::NotFound);
//! assert_eq!(*nav.back().unwrap(), Page::About);
//! ```

mod controller;
mod table;

pub use controller::NavigationController;
pub use table::{Route, RouteTable, RouteTableBuilder};
