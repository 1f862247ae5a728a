//! Inbound adapters: presentation-side consumers of the session model.
//!
//! These modules translate authorization decisions into navigation outcomes
//! and command-line output. They hold no role rules of their own; every check
//! goes through [`authorize`](crate::domain::authorize).

pub mod cli;
pub mod navigation;
pub mod routes;

pub use navigation::{MenuEntry, navigation_menu};
pub use routes::{Navigation, Route, RouteGuard};
