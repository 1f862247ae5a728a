//! Session lifecycle and role-based view authorization for the Teamboard
//! coordination dashboard.
//!
//! - [`domain`]: identities, roles, the session service and the single
//!   authorization rule, plus the ports it drives.
//! - [`outbound`]: the file-backed session store.
//! - [`inbound`]: route guard, navigation menu and command-line front end.
//! - [`settings`]: front-end configuration.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use settings::TeamboardSettings;
