//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **session_file**: file-backed [`SessionStore`](crate::domain::ports::SessionStore)
//!   that keeps each key in its own JSON file.
//!
//! Adapters translate between the port contract and the medium. They contain
//! no session rules.

pub mod session_file;

pub use session_file::FileSessionStore;
