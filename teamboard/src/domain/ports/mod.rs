//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod credential_store;
mod session_store;

#[cfg(test)]
pub use credential_store::MockCredentialStore;
pub use credential_store::{
    CredentialStore, CredentialStoreError, DEMO_PASSWORD, FixtureCredentialStore,
};
#[cfg(test)]
pub use session_store::MockSessionStore;
pub use session_store::{InMemorySessionStore, SESSION_KEY, SessionStore, SessionStoreError};
