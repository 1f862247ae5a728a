//! Driven port for resolving login credentials to an identity.
//!
//! The credential store is an opaque lookup: given an email and password it
//! either returns the matching identity (never the password) or nothing.

use std::time::Duration;

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::{Identity, IdentityValidationError, LoginCredentials, Role};

use super::define_port_error;

define_port_error! {
    /// Failures raised by credential store adapters.
    pub enum CredentialStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "credential store connection failed: {message}",
    }
}

/// Port resolving credentials to an identity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Return the identity whose email and password both match exactly.
    async fn lookup(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, CredentialStoreError>;
}

/// Password shared by every demo account.
pub const DEMO_PASSWORD: &str = "password123";

const DEMO_ACCOUNTS: [(&str, &str, &str, Role, &str); 3] = [
    (
        "1",
        "John Manager",
        "manager@example.com",
        Role::ExecutiveManager,
        "https://source.unsplash.com/random/200x200/?portrait&1",
    ),
    (
        "2",
        "Sara Coordinator",
        "coordinator@example.com",
        Role::Coordinator,
        "https://source.unsplash.com/random/200x200/?portrait&2",
    ),
    (
        "3",
        "Mike Employee",
        "employee@example.com",
        Role::Employee,
        "https://source.unsplash.com/random/200x200/?portrait&3",
    ),
];

struct FixtureAccount {
    identity: Identity,
    password: Zeroizing<String>,
}

/// In-memory credential store holding fixed accounts.
///
/// Matching is exact and case-sensitive on both email and password. An
/// optional artificial latency stands in for the round trip a real store
/// would make.
///
/// # Examples
/// ```
/// use teamboard::domain::ports::FixtureCredentialStore;
///
/// let store = FixtureCredentialStore::demo().expect("demo accounts are valid");
/// assert_eq!(store.len(), 3);
/// ```
pub struct FixtureCredentialStore {
    accounts: Vec<FixtureAccount>,
    latency: Duration,
}

impl FixtureCredentialStore {
    /// Store holding no accounts.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            accounts: Vec::new(),
            latency: Duration::ZERO,
        }
    }

    /// Store seeded with the executive manager, coordinator and employee
    /// demo accounts, all sharing [`DEMO_PASSWORD`].
    ///
    /// # Errors
    /// Returns [`IdentityValidationError`] if a seeded account fails
    /// validation.
    pub fn demo() -> Result<Self, IdentityValidationError> {
        DEMO_ACCOUNTS.into_iter().try_fold(
            Self::empty(),
            |store, (id, name, email, role, avatar)| {
                let identity = Identity::try_from_parts(id, name, email, role, Some(avatar))?;
                Ok(store.with_account(identity, DEMO_PASSWORD))
            },
        )
    }

    /// Add an account, replacing any existing account with the same email.
    #[must_use]
    pub fn with_account(mut self, identity: Identity, password: &str) -> Self {
        self.accounts
            .retain(|account| account.identity.email() != identity.email());
        self.accounts.push(FixtureAccount {
            identity,
            password: Zeroizing::new(password.to_owned()),
        });
        self
    }

    /// Delay every lookup by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of accounts held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl CredentialStore for FixtureCredentialStore {
    async fn lookup(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, CredentialStoreError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let found = self.accounts.iter().find(|account| {
            account.identity.email().as_str() == credentials.email()
                && account.password.as_str() == credentials.password()
        });
        Ok(found.map(|account| account.identity.clone()))
    }
}
