//! Session lifecycle service.
//!
//! `SessionService` is the single owner of "who is signed in". It hydrates
//! from the session store at startup, performs login and logout, and answers
//! authorization questions against the latest committed session. Readers see
//! state through a `tokio::sync::watch` channel; writers take an async gate so
//! only one mutation is ever in flight.

use std::sync::Arc;

use tokio::sync::{Mutex, watch};
use tracing::{debug, info, warn};

use crate::domain::ports::{CredentialStore, SESSION_KEY, SessionStore};
use crate::domain::{
    AuthDecision, AuthError, Capability, Identity, LoginCredentials, Requirement, Resolution,
    Session, SessionState, authorize,
};

/// Owner of the current session.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use teamboard::domain::ports::{FixtureCredentialStore, InMemorySessionStore};
/// use teamboard::domain::{Capability, LoginCredentials, SessionService};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let service = SessionService::new(
///     Arc::new(FixtureCredentialStore::demo().unwrap()),
///     Arc::new(InMemorySessionStore::new()),
/// );
/// service.hydrate().await;
/// let creds = LoginCredentials::try_from_parts("employee@example.com", "password123").unwrap();
/// service.login(&creds).await.unwrap();
/// assert!(!service.authorize_capability(Capability::ViewReports).is_allowed());
/// # });
/// ```
pub struct SessionService<C, S> {
    credentials: Arc<C>,
    store: Arc<S>,
    state: watch::Sender<SessionState>,
    write_gate: Mutex<()>,
}

impl<C, S> SessionService<C, S> {
    /// Create a pending service over the given stores.
    pub fn new(credentials: Arc<C>, store: Arc<S>) -> Self {
        let (state, _) = watch::channel(SessionState::pending());
        Self {
            credentials,
            store,
            state,
            write_gate: Mutex::new(()),
        }
    }

    /// Latest committed session.
    #[must_use]
    pub fn current_session(&self) -> Session {
        self.state.borrow().session.clone()
    }

    /// Latest committed session together with its resolution flag.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Whether hydration has completed.
    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.state.borrow().resolution
    }

    /// Whether the session is still unresolved.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state.borrow().is_pending()
    }

    /// Receiver notified on every committed change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait until the session has been resolved and return that state.
    pub async fn wait_until_resolved(&self) -> SessionState {
        let mut receiver = self.state.subscribe();
        // The sender lives in `self`, so the channel cannot close while borrowed.
        match receiver.wait_for(|state| !state.is_pending()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        }
    }

    /// Decide whether the current session satisfies `requirement`.
    ///
    /// `None` means that being signed in is enough. Anonymous sessions are
    /// denied as unauthenticated before any role is considered.
    #[must_use]
    pub fn authorize(&self, requirement: Option<Requirement>) -> AuthDecision {
        authorize(&self.state.borrow().session, requirement)
    }

    /// Decide whether the current session may use `capability`.
    #[must_use]
    pub fn authorize_capability(&self, capability: Capability) -> AuthDecision {
        self.authorize(capability.requirement())
    }

    fn commit(&self, session: Session) {
        self.state.send_replace(SessionState::resolved(session));
    }
}

impl<C, S> SessionService<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    /// Restore the session persisted by a previous run.
    ///
    /// Absent, malformed, or unreadable snapshots resolve to
    /// [`Session::Anonymous`]. The credential store is never consulted.
    pub async fn hydrate(&self) -> Session {
        let _guard = self.write_gate.lock().await;
        let session = match self.store.read(SESSION_KEY).await {
            Ok(Some(raw)) => match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => {
                    debug!(id = %identity.id(), role = %identity.role(), "session restored");
                    Session::Authenticated(identity)
                }
                Err(error) => {
                    warn!(%error, "discarding malformed session snapshot");
                    Session::Anonymous
                }
            },
            Ok(None) => {
                debug!("no persisted session");
                Session::Anonymous
            }
            Err(error) => {
                warn!(%error, "session store read failed; starting anonymous");
                Session::Anonymous
            }
        };
        self.commit(session.clone());
        session
    }

    /// Sign in with `credentials`.
    ///
    /// On success the identity becomes the current session and a snapshot is
    /// persisted. A failed snapshot write is logged; the in-process session
    /// still changes.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] when no account matches and
    /// [`AuthError::CredentialStoreUnavailable`] when the lookup itself fails.
    /// The session is untouched in both cases.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Identity, AuthError> {
        let _guard = self.write_gate.lock().await;
        let identity = match self.credentials.lookup(credentials).await {
            Ok(Some(identity)) => identity,
            Ok(None) => {
                info!("login rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(error) => {
                warn!(%error, "credential lookup failed");
                return Err(AuthError::CredentialStoreUnavailable {
                    message: error.to_string(),
                });
            }
        };

        self.commit(Session::Authenticated(identity.clone()));
        self.persist(&identity).await;
        info!(id = %identity.id(), role = %identity.role(), "login succeeded");
        Ok(identity)
    }

    /// Sign out. Safe to call when nobody is signed in.
    pub async fn logout(&self) {
        let _guard = self.write_gate.lock().await;
        let previous = self.state.borrow().session.identity().map(|i| i.id().clone());
        self.commit(Session::Anonymous);
        if let Err(error) = self.store.remove(SESSION_KEY).await {
            warn!(%error, "failed to clear persisted session");
        }
        match previous {
            Some(id) => info!(%id, "logged out"),
            None => debug!("logout with no active session"),
        }
    }

    async fn persist(&self, identity: &Identity) {
        let snapshot = match serde_json::to_string(identity) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                warn!(%error, "failed to encode session snapshot");
                return;
            }
        };
        if let Err(error) = self.store.write(SESSION_KEY, &snapshot).await {
            warn!(%error, "failed to persist session snapshot");
        }
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
