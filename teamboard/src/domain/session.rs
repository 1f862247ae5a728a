//! Session values observed by the presentation layer.

use super::Identity;

/// Who, if anyone, is currently signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// An account is signed in.
    Authenticated(Identity),
}

impl Session {
    /// The signed-in identity, if any.
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    /// Whether an account is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Whether the session has been resolved from persistence yet.
///
/// A pending session is *not* confirmed anonymous. Route guards must show a
/// loading state instead of redirecting to the login view while pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Resolution {
    /// Hydration has not completed.
    #[default]
    Pending,
    /// The session value is authoritative.
    Resolved,
}

/// Snapshot of the session model: resolution flag plus session value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Whether `session` can be trusted yet.
    pub resolution: Resolution,
    /// Latest committed session value.
    pub session: Session,
}

impl SessionState {
    /// State of a freshly started model.
    #[must_use]
    pub fn pending() -> Self {
        Self::default()
    }

    /// Resolved state holding `session`.
    #[must_use]
    pub fn resolved(session: Session) -> Self {
        Self {
            resolution: Resolution::Resolved,
            session,
        }
    }

    /// Whether hydration is still outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.resolution == Resolution::Pending
    }
}
