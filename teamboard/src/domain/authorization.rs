//! Role requirements and the single authorization rule.
//!
//! Every "may this caller see or do X" question in the dashboard is answered
//! by [`authorize`]. Call sites declare a [`Requirement`] (or none) and react
//! to the returned [`AuthDecision`]; they never compare roles themselves.

use std::fmt;

use thiserror::Error;

use super::{Role, Session};

const fn role_bit(role: Role) -> u8 {
    match role {
        Role::ExecutiveManager => 0b001,
        Role::Coordinator => 0b010,
        Role::Employee => 0b100,
    }
}

/// Error returned when a requirement would admit no role at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("a role requirement must admit at least one role")]
pub struct RequirementError;

/// Non-empty set of roles a guarded view or action admits.
///
/// An absent requirement (`None` wherever `Option<Requirement>` is accepted)
/// means that being authenticated is enough.
///
/// # Examples
/// ```
/// use teamboard::domain::{Requirement, Role};
///
/// let management = Requirement::any_of([Role::ExecutiveManager, Role::Coordinator])
///     .expect("non-empty");
/// assert!(management.admits(Role::Coordinator));
/// assert!(!management.admits(Role::Employee));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Requirement {
    mask: u8,
}

impl Requirement {
    /// Executive managers and coordinators.
    pub const MANAGEMENT: Self = Self {
        mask: role_bit(Role::ExecutiveManager) | role_bit(Role::Coordinator),
    };

    /// Executive managers only.
    pub const EXECUTIVE: Self = Self::only(Role::ExecutiveManager);

    /// Requirement admitting exactly one role.
    #[must_use]
    pub const fn only(role: Role) -> Self {
        Self {
            mask: role_bit(role),
        }
    }

    /// Requirement admitting any of the given roles.
    ///
    /// # Errors
    /// Returns [`RequirementError`] when `roles` is empty.
    pub fn any_of(roles: impl IntoIterator<Item = Role>) -> Result<Self, RequirementError> {
        let mask = roles
            .into_iter()
            .fold(0_u8, |mask, role| mask | role_bit(role));
        if mask == 0 {
            return Err(RequirementError);
        }
        Ok(Self { mask })
    }

    /// Whether `role` is a member of this requirement.
    #[must_use]
    pub const fn admits(self, role: Role) -> bool {
        self.mask & role_bit(role) != 0
    }

    /// Admitted roles, broadest first.
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.admits(*role))
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.roles()).finish()
    }
}

/// Why an authorization check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DenyReason {
    /// Nobody is signed in. Callers send the user to the login view.
    Unauthenticated,
    /// Signed in, but the role is not admitted. Callers fall back to the
    /// default landing view rather than an error page.
    InsufficientRole,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthDecision {
    /// The caller may proceed.
    Allow,
    /// The caller may not proceed.
    Deny(DenyReason),
}

impl AuthDecision {
    /// Whether the decision permits the caller to proceed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `session` satisfies `requirement`.
///
/// Rules are applied in a fixed order: authentication is checked before role
/// membership, so an anonymous caller is always told to log in and never
/// learns which roles a view demands.
///
/// 1. Anonymous: `Deny(Unauthenticated)`.
/// 2. No requirement: `Allow`.
/// 3. Role admitted: `Allow`.
/// 4. Otherwise: `Deny(InsufficientRole)`.
///
/// # Examples
/// ```
/// use teamboard::domain::{authorize, AuthDecision, DenyReason, Requirement, Session};
///
/// let decision = authorize(&Session::Anonymous, Some(Requirement::EXECUTIVE));
/// assert_eq!(decision, AuthDecision::Deny(DenyReason::Unauthenticated));
/// ```
#[must_use]
pub fn authorize(session: &Session, requirement: Option<Requirement>) -> AuthDecision {
    let Some(identity) = session.identity() else {
        return AuthDecision::Deny(DenyReason::Unauthenticated);
    };
    match requirement {
        None => AuthDecision::Allow,
        Some(requirement) if requirement.admits(identity.role()) => AuthDecision::Allow,
        Some(_) => AuthDecision::Deny(DenyReason::InsufficientRole),
    }
}
