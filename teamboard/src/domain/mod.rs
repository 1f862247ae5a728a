//! Domain primitives, ports and the session service.
//!
//! Purpose: hold every rule about who is signed in and what they may see.
//! Inbound adapters ask questions through [`SessionService`] and
//! [`authorize`]; they never compare roles themselves.
//!
//! Public surface:
//! - Role, Identity and its validated components.
//! - Session, Resolution and SessionState: the observable session value.
//! - Requirement, AuthDecision, DenyReason and [`authorize`]: the single
//!   authorization rule.
//! - Capability: named guarded actions mapped to requirements.
//! - LoginCredentials and AuthError: login input and failures.
//! - SessionService: hydrate, login, logout and authorization queries.

pub mod auth;
pub mod authorization;
pub mod capability;
pub mod identity;
pub mod ports;
pub mod role;
pub mod session;
pub mod session_service;

pub use self::auth::{AuthError, LoginCredentials, LoginValidationError};
pub use self::authorization::{AuthDecision, DenyReason, Requirement, RequirementError, authorize};
pub use self::capability::{Capability, CapabilityParseError};
pub use self::identity::{
    AvatarRef, DisplayName, Email, Identity, IdentityId, IdentityValidationError,
};
pub use self::role::{Role, RoleParseError};
pub use self::session::{Resolution, Session, SessionState};
pub use self::session_service::SessionService;
