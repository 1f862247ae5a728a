//! Authorization tiers assigned to dashboard accounts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of roles an [`Identity`](crate::domain::Identity) may hold.
///
/// Variants are declared from broadest to narrowest. Roles do not nest: a
/// coordinator is not implicitly an employee, and every authorization check
/// names the exact roles it admits.
///
/// ## Serialisation
/// Roles serialise as `EXECUTIVE_MANAGER`, `COORDINATOR` and `EMPLOYEE`.
/// Any other string is rejected, so a stored snapshot cannot smuggle in a
/// role outside the set.
///
/// # Examples
/// ```
/// use teamboard::domain::Role;
///
/// let role: Role = "COORDINATOR".parse().expect("known role");
/// assert_eq!(role, Role::Coordinator);
/// assert_eq!(role.label(), "Coordinator");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Runs the organisation; may administer users and data.
    ExecutiveManager,
    /// Coordinates teams; may publish work and view administration pages.
    Coordinator,
    /// Regular team member.
    Employee,
}

/// Error returned when a string does not name a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{value}'; expected EXECUTIVE_MANAGER, COORDINATOR or EMPLOYEE")]
pub struct RoleParseError {
    value: String,
}

impl Role {
    /// Every role, broadest first.
    pub const ALL: [Self; 3] = [Self::ExecutiveManager, Self::Coordinator, Self::Employee];

    /// Stable wire name used in snapshots and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExecutiveManager => "EXECUTIVE_MANAGER",
            Self::Coordinator => "COORDINATOR",
            Self::Employee => "EMPLOYEE",
        }
    }

    /// Human readable label shown next to the signed-in user.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExecutiveManager => "Executive Manager",
            Self::Coordinator => "Coordinator",
            Self::Employee => "Employee",
        }
    }

    /// Whether an account holding this role may be removed by an administrator.
    ///
    /// Executive manager accounts are never offered for removal.
    #[must_use]
    pub const fn is_removable(self) -> bool {
        !matches!(self, Self::ExecutiveManager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RoleParseError {
                value: value.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("EXECUTIVE_MANAGER", Role::ExecutiveManager)]
    #[case("COORDINATOR", Role::Coordinator)]
    #[case("EMPLOYEE", Role::Employee)]
    fn parses_wire_names(#[case] raw: &str, #[case] expected: Role) {
        assert_eq!(raw.parse::<Role>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
    }

    #[rstest]
    #[case("employee")]
    #[case("ADMIN")]
    #[case("")]
    fn rejects_unknown_names(#[case] raw: &str) {
        let err = raw.parse::<Role>().expect_err("unknown role must fail");
        assert!(err.to_string().contains("unknown role"));
    }

    #[rstest]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Role::ExecutiveManager).expect("serialise role");
        assert_eq!(json, "\"EXECUTIVE_MANAGER\"");
        assert!(serde_json::from_str::<Role>("\"MANAGER\"").is_err());
    }

    #[rstest]
    #[case(Role::ExecutiveManager, false)]
    #[case(Role::Coordinator, true)]
    #[case(Role::Employee, true)]
    fn only_executive_managers_are_protected_from_removal(
        #[case] role: Role,
        #[case] removable: bool,
    ) {
        assert_eq!(role.is_removable(), removable);
    }
}
