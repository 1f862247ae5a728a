//! Authenticated identity model.
//!
//! An [`Identity`] is what the rest of the dashboard knows about the signed-in
//! account. It never carries credentials; the password stays inside the
//! credential store and is dropped before an identity is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Role;

/// Validation errors returned while constructing identity components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    /// Identifier was blank.
    EmptyId,
    /// Identifier had leading or trailing whitespace.
    IdHasSurroundingWhitespace,
    /// Display name was blank once trimmed.
    EmptyDisplayName,
    /// Email was blank.
    EmptyEmail,
    /// Email had leading or trailing whitespace.
    EmailHasSurroundingWhitespace,
    /// Avatar reference was present but blank.
    EmptyAvatar,
    /// Avatar reference had leading or trailing whitespace.
    AvatarHasSurroundingWhitespace,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "identity id must not be empty"),
            Self::IdHasSurroundingWhitespace => {
                write!(f, "identity id must not contain surrounding whitespace")
            }
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailHasSurroundingWhitespace => {
                write!(f, "email must not contain surrounding whitespace")
            }
            Self::EmptyAvatar => write!(f, "avatar reference must not be empty"),
            Self::AvatarHasSurroundingWhitespace => {
                write!(f, "avatar reference must not contain surrounding whitespace")
            }
        }
    }
}

impl std::error::Error for IdentityValidationError {}

fn require_token(
    raw: &str,
    empty: IdentityValidationError,
    padded: IdentityValidationError,
) -> Result<(), IdentityValidationError> {
    if raw.trim().is_empty() {
        return Err(empty);
    }
    if raw.trim() != raw {
        return Err(padded);
    }
    Ok(())
}

// Validated string newtypes share the same conversions and serde contract:
// they (de)serialise as plain strings and reject values failing `$check`.
macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value from owned input.
            pub fn new(value: impl Into<String>) -> Result<Self, IdentityValidationError> {
                let value = value.into();
                let check: fn(&str) -> Result<(), IdentityValidationError> = $check;
                check(&value)?;
                Ok(Self(value))
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentityValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

validated_string!(
    /// Opaque account identifier, stable for the lifetime of the account.
    IdentityId,
    |raw| require_token(
        raw,
        IdentityValidationError::EmptyId,
        IdentityValidationError::IdHasSurroundingWhitespace,
    )
);

validated_string!(
    /// Name shown in the header and user lists. Presentation only.
    DisplayName,
    |raw| {
        if raw.trim().is_empty() {
            Err(IdentityValidationError::EmptyDisplayName)
        } else {
            Ok(())
        }
    }
);

validated_string!(
    /// Login lookup key. Unique within a credential store.
    Email,
    |raw| require_token(
        raw,
        IdentityValidationError::EmptyEmail,
        IdentityValidationError::EmailHasSurroundingWhitespace,
    )
);

validated_string!(
    /// Opaque reference to a profile image. Presentation only.
    AvatarRef,
    |raw| require_token(
        raw,
        IdentityValidationError::EmptyAvatar,
        IdentityValidationError::AvatarHasSurroundingWhitespace,
    )
);

/// Resolved attributes of an authenticated account.
///
/// ## Invariants
/// - Every component is validated on construction and on deserialisation.
/// - `role` is always one of the three [`Role`] variants.
/// - No credential material is stored.
///
/// ## Snapshot format
/// Identities serialise to the camelCase JSON snapshot kept in session
/// persistence: `id`, `name`, `email`, `role` and an optional `avatar`.
/// `displayName` is accepted as an alias for `name`. Unknown fields, a
/// `password` field included, are rejected.
///
/// # Examples
/// ```
/// use teamboard::domain::{Identity, Role};
///
/// let identity = Identity::try_from_parts(
///     "2",
///     "Sara Coordinator",
///     "coordinator@example.com",
///     Role::Coordinator,
///     None,
/// )
/// .expect("valid identity");
/// assert_eq!(identity.role(), Role::Coordinator);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityDto", into = "IdentityDto")]
pub struct Identity {
    id: IdentityId,
    display_name: DisplayName,
    email: Email,
    role: Role,
    avatar: Option<AvatarRef>,
}

impl Identity {
    /// Build an identity from validated components.
    #[must_use]
    pub fn new(
        id: IdentityId,
        display_name: DisplayName,
        email: Email,
        role: Role,
        avatar: Option<AvatarRef>,
    ) -> Self {
        Self {
            id,
            display_name,
            email,
            role,
            avatar,
        }
    }

    /// Fallible constructor validating every string component.
    ///
    /// Prefer [`Identity::new`] when components are already validated.
    pub fn try_from_parts(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        avatar: Option<&str>,
    ) -> Result<Self, IdentityValidationError> {
        let avatar = avatar.map(AvatarRef::new).transpose()?;
        Ok(Self::new(
            IdentityId::new(id)?,
            DisplayName::new(display_name)?,
            Email::new(email)?,
            role,
            avatar,
        ))
    }

    /// Stable account identifier.
    #[must_use]
    pub fn id(&self) -> &IdentityId {
        &self.id
    }

    /// Name displayed for the account.
    #[must_use]
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    /// Email used to sign in.
    #[must_use]
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The single role held by the account.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Optional profile image reference.
    #[must_use]
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct IdentityDto {
    id: String,
    #[serde(alias = "displayName")]
    name: String,
    email: String,
    role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl From<Identity> for IdentityDto {
    fn from(value: Identity) -> Self {
        let Identity {
            id,
            display_name,
            email,
            role,
            avatar,
        } = value;
        Self {
            id: id.into(),
            name: display_name.into(),
            email: email.into(),
            role,
            avatar: avatar.map(String::from),
        }
    }
}

impl TryFrom<IdentityDto> for Identity {
    type Error = IdentityValidationError;

    fn try_from(value: IdentityDto) -> Result<Self, Self::Error> {
        let IdentityDto {
            id,
            name,
            email,
            role,
            avatar,
        } = value;
        Self::try_from_parts(id, name, email, role, avatar.as_deref())
    }
}
