//! Address data model.
//!
//! Records are owned by the server: the client never mutates an [`Address`]
//! in place and only ever sends [`AddressDraft`] partial records.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdValidationError {
    Empty,
    Padded,
}

impl fmt::Display for UserIdValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
            Self::Padded => write!(f, "user id must not carry surrounding whitespace"),
        }
    }
}

impl std::error::Error for UserIdValidationError {}

/// Identifier of the user owning a set of addresses.
///
/// Servers emit this either as a string or as an integer; both decode into
/// the same textual identifier. Decoding keeps the server's value as sent,
/// while [`UserId::new`] and `FromStr` validate caller input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserIdValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(UserIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(UserIdValidationError::Padded);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawUserId {
            Text(String),
            Number(u64),
        }

        // Server data is taken as-is; only command-line input goes through `new`.
        Ok(Self(match RawUserId::deserialize(deserializer)? {
            RawUserId::Text(text) => text,
            RawUserId::Number(number) => number.to_string(),
        }))
    }
}

/// Server-assigned address identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressId(u64);

impl AddressId {
    /// Wrap a raw identifier.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for AddressId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AddressId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for AddressId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Address record as returned by the server.
///
/// ## Invariants
/// - Soft deletion is the presence of `deleted_at`; deleted records are
///   still returned by the server and are not filtered here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub user_id: UserId,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone_number: Option<String>,
    /// Category label such as `home` or `work`.
    pub address_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Address {
    /// Whether the server has soft-deleted this record.
    pub fn is_soft_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Address lines joined for display, skipping the optional second line.
    pub fn street(&self) -> String {
        match self.address_line2.as_deref() {
            Some(line2) if !line2.trim().is_empty() => {
                format!("{}, {}", self.address_line1, line2)
            }
            _ => self.address_line1.clone(),
        }
    }
}

/// Partial address record sent on create and update.
///
/// Only populated fields are serialised, so the server fills in identifiers,
/// timestamps and anything left untouched.
///
/// # Examples
/// ```
/// use portal::domain::AddressDraft;
///
/// let draft = AddressDraft::default().with_city("Pune");
/// assert_eq!(serde_json::to_string(&draft).unwrap(), r#"{"city":"Pune"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddressDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
}

macro_rules! draft_setters {
    ($($(#[$meta:meta])* $name:ident => $field:ident : $ty:ty),* $(,)?) => {
        impl AddressDraft {
            $(
                $(#[$meta])*
                #[must_use]
                pub fn $name(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

draft_setters! {
    /// Set the owning user.
    with_user_id => user_id: UserId,
    /// Set the first address line.
    with_address_line1 => address_line1: String,
    /// Set the second address line.
    with_address_line2 => address_line2: String,
    /// Set the city.
    with_city => city: String,
    /// Set the postal code.
    with_postal_code => postal_code: String,
    /// Set the country.
    with_country => country: String,
    /// Set the primary contact number.
    with_phone_number => phone_number: String,
    /// Set the alternate contact number.
    with_alternate_phone_number => alternate_phone_number: String,
    /// Set the category label.
    with_address_type => address_type: String,
}

impl AddressDraft {
    /// Whether no field is populated.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
