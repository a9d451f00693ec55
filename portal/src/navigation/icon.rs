//! Icon identifiers referenced by navigation entries.
//!
//! An identifier is a semantic key such as `icon:dashboard`; the renderer
//! decides what glyph it maps to.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`IconIdentifier::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconIdentifierValidationError {
    Empty,
    InvalidFormat,
}

impl fmt::Display for IconIdentifierValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "icon identifier must not be empty"),
            Self::InvalidFormat => write!(
                f,
                "icon identifier must use '<namespace>:<name>' with lowercase ASCII, digits, '-' or '_'"
            ),
        }
    }
}

impl std::error::Error for IconIdentifierValidationError {}

/// Semantic icon key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IconIdentifier(Cow<'static, str>);

impl IconIdentifier {
    /// Wrap a compile-time identifier without validation.
    ///
    /// Only for static configuration; the menu tests check every static
    /// identifier with [`IconIdentifier::is_well_formed`].
    pub const fn from_static(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    /// Validate and construct an identifier from runtime input.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, IconIdentifierValidationError> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(IconIdentifierValidationError::Empty);
        }
        if !is_valid_icon_identifier(value) {
            return Err(IconIdentifierValidationError::InvalidFormat);
        }
        Ok(Self(Cow::Owned(value.to_owned())))
    }

    /// Whether the identifier satisfies the `<namespace>:<name>` format.
    pub fn is_well_formed(&self) -> bool {
        is_valid_icon_identifier(&self.0)
    }

    /// The part after the namespace, e.g. `dashboard` for `icon:dashboard`.
    pub fn name(&self) -> &str {
        self.0
            .split_once(':')
            .map_or(self.0.as_ref(), |(_, name)| name)
    }
}

impl AsRef<str> for IconIdentifier {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for IconIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<IconIdentifier> for String {
    fn from(value: IconIdentifier) -> Self {
        value.0.into_owned()
    }
}

impl TryFrom<String> for IconIdentifier {
    type Error = IconIdentifierValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

fn is_valid_icon_identifier(value: &str) -> bool {
    let Some((namespace, name)) = value.split_once(':') else {
        return false;
    };
    let valid_segment = |segment: &str| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    };
    valid_segment(namespace) && valid_segment(name)
}
