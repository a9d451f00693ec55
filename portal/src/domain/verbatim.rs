//! Server payloads kept exactly as received.
//!
//! A [`Verbatim`] carries the typed view of a JSON document alongside the
//! original text. Re-serialising it emits the server's bytes unchanged, so
//! `null` members, integer identifiers and timestamp precision survive a
//! round trip through the client even where the typed record normalises
//! them.

use std::fmt;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Typed value paired with the JSON text it was decoded from.
#[derive(Clone)]
pub struct Verbatim<T> {
    raw: Box<RawValue>,
    value: T,
}

impl<T> Verbatim<T> {
    /// Typed view of the payload.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper, keeping the typed view.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// The JSON text exactly as received.
    pub fn raw_json(&self) -> &str {
        self.raw.get()
    }
}

impl<T> Verbatim<T>
where
    T: Serialize,
{
    /// Wrap a locally built value, using its own serialisation as the text.
    ///
    /// # Errors
    ///
    /// Returns the serialiser error when `value` cannot be encoded as JSON.
    pub fn encode(value: T) -> Result<Self, serde_json::Error> {
        let raw = serde_json::value::to_raw_value(&value)?;
        Ok(Self { raw, value })
    }
}

impl<T> AsRef<T> for Verbatim<T> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T> PartialEq for Verbatim<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw.get() == other.raw.get()
    }
}

impl<T> Eq for Verbatim<T> {}

impl<T> fmt::Debug for Verbatim<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verbatim")
            .field("raw", &self.raw.get())
            .field("value", &self.value)
            .finish()
    }
}

impl<T> Serialize for Verbatim<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Verbatim<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let value = serde_json::from_str(raw.get()).map_err(D::Error::custom)?;
        Ok(Self { raw, value })
    }
}
