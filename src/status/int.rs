//! Integer that decodes from a JSON number or a quoted JSON number.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error_handling::DecodeError;

/// An integer which can be decoded from both a JSON number and a string
/// literal holding a valid number.
///
/// WhoAPI is inconsistent with types: the same field is sometimes `0` and
/// sometimes `"0"`. Use this type for any such field when parsing a raw
/// response into your own structure:
///
/// ```
/// use serde::Deserialize;
/// use whoapi::TolerantInt;
///
/// #[derive(Deserialize)]
/// struct Account {
///     requests_available: TolerantInt,
/// }
///
/// let account: Account = serde_json::from_str(r#"{"requests_available":"250"}"#).unwrap();
/// assert_eq!(account.requests_available.get(), 250);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TolerantInt(
    /// Decoded value
    pub i64,
);

impl TolerantInt {
    /// Decodes a raw JSON scalar token.
    ///
    /// If the token is wrapped in double quotes, exactly one leading and one
    /// trailing quote are removed before the remainder is parsed as a JSON
    /// integer. `""`, an empty token and tokens like `"1""` are rejected.
    pub fn from_token(token: &[u8]) -> Result<Self, DecodeError> {
        let inner = match token {
            [b'"', inner @ .., b'"'] => inner,
            _ => token,
        };
        serde_json::from_slice::<i64>(inner)
            .map(TolerantInt)
            .map_err(|source| DecodeError::Integer {
                token: String::from_utf8_lossy(token).into_owned(),
                source,
            })
    }

    /// The decoded value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TolerantInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        TolerantInt::from_token(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}

impl Serialize for TolerantInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

impl From<i64> for TolerantInt {
    fn from(n: i64) -> Self {
        TolerantInt(n)
    }
}

impl From<TolerantInt> for i64 {
    fn from(n: TolerantInt) -> Self {
        n.0
    }
}

impl PartialEq<i64> for TolerantInt {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for TolerantInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
