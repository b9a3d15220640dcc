use std::fmt;

use super::Validator;

/// A value handed to [`Validator::required`].
///
/// Every supported shape has its own variant and a `From` conversion, so
/// asking for an unsupported type is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Signed(i64),
    Unsigned(u64),
    Flag(bool),
    TextList(&'a [String]),
    Email(&'a EmailAddress),
}

impl FieldValue<'_> {
    /// Whether this is the "not set" value of its kind.
    ///
    /// Text is unset when blank after trimming. A list is unset when it is
    /// empty or only holds empty strings; `" "` counts as set.
    pub fn is_unset(&self) -> bool {
        match *self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Signed(n) => n == 0,
            FieldValue::Unsigned(n) => n == 0,
            FieldValue::Flag(b) => !b,
            FieldValue::TextList(items) => items.iter().all(String::is_empty),
            FieldValue::Email(addr) => addr.address.is_empty(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Signed(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        FieldValue::Signed(value.into())
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        FieldValue::Unsigned(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        FieldValue::Unsigned(value.into())
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        FieldValue::TextList(value)
    }
}

impl<'a> From<&'a Vec<String>> for FieldValue<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        FieldValue::TextList(value)
    }
}

impl<'a> From<&'a EmailAddress> for FieldValue<'a> {
    fn from(value: &'a EmailAddress) -> Self {
        FieldValue::Email(value)
    }
}

/// Outcome of a nested validation, merged with [`Validator::sub`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubError {
    /// Keyed errors, merged under the parent key.
    Structured(Validator),
    /// A bare message, recorded on the parent key itself.
    Plain(String),
}

impl SubError {
    pub fn plain(err: impl fmt::Display) -> Self {
        SubError::Plain(err.to_string())
    }
}

impl From<Validator> for SubError {
    fn from(value: Validator) -> Self {
        SubError::Structured(value)
    }
}

impl From<String> for SubError {
    fn from(value: String) -> Self {
        SubError::Plain(value)
    }
}

impl From<&str> for SubError {
    fn from(value: &str) -> Self {
        SubError::Plain(value.to_string())
    }
}

/// A parsed e-mail address, optionally with a display name.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailAddress {
    pub name: Option<String>,
    pub address: String,
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "\"{}\" <{}>", name.replace('"', "\\\""), self.address),
            None => f.write_str(&self.address),
        }
    }
}
