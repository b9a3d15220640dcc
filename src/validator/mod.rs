//! Field-keyed validation errors.
//!
//! A [`Validator`] collects messages per field key during a validation pass.
//! Results of nested validations are merged in with [`Validator::sub`], which
//! prefixes their keys (`settings.domain`, `addresses[1].city`).

mod checks;
mod domain;
mod email;
mod local;
mod types;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::fmt;

pub use types::{EmailAddress, FieldValue, SubError};

use crate::messages::Messages;

const NO_ERRORS: &str = "<no errors>";

/// Validation errors, keyed by field.
///
/// Messages for a key keep the order they were recorded in. A key is only
/// present when it has at least one message.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct Validator {
    #[cfg_attr(feature = "with-serde", serde(deserialize_with = "non_empty_lists"))]
    errors: HashMap<String, Vec<String>>,
    #[cfg_attr(feature = "with-serde", serde(skip))]
    messages: Messages,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `messages` instead of the built-in texts for failed checks.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Record `message` for `key`. Duplicates are kept.
    pub fn append(&mut self, key: impl Into<String>, message: impl Into<String>) {
        let key = key.into();
        let message = message.into();
        #[cfg(feature = "with-tracing")]
        tracing::trace!(key = %key, message = %message, "validation error recorded");
        self.errors.entry(key).or_default().push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &HashMap<String, Vec<String>> {
        &self.errors
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.errors.get(key).map(Vec::as_slice)
    }

    pub fn into_errors(self) -> HashMap<String, Vec<String>> {
        self.errors
    }

    /// `Err(self)` when there are errors, `Ok(())` otherwise.
    pub fn into_result(self) -> Result<(), Validator> {
        if self.has_errors() { Err(self) } else { Ok(()) }
    }

    /// HTTP status matching a failed validation.
    pub fn status_code(&self) -> u16 {
        400
    }

    /// Append every message of `other` under the same key.
    pub fn merge(&mut self, other: Validator) {
        for (key, messages) in other.errors {
            self.extend_key(key, messages);
        }
    }

    /// Merge the outcome of a nested validation under `key`.
    ///
    /// Keys of a structured result become `key.child`, or `key[sub_key].child`
    /// when `sub_key` is not empty. A plain error is recorded on that prefix
    /// itself. `Ok(())` and results without errors change nothing.
    ///
    /// ```
    /// use fieldcheck_lib::Validator;
    ///
    /// let mut address = Validator::new();
    /// address.append("city", "must be set");
    ///
    /// let mut v = Validator::new();
    /// v.sub("addresses", 1, address.into_result());
    /// assert_eq!(v.get("addresses[1].city"), Some(&["must be set".to_string()][..]));
    /// ```
    pub fn sub<E>(&mut self, key: &str, sub_key: impl fmt::Display, result: Result<(), E>)
    where
        E: Into<SubError>,
    {
        if let Err(err) = result {
            self.sub_error(key, sub_key, err);
        }
    }

    /// [`sub`](Self::sub) for a result already known to be an error.
    pub fn sub_error(&mut self, key: &str, sub_key: impl fmt::Display, err: impl Into<SubError>) {
        let sub_key = sub_key.to_string();
        let prefix = if sub_key.is_empty() {
            key.to_string()
        } else {
            format!("{key}[{sub_key}]")
        };

        match err.into() {
            SubError::Plain(message) => self.append(prefix, message),
            SubError::Structured(sub) => {
                #[cfg(feature = "with-tracing")]
                tracing::trace!(prefix = %prefix, keys = sub.errors.len(), "merging sub validation");
                for (child, messages) in sub.errors {
                    self.extend_key(format!("{prefix}.{child}"), messages);
                }
            }
        }
    }

    fn extend_key(&mut self, key: String, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        self.errors.entry(key).or_default().extend(messages);
    }

    /// One line per key, sorted by key: `key: first, second.`
    ///
    /// Returns `<no errors>` when there is nothing to report.
    pub fn render(&self) -> String {
        if !self.has_errors() {
            return NO_ERRORS.to_string();
        }

        let mut keys: Vec<&String> = self.errors.keys().collect();
        keys.sort();

        let mut out = String::new();
        for key in keys {
            out.push_str(&format!("{}: {}.\n", key, self.errors[key].join(", ")));
        }
        out
    }

    /// `{"errors": {"key": ["message", ...]}}`
    #[cfg(feature = "with-serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Keys without messages are dropped so a present key always has one.
#[cfg(feature = "with-serde")]
fn non_empty_lists<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let mut errors: HashMap<String, Vec<String>> = serde::Deserialize::deserialize(deserializer)?;
    errors.retain(|_, messages| !messages.is_empty());
    Ok(errors)
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.errors == other.errors
    }
}

impl Eq for Validator {}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for Validator {}
