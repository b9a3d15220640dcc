//! Default error texts for every field check.
//!
//! Texts are short descriptions meant to be joined with commas after a field
//! name (`email: must be set, must be a valid email address.`), so they carry
//! no leading capital and no trailing period. A `{}` in a template is
//! replaced with the check's parameter (a bound, a layout, a list).

use std::collections::HashMap;
use std::fmt;

use phf::phf_map;

/// The field checks that have a default message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Required,
    Domain,
    Url,
    Email,
    Ipv4,
    Ip,
    HexColor,
    LenLonger,
    LenShorter,
    Exclude,
    Include,
    Integer,
    Boolean,
    Date,
    Phone,
    RangeHigher,
    RangeLower,
}

impl Check {
    pub const ALL: [Check; 17] = [
        Check::Required,
        Check::Domain,
        Check::Url,
        Check::Email,
        Check::Ipv4,
        Check::Ip,
        Check::HexColor,
        Check::LenLonger,
        Check::LenShorter,
        Check::Exclude,
        Check::Include,
        Check::Integer,
        Check::Boolean,
        Check::Date,
        Check::Phone,
        Check::RangeHigher,
        Check::RangeLower,
    ];

    /// Stable name, also the key into the default table.
    pub const fn name(self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::Domain => "domain",
            Check::Url => "url",
            Check::Email => "email",
            Check::Ipv4 => "ipv4",
            Check::Ip => "ip",
            Check::HexColor => "hex_color",
            Check::LenLonger => "len_longer",
            Check::LenShorter => "len_shorter",
            Check::Exclude => "exclude",
            Check::Include => "include",
            Check::Integer => "integer",
            Check::Boolean => "boolean",
            Check::Date => "date",
            Check::Phone => "phone",
            Check::RangeHigher => "range_higher",
            Check::RangeLower => "range_lower",
        }
    }
}

const DEFAULT_MESSAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "required" => "must be set",
    "domain" => "must be a valid domain",
    "url" => "must be a valid url",
    "email" => "must be a valid email address",
    "ipv4" => "must be a valid IPv4 address",
    "ip" => "must be a valid IPv4 or IPv6 address",
    "hex_color" => "must be a valid color code",
    "len_longer" => "must be longer than {} characters",
    "len_shorter" => "must be shorter than {} characters",
    "exclude" => "cannot be ‘{}’",
    "include" => "must be one of ‘{}’",
    "integer" => "must be a whole number",
    "boolean" => "must be a boolean",
    "date" => "must be a date as ‘{}’",
    "phone" => "must be a valid phone number",
    "range_higher" => "must be {} or higher",
    "range_lower" => "must be {} or lower",
};

const FALLBACK: &str = "is invalid";

/// Message table used by a [`Validator`](crate::Validator).
///
/// Starts out with the built-in texts; individual checks can be overridden.
/// A message passed to a single check call still takes priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    overrides: HashMap<Check, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, check: Check, text: impl Into<String>) -> Self {
        self.overrides.insert(check, text.into());
        self
    }

    pub fn with_messages<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = (Check, S)>,
        S: Into<String>,
    {
        for (check, text) in messages {
            self = self.with_message(check, text);
        }
        self
    }

    /// The built-in text for `check`.
    pub fn default_template(check: Check) -> &'static str {
        DEFAULT_MESSAGES.get(check.name()).copied().unwrap_or(FALLBACK)
    }

    /// The text currently configured for `check`.
    pub fn template(&self, check: Check) -> &str {
        self.overrides
            .get(&check)
            .map(String::as_str)
            .unwrap_or_else(|| Self::default_template(check))
    }

    /// Resolve the message for a check without parameter.
    pub(crate) fn message(&self, check: Check, custom: Option<&str>) -> String {
        match custom {
            Some(text) => text.to_string(),
            None => self.template(check).to_string(),
        }
    }

    /// Resolve the message for a parameterized check. A custom text is used
    /// as is, the configured template gets `arg` substituted.
    pub(crate) fn message_with(
        &self,
        check: Check,
        custom: Option<&str>,
        arg: impl fmt::Display,
    ) -> String {
        match custom {
            Some(text) => text.to_string(),
            None => fill(self.template(check), arg),
        }
    }
}

fn fill(template: &str, arg: impl fmt::Display) -> String {
    match template.split_once("{}") {
        Some((head, tail)) => format!("{head}{arg}{tail}"),
        None => template.to_string(),
    }
}
