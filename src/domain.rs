//! Domain name syntax (RFC 1034 section 3.1, RFC 1035 section 2.3.1) with
//! support for internationalized labels, either as UTF-8 or as A-labels.
//!
//! Only names with at least two labels are accepted: `example.com` and
//! `me.localhost` pass, `com` and `localhost` do not.

use thiserror::Error;

use crate::punycode::{self, DecodeError};

/// Longest label accepted, counted on the label as written.
pub const MAX_LABEL_LEN: usize = 63;
/// Fewest labels a domain may have.
pub const MIN_LABELS: usize = 2;

const ACE_PREFIX: &str = "xn--";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("domain is shorter than 3 characters")]
    TooShort,
    #[error("domain starts with a dot")]
    LeadingDot,
    #[error("domain has {0} label(s), at least 2 are required")]
    TooFewLabels(usize),
    #[error("domain contains an empty label")]
    EmptyLabel,
    #[error("domain label '{label}' is longer than 63 characters")]
    LabelTooLong { label: String },
    #[error("domain label '{label}' is not valid punycode")]
    Punycode {
        label: String,
        #[source]
        source: DecodeError,
    },
    #[error("domain label '{label}' contains invalid character '{ch}'")]
    InvalidChar { label: String, ch: char },
}

impl DomainError {
    pub(crate) fn punycode(label: &str, source: DecodeError) -> Self {
        Self::Punycode {
            label: label.to_string(),
            source,
        }
    }
}

/// Validate `value` as a domain and return its labels, left to right.
///
/// One trailing dot is allowed. Labels starting with `xn--` are decoded and
/// returned in their Unicode form; every other label is returned as written.
pub fn parse_domain(value: &str) -> Result<Vec<String>, DomainError> {
    if value.len() < 3 {
        return Err(DomainError::TooShort);
    }
    if value.starts_with('.') {
        return Err(DomainError::LeadingDot);
    }
    let value = value.strip_suffix('.').unwrap_or(value);

    let raw: Vec<&str> = value.split('.').collect();
    if raw.len() < MIN_LABELS {
        return Err(DomainError::TooFewLabels(raw.len()));
    }

    raw.into_iter().map(parse_label).collect()
}

/// Like [`parse_domain`], discarding the reason.
pub fn valid_domain(value: &str) -> Option<Vec<String>> {
    parse_domain(value).ok()
}

fn parse_label(raw: &str) -> Result<String, DomainError> {
    if raw.is_empty() {
        return Err(DomainError::EmptyLabel);
    }
    if raw.chars().count() > MAX_LABEL_LEN {
        return Err(DomainError::LabelTooLong {
            label: raw.to_string(),
        });
    }

    let label = match raw.strip_prefix(ACE_PREFIX) {
        Some(body) => punycode::decode(body).map_err(|e| DomainError::punycode(raw, e))?,
        None => raw.to_string(),
    };
    if label.is_empty() {
        return Err(DomainError::EmptyLabel);
    }

    // Hyphens may appear anywhere, including first and last.
    if let Some(ch) = label
        .chars()
        .find(|&c| !(c.is_alphabetic() || c.is_numeric() || c == '-'))
    {
        return Err(DomainError::InvalidChar { label, ch });
    }
    Ok(label)
}
