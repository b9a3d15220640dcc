#![forbid(unsafe_code)]
//! fieldcheck_lib — validation of user-supplied field values
//!
//! ```
//! use fieldcheck_lib::Validator;
//!
//! let mut v = Validator::new();
//! v.required("email", "", None);
//! v.email("email", "", None);
//! let labels = v.domain("site", "xn--mnchen-3ya.de", None);
//!
//! assert_eq!(labels, Some(vec!["münchen".to_string(), "de".to_string()]));
//! assert_eq!(v.render(), "email: must be set.\n");
//! ```
//!
//! Most checks let an empty value through (`required`, `len`, `range`, `date`,
//! `include` and `exclude` do not), so a field is optional unless `required`
//! is used as well.

pub mod domain;
pub mod messages;
pub mod punycode;
pub mod validator;

pub use domain::{DomainError, parse_domain, valid_domain};
pub use messages::{Check, Messages};
pub use punycode::DecodeError;
pub use validator::{EmailAddress, FieldValue, SubError, Validator};
