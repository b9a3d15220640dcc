use std::net::{IpAddr, Ipv4Addr};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;

use super::email::parse_address;
use super::types::{EmailAddress, FieldValue};
use super::Validator;
use crate::messages::Check;

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0123456789+\-() .]{5,20}$").expect("phone pattern is valid")
});

/// Unless noted otherwise, an empty value passes every check below; combine
/// with [`Validator::required`] to make a field mandatory. Each check takes an
/// optional message that replaces the configured one.
impl Validator {
    /// The value must not be the "unset" value of its kind, see
    /// [`FieldValue::is_unset`].
    pub fn required<'a>(&mut self, key: &str, value: impl Into<FieldValue<'a>>, message: Option<&str>) {
        if value.into().is_unset() {
            let msg = self.messages.message(Check::Required, message);
            self.append(key, msg);
        }
    }

    /// The value must not be in `exclude`, compared case-insensitively.
    pub fn exclude(&mut self, key: &str, value: &str, exclude: &[&str], message: Option<&str>) {
        let value = value.trim().to_lowercase();
        if let Some(hit) = exclude.iter().find(|e| e.to_lowercase() == value) {
            let msg = self.messages.message_with(Check::Exclude, message, hit);
            self.append(key, msg);
        }
    }

    /// The value must be in `include`, compared case-insensitively. An empty
    /// list allows anything.
    pub fn include(&mut self, key: &str, value: &str, include: &[&str], message: Option<&str>) {
        if include.is_empty() {
            return;
        }
        let value = value.trim().to_lowercase();
        if include.iter().any(|e| e.to_lowercase() == value) {
            return;
        }
        let msg = self
            .messages
            .message_with(Check::Include, message, include.join(", "));
        self.append(key, msg);
    }

    pub fn email(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<EmailAddress> {
        if value.is_empty() {
            return None;
        }
        let addr = parse_address(value);
        if addr.is_none() {
            let msg = self.messages.message(Check::Email, message);
            self.append(key, msg);
        }
        addr
    }

    /// IPv4 address; an IPv4-mapped IPv6 address is accepted and unmapped.
    pub fn ipv4(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<Ipv4Addr> {
        if value.is_empty() {
            return None;
        }
        let ip = match value.parse::<IpAddr>() {
            Ok(IpAddr::V4(ip)) => Some(ip),
            Ok(IpAddr::V6(ip)) => ip.to_ipv4_mapped(),
            Err(_) => None,
        };
        if ip.is_none() {
            let msg = self.messages.message(Check::Ipv4, message);
            self.append(key, msg);
        }
        ip
    }

    pub fn ip(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<IpAddr> {
        if value.is_empty() {
            return None;
        }
        let ip = value.parse::<IpAddr>().ok();
        if ip.is_none() {
            let msg = self.messages.message(Check::Ip, message);
            self.append(key, msg);
        }
        ip
    }

    /// A hex triplet, `#rrggbb` or the short `#rgb`.
    pub fn hex_color(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<(u8, u8, u8)> {
        if value.is_empty() {
            return None;
        }
        let rgb = parse_hex_color(value);
        if rgb.is_none() {
            let msg = self.messages.message(Check::HexColor, message);
            self.append(key, msg);
        }
        rgb
    }

    /// Length in characters, between `min` and `max`. A `max` of 0 means no
    /// upper limit. Applies to empty values too.
    pub fn len(&mut self, key: &str, value: &str, min: usize, max: usize, message: Option<&str>) -> usize {
        let len = value.chars().count();
        if len < min {
            let msg = self.messages.message_with(Check::LenLonger, message, min);
            self.append(key, msg);
        } else if max > 0 && len > max {
            let msg = self.messages.message_with(Check::LenShorter, message, max);
            self.append(key, msg);
        }
        len
    }

    /// A whole number in base 10, surrounding whitespace allowed.
    pub fn integer(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<i64> {
        if value.is_empty() {
            return None;
        }
        let n = value.trim().parse::<i64>().ok();
        if n.is_none() {
            let msg = self.messages.message(Check::Integer, message);
            self.append(key, msg);
        }
        n
    }

    /// `1 y yes t true` or `0 n no f false`, in any case.
    pub fn boolean(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<bool> {
        if value.is_empty() {
            return None;
        }
        match value.to_lowercase().as_str() {
            "1" | "y" | "yes" | "t" | "true" => Some(true),
            "0" | "n" | "no" | "f" | "false" => Some(false),
            _ => {
                let msg = self.messages.message(Check::Boolean, message);
                self.append(key, msg);
                None
            }
        }
    }

    /// A date in the chrono `layout` (e.g. `%Y-%m-%d`). Layouts without a
    /// time yield midnight. An empty value fails.
    pub fn date(&mut self, key: &str, value: &str, layout: &str, message: Option<&str>) -> Option<NaiveDateTime> {
        let parsed = NaiveDateTime::parse_from_str(value, layout).ok().or_else(|| {
            NaiveDate::parse_from_str(value, layout)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        });
        if parsed.is_none() {
            let msg = self.messages.message_with(Check::Date, message, layout);
            self.append(key, msg);
        }
        parsed
    }

    /// 5 to 20 of `0-9 + - ( ) .` and space, which covers the usual national
    /// conventions without being strict about any of them.
    ///
    /// Returns the number without grouping characters (`- ( ) .` and space).
    pub fn phone(&mut self, key: &str, value: &str, message: Option<&str>) -> String {
        if value.is_empty() {
            return String::new();
        }
        if !PHONE_RE.is_match(value) {
            let msg = self.messages.message(Check::Phone, message);
            self.append(key, msg);
        }
        value
            .chars()
            .filter(|c| !matches!(c, '-' | '(' | ')' | ' ' | '.'))
            .collect()
    }

    /// `value` must be at least `min` and, unless `max` is 0, at most `max`.
    pub fn range(&mut self, key: &str, value: i64, min: i64, max: i64, message: Option<&str>) {
        if value < min {
            let msg = self.messages.message_with(Check::RangeHigher, message, min);
            self.append(key, msg);
        }
        if max > 0 && value > max {
            let msg = self.messages.message_with(Check::RangeLower, message, max);
            self.append(key, msg);
        }
    }
}

fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };
    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
