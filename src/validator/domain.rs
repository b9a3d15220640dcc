use url::Url;

use super::Validator;
use crate::domain::valid_domain;
use crate::messages::Check;

impl Validator {
    /// Validate a domain name and return its labels.
    ///
    /// At least two labels are required, so `example.com` and `me.localhost`
    /// pass while `localhost` does not. Internationalized names work as UTF-8
    /// or as punycode; `xn--` labels are returned decoded.
    pub fn domain(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<Vec<String>> {
        if value.is_empty() {
            return None;
        }

        let labels = valid_domain(value);
        if labels.is_none() {
            let msg = self.messages.message(Check::Domain, message);
            self.append(key, msg);
        }
        labels
    }

    /// Validate a URL; only the host is required.
    ///
    /// `http` is assumed when no scheme is given. The host as written in the
    /// input, without userinfo and port, must pass the [`domain`](Self::domain)
    /// rules.
    pub fn url(&mut self, key: &str, value: &str, message: Option<&str>) -> Option<Url> {
        if value.is_empty() {
            return None;
        }
        let msg = self.messages.message(Check::Url, message);

        let input = match Url::parse(value) {
            Err(url::ParseError::RelativeUrlWithoutBase) => format!("http://{value}"),
            _ => value.to_string(),
        };
        let url = match Url::parse(&input) {
            Ok(url) => url,
            Err(err) => {
                self.append(key, format!("{msg}: {err}"));
                return None;
            }
        };

        let host = url.host_str().and_then(|_| raw_host(&input));
        match host {
            Some(host) if valid_domain(host).is_some() => Some(url),
            _ => {
                self.append(key, msg);
                None
            }
        }
    }
}

/// The host as written: the authority after `//`, up to the first `/`, `?`,
/// `#` or backslash, without userinfo and port.
fn raw_host(input: &str) -> Option<&str> {
    let (_, rest) = input.split_once("//")?;
    let end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    if host.starts_with('[') {
        return Some(host);
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.chars().all(|c| c.is_ascii_digit()) => Some(name),
        _ => Some(host),
    }
}
