use super::local::{is_dot_atom, is_local_part, is_phrase, unquote};
use super::types::EmailAddress;

/// Parse `addr-spec`, `Name <addr-spec>` or `"Quoted Name" <addr-spec>`.
///
/// The domain part is a dot-atom; unlike the domain check it may consist of
/// a single label (`root@localhost`).
pub(crate) fn parse_address(input: &str) -> Option<EmailAddress> {
    let input = input.trim();

    if let Some(rest) = input.strip_suffix('>') {
        let open = rest.rfind('<')?;
        let address = parse_addr_spec(&rest[open + 1..])?;
        let name = parse_display_name(rest[..open].trim())?;
        return Some(EmailAddress { name, address });
    }

    Some(EmailAddress {
        name: None,
        address: parse_addr_spec(input)?,
    })
}

fn parse_addr_spec(s: &str) -> Option<String> {
    let (local, domain) = s.rsplit_once('@')?;
    if !is_local_part(local) || !is_dot_atom(domain) {
        return None;
    }
    Some(format!("{local}@{domain}"))
}

/// `Some(None)` when there is no name, `None` when it is malformed.
fn parse_display_name(s: &str) -> Option<Option<String>> {
    if s.is_empty() {
        return Some(None);
    }
    if s.starts_with('"') {
        return unquote(s).map(Some);
    }
    if is_phrase(s) {
        return Some(Some(s.split_whitespace().collect::<Vec<_>>().join(" ")));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_address() {
        let addr = parse_address("alice@example.com").unwrap();
        assert_eq!(addr.address, "alice@example.com");
        assert_eq!(addr.name, None);
    }

    #[test]
    fn named_address() {
        let addr = parse_address("Alice  Liddell <alice@example.com>").unwrap();
        assert_eq!(addr.name.as_deref(), Some("Alice Liddell"));
        assert_eq!(addr.address, "alice@example.com");

        let addr = parse_address("\"Liddell, Alice\" <alice@example.com>").unwrap();
        assert_eq!(addr.name.as_deref(), Some("Liddell, Alice"));

        let addr = parse_address("<alice@example.com>").unwrap();
        assert_eq!(addr.name, None);
    }

    #[test]
    fn single_label_domain_allowed() {
        assert!(parse_address("root@localhost").is_some());
    }

    #[test]
    fn quoted_local_with_at() {
        let addr = parse_address("\"a@b\"@example.com").unwrap();
        assert_eq!(addr.address, "\"a@b\"@example.com");
    }

    #[test]
    fn rejects_malformed() {
        for input in [
            "",
            "alice",
            "alice@",
            "@example.com",
            "a@@b",
            "alice@exa mple.com",
            "alice@.example.com",
            "Liddell, Alice <alice@example.com>",
            "Alice <alice@example.com",
        ] {
            assert!(parse_address(input).is_none(), "{input:?}");
        }
    }
}
