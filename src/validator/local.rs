/// dot-atom: atext plus '.', no leading or trailing dot, no ".."
pub(crate) fn is_dot_atom(s: &str) -> bool {
    if s.is_empty() || s.starts_with('.') || s.ends_with('.') || s.contains("..") {
        return false;
    }
    s.chars().all(|c| c == '.' || is_atext(c))
}

/// RFC 5322 atext; non-ASCII alphanumerics are accepted too.
pub(crate) fn is_atext(c: char) -> bool {
    c.is_alphanumeric()
        || matches!(
            c,
            '!' | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// quoted-string: `"..."` with `\x` escapes, no bare '"' and no control
/// characters. Returns the unescaped content.
pub(crate) fn unquote(s: &str) -> Option<String> {
    let inner = s.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push(chars.next()?),
            '"' => return None,
            c if c.is_control() && c != '\t' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}

/// local-part: dot-atom or quoted-string.
pub(crate) fn is_local_part(s: &str) -> bool {
    is_dot_atom(s) || (s.len() >= 2 && unquote(s).is_some())
}

/// Unquoted display-name phrase: atext words separated by whitespace.
pub(crate) fn is_phrase(s: &str) -> bool {
    !s.is_empty()
        && s.split_whitespace()
            .all(|word| word.chars().all(|c| c == '.' || is_atext(c)))
}
