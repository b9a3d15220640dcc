//! Punycode decoding (RFC 3492).
//!
//! The input is the part of an A-label that follows the `xn--` prefix. The
//! decoder is a direct rendition of the generalized variable-length integer
//! scheme from RFC 3492 section 6.2, with every arithmetic step checked.

use thiserror::Error;

const BASE: u32 = 36;
const T_MIN: u32 = 1;
const T_MAX: u32 = 26;
const SKEW: u32 = 38;
const DAMP: u32 = 700;
const INITIAL_BIAS: u32 = 72;
const INITIAL_N: u32 = 0x80;
const DELIMITER: char = '-';

/// Reasons a Punycode string cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid punycode digit '{0}'")]
    InvalidDigit(char),
    #[error("non-ASCII character '{0}' before the last delimiter")]
    NonAsciiBasic(char),
    #[error("input ends inside a variable-length integer")]
    Truncated,
    #[error("arithmetic overflow while decoding")]
    Overflow,
    #[error("decoded value {0:#x} is not a Unicode scalar value")]
    InvalidCodePoint(u32),
}

/// Decode a Punycode string into Unicode.
///
/// Everything before the last `-` is copied verbatim and must be ASCII; the
/// rest is the encoded sequence of insertions. An empty input decodes to an
/// empty string.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    let (basic, encoded) = match input.rfind(DELIMITER) {
        Some(pos) => (&input[..pos], &input[pos + 1..]),
        None => ("", input),
    };

    if let Some(ch) = basic.chars().find(|c| !c.is_ascii()) {
        return Err(DecodeError::NonAsciiBasic(ch));
    }
    let mut output: Vec<char> = basic.chars().collect();

    let mut n = INITIAL_N;
    let mut i: u32 = 0;
    let mut bias = INITIAL_BIAS;
    let mut first = true;
    let mut digits = encoded.chars().peekable();

    while digits.peek().is_some() {
        let old_i = i;
        let mut w: u32 = 1;
        let mut k = BASE;
        loop {
            let ch = digits.next().ok_or(DecodeError::Truncated)?;
            let digit = digit_value(ch).ok_or(DecodeError::InvalidDigit(ch))?;
            i = digit
                .checked_mul(w)
                .and_then(|d| i.checked_add(d))
                .ok_or(DecodeError::Overflow)?;

            let t = threshold(k, bias);
            if digit < t {
                break;
            }
            w = w.checked_mul(BASE - t).ok_or(DecodeError::Overflow)?;
            k = k.checked_add(BASE).ok_or(DecodeError::Overflow)?;
        }

        let len = u32::try_from(output.len() + 1).map_err(|_| DecodeError::Overflow)?;
        bias = adapt(i - old_i, len, first);
        first = false;

        n = n.checked_add(i / len).ok_or(DecodeError::Overflow)?;
        i %= len;
        let ch = char::from_u32(n).ok_or(DecodeError::InvalidCodePoint(n))?;
        output.insert(i as usize, ch);
        i += 1;
    }

    Ok(output.into_iter().collect())
}

/// `0-9` map to 26..=35, letters of either case to 0..=25.
fn digit_value(ch: char) -> Option<u32> {
    match ch {
        'a'..='z' => Some(ch as u32 - 'a' as u32),
        'A'..='Z' => Some(ch as u32 - 'A' as u32),
        '0'..='9' => Some(ch as u32 - '0' as u32 + 26),
        _ => None,
    }
}

fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}

/// Bias adaptation, RFC 3492 section 6.1.
fn adapt(delta: u32, num_points: u32, first_time: bool) -> u32 {
    let mut delta = if first_time { delta / DAMP } else { delta / 2 };
    delta += delta / num_points;

    let mut k = 0;
    while delta > ((BASE - T_MIN) * T_MAX) / 2 {
        delta /= BASE - T_MIN;
        k += BASE;
    }
    k + ((BASE - T_MIN + 1) * delta) / (delta + SKEW)
}
