///
/// Token text codec.
///
/// Hex text form for continuation tokens handed to clients. Encoding and
/// decoding only; token payload semantics live in `continuation`.
///

// Decode bound for untrusted token input, in hex characters.
pub(crate) const MAX_TOKEN_HEX_LEN: usize = 8 * 1024;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

///
/// TokenDecodeError
///

#[derive(Debug, Eq, thiserror::Error, PartialEq)]
pub enum TokenDecodeError {
    #[error("continuation token is empty")]
    Empty,

    #[error("continuation token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("continuation token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },
}

/// Encode raw token bytes as lowercase hex.
#[must_use]
pub fn encode_token(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    out
}

/// Decode a hex token into raw bytes.
///
/// Accepts either nibble case and trims surrounding whitespace; reported
/// positions are 1-based over the trimmed token.
pub fn decode_token(token: &str) -> Result<Vec<u8>, TokenDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(TokenDecodeError::Empty);
    }
    if token.len() > MAX_TOKEN_HEX_LEN {
        return Err(TokenDecodeError::TooLong {
            len: token.len(),
            max: MAX_TOKEN_HEX_LEN,
        });
    }
    if !token.len().is_multiple_of(2) {
        return Err(TokenDecodeError::OddLength);
    }

    token
        .as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(pair, digits)| {
            let hi = hex_nibble(digits[0]).ok_or(TokenDecodeError::InvalidHex {
                position: pair * 2 + 1,
            })?;
            let lo = hex_nibble(digits[1]).ok_or(TokenDecodeError::InvalidHex {
                position: pair * 2 + 2,
            })?;

            Ok((hi << 4) | lo)
        })
        .collect()
}

const fn hex_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{MAX_TOKEN_HEX_LEN, TokenDecodeError, decode_token, encode_token};

    #[test]
    fn decode_token_rejects_blank_input() {
        let err = decode_token("").expect_err("empty token should be rejected");
        assert_eq!(err, TokenDecodeError::Empty);

        let err = decode_token(" \t\n ").expect_err("whitespace-only token should be rejected");
        assert_eq!(err, TokenDecodeError::Empty);
    }

    #[test]
    fn decode_token_rejects_odd_digit_counts() {
        let err = decode_token("a1b").expect_err("odd-length token should be rejected");
        assert_eq!(err, TokenDecodeError::OddLength);
    }

    #[test]
    fn decode_token_enforces_the_length_bound() {
        let at_bound = "7e".repeat(MAX_TOKEN_HEX_LEN / 2);
        let bytes = decode_token(&at_bound).expect("token at the bound should decode");
        assert_eq!(bytes.len(), MAX_TOKEN_HEX_LEN / 2);

        let over = format!("{at_bound}7e");
        let err = decode_token(&over).expect_err("token past the bound should be rejected");
        assert_eq!(
            err,
            TokenDecodeError::TooLong {
                len: MAX_TOKEN_HEX_LEN + 2,
                max: MAX_TOKEN_HEX_LEN,
            }
        );
    }

    #[test]
    fn decode_token_points_at_the_bad_digit() {
        let err = decode_token("abqq").expect_err("non-hex digit should be rejected");
        assert_eq!(err, TokenDecodeError::InvalidHex { position: 3 });

        let err = decode_token("0x").expect_err("non-hex digit should be rejected");
        assert_eq!(err, TokenDecodeError::InvalidHex { position: 2 });
    }

    #[test]
    fn decode_token_accepts_either_case_and_padding() {
        let bytes = decode_token(" 1C2d3E ").expect("mixed-case padded token should decode");
        assert_eq!(bytes, vec![0x1c, 0x2d, 0x3e]);
    }

    #[test]
    fn encode_token_is_lowercase_and_round_trips() {
        let raw = vec![0xde, 0xad, 0x00, 0x42];
        let hex = encode_token(&raw);
        assert_eq!(hex, "dead0042");
        assert_eq!(
            decode_token(&hex).expect("encoded token should decode"),
            raw
        );
    }
}
