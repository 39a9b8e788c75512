use std::{num::ParseIntError, str::FromStr};

use derive_more::{Display, From, Into};
use snafu::{ResultExt, Snafu, ensure};

/// Width of a rendered digest in hexadecimal characters.
pub const DIGEST_WIDTH: usize = 8;

/// A 32-bit checksum, rendered as 8 lowercase zero-padded hex characters.
///
/// [`Digest::SENTINEL`] marks a file whose content could not be read. A real
/// file may also hash to zero; the two cases are indistinguishable in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0:08x}")]
pub struct Digest(u32);

impl Digest {
    pub const SENTINEL: Digest = Digest(0);

    pub const fn new(value: u32) -> Self {
        Digest(value)
    }

    /// Hashes an in-memory byte slice.
    #[cfg(test)]
    pub fn of(bytes: &[u8]) -> Self {
        let mut hasher = crate::checksum::Fnv32::new();
        hasher.update(bytes);
        hasher.digest()
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        ensure!(
            text.len() == DIGEST_WIDTH && text.bytes().all(|b| b.is_ascii_hexdigit()),
            MalformedSnafu { text }
        );
        let value = u32::from_str_radix(text, 16).context(RadixSnafu { text })?;
        Ok(Digest(value))
    }
}

#[derive(Debug, Snafu)]
pub enum DigestParseError {
    #[snafu(display("'{}' is not an {}-character hex digest", text, DIGEST_WIDTH))]
    MalformedError { text: String },
    #[snafu(display("'{}' is not a valid hex number", text))]
    RadixError {
        text: String,
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn sentinel_renders_as_zeroes() {
        assert_eq!(Digest::SENTINEL.to_string(), "00000000");
    }

    #[rstest]
    #[case(0x1, "00000001")]
    #[case(0xabc, "00000abc")]
    #[case(0x811c9dc5, "811c9dc5")]
    #[case(u32::MAX, "ffffffff")]
    fn display_is_zero_padded_lowercase(#[case] value: u32, #[case] expected: &str) {
        assert_eq!(Digest::new(value).to_string(), expected);
    }

    #[test]
    fn parses_rendered_digest() {
        let digest: Digest = "6977223c".parse().unwrap();
        assert_eq!(digest, Digest::of(b"hi"));
        assert_eq!(u32::from(digest), 0x6977223c);
    }

    #[test]
    fn parse_accepts_uppercase_hex() {
        let digest: Digest = "6977223C".parse().unwrap();
        assert_eq!(u32::from(digest), 0x6977223c);
    }

    #[rstest]
    #[case("")]
    #[case("1234567")]
    #[case("123456789")]
    #[case("+1234567")]
    #[case("xyz01234")]
    fn parse_rejects_malformed_text(#[case] text: &str) {
        let result = text.parse::<Digest>();
        assert!(matches!(result, Err(DigestParseError::MalformedError { .. })));
    }
}
