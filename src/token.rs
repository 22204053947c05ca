//! Opaque bearer tokens.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind every token.
pub const TOKEN_BYTES: usize = 64;

/// Length of the hex-encoded token.
pub const TOKEN_LEN: usize = TOKEN_BYTES * 2;

/// A bearer credential: 64 bytes from the OS CSPRNG, lowercase hex.
///
/// `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    /// Draw a new token from the operating system's random source.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Wrap a value read back from a store. No shape check is applied.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether `candidate` could have been produced by [`Token::generate`].
    pub fn is_well_formed(candidate: &str) -> bool {
        candidate.len() == TOKEN_LEN
            && candidate
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SAMPLES: usize = 10_000;

    #[test]
    fn generated_token_is_128_lowercase_hex() {
        let token = Token::generate();
        assert_eq!(token.as_str().len(), TOKEN_LEN);
        assert!(Token::is_well_formed(token.as_str()));
    }

    #[test]
    fn shape_check_rejects_other_inputs() {
        assert!(!Token::is_well_formed(""));
        assert!(!Token::is_well_formed("deadbeef"));
        assert!(!Token::is_well_formed(&"A".repeat(TOKEN_LEN)));
        assert!(!Token::is_well_formed(&"g".repeat(TOKEN_LEN)));
        assert!(!Token::is_well_formed(&"a".repeat(TOKEN_LEN + 1)));
        assert!(Token::is_well_formed(&"0".repeat(TOKEN_LEN)));
    }

    #[test]
    fn debug_is_redacted() {
        let token = Token::generate();
        let rendered = format!("{token:?}");
        assert!(!rendered.contains(token.as_str()));
    }

    #[test]
    fn tokens_never_repeat_across_samples() {
        let mut seen = HashSet::with_capacity(SAMPLES);
        for _ in 0..SAMPLES {
            let token = Token::generate();
            let (head, tail) = token.as_str().split_at(TOKEN_LEN / 2);
            assert_ne!(head, tail, "token repeats its own halves");
            assert!(seen.insert(token.into_string()), "duplicate token");
        }
    }

    #[test]
    fn byte_distribution_is_uniform() {
        let mut counts = [0u64; 256];
        for _ in 0..SAMPLES {
            let bytes = hex::decode(Token::generate().as_str()).unwrap();
            for b in bytes {
                counts[b as usize] += 1;
            }
        }

        // Chi-square over 255 degrees of freedom: mean 255, sd ~22.6.
        let total = (SAMPLES * TOKEN_BYTES) as f64;
        let expected = total / 256.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(chi_square < 400.0, "chi-square too high: {chi_square}");
        assert!(chi_square > 140.0, "chi-square suspiciously low: {chi_square}");
    }
}
