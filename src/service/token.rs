//! Password generation for issued credentials.
//!
//! A password candidate is 17 lowercase letters followed by 5 digits, drawn from a single
//! ChaCha-based generator seeded once from the operating system. The candidate is hashed
//! with SHA-256 and the hex digest is what members receive, giving a fixed 64-character
//! lowercase hexadecimal secret.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};
use std::sync::{Arc, Mutex};

/// Number of lowercase letters in a password candidate.
const LETTER_COUNT: usize = 17;
/// Number of digits appended after the letters.
const DIGIT_COUNT: usize = 5;

/// Length of the hex-encoded SHA-256 digest handed out as the secret.
pub const SECRET_LENGTH: usize = 64;

/// Generator for credential secrets.
///
/// Clones share the same random source so the whole process draws from one stream.
#[derive(Clone)]
pub struct TokenGenerator {
    rng: Arc<Mutex<StdRng>>,
}

impl TokenGenerator {
    /// Creates a generator seeded from the operating system's entropy source.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed, producing a reproducible stream.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Generates a new secret.
    ///
    /// # Returns
    /// - `String` - SHA-256 hex digest of a fresh 17-letter, 5-digit candidate
    pub fn generate(&self) -> String {
        let candidate = self.generate_candidate();
        hex::encode(Sha256::digest(candidate.as_bytes()))
    }

    /// Generates the raw candidate before hashing.
    pub(crate) fn generate_candidate(&self) -> String {
        // A panic while holding the lock cannot leave the generator in an invalid state.
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut candidate = String::with_capacity(LETTER_COUNT + DIGIT_COUNT);
        for _ in 0..LETTER_COUNT {
            candidate.push(rng.random_range(b'a'..=b'z') as char);
        }
        for _ in 0..DIGIT_COUNT {
            candidate.push(rng.random_range(b'0'..=b'9') as char);
        }

        candidate
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Tests the shape of generated secrets.
    ///
    /// Expected: exactly 64 lowercase hexadecimal characters
    #[test]
    fn secret_is_64_lowercase_hex() {
        let generator = TokenGenerator::new();

        for _ in 0..100 {
            let secret = generator.generate();
            assert_eq!(secret.len(), SECRET_LENGTH);
            assert!(secret
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }
    }

    /// Tests the shape of the pre-hash candidate.
    ///
    /// Expected: 17 lowercase letters followed by 5 digits
    #[test]
    fn candidate_is_letters_then_digits() {
        let generator = TokenGenerator::new();
        let candidate = generator.generate_candidate();

        assert_eq!(candidate.len(), LETTER_COUNT + DIGIT_COUNT);
        let (letters, digits) = candidate.split_at(LETTER_COUNT);
        assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    /// Tests that the secret is the SHA-256 digest of the candidate.
    ///
    /// Uses two generators with the same seed so the second can reproduce the candidate
    /// the first one hashed.
    ///
    /// Expected: hex digest of the candidate matches the secret
    #[test]
    fn secret_is_sha256_of_candidate() {
        let hashed = TokenGenerator::from_seed(7);
        let raw = TokenGenerator::from_seed(7);

        let secret = hashed.generate();
        let candidate = raw.generate_candidate();

        assert_eq!(secret, hex::encode(Sha256::digest(candidate.as_bytes())));
    }

    /// Tests that rapid generation does not repeat secrets.
    ///
    /// Expected: 10,000 secrets with no duplicates
    #[test]
    fn ten_thousand_secrets_are_unique() {
        let generator = TokenGenerator::new();
        let secrets: HashSet<String> = (0..10_000).map(|_| generator.generate()).collect();

        assert_eq!(secrets.len(), 10_000);
    }

    /// Tests that clones draw from the shared stream rather than duplicating it.
    ///
    /// Expected: a clone does not replay the next secret of the handle it was cloned from
    #[test]
    fn clones_share_one_stream() {
        let generator = TokenGenerator::from_seed(42);
        let clone = generator.clone();

        assert_ne!(generator.generate(), clone.generate());
    }
}
