use tracing::{instrument, warn};

use crate::shared::AppError;

/// bcrypt only reads this many bytes of input
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted adaptive password hashing (bcrypt)
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes the first 72 bytes of `password` with a fresh salt
    #[instrument(skip_all, fields(cost = self.cost))]
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(truncate_password(password), self.cost).map_err(|e| {
            warn!(error = %e, "Failed to hash password");
            AppError::Internal
        })
    }

    /// Checks `password` against a stored digest. Malformed digests never match.
    #[instrument(skip_all)]
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        match bcrypt::verify(truncate_password(password), digest) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "Stored password digest could not be verified");
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

/// Cuts `password` to at most 72 bytes without splitting a UTF-8 character.
/// A character straddling the limit is dropped whole.
pub fn truncate_password(password: &str) -> &str {
    if password.len() <= MAX_PASSWORD_BYTES {
        return password;
    }

    let mut end = MAX_PASSWORD_BYTES;
    while !password.is_char_boundary(end) {
        end -= 1;
    }
    &password[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_verify_accepts_original_password() {
        let hasher = hasher();
        let digest = hasher.hash("secret123").unwrap();

        assert!(digest.starts_with("$2"));
        assert!(hasher.verify("secret123", &digest));
    }

    #[test]
    fn test_verify_rejects_other_password() {
        let hasher = hasher();
        let digest = hasher.hash("secret123").unwrap();

        assert!(!hasher.verify("wrong", &digest));
        assert!(!hasher.verify("", &digest));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = hasher();
        let first = hasher.hash("secret123").unwrap();
        let second = hasher.hash("secret123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("secret123", &first));
        assert!(hasher.verify("secret123", &second));
    }

    #[test]
    fn test_malformed_digest_fails_verification() {
        let hasher = hasher();

        assert!(!hasher.verify("secret123", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("secret123", ""));
    }

    #[test]
    fn test_long_password_equivalent_to_first_72_bytes() {
        let hasher = hasher();
        let prefix = "a".repeat(MAX_PASSWORD_BYTES);
        let long = format!("{}{}", prefix, "tail-that-is-ignored");

        let digest = hasher.hash(&long).unwrap();
        assert!(hasher.verify(&prefix, &digest));
        assert!(hasher.verify(&format!("{}other-tail", prefix), &digest));

        let prefix_digest = hasher.hash(&prefix).unwrap();
        assert!(hasher.verify(&long, &prefix_digest));
    }

    #[rstest]
    #[case("short", "short")]
    #[case(&"x".repeat(72), &"x".repeat(72))]
    #[case(&"x".repeat(80), &"x".repeat(72))]
    // 71 ASCII bytes + a 2-byte char straddling the limit: the char is dropped
    #[case(&format!("{}é", "x".repeat(71)), &"x".repeat(71))]
    // 70 ASCII bytes + a 2-byte char ending exactly at the limit: kept
    #[case(&format!("{}éz", "x".repeat(70)), &format!("{}é", "x".repeat(70)))]
    fn test_truncate_password(#[case] input: &str, #[case] expected: &str) {
        let truncated = truncate_password(input);
        assert_eq!(truncated, expected);
        assert!(truncated.len() <= MAX_PASSWORD_BYTES);
    }
}
