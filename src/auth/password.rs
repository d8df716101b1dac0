//! Password hashing (Argon2, PHC string format)

/// Hash a plaintext password with a fresh random salt.
///
/// Output is a self-describing PHC string; hashing the same password
/// twice yields different strings, both of which verify.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    use argon2::password_hash::SaltString;
    use argon2::password_hash::rand_core::OsRng;
    use argon2::{Argon2, PasswordHasher};
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC hash.
///
/// A malformed stored hash is a verification failure, never a panic.
/// Comparison inside the argon2 crate is constant-time.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::{Argon2, PasswordHash, PasswordVerifier};
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("s3cret").expect("hashing failed");
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn test_salted_hashes_differ() {
        let h1 = hash_password("same-password").expect("hashing failed");
        let h2 = hash_password("same-password").expect("hashing failed");
        assert_ne!(h1, h2);
        assert!(verify_password("same-password", &h1));
        assert!(verify_password("same-password", &h2));
    }

    #[test]
    fn test_malformed_hash_fails_verification() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }
}
