use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::AppError;

// Only the first 50 characters of a password are significant. The same
// truncation is applied when hashing and when verifying.
const SIGNIFICANT_CHARS: usize = 50;

fn significant(password: &str) -> &str {
    match password.char_indices().nth(SIGNIFICANT_CHARS) {
        Some((idx, _)) => &password[..idx],
        None => password,
    }
}

pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(significant(password).as_bytes(), &salt)
        .map(|digest| digest.to_string())
        .map_err(|err| AppError::Internal(format!("password hashing failed: {err}")))
}

pub fn verify(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };

    Argon2::default()
        .verify_password(significant(password).as_bytes(), &parsed)
        .is_ok()
}
