use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::constants::SALT_BYTES;

// =============================================================================
// Password Hashing
// =============================================================================

/// Generate a fresh random salt, hex-encoded
pub fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash a password with its salt
///
/// # Algorithm
/// `password_hash = SHA256(salt + password)`, hex-encoded
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a candidate password against a stored salt and hash
///
/// The digests are compared in constant time.
pub fn verify_password(salt: &str, password: &str, stored_hash: &str) -> bool {
    let computed = hash_password(salt, password);
    computed.as_bytes().ct_eq(stored_hash.as_bytes()).into()
}
