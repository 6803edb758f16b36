//! Password hashing and verification
//!
//! Digests are SHA-256 over the UTF-8 bytes of the password, encoded as
//! standard padded base64. There is no per-user salt, so equal passwords
//! produce equal digests; stored digests depend on this format.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256};

/// Hash a password
pub fn hash_password(password: &str) -> String {
    STANDARD.encode(Sha256::digest(password.as_bytes()))
}

/// Verify a password against its stored digest
pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}
