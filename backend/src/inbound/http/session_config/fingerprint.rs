//! Session key fingerprint.
//!
//! Logged at startup so operators can tell which cookie key a replica is
//! running with. Only a truncated digest of the signing half is exposed.

use actix_web::cookie::Key;
use sha2::{Digest, Sha256};

const FINGERPRINT_BYTES: usize = 8;

/// Lowercase hex of the first eight bytes of `SHA-256(key.signing())`.
///
/// # Examples
///
/// ```rust
/// use actix_web::cookie::Key;
/// use autoparts::inbound::http::session_config::fingerprint::key_fingerprint;
///
/// let fingerprint = key_fingerprint(&Key::generate());
/// assert_eq!(fingerprint.len(), 16);
/// ```
#[must_use]
pub fn key_fingerprint(key: &Key) -> String {
    let digest = Sha256::digest(key.signing());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn same_material_gives_same_fingerprint() {
        let material = [b'p'; 64];
        assert_eq!(
            key_fingerprint(&Key::derive_from(&material)),
            key_fingerprint(&Key::derive_from(&material))
        );
    }

    #[rstest]
    fn distinct_material_gives_distinct_fingerprints() {
        assert_ne!(
            key_fingerprint(&Key::derive_from(&[b'p'; 64])),
            key_fingerprint(&Key::derive_from(&[b'q'; 64]))
        );
    }

    #[rstest]
    fn fingerprint_is_short_lowercase_hex() {
        let fingerprint = key_fingerprint(&Key::generate());
        assert_eq!(fingerprint.len(), FINGERPRINT_BYTES * 2);
        assert!(
            fingerprint
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }
}
