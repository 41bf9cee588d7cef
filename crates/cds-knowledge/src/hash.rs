//! Content digest used to salt image classification.
//!
//! The digest is not a security boundary; it only has to be collision
//! resistant enough to spread inputs and stable across processes.

use sha2::Digest;

/// 128-bit content digest: the first 16 bytes of SHA-256, read big-endian.
pub fn content_digest(bytes: &[u8]) -> u128 {
    let digest = sha2::Sha256::digest(bytes);
    let mut head = [0u8; 16];
    head.copy_from_slice(&digest[..16]);
    u128::from_be_bytes(head)
}

/// Hex form of the full SHA-256 digest, for audit logging.
pub fn content_digest_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_answers() {
        // First 16 bytes of sha256("hello") and sha256("").
        assert_eq!(content_digest(b"hello"), 0x2cf24dba5fb0a30e26e83b2ac5b9e29e);
        assert_eq!(content_digest(b""), 0xe3b0c44298fc1c149afbf4c8996fb924);
    }

    #[test]
    fn test_digest_is_stable_across_calls() {
        let bytes = b"xray-image-bytes";
        assert_eq!(content_digest(bytes), content_digest(bytes));
        assert_eq!(content_digest(bytes) % 100, 73);
        assert_eq!(content_digest(bytes) % 1400, 773);
    }

    #[test]
    fn test_hex_digest_matches_sha256() {
        assert_eq!(
            content_digest_hex(b"hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }
}
