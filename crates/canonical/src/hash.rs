//! SHA-256 helpers for credential identity.
//!
//! # Hash Algorithm
//!
//! ```text
//! SHA-256(utf8(canonical_json(value, encoding))) -> lowercase hex (64 chars)
//! ```
//!
//! There is no version prefix or discriminator byte. The ledger stores the
//! plain digest so any tool that reproduces the canonical bytes can recompute
//! and compare it.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{hash_canonical, hash_text, CanonicalEncoding};
//! use serde_json::json;
//!
//! let hash = hash_text("hello world");
//! assert_eq!(hash.len(), 64);
//!
//! // Key order in the input does not matter.
//! let a = hash_canonical(&json!({ "x": "1", "y": "2" }), CanonicalEncoding::Compact).unwrap();
//! let b = hash_canonical(&json!({ "y": "2", "x": "1" }), CanonicalEncoding::Compact).unwrap();
//! assert_eq!(a, b);
//! ```

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::encoding::to_canonical_json;
use crate::{CanonicalEncoding, CanonicalError};

/// SHA-256 of raw bytes, lowercase hex.
pub fn hash_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Hash arbitrary text with SHA-256 and return a hex digest.
///
/// The text is hashed as-is. Use [`hash_canonical`] when the input is a
/// structured value whose key order must not affect the result.
pub fn hash_text(text: &str) -> String {
    hash_bytes(text.as_bytes())
}

/// Canonicalize `value` with `encoding`, then hash the resulting bytes.
///
/// # Errors
///
/// [`CanonicalError::Serialize`] if `value` cannot be turned into JSON.
pub fn hash_canonical<T>(value: &T, encoding: CanonicalEncoding) -> Result<String, CanonicalError>
where
    T: Serialize + ?Sized,
{
    let encoded = to_canonical_json(value, encoding)?;
    Ok(hash_text(&encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_vectors() {
        assert_eq!(
            hash_text(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hash_text("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_is_lowercase_hex() {
        let digest = hash_bytes(b"SkillChain");
        assert_eq!(digest.len(), 64);
        assert!(digest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn single_field_change_changes_hash() {
        let base = json!({ "employee_id": "EMP001", "course_id": "C001" });
        let changed = json!({ "employee_id": "EMP002", "course_id": "C001" });
        assert_ne!(
            hash_canonical(&base, CanonicalEncoding::Compact).unwrap(),
            hash_canonical(&changed, CanonicalEncoding::Compact).unwrap()
        );
    }

    #[test]
    fn hash_canonical_is_sha_of_compact_bytes() {
        let value = json!({ "b": "2", "a": "1" });
        assert_eq!(
            hash_canonical(&value, CanonicalEncoding::Compact).unwrap(),
            hash_text(r#"{"a":"1","b":"2"}"#)
        );
        assert_eq!(
            hash_canonical(&value, CanonicalEncoding::Spaced).unwrap(),
            hash_text(r#"{"a": "1", "b": "2"}"#)
        );
    }
}
