//! SkillChain canonical layer.
//!
//! Two small jobs live here because both need to be byte-for-byte stable:
//!
//! - Splitting free-text skill lists (`"Python, SQL; Tableau"`) into
//!   lowercase tokens that the gap extractor compares.
//! - Turning a JSON-shaped value into one canonical byte string and hashing
//!   it with SHA-256, which is how credential records get their identity.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale. Same input and same
//! [`CanonicalEncoding`] give the same bytes on any machine.
//!
//! ## Invariants worth knowing
//!
//! - Object keys are always emitted sorted by Unicode code point, whatever
//!   order the caller built them in and whatever `serde_json` features the
//!   final binary ends up with.
//! - Hash = lowercase hex of SHA-256(UTF-8 canonical JSON), 64 characters.
//! - The tokenizer never fails; malformed text degrades to fewer tokens.

mod encoding;
mod error;
mod hash;
mod token;

pub use crate::encoding::{canonical_json, to_canonical_json, CanonicalEncoding};
pub use crate::error::CanonicalError;
pub use crate::hash::{hash_bytes, hash_canonical, hash_text};
pub use crate::token::{dedup_tokens, tokenize};
