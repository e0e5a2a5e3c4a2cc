//! Canonical JSON encoding.
//!
//! The ledger hashes the exact bytes produced here, so this module owns the
//! serialization rule rather than trusting whatever `serde_json` emits:
//!
//! - object keys sorted ascending by Unicode code point
//! - strings escaped per RFC 8259 (`\"`, `\\`, `\b`, `\f`, `\n`, `\r`, `\t`,
//!   other control characters as `\u00XX`, lowercase hex)
//! - no trailing newline
//!
//! Two layouts are supported, see [`CanonicalEncoding`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CanonicalError;

/// Byte layout used when writing canonical JSON.
///
/// ```rust
/// use canonical::{canonical_json, CanonicalEncoding};
/// use serde_json::json;
///
/// let value = json!({ "b": "é", "a": "x" });
/// assert_eq!(canonical_json(&value, CanonicalEncoding::Compact), r#"{"a":"x","b":"é"}"#);
/// assert_eq!(
///     canonical_json(&value, CanonicalEncoding::Spaced),
///     r#"{"a": "x", "b": "\u00e9"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalEncoding {
    /// No whitespace, UTF-8 passthrough for non-ASCII text.
    #[default]
    Compact,
    /// `", "` between items and `": "` after keys, every non-ASCII code point
    /// escaped as `\uXXXX` (UTF-16 surrogate pairs above the BMP). Matches
    /// ledgers written by the original SkillChain tooling.
    Spaced,
}

impl CanonicalEncoding {
    fn item_separator(self) -> &'static str {
        match self {
            CanonicalEncoding::Compact => ",",
            CanonicalEncoding::Spaced => ", ",
        }
    }

    fn key_separator(self) -> &'static str {
        match self {
            CanonicalEncoding::Compact => ":",
            CanonicalEncoding::Spaced => ": ",
        }
    }

    fn ascii_only(self) -> bool {
        matches!(self, CanonicalEncoding::Spaced)
    }
}

/// Serialize any `Serialize` value into its canonical JSON string.
pub fn to_canonical_json<T>(value: &T, encoding: CanonicalEncoding) -> Result<String, CanonicalError>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value)?;
    Ok(canonical_json(&value, encoding))
}

/// Canonical JSON string for an already-built [`Value`]. Infallible.
pub fn canonical_json(value: &Value, encoding: CanonicalEncoding) -> String {
    let mut out = String::with_capacity(128);
    write_value(&mut out, value, encoding);
    out
}

fn write_value(out: &mut String, value: &Value, encoding: CanonicalEncoding) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_string(out, s, encoding.ascii_only()),
        Value::Array(items) => {
            out.push('[');
            for (idx, item) in items.iter().enumerate() {
                if idx > 0 {
                    out.push_str(encoding.item_separator());
                }
                write_value(out, item, encoding);
            }
            out.push(']');
        }
        Value::Object(map) => {
            // Sort explicitly: the map's own iteration order depends on
            // whether `preserve_order` got unified into serde_json.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (idx, (key, item)) in entries.into_iter().enumerate() {
                if idx > 0 {
                    out.push_str(encoding.item_separator());
                }
                write_string(out, key, encoding.ascii_only());
                out.push_str(encoding.key_separator());
                write_value(out, item, encoding);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str, ascii_only: bool) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => push_unicode_escape(out, c as u16),
            c if ascii_only && !(' '..='~').contains(&c) => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    push_unicode_escape(out, *unit);
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_unicode_escape(out: &mut String, unit: u16) {
    out.push_str(&format!("\\u{unit:04x}"));
}
