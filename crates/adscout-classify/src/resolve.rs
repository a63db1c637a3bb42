//! Identifier resolution
//!
//! Produces the canonical stable identifier for a directory record: the
//! decoded security identifier when the record has one, otherwise the
//! decoded objectGUID. Absence is a normal outcome, never a fault.

use tracing::debug;

use adscout_principal::{guid_string, Sid};

use crate::source::AttributeSource;

/// Attribute holding the binary security identifier.
pub const ATTR_OBJECT_SID: &str = "objectSid";
/// Attribute holding the 16-byte globally unique identifier.
pub const ATTR_OBJECT_GUID: &str = "objectGUID";

/// Resolve the record's security identifier to its canonical string form.
///
/// objectSid can arrive either as raw bytes or as text carrying the same
/// bytes one-per-character; both decode through the same parser and yield
/// identical strings for equivalent inputs. Returns `None` when the
/// attribute is missing or the value does not decode.
pub fn security_identifier<S: AttributeSource + ?Sized>(entry: &S) -> Option<String> {
    if !entry.has(ATTR_OBJECT_SID) {
        return None;
    }

    if let Some(bytes) = entry.first_as_bytes(ATTR_OBJECT_SID) {
        return decode_sid(bytes);
    }

    let text = entry.first_as_string(ATTR_OBJECT_SID)?;
    decode_sid(&ordinal_bytes(&text))
}

/// Resolve the canonical stable identifier for a record.
///
/// A present objectSid always decides the outcome, even when it fails to
/// decode; the objectGUID branch is consulted only when objectSid is absent
/// and requires a byte-shaped 16-byte value.
pub fn object_identifier<S: AttributeSource + ?Sized>(entry: &S) -> Option<String> {
    if entry.has(ATTR_OBJECT_SID) {
        return security_identifier(entry);
    }

    let bytes = entry.first_as_bytes(ATTR_OBJECT_GUID)?;
    match guid_string(bytes) {
        Ok(guid) => Some(guid),
        Err(error) => {
            debug!(%error, "undecodable objectGUID value");
            None
        }
    }
}

fn decode_sid(bytes: &[u8]) -> Option<String> {
    match Sid::parse(bytes) {
        Ok(sid) => Some(sid.to_string()),
        Err(error) => {
            debug!(%error, "undecodable objectSid value");
            None
        }
    }
}

/// Reinterpret text as one byte per character ordinal, matching how the
/// directory round-trips binary values through text fields. Ordinals above
/// 255 collapse to `?`.
fn ordinal_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
