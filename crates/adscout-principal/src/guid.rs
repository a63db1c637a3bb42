//! objectGUID decoding
//!
//! Active Directory stores objectGUID as 16 raw bytes with the first three
//! fields little-endian (the Windows GUID memory layout, not RFC 4122 order).

use uuid::Uuid;

use crate::error::PrincipalError;

/// Decode a 16-byte objectGUID value into its canonical hyphenated text form.
///
/// The rendering matches how Windows tooling prints the same GUID, so
/// identifiers derived here line up with values copied out of AD consoles.
pub fn guid_string(bytes: &[u8]) -> Result<String, PrincipalError> {
    let raw: [u8; 16] = bytes
        .try_into()
        .map_err(|_| PrincipalError::InvalidGuidLength {
            actual: bytes.len(),
        })?;
    Ok(Uuid::from_bytes_le(raw).hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guid_string_mixed_endian() {
        let bytes = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
            0x0F, 0x10,
        ];
        // First three fields are little-endian in the wire layout
        assert_eq!(
            guid_string(&bytes).unwrap(),
            "04030201-0605-0807-090a-0b0c0d0e0f10"
        );
    }

    #[test]
    fn test_guid_string_all_zero() {
        assert_eq!(
            guid_string(&[0u8; 16]).unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_guid_string_wrong_length() {
        assert_eq!(
            guid_string(&[0u8; 15]).unwrap_err(),
            PrincipalError::InvalidGuidLength { actual: 15 }
        );
        assert_eq!(
            guid_string(&[0u8; 17]).unwrap_err(),
            PrincipalError::InvalidGuidLength { actual: 17 }
        );
        assert!(guid_string(&[]).is_err());
    }
}
