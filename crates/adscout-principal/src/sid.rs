//! Binary security identifier decoding
//!
//! Decodes the Windows binary SID layout into a structured value and renders
//! the canonical dash-delimited string form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PrincipalError;

/// Maximum number of sub-authorities a SID may carry (SID_MAX_SUB_AUTHORITIES).
const MAX_SUB_AUTHORITIES: u8 = 15;

/// Fixed-size prefix: revision, sub-authority count, 6-byte authority.
const HEADER_LEN: usize = 8;

/// A decoded security identifier.
///
/// Binary layout per MS-DTYP 2.4.2.2:
/// - revision: 1 byte
/// - sub-authority count: 1 byte (0..=15)
/// - identifier authority: 6 bytes, big-endian
/// - sub-authorities: count x 4 bytes, little-endian
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sid {
    /// Revision level (1 for every SID issued to date).
    pub revision: u8,
    /// Identifier authority (48-bit value).
    pub identifier_authority: u64,
    /// Sub-authority values, in encoded order.
    pub sub_authorities: Vec<u32>,
}

impl Sid {
    /// Decode a SID from its binary encoding.
    ///
    /// Trailing bytes beyond the declared structure are ignored, matching the
    /// behavior of directory servers that hand back SIDs embedded in larger
    /// buffers.
    pub fn parse(bytes: &[u8]) -> Result<Self, PrincipalError> {
        if bytes.len() < HEADER_LEN {
            return Err(PrincipalError::TruncatedSid {
                needed: HEADER_LEN,
                actual: bytes.len(),
            });
        }

        let revision = bytes[0];
        let count = bytes[1];
        if count > MAX_SUB_AUTHORITIES {
            return Err(PrincipalError::TooManySubAuthorities { count });
        }

        let needed = HEADER_LEN + 4 * count as usize;
        if bytes.len() < needed {
            return Err(PrincipalError::TruncatedSid {
                needed,
                actual: bytes.len(),
            });
        }

        let mut identifier_authority: u64 = 0;
        for &b in &bytes[2..8] {
            identifier_authority = (identifier_authority << 8) | u64::from(b);
        }

        let sub_authorities = (0..count as usize)
            .map(|i| {
                let off = HEADER_LEN + 4 * i;
                u32::from_le_bytes([
                    bytes[off],
                    bytes[off + 1],
                    bytes[off + 2],
                    bytes[off + 3],
                ])
            })
            .collect();

        Ok(Self {
            revision,
            identifier_authority,
            sub_authorities,
        })
    }

    /// The relative identifier: the final sub-authority, if any.
    #[must_use]
    pub fn rid(&self) -> Option<u32> {
        self.sub_authorities.last().copied()
    }
}

impl fmt::Display for Sid {
    /// Canonical `S-R-I-S...` form.
    ///
    /// Authorities that fit in 32 bits render as decimal; larger ones render
    /// as 12 uppercase hex digits with a `0x` prefix, per MS-DTYP 2.4.2.1.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S-{}", self.revision)?;
        if self.identifier_authority < (1 << 32) {
            write!(f, "-{}", self.identifier_authority)?;
        } else {
            write!(f, "-0x{:012X}", self.identifier_authority)?;
        }
        for sub in &self.sub_authorities {
            write!(f, "-{sub}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Encode a SID for test input.
    fn encode(revision: u8, authority: u64, subs: &[u32]) -> Vec<u8> {
        let mut bytes = vec![revision, subs.len() as u8];
        bytes.extend_from_slice(&authority.to_be_bytes()[2..]);
        for sub in subs {
            bytes.extend_from_slice(&sub.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_parse_everyone() {
        let sid = Sid::parse(&encode(1, 1, &[0])).unwrap();
        assert_eq!(sid.revision, 1);
        assert_eq!(sid.identifier_authority, 1);
        assert_eq!(sid.sub_authorities, vec![0]);
        assert_eq!(sid.to_string(), "S-1-1-0");
    }

    #[test]
    fn test_parse_domain_user() {
        let sid = Sid::parse(&encode(1, 5, &[21, 2127521184, 1604012920, 1887927527, 1104]))
            .unwrap();
        assert_eq!(
            sid.to_string(),
            "S-1-5-21-2127521184-1604012920-1887927527-1104"
        );
        assert_eq!(sid.rid(), Some(1104));
    }

    #[test]
    fn test_parse_no_sub_authorities() {
        let sid = Sid::parse(&encode(1, 5, &[])).unwrap();
        assert_eq!(sid.to_string(), "S-1-5");
        assert_eq!(sid.rid(), None);
    }

    #[test]
    fn test_parse_large_authority_renders_hex() {
        let sid = Sid::parse(&encode(1, 0x0000_0102_0304_0506, &[7])).unwrap();
        assert_eq!(sid.to_string(), "S-1-0x010203040506-7");
    }

    #[test]
    fn test_parse_ignores_trailing_bytes() {
        let mut bytes = encode(1, 1, &[0]);
        bytes.extend_from_slice(&[0xDE, 0xAD]);
        let sid = Sid::parse(&bytes).unwrap();
        assert_eq!(sid.to_string(), "S-1-1-0");
    }

    #[test]
    fn test_parse_truncated_header() {
        let err = Sid::parse(&[1, 1, 0]).unwrap_err();
        assert_eq!(
            err,
            PrincipalError::TruncatedSid {
                needed: 8,
                actual: 3
            }
        );
    }

    #[test]
    fn test_parse_truncated_sub_authorities() {
        // Declares 2 sub-authorities but carries only 1
        let mut bytes = encode(1, 5, &[21]);
        bytes[1] = 2;
        let err = Sid::parse(&bytes).unwrap_err();
        assert_eq!(
            err,
            PrincipalError::TruncatedSid {
                needed: 16,
                actual: 12
            }
        );
    }

    #[test]
    fn test_parse_too_many_sub_authorities() {
        let bytes = [1u8, 16, 0, 0, 0, 0, 0, 5];
        let err = Sid::parse(&bytes).unwrap_err();
        assert_eq!(err, PrincipalError::TooManySubAuthorities { count: 16 });
    }

    #[test]
    fn test_parse_empty() {
        assert!(Sid::parse(&[]).is_err());
    }

    #[test]
    fn test_deterministic() {
        let bytes = encode(1, 5, &[21, 1, 2, 3, 500]);
        assert_eq!(Sid::parse(&bytes).unwrap(), Sid::parse(&bytes).unwrap());
    }
}
