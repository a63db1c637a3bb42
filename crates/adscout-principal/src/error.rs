//! Principal decoding error types
//!
//! Errors produced while decoding binary SID and GUID encodings. Decoding is
//! the only fallible surface of this crate; the lookup tables are total.

use thiserror::Error;

/// Error that can occur while decoding a security principal identifier.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrincipalError {
    /// The buffer ended before the declared structure was complete.
    #[error("truncated SID: need at least {needed} bytes, got {actual}")]
    TruncatedSid { needed: usize, actual: usize },

    /// The sub-authority count field exceeds the format's maximum of 15.
    #[error("SID declares {count} sub-authorities, maximum is 15")]
    TooManySubAuthorities { count: u8 },

    /// An objectGUID value must be exactly 16 bytes.
    #[error("invalid GUID length: expected 16 bytes, got {actual}")]
    InvalidGuidLength { actual: usize },
}
