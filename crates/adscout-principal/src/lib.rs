//! # Security Principal Primitives
//!
//! Decoding and lookup primitives for Active Directory security principals.
//!
//! This crate provides the constant, read-only data and wire decoders that
//! identity-aware consumers need when interpreting raw directory records:
//!
//! - [`Sid`] - binary security identifier decoding and canonical rendering
//! - [`guid_string`] - canonical text form of a 16-byte objectGUID
//! - [`well_known_principal`] - the table of built-in security principals
//! - [`kind_for_account_type`] - the SAM account-type code to kind mapping
//! - [`ObjectKind`] - the fixed set of directory object kinds
//!
//! Everything here is pure and stateless: decoders are deterministic
//! functions of their input bytes, and the lookup tables are compiled-in
//! constants safe to share across any number of concurrent callers.
//!
//! ## Example
//!
//! ```
//! use adscout_principal::{well_known_principal, ObjectKind, Sid};
//!
//! // S-1-1-0 (Everyone) in its binary encoding
//! let sid = Sid::parse(&[1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0]).unwrap();
//! assert_eq!(sid.to_string(), "S-1-1-0");
//!
//! let principal = well_known_principal("S-1-1-0").unwrap();
//! assert_eq!(principal.name, "Everyone");
//! assert_eq!(principal.kind, ObjectKind::Group);
//! ```

pub mod account_type;
pub mod error;
pub mod guid;
pub mod kind;
pub mod sid;
pub mod well_known;

// Re-exports
pub use account_type::{kind_for_account_type, SAM_TRUST_ACCOUNT};
pub use error::PrincipalError;
pub use guid::guid_string;
pub use kind::ObjectKind;
pub use sid::Sid;
pub use well_known::{well_known_principal, WellKnownPrincipal};
