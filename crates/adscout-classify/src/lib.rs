//! # Directory Record Classification
//!
//! Resolves two facts from the raw attributes of a directory record: a
//! stable, globally unique identifier, and a classification into one of the
//! fixed directory object kinds (user, group, computer, domain,
//! organizational unit, group-policy object, or unknown).
//!
//! Records reach consumers in two structurally different shapes: the wire
//! shape produced by an LDAP search ([`ldap3::SearchEntry`]) and the typed
//! in-memory shape used for capture and replay ([`AttributeMap`]). The
//! [`AttributeSource`] trait unifies both behind one read contract, so the
//! resolution and classification logic exists exactly once.
//!
//! ## Example
//!
//! ```
//! use adscout_classify::{classify, object_identifier, AttributeMap, BuiltinTables};
//! use adscout_principal::ObjectKind;
//!
//! let mut entry = AttributeMap::new();
//! entry.set("sAMAccountType", "805306368");
//!
//! assert_eq!(classify(&entry, &BuiltinTables), ObjectKind::User);
//! assert_eq!(object_identifier(&entry), None);
//! ```
//!
//! All operations here are pure functions of their input record: no I/O, no
//! shared state, no blocking. Missing attributes, shape mismatches, and
//! unrecognized values are encoded in the result values themselves; nothing
//! in this crate returns an error to the caller.

pub mod classify;
pub mod entry;
pub mod flags;
pub mod resolve;
pub mod source;
pub mod user_account_control;

// Re-exports
pub use classify::{
    classify, BuiltinTables, PrincipalTables, ATTR_OBJECT_CLASS, ATTR_SAM_ACCOUNT_TYPE,
};
pub use entry::{AttributeMap, AttributeValue};
pub use flags::{has_flag, FlagBits};
pub use resolve::{object_identifier, security_identifier, ATTR_OBJECT_GUID, ATTR_OBJECT_SID};
pub use source::AttributeSource;
pub use user_account_control::UacFlag;
