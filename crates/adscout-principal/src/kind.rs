//! Directory object kind
//!
//! The fixed classification set for directory records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of a directory object.
///
/// Exactly one kind is assigned per classification; `Unknown` is a valid
/// terminal answer for records that match no rule, not an error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A user account.
    User,
    /// A security or distribution group (including local aliases).
    Group,
    /// A machine account.
    Computer,
    /// A domain head object.
    Domain,
    /// An organizational unit container.
    OrganizationalUnit,
    /// A group policy container.
    GroupPolicyObject,
    /// Unclassifiable from the available attributes.
    #[default]
    Unknown,
}

impl ObjectKind {
    /// Get the string representation used on the wire and in logs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::User => "user",
            ObjectKind::Group => "group",
            ObjectKind::Computer => "computer",
            ObjectKind::Domain => "domain",
            ObjectKind::OrganizationalUnit => "organizational_unit",
            ObjectKind::GroupPolicyObject => "group_policy_object",
            ObjectKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = ParseObjectKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(ObjectKind::User),
            "group" => Ok(ObjectKind::Group),
            "computer" => Ok(ObjectKind::Computer),
            "domain" => Ok(ObjectKind::Domain),
            "organizational_unit" => Ok(ObjectKind::OrganizationalUnit),
            "group_policy_object" => Ok(ObjectKind::GroupPolicyObject),
            "unknown" => Ok(ObjectKind::Unknown),
            _ => Err(ParseObjectKindError(s.to_string())),
        }
    }
}

/// Error parsing an object kind from a string.
#[derive(Debug, Clone)]
pub struct ParseObjectKindError(String);

impl fmt::Display for ParseObjectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid object kind '{}'", self.0)
    }
}

impl std::error::Error for ParseObjectKindError {}
