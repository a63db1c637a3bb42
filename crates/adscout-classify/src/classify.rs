//! Object kind classification
//!
//! The priority-ordered decision procedure assigning each record exactly one
//! [`ObjectKind`]. Total and deterministic: every input, however malformed,
//! classifies to some kind, with `Unknown` as the terminal answer.

use tracing::debug;

use adscout_principal::{
    kind_for_account_type, well_known_principal, ObjectKind, SAM_TRUST_ACCOUNT,
};

use crate::resolve::security_identifier;
use crate::source::AttributeSource;

/// Attribute holding the SAM account-type numeric code.
pub const ATTR_SAM_ACCOUNT_TYPE: &str = "sAMAccountType";
/// Attribute holding the schema class-membership list.
pub const ATTR_OBJECT_CLASS: &str = "objectClass";

/// Class-list marker for group policy containers.
const CLASS_GROUP_POLICY: &str = "groupPolicyContainer";
/// Class-list marker for organizational units.
const CLASS_ORGANIZATIONAL_UNIT: &str = "organizationalUnit";
/// Class-list marker for domain heads.
const CLASS_DOMAIN: &str = "domain";

/// The constant lookup tables the classifier consults.
///
/// Injected rather than reached for as ambient globals so tests can
/// substitute their own tables.
pub trait PrincipalTables {
    /// Look up a well-known principal by canonical SID string, returning its
    /// kind and display name.
    fn well_known(&self, sid: &str) -> Option<(ObjectKind, &str)>;

    /// Map a SAM account-type code to a kind, or `None` for unrecognized
    /// codes.
    fn account_type_kind(&self, code: u32) -> Option<ObjectKind>;
}

/// The compiled-in platform tables from `adscout-principal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTables;

impl PrincipalTables for BuiltinTables {
    fn well_known(&self, sid: &str) -> Option<(ObjectKind, &str)> {
        well_known_principal(sid).map(|p| (p.kind, p.name))
    }

    fn account_type_kind(&self, code: u32) -> Option<ObjectKind> {
        kind_for_account_type(code)
    }
}

/// Classify a directory record into its object kind.
///
/// Priority order, with step order as the tie-break:
/// 1. A well-known-principal match on the record's SID wins outright.
/// 2. A present sAMAccountType decides the outcome: the inter-domain trust
///    sentinel is always `Unknown`, other codes map through the table, and
///    unmapped or unparseable codes fall to `Unknown` without ever reaching
///    the class list.
/// 3. Only when sAMAccountType is absent does the objectClass list decide,
///    checking markers in precedence order: group policy container, then
///    organizational unit, then domain.
/// 4. Anything else is `Unknown`.
pub fn classify<S, T>(entry: &S, tables: &T) -> ObjectKind
where
    S: AttributeSource + ?Sized,
    T: PrincipalTables,
{
    if let Some(sid) = security_identifier(entry) {
        if let Some((kind, name)) = tables.well_known(&sid) {
            debug!(%sid, name, %kind, "classified via well-known principal");
            return kind;
        }
    }

    if let Some(raw) = entry.first_as_string(ATTR_SAM_ACCOUNT_TYPE) {
        return match raw.parse::<u32>() {
            // Trust accounts never classify as a normal kind, whatever the
            // injected table says.
            Ok(SAM_TRUST_ACCOUNT) => ObjectKind::Unknown,
            Ok(code) => tables.account_type_kind(code).unwrap_or_default(),
            Err(_) => {
                debug!(value = %raw, "unparseable sAMAccountType");
                ObjectKind::Unknown
            }
        };
    }

    let classes = entry.all_as_strings(ATTR_OBJECT_CLASS);
    if contains_class(&classes, CLASS_GROUP_POLICY) {
        ObjectKind::GroupPolicyObject
    } else if contains_class(&classes, CLASS_ORGANIZATIONAL_UNIT) {
        ObjectKind::OrganizationalUnit
    } else if contains_class(&classes, CLASS_DOMAIN) {
        ObjectKind::Domain
    } else {
        ObjectKind::Unknown
    }
}

fn contains_class(classes: &[String], marker: &str) -> bool {
    classes.iter().any(|c| c.eq_ignore_ascii_case(marker))
}
