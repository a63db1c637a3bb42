//! SAM account-type code mapping
//!
//! The sAMAccountType attribute carries a numeric code placing a security
//! principal into the SAM object families. The mapping is a fixed platform
//! constant.

use crate::kind::ObjectKind;

/// SAM_GROUP_OBJECT.
pub const SAM_GROUP: u32 = 0x1000_0000;
/// SAM_NON_SECURITY_GROUP_OBJECT.
pub const SAM_NON_SECURITY_GROUP: u32 = 0x1000_0001;
/// SAM_ALIAS_OBJECT (domain-local group).
pub const SAM_ALIAS: u32 = 0x2000_0000;
/// SAM_NON_SECURITY_ALIAS_OBJECT.
pub const SAM_NON_SECURITY_ALIAS: u32 = 0x2000_0001;
/// SAM_USER_OBJECT (normal user account).
pub const SAM_USER: u32 = 0x3000_0000;
/// SAM_MACHINE_ACCOUNT.
pub const SAM_MACHINE: u32 = 0x3000_0001;
/// SAM_TRUST_ACCOUNT (inter-domain trust), decimal 805306370.
///
/// Trust accounts never classify as a normal kind: this code maps to
/// `Unknown` regardless of any other attribute on the record.
pub const SAM_TRUST_ACCOUNT: u32 = 0x3000_0002;

/// Map a SAM account-type code to an object kind.
///
/// Returns `None` for codes outside the known families; the trust-account
/// sentinel deliberately maps to `Some(Unknown)` rather than `None` so that
/// callers can tell "recognized as unclassifiable" apart from "unrecognized".
#[must_use]
pub fn kind_for_account_type(code: u32) -> Option<ObjectKind> {
    match code {
        SAM_GROUP | SAM_NON_SECURITY_GROUP | SAM_ALIAS | SAM_NON_SECURITY_ALIAS => {
            Some(ObjectKind::Group)
        }
        SAM_USER => Some(ObjectKind::User),
        SAM_MACHINE => Some(ObjectKind::Computer),
        SAM_TRUST_ACCOUNT => Some(ObjectKind::Unknown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_family() {
        assert_eq!(kind_for_account_type(268435456), Some(ObjectKind::Group));
        assert_eq!(kind_for_account_type(268435457), Some(ObjectKind::Group));
        assert_eq!(kind_for_account_type(536870912), Some(ObjectKind::Group));
        assert_eq!(kind_for_account_type(536870913), Some(ObjectKind::Group));
    }

    #[test]
    fn test_user_and_machine() {
        assert_eq!(kind_for_account_type(805306368), Some(ObjectKind::User));
        assert_eq!(
            kind_for_account_type(805306369),
            Some(ObjectKind::Computer)
        );
    }

    #[test]
    fn test_trust_account_sentinel() {
        assert_eq!(SAM_TRUST_ACCOUNT, 805306370);
        assert_eq!(
            kind_for_account_type(SAM_TRUST_ACCOUNT),
            Some(ObjectKind::Unknown)
        );
    }

    #[test]
    fn test_unrecognized_code() {
        assert_eq!(kind_for_account_type(0), None);
        assert_eq!(kind_for_account_type(42), None);
        assert_eq!(kind_for_account_type(u32::MAX), None);
    }
}
