//! Well-known security principal table
//!
//! The constant table of built-in principals whose identifiers and kinds are
//! fixed by the platform rather than stored in any directory. A match here
//! overrides every attribute-based classification rule.

use crate::kind::ObjectKind;

/// A predefined security principal with a fixed identifier and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WellKnownPrincipal {
    /// Canonical SID string (e.g. `S-1-1-0`).
    pub sid: &'static str,
    /// Display name of the principal.
    pub name: &'static str,
    /// The object kind this principal always classifies as.
    pub kind: ObjectKind,
}

/// Look up a well-known principal by its canonical SID string.
///
/// The comparison is exact: domain-relative SIDs (`S-1-5-21-...`) never match
/// and fall through to attribute-based classification.
#[must_use]
pub fn well_known_principal(sid: &str) -> Option<&'static WellKnownPrincipal> {
    WELL_KNOWN_PRINCIPALS.iter().find(|p| p.sid == sid)
}

macro_rules! principal {
    ($sid:literal, $name:literal, $kind:ident) => {
        WellKnownPrincipal {
            sid: $sid,
            name: $name,
            kind: ObjectKind::$kind,
        }
    };
}

/// Universal, NT-authority, and BUILTIN well-known principals.
pub static WELL_KNOWN_PRINCIPALS: &[WellKnownPrincipal] = &[
    principal!("S-1-0", "Null Authority", User),
    principal!("S-1-0-0", "Nobody", User),
    principal!("S-1-1", "World Authority", User),
    principal!("S-1-1-0", "Everyone", Group),
    principal!("S-1-2", "Local Authority", User),
    principal!("S-1-2-0", "Local", Group),
    principal!("S-1-2-1", "Console Logon", Group),
    principal!("S-1-3", "Creator Authority", User),
    principal!("S-1-3-0", "Creator Owner", User),
    principal!("S-1-3-1", "Creator Group", Group),
    principal!("S-1-3-2", "Creator Owner Server", Computer),
    principal!("S-1-3-3", "Creator Group Server", Computer),
    principal!("S-1-3-4", "Owner Rights", Group),
    principal!("S-1-4", "Non-unique Authority", User),
    principal!("S-1-5", "NT Authority", User),
    principal!("S-1-5-1", "Dialup", Group),
    principal!("S-1-5-2", "Network", Group),
    principal!("S-1-5-3", "Batch", Group),
    principal!("S-1-5-4", "Interactive", Group),
    principal!("S-1-5-6", "Service", Group),
    principal!("S-1-5-7", "Anonymous", Group),
    principal!("S-1-5-8", "Proxy", Group),
    principal!("S-1-5-9", "Enterprise Domain Controllers", Group),
    principal!("S-1-5-10", "Principal Self", User),
    principal!("S-1-5-11", "Authenticated Users", Group),
    principal!("S-1-5-12", "Restricted Code", Group),
    principal!("S-1-5-13", "Terminal Server Users", Group),
    principal!("S-1-5-14", "Remote Interactive Logon", Group),
    principal!("S-1-5-15", "This Organization", Group),
    principal!("S-1-5-17", "IUSR", User),
    principal!("S-1-5-18", "Local System", User),
    principal!("S-1-5-19", "Local Service", User),
    principal!("S-1-5-20", "Network Service", User),
    principal!("S-1-5-80-0", "All Services", Group),
    principal!("S-1-5-32-544", "Administrators", Group),
    principal!("S-1-5-32-545", "Users", Group),
    principal!("S-1-5-32-546", "Guests", Group),
    principal!("S-1-5-32-547", "Power Users", Group),
    principal!("S-1-5-32-548", "Account Operators", Group),
    principal!("S-1-5-32-549", "Server Operators", Group),
    principal!("S-1-5-32-550", "Print Operators", Group),
    principal!("S-1-5-32-551", "Backup Operators", Group),
    principal!("S-1-5-32-552", "Replicators", Group),
    principal!("S-1-5-32-554", "Pre-Windows 2000 Compatible Access", Group),
    principal!("S-1-5-32-555", "Remote Desktop Users", Group),
    principal!("S-1-5-32-556", "Network Configuration Operators", Group),
    principal!("S-1-5-32-557", "Incoming Forest Trust Builders", Group),
    principal!("S-1-5-32-558", "Performance Monitor Users", Group),
    principal!("S-1-5-32-559", "Performance Log Users", Group),
    principal!("S-1-5-32-560", "Windows Authorization Access Group", Group),
    principal!("S-1-5-32-561", "Terminal Server License Servers", Group),
    principal!("S-1-5-32-562", "Distributed COM Users", Group),
    principal!("S-1-5-32-568", "IIS_IUSRS", Group),
    principal!("S-1-5-32-569", "Cryptographic Operators", Group),
    principal!("S-1-5-32-573", "Event Log Readers", Group),
    principal!("S-1-5-32-574", "Certificate Service DCOM Access", Group),
    principal!("S-1-5-32-575", "RDS Remote Access Servers", Group),
    principal!("S-1-5-32-576", "RDS Endpoint Servers", Group),
    principal!("S-1-5-32-577", "RDS Management Servers", Group),
    principal!("S-1-5-32-578", "Hyper-V Administrators", Group),
    principal!("S-1-5-32-579", "Access Control Assistance Operators", Group),
    principal!("S-1-5-32-580", "Remote Management Users", Group),
];
