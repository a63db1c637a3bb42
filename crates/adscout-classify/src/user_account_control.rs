//! userAccountControl flag constants
//!
//! The individual bits of the userAccountControl attribute, for use with
//! [`has_flag`] capability probes against raw attribute values.
//!
//! [`has_flag`]: crate::flags::has_flag

use crate::flags::FlagBits;

/// A single userAccountControl bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum UacFlag {
    /// Logon script is executed.
    Script = 0x0000_0001,
    /// Account is disabled.
    AccountDisable = 0x0000_0002,
    /// Home directory is required.
    HomedirRequired = 0x0000_0008,
    /// Account is locked out.
    Lockout = 0x0000_0010,
    /// No password is required.
    PasswordNotRequired = 0x0000_0020,
    /// The user cannot change the password.
    PasswordCantChange = 0x0000_0040,
    /// Reversibly encrypted password storage is allowed.
    EncryptedTextPasswordAllowed = 0x0000_0080,
    /// Default account type for a user.
    NormalAccount = 0x0000_0200,
    /// Trust account for a trusted domain.
    InterdomainTrustAccount = 0x0000_0800,
    /// Computer account for a workstation or member server.
    WorkstationTrustAccount = 0x0000_1000,
    /// Computer account for a domain controller.
    ServerTrustAccount = 0x0000_2000,
    /// The password never expires.
    DontExpirePassword = 0x0001_0000,
    /// A smart card is required for logon.
    SmartcardRequired = 0x0004_0000,
    /// The account is trusted for Kerberos delegation.
    TrustedForDelegation = 0x0008_0000,
    /// The account may not be delegated.
    NotDelegated = 0x0010_0000,
    /// Only DES key types are used.
    UseDesKeyOnly = 0x0020_0000,
    /// Kerberos pre-authentication is not required.
    DontRequirePreauth = 0x0040_0000,
    /// The password has expired.
    PasswordExpired = 0x0080_0000,
    /// The account is trusted to authenticate for delegation.
    TrustedToAuthForDelegation = 0x0100_0000,
}

impl UacFlag {
    /// The raw bit value.
    #[must_use]
    pub fn bit(self) -> u32 {
        self as u32
    }
}

impl FlagBits for UacFlag {
    fn flag_bits(&self) -> Option<i64> {
        Some(i64::from(self.bit()))
    }
}
