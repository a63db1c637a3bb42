//! Bitmask capability check
//!
//! Directory attributes that carry bitmasks (userAccountControl, groupType,
//! trust attributes) arrive in wildly mixed representations: integers,
//! decimal strings, or whole attribute values. A capability probe over such
//! a value must never crash the caller, so conversion failure and absence
//! both answer `false`. The leniency is a contract, not an oversight.

use crate::entry::AttributeValue;

/// Conversion of a flag-like value to its integer bit pattern.
///
/// Returns `None` when the value has no integer representation; `has_flag`
/// turns that into a `false` answer rather than an error.
pub trait FlagBits {
    /// The integer bit pattern, if one exists.
    fn flag_bits(&self) -> Option<i64>;
}

impl FlagBits for i64 {
    fn flag_bits(&self) -> Option<i64> {
        Some(*self)
    }
}

impl FlagBits for i32 {
    fn flag_bits(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl FlagBits for u32 {
    fn flag_bits(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl FlagBits for u64 {
    fn flag_bits(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}

impl FlagBits for str {
    fn flag_bits(&self) -> Option<i64> {
        self.trim().parse().ok()
    }
}

impl FlagBits for String {
    fn flag_bits(&self) -> Option<i64> {
        self.as_str().flag_bits()
    }
}

impl FlagBits for AttributeValue {
    fn flag_bits(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            AttributeValue::String(s) => s.flag_bits(),
            _ => None,
        }
    }
}

/// Whether every bit set in `test` is also set in `value`.
///
/// Absent inputs and values with no integer representation answer `false`;
/// malformed or heterogeneous flag representations must never crash a
/// capability probe.
pub fn has_flag<V, F>(value: Option<&V>, test: Option<&F>) -> bool
where
    V: FlagBits + ?Sized,
    F: FlagBits + ?Sized,
{
    match (
        value.and_then(FlagBits::flag_bits),
        test.and_then(FlagBits::flag_bits),
    ) {
        (Some(value), Some(test)) => value & test == test,
        _ => false,
    }
}
