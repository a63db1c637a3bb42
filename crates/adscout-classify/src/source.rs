//! Attribute source abstraction
//!
//! One read contract over the two record shapes a directory record can
//! arrive in. Classification and identifier resolution are written once
//! against this trait; each shape supplies only a small adapter.

use ldap3::SearchEntry;

/// Read access to the raw attributes of a single directory record.
///
/// Attribute names are case-insensitive in every implementation, matching
/// directory semantics.
///
/// The null-vs-empty asymmetry between [`first_as_string`] and
/// [`all_as_strings`] is a load-bearing contract: consumers iterate the
/// sequence accessor unconditionally and branch on the single accessor.
///
/// [`first_as_string`]: AttributeSource::first_as_string
/// [`all_as_strings`]: AttributeSource::all_as_strings
pub trait AttributeSource {
    /// Whether the attribute is present with at least one value.
    fn has(&self, name: &str) -> bool;

    /// The first value converted to its text representation, or `None` when
    /// the attribute is missing. Never fails.
    fn first_as_string(&self, name: &str) -> Option<String>;

    /// Every value converted to text, in original order. Returns an empty
    /// `Vec` (never `None`) when the attribute is missing.
    fn all_as_strings(&self, name: &str) -> Vec<String>;

    /// The first value, if and only if it is natively byte-shaped. `None`
    /// for missing attributes and for text-shaped values; no
    /// cross-conversion is performed.
    fn first_as_bytes(&self, name: &str) -> Option<&[u8]>;
}

/// Wire-shape adapter.
///
/// `ldap3` routes an attribute's values into `attrs` when every value is
/// valid UTF-8 and into `bin_attrs` otherwise, so each attribute is
/// text-shaped or byte-shaped as a whole.
impl AttributeSource for SearchEntry {
    fn has(&self, name: &str) -> bool {
        str_values(self, name).is_some_and(|v| !v.is_empty())
            || bin_values(self, name).is_some_and(|v| !v.is_empty())
    }

    fn first_as_string(&self, name: &str) -> Option<String> {
        if let Some(first) = str_values(self, name).and_then(|v| v.first()) {
            return Some(first.clone());
        }
        bin_values(self, name)
            .and_then(|v| v.first())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    fn all_as_strings(&self, name: &str) -> Vec<String> {
        if let Some(values) = str_values(self, name) {
            return values.clone();
        }
        bin_values(self, name)
            .map(|values| {
                values
                    .iter()
                    .map(|b| String::from_utf8_lossy(b).into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn first_as_bytes(&self, name: &str) -> Option<&[u8]> {
        bin_values(self, name)
            .and_then(|v| v.first())
            .map(Vec::as_slice)
    }
}

fn str_values<'a>(entry: &'a SearchEntry, name: &str) -> Option<&'a Vec<String>> {
    entry
        .attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, values)| values)
}

fn bin_values<'a>(entry: &'a SearchEntry, name: &str) -> Option<&'a Vec<Vec<u8>>> {
    entry
        .bin_attrs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, values)| values)
}
