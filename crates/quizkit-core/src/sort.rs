//! Key sorting utility
//!
//! Orders category ids by their display name rather than by the ids
//! themselves, so "b: Apple" sorts before "a: Zebra".

use crate::input::NameMap;

/// Sort `keys` ascending by their display value in `names`.
///
/// The sort is stable: keys with equal display values keep their original
/// order, which is the insertion order of the input mapping. A key missing
/// from `names` sorts as the empty string; the construction path only passes
/// keys taken from `names` itself.
pub fn sort_keys(mut keys: Vec<String>, names: &NameMap) -> Vec<String> {
    keys.sort_by(|a, b| {
        let name_a = names.get(a).map(String::as_str).unwrap_or_default();
        let name_b = names.get(b).map(String::as_str).unwrap_or_default();
        name_a.cmp(name_b)
    });
    keys
}
