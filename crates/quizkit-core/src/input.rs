//! Category input shapes
//!
//! Accepts the two shapes a caller may supply category definitions in and
//! normalizes both to one canonical form. Malformed input is coerced to
//! empty mappings rather than rejected.

use indexmap::IndexMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::Result;

/// Mapping from category id to display name.
pub type NameMap = IndexMap<String, String>;

/// Mapping from main-category id to its sub-category name mapping.
pub type SubMap = IndexMap<String, NameMap>;

/// Raw category definitions accepted at construction.
///
/// Two shapes are supported:
/// - the legacy flat shorthand, a mapping of main id to display name
/// - the structured form with separate `main` and `sub` sections
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoriesInput {
    /// Flat shorthand: main categories only, no sub categories.
    Flat(NameMap),
    /// Structured form: main categories plus per-main sub groups.
    Structured {
        #[serde(default)]
        main: NameMap,
        #[serde(default)]
        sub: SubMap,
    },
}

/// Canonical internal shape every input normalizes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedCategories {
    pub main: NameMap,
    pub sub: SubMap,
}

impl CategoriesInput {
    /// Strict parse of a JSON document into one of the accepted shapes.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Permissive coercion from an arbitrary JSON value.
    ///
    /// Anything that is not an object becomes the empty input. An object
    /// whose values are all strings is the flat shorthand. Any other object
    /// is read as the structured form, with `main` and `sub` each falling
    /// back to an empty mapping when their shape does not match.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::Flat(NameMap::new());
        };

        if let Some(flat) = as_name_map(obj) {
            return Self::Flat(flat);
        }

        let main = obj
            .get("main")
            .and_then(Value::as_object)
            .and_then(as_name_map)
            .unwrap_or_default();

        let sub = obj
            .get("sub")
            .and_then(Value::as_object)
            .and_then(as_sub_map)
            .unwrap_or_default();

        Self::Structured { main, sub }
    }

    /// Collapse either shape into the canonical `{ main, sub }` form.
    pub fn normalize(self) -> NormalizedCategories {
        match self {
            Self::Flat(main) => NormalizedCategories {
                main,
                sub: SubMap::new(),
            },
            Self::Structured { main, sub } => NormalizedCategories { main, sub },
        }
    }
}

impl Default for CategoriesInput {
    fn default() -> Self {
        Self::Flat(NameMap::new())
    }
}

impl From<NameMap> for CategoriesInput {
    fn from(main: NameMap) -> Self {
        Self::Flat(main)
    }
}

/// Read an object as an id-to-name mapping; `None` if any value is not a string.
fn as_name_map(obj: &serde_json::Map<String, Value>) -> Option<NameMap> {
    obj.iter()
        .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}

/// Read an object as a mapping of sub groups; `None` if any value is not an
/// object. Non-string entries inside a kept group are dropped.
fn as_sub_map(obj: &serde_json::Map<String, Value>) -> Option<SubMap> {
    obj.iter()
        .map(|(main_id, group)| {
            group.as_object().map(|g| {
                let names = g
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect();
                (main_id.clone(), names)
            })
        })
        .collect()
}
