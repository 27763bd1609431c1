//! Category records
//!
//! The immutable per-category value type stored in the registry, plus the
//! typed field selector used for single-field lookups.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TaxonomyError;

/// One category entry: a display name and, for main categories, the ordered
/// ids of the sub categories it owns.
///
/// Fields are private and no mutating method exists, so a record never
/// changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    name: String,
    sub_ids: Vec<String>,
}

impl CategoryRecord {
    pub(crate) fn new(name: impl Into<String>, sub_ids: Vec<String>) -> Self {
        Self {
            name: name.into(),
            sub_ids,
        }
    }

    pub(crate) fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Display name of this category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owned sub-category ids, sorted by their display names. Empty for sub
    /// categories and for main categories without children.
    pub fn sub_ids(&self) -> &[String] {
        &self.sub_ids
    }

    /// Whether this record owns any sub categories.
    pub fn has_subs(&self) -> bool {
        !self.sub_ids.is_empty()
    }

    /// Resolve a single field by its typed selector.
    pub fn field(&self, field: CategoryField) -> FieldValue<'_> {
        match field {
            CategoryField::Name => FieldValue::Name(&self.name),
            CategoryField::SubIds => FieldValue::SubIds(&self.sub_ids),
        }
    }
}

/// Typed selector for the fields a [`CategoryRecord`] exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Name,
    SubIds,
}

impl FromStr for CategoryField {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "subIds" | "sub_ids" => Ok(Self::SubIds),
            _ => Err(TaxonomyError::UnknownField {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => f.write_str("name"),
            Self::SubIds => f.write_str("subIds"),
        }
    }
}

/// A single field borrowed out of a [`CategoryRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Name(&'a str),
    SubIds(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// The display name, if this value holds one.
    pub fn as_name(self) -> Option<&'a str> {
        match self {
            Self::Name(name) => Some(name),
            Self::SubIds(_) => None,
        }
    }

    /// The sub-id list, if this value holds one.
    pub fn as_sub_ids(self) -> Option<&'a [String]> {
        match self {
            Self::SubIds(ids) => Some(ids),
            Self::Name(_) => None,
        }
    }
}
