//! Category registry
//!
//! Builds the flat id-to-record mapping from normalized category input and
//! answers read-only lookups. The registry is assembled once; nothing about
//! it can change afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::{Result, TaxonomyError};
use crate::input::CategoriesInput;
use crate::observer::{TaxonomyObserver, TracingObserver};
use crate::record::{CategoryField, CategoryRecord, FieldValue};
use crate::sort::sort_keys;

/// Immutable two-level category taxonomy.
///
/// Main and sub categories share one flat id namespace: every id, at either
/// level, resolves through [`record`](Self::record). Main-category ids are
/// additionally listed in [`ids`](Self::ids), sorted by display name; each
/// main record carries its own sub ids in the same name order.
///
/// All state is fixed at construction, so a registry can be shared across
/// threads without locking.
#[derive(Clone)]
pub struct CategoryRegistry {
    ids: Vec<String>,
    records: HashMap<String, CategoryRecord>,
    observer: Arc<dyn TaxonomyObserver + Send + Sync>,
}

impl CategoryRegistry {
    /// Build a registry from category input.
    ///
    /// Duplicate ids across the flat namespace are resolved last-write-wins
    /// and reported through the observer; use [`validated`](Self::validated)
    /// to reject them instead.
    pub fn new(input: CategoriesInput) -> Self {
        Self::with_observer(input, Arc::new(TracingObserver))
    }

    /// Build a registry from an arbitrary JSON value, coercing malformed
    /// shapes to empty sections.
    pub fn from_value(value: &Value) -> Self {
        Self::new(CategoriesInput::from_value(value))
    }

    /// Build a registry with an injected diagnostics observer.
    pub fn with_observer(
        input: CategoriesInput,
        observer: Arc<dyn TaxonomyObserver + Send + Sync>,
    ) -> Self {
        Self::build(input, observer).0
    }

    /// Build a registry, rejecting any id registered more than once across
    /// the flat namespace.
    pub fn validated(input: CategoriesInput) -> Result<Self> {
        let (registry, duplicates) = Self::build(input, Arc::new(TracingObserver));
        match duplicates.into_iter().next() {
            Some(id) => Err(TaxonomyError::DuplicateId { id }),
            None => Ok(registry),
        }
    }

    fn build(
        input: CategoriesInput,
        observer: Arc<dyn TaxonomyObserver + Send + Sync>,
    ) -> (Self, Vec<String>) {
        let normalized = input.normalize();
        observer.build_started(normalized.main.len(), normalized.sub.len());

        let ids = sort_keys(normalized.main.keys().cloned().collect(), &normalized.main);

        let mut records = HashMap::new();
        let mut duplicates = Vec::new();
        let mut insert = |id: String, record: CategoryRecord| {
            if records.insert(id.clone(), record).is_some() {
                observer.duplicate_id(&id);
                duplicates.push(id);
            }
        };

        for main_id in &ids {
            let sub_ids = match normalized.sub.get(main_id) {
                Some(group) => sort_keys(group.keys().cloned().collect(), group),
                None => Vec::new(),
            };

            let name = normalized.main[main_id].clone();
            insert(main_id.clone(), CategoryRecord::new(name, sub_ids.clone()));

            if let Some(group) = normalized.sub.get(main_id) {
                for sub_id in &sub_ids {
                    insert(sub_id.clone(), CategoryRecord::leaf(group[sub_id].clone()));
                }
            }
        }
        drop(insert);

        for main_id in normalized.sub.keys() {
            if !normalized.main.contains_key(main_id) {
                observer.unknown_sub_group(main_id);
            }
        }

        observer.build_finished(records.len());

        let registry = Self {
            ids,
            records,
            observer,
        };
        (registry, duplicates)
    }

    /// Main-category ids, sorted ascending by display name.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of main categories.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the registry holds no categories at all.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` resolves to a main or sub category.
    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    /// Look up a category record by id.
    ///
    /// Returns `None` for unknown ids and reports the miss through the
    /// observer. Never fails otherwise.
    pub fn record(&self, id: &str) -> Option<&CategoryRecord> {
        let record = self.records.get(id);
        if record.is_none() {
            self.observer.lookup_missed(id);
        }
        record
    }

    /// Look up a single field of a category record.
    pub fn field(&self, id: &str, field: CategoryField) -> Option<FieldValue<'_>> {
        self.record(id).map(|record| record.field(field))
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(CategoriesInput::default())
    }
}

impl fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryRegistry")
            .field("ids", &self.ids)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registry(value: Value) -> CategoryRegistry {
        CategoryRegistry::from_value(&value)
    }

    #[test]
    fn test_flat_input_sorted_by_name() {
        let registry = registry(json!({"a": "Zebra", "b": "Apple"}));
        assert_eq!(registry.ids(), ["b", "a"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.record("a").unwrap().sub_ids().is_empty());
    }

    #[test]
    fn test_sub_categories_attached_and_sorted() {
        let registry = registry(json!({
            "main": {"a": "Animals"},
            "sub": {"a": {"y": "Dogs", "x": "Cats"}}
        }));
        assert_eq!(registry.ids(), ["a"]);
        assert_eq!(registry.record("a").unwrap().sub_ids(), ["x", "y"]);
        assert_eq!(registry.record("x").unwrap().name(), "Cats");
        assert_eq!(registry.record("y").unwrap().name(), "Dogs");
    }

    #[test]
    fn test_empty_input_builds_empty_registry() {
        let registry = registry(json!(null));
        assert_eq!(registry.len(), 0);
        assert!(registry.is_empty());
        assert!(registry.record("anything").is_none());
    }

    #[test]
    fn test_orphan_sub_group_ignored() {
        let registry = registry(json!({
            "main": {"a": "A"},
            "sub": {"b": {"x": "X"}}
        }));
        assert_eq!(registry.ids(), ["a"]);
        assert!(registry.record("x").is_none());
        assert!(registry.record("b").is_none());
    }

    #[test]
    fn test_field_lookup() {
        let registry = registry(json!({
            "main": {"a": "Animals"},
            "sub": {"a": {"x": "Cats"}}
        }));
        let name = registry.field("a", CategoryField::Name).unwrap();
        assert_eq!(name.as_name(), Some("Animals"));
        let subs = registry.field("a", CategoryField::SubIds).unwrap();
        assert_eq!(subs.as_sub_ids().unwrap(), ["x"]);
        assert!(registry.field("missing", CategoryField::Name).is_none());
    }

    #[test]
    fn test_duplicate_id_last_write_wins() {
        // Sub id "a" collides with the main id "a" in the flat namespace.
        let registry = registry(json!({
            "main": {"a": "Animals", "b": "Birds"},
            "sub": {"b": {"a": "Albatross"}}
        }));
        assert_eq!(registry.record("a").unwrap().name(), "Albatross");
    }

    #[test]
    fn test_validated_rejects_duplicate_id() {
        let input = CategoriesInput::from_value(&json!({
            "main": {"a": "Animals", "b": "Birds"},
            "sub": {"b": {"a": "Albatross"}}
        }));
        let err = CategoryRegistry::validated(input).unwrap_err();
        assert!(matches!(err, TaxonomyError::DuplicateId { id } if id == "a"));
    }

    #[test]
    fn test_validated_accepts_disjoint_namespace() {
        let input = CategoriesInput::from_value(&json!({
            "main": {"a": "Animals"},
            "sub": {"a": {"x": "Cats", "y": "Dogs"}}
        }));
        let registry = CategoryRegistry::validated(input).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("x"));
    }

    #[test]
    fn test_main_without_sub_group_gets_empty_subs() {
        let registry = registry(json!({
            "main": {"a": "Animals", "b": "Birds"},
            "sub": {"a": {"x": "Cats"}}
        }));
        assert!(registry.record("b").unwrap().sub_ids().is_empty());
    }
}
