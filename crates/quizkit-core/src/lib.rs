//! # quizkit-core
//!
//! Two-level category taxonomy for classifying quiz questions.
//!
//! Raw category definitions come in either as a flat id-to-name mapping or
//! as a structured `{ main, sub }` document. Both are normalized, ordered
//! alphabetically by display name, and assembled into an immutable
//! [`CategoryRegistry`] that answers lookups over one flat id namespace.
//!
//! ```rust
//! use quizkit_core::CategoryRegistry;
//! use serde_json::json;
//!
//! let registry = CategoryRegistry::from_value(&json!({
//!     "main": { "js": "JavaScript" },
//!     "sub": { "js": { "arr": "Arrays", "str": "Strings" } },
//! }));
//!
//! assert_eq!(registry.ids(), ["js"]);
//! assert_eq!(registry.record("js").unwrap().sub_ids(), ["arr", "str"]);
//! assert_eq!(registry.record("arr").unwrap().name(), "Arrays");
//! assert!(registry.record("missing").is_none());
//! ```

pub mod error;
pub mod input;
pub mod observer;
pub mod record;
pub mod registry;
pub mod sort;

pub use error::{Result, TaxonomyError};
pub use input::{CategoriesInput, NameMap, NormalizedCategories, SubMap};
pub use observer::{NullObserver, TaxonomyObserver, TracingObserver};
pub use record::{CategoryField, CategoryRecord, FieldValue};
pub use registry::CategoryRegistry;
pub use sort::sort_keys;
