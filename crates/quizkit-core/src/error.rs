use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Duplicate category id: '{id}' already registered")]
    DuplicateId { id: String },

    #[error("Unknown category field: '{name}' - expected 'name' or 'subIds'")]
    UnknownField { name: String },

    #[error("Categories parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;
