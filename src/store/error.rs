use thiserror::Error;

use crate::storage::StorageError;

/// A rejected edit. The collection is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("List name must not be blank")]
    EmptyName,

    #[error("Rule text must not be blank")]
    EmptyRule,

    #[error("The last remaining list cannot be deleted")]
    LastList,

    #[error("No rule list at index {index} (have {len})")]
    ListOutOfRange { index: usize, len: usize },

    #[error("No rule at index {index} (have {len})")]
    RuleOutOfRange { index: usize, len: usize },
}

/// Failure to write persisted state. Previously stored bytes are kept.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}
