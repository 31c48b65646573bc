use thiserror::Error;

/// Reasons a user-supplied birth date produces no elapsed time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("Please enter your birth date")]
    Empty,
    #[error("'{input}' is not a date in YYYY-MM-DD format")]
    Malformed {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Failures of the key-value store holding the birth date
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to {operation} key '{key}': {reason}")]
    Operation {
        operation: &'static str,
        key: String,
        reason: String,
    },
}
