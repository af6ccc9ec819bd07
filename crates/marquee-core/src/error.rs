use thiserror::Error;

/// Core error type shared across Marquee crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Selection was attempted on a table with zero entries.
    #[error("cannot select from an empty table")]
    EmptyTable,
    /// A category name did not match any known category.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Convenience alias for results returned by Marquee crates.
pub type Result<T> = std::result::Result<T, Error>;
