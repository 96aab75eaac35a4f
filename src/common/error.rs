//! Error types for BrineDB.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in BrineDB.
///
/// This enum represents every recoverable error that can occur in the
/// database. By having a single error type, we make error handling
/// consistent across all layers.
///
/// Internal invariant violations (a corrupted tree node, a dangling slot
/// index) are NOT represented here - those are programmer errors and
/// panic instead of returning `Err`.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Index order too small to ever split a node legally.
    #[error("invalid index order {0}: order must be at least 2")]
    InvalidOrder(usize),

    /// A table with this name is already registered.
    #[error("table '{0}' already exists")]
    TableExists(String),

    /// No table with this name is registered.
    #[error("table '{0}' does not exist")]
    TableNotFound(String),

    /// A row is missing a column the schema declares.
    #[error("missing column '{0}'")]
    MissingColumn(String),

    /// A row value's runtime type does not match the declared column type.
    #[error("type mismatch for column '{0}'")]
    TypeMismatch(String),

    /// The file does not start with the database magic tag.
    #[error("not a BrineDB file: bad magic tag")]
    BadMagic,

    /// The file was written by an unknown format version.
    #[error("unsupported file version {0}")]
    UnsupportedVersion(u8),

    /// The file is structurally invalid beyond the header.
    #[error("corrupt database file: {0}")]
    Corrupt(String),
}
