//! Error types for the satchel system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Parse failures are not errors: they travel through `ParseResult` and
//! `CmdErr` in the parser crate. This type covers execution-time structural
//! violations and runtime I/O.

use std::fmt;

use thiserror::Error;

/// The main error type for satchel operations.
#[derive(Clone, Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an index out of bounds error for a slot access.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates an item not found error.
    #[must_use]
    pub fn item_not_found(query: impl Into<String>) -> Self {
        Self::new(ErrorKind::ItemNotFound(query.into()))
    }

    /// Creates an invalid metadata error.
    #[must_use]
    pub fn invalid_metadata(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidMetadata(message.into()))
    }

    /// Creates a save not found error.
    #[must_use]
    pub fn save_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::SaveNotFound(name.into()))
    }

    /// Returns true if this is an out-of-range slot access.
    #[must_use]
    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self.kind, ErrorKind::IndexOutOfBounds { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error)]
pub enum ErrorKind {
    /// Slot index outside the current slot sequence.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the collection.
        length: usize,
    },

    /// An item name could not be resolved.
    #[error("cannot find item: {0}")]
    ItemNotFound(String),

    /// Metadata was rejected by validation.
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),

    /// A named save does not exist.
    #[error("save not found: {0}")]
    SaveNotFound(String),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File system failure.
    #[error("io error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Script file or session name.
    pub source: Option<String>,
    /// Line number in the script (1-indexed).
    pub line: Option<usize>,
    /// The command text being executed.
    pub command: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the script line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the command text.
    #[must_use]
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        } else if let Some(line) = self.line {
            write!(f, "at line {line}")?;
        }
        if let Some(command) = &self.command {
            write!(f, " in `{command}`")?;
        }
        Ok(())
    }
}

/// Result type alias for satchel operations.
pub type Result<T> = std::result::Result<T, Error>;
