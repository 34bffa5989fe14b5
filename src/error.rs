//! Error types for the list pager.
//!
//! Every failure is local and synchronous: an operation either succeeds, is a
//! documented no-op, or returns one of these variants immediately. Nothing is
//! retried and no notification carries an error.

use thiserror::Error;

/// Shared `Result` alias for the crate.
pub type Result<T> = std::result::Result<T, PagerError>;

/// Top-level error type for the list pager.
#[derive(Debug, Error)]
pub enum PagerError {
    /// An operation referenced an id that is absent from the named store.
    #[error("[PAGER-1001] no {store} with id {id}")]
    NotFound {
        /// Which store was searched (`"item"` or `"header"`).
        store: &'static str,
        /// Debug rendering of the missing id.
        id: String,
    },

    /// An operation needed a selection but none is set.
    #[error("[PAGER-1002] operation requires a selection but none is set")]
    EmptyState,

    /// An add collided with an id already present in the named store.
    #[error("[PAGER-1003] duplicate {store} id {id}")]
    DuplicateId {
        /// Which store rejected the add (`"item"` or `"header"`).
        store: &'static str,
        /// Debug rendering of the colliding id.
        id: String,
    },

    /// Configuration values are out of range.
    #[error("[PAGER-2001] invalid configuration: {details}")]
    InvalidConfig {
        /// What was wrong.
        details: String,
    },

    /// Configuration text could not be parsed.
    #[error("[PAGER-2002] configuration parse failure: {details}")]
    ConfigParse {
        /// Parser message.
        details: String,
    },

    /// The drawing surface or the input stream failed.
    #[error("[PAGER-3001] terminal IO failure: {0}")]
    Io(#[from] std::io::Error),
}

impl PagerError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "PAGER-1001",
            Self::EmptyState => "PAGER-1002",
            Self::DuplicateId { .. } => "PAGER-1003",
            Self::InvalidConfig { .. } => "PAGER-2001",
            Self::ConfigParse { .. } => "PAGER-2002",
            Self::Io(_) => "PAGER-3001",
        }
    }

    pub(crate) fn not_found(store: &'static str, id: &impl std::fmt::Debug) -> Self {
        Self::NotFound {
            store,
            id: format!("{id:?}"),
        }
    }

    pub(crate) fn duplicate(store: &'static str, id: &impl std::fmt::Debug) -> Self {
        Self::DuplicateId {
            store,
            id: format!("{id:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_messages() {
        let err = PagerError::not_found("item", &"g");
        assert_eq!(err.code(), "PAGER-1001");
        assert_eq!(err.to_string(), "[PAGER-1001] no item with id \"g\"");

        let err = PagerError::duplicate("header", &7_u32);
        assert_eq!(err.code(), "PAGER-1003");
        assert!(err.to_string().contains("duplicate header id 7"));

        assert_eq!(PagerError::EmptyState.code(), "PAGER-1002");
        assert_eq!(
            PagerError::EmptyState.to_string(),
            "[PAGER-1002] operation requires a selection but none is set"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("tty gone"))?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert_eq!(err.code(), "PAGER-3001");
        assert!(err.to_string().contains("tty gone"));
    }
}
