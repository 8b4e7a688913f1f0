//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error carried as the cause of wrapped failures
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the descriptor registry
///
/// Every storage layer either passes an error through unchanged or maps it
/// to a more specific local kind. Nothing is swallowed.
#[derive(Error, Debug)]
pub enum Error {
    /// Descriptor with the given id is not stored (and not resolvable through a peer)
    #[error("Descriptor not found: {id}")]
    NotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// Descriptor with the given id is already stored
    #[error("Descriptor already exists: {id}")]
    AlreadyExists {
        /// Colliding identifier
        id: String,
    },

    /// Nested submodel descriptor is not part of the shell descriptor
    #[error("Submodel descriptor '{submodel_id}' not found in shell descriptor '{shell_id}'")]
    SubmodelNotFound {
        /// Owning shell descriptor id
        shell_id: String,
        /// Nested submodel descriptor id
        submodel_id: String,
    },

    /// Nested submodel descriptor id is already used inside the shell descriptor
    #[error("Submodel descriptor '{submodel_id}' already exists in shell descriptor '{shell_id}'")]
    SubmodelAlreadyExists {
        /// Owning shell descriptor id
        shell_id: String,
        /// Colliding nested submodel descriptor id
        submodel_id: String,
    },

    /// The item a cursor points at no longer exists
    #[error("Cursor not found: {cursor}")]
    CursorNotFound {
        /// Decoded cursor value
        cursor: String,
    },

    /// The cursor could not be decoded from its wire format
    #[error("Invalid cursor: {cursor}")]
    InvalidCursor {
        /// Cursor as received from the caller
        cursor: String,
    },

    /// A peer registry failed with something other than a clean not-found
    #[error("Delegated lookup of '{id}' failed: {source}")]
    DelegationFailure {
        /// Identifier that was delegated
        id: String,
        /// Original peer failure
        #[source]
        source: BoxedCause,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedCause>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Lookup error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(id: S) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create an already exists error
    pub fn already_exists<S: Into<String>>(id: S) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Create a nested submodel not found error
    pub fn submodel_not_found<S: Into<String>, T: Into<String>>(shell_id: S, submodel_id: T) -> Self {
        Self::SubmodelNotFound {
            shell_id: shell_id.into(),
            submodel_id: submodel_id.into(),
        }
    }

    /// Create a nested submodel already exists error
    pub fn submodel_already_exists<S: Into<String>, T: Into<String>>(
        shell_id: S,
        submodel_id: T,
    ) -> Self {
        Self::SubmodelAlreadyExists {
            shell_id: shell_id.into(),
            submodel_id: submodel_id.into(),
        }
    }
}

// Pagination error creation methods
impl Error {
    /// Create a cursor not found error
    pub fn cursor_not_found<S: Into<String>>(cursor: S) -> Self {
        Self::CursorNotFound {
            cursor: cursor.into(),
        }
    }

    /// Create an invalid cursor error
    pub fn invalid_cursor<S: Into<String>>(cursor: S) -> Self {
        Self::InvalidCursor {
            cursor: cursor.into(),
        }
    }
}

// Delegation, configuration and internal error creation methods
impl Error {
    /// Wrap a peer failure for the delegated identifier
    pub fn delegation_failure<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        id: S,
        source: E,
    ) -> Self {
        Self::DelegationFailure {
            id: id.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification helpers
impl Error {
    /// True for a top-level descriptor miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the caller can recover by restarting pagination or treating the entry as absent
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. }
                | Self::SubmodelNotFound { .. }
                | Self::CursorNotFound { .. }
                | Self::InvalidCursor { .. }
        )
    }
}
