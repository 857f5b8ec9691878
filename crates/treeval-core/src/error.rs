//! Error types for the treeval core library
//!
//! Only configuration problems are errors: a misregistered validator or a
//! malformed schema aborts the whole call. Data that does not match its
//! schema is never an error; it shows up as `false` in the result tree.
//!
//! Copyright (c) 2025 Treeval Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Main error type for treeval operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A schema identifier was registered twice
    #[error("Schema {id} has already been added")]
    DuplicateSchema { id: String },

    /// A schema identifier was referenced but never registered
    #[error("Schema {id} does not exist")]
    UnknownSchema { id: String },

    /// A constraint identifier was referenced but never registered
    #[error("Constraint {id} does not exist")]
    UnknownConstraint { id: String },

    /// A schema position carries a missing or unrecognized kind
    #[error("Schema contains an invalid type at '{path}' (found {found})")]
    InvalidSchemaType { path: String, found: String },

    /// A schema document is structurally unusable
    #[error("Malformed schema at '{path}': {message}")]
    MalformedSchema { path: String, message: String },

    /// Validation descended deeper than the configured limit
    #[error("Maximum validation depth of {limit} exceeded at '{path}'")]
    DepthLimitExceeded { path: String, limit: usize },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_type<P, F>(path: P, found: F) -> Self
    where
        P: Into<String>,
        F: Into<String>,
    {
        Self::InvalidSchemaType {
            path: path.into(),
            found: found.into(),
        }
    }

    pub(crate) fn malformed<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self::MalformedSchema {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The identifier or schema path this error is about
    pub fn subject(&self) -> &str {
        match self {
            Self::DuplicateSchema { id }
            | Self::UnknownSchema { id }
            | Self::UnknownConstraint { id } => id,
            Self::InvalidSchemaType { path, .. }
            | Self::MalformedSchema { path, .. }
            | Self::DepthLimitExceeded { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_identifier() {
        let err = Error::DuplicateSchema { id: "user".to_string() };
        assert_eq!(err.to_string(), "Schema user has already been added");

        let err = Error::UnknownSchema { id: "hasNotBeenAddedYet".to_string() };
        assert_eq!(err.to_string(), "Schema hasNotBeenAddedYet does not exist");

        let err = Error::UnknownConstraint { id: "string".to_string() };
        assert_eq!(err.to_string(), "Constraint string does not exist");
    }

    #[test]
    fn test_invalid_type_message() {
        let err = Error::invalid_type("$.age", "no type");
        assert_eq!(
            err.to_string(),
            "Schema contains an invalid type at '$.age' (found no type)"
        );
    }

    #[test]
    fn test_subject() {
        assert_eq!(Error::UnknownConstraint { id: "dummy".into() }.subject(), "dummy");
        assert_eq!(Error::malformed("$.tags.ref", "missing ref").subject(), "$.tags.ref");
        assert_eq!(
            Error::DepthLimitExceeded { path: "$[0]".into(), limit: 4 }.subject(),
            "$[0]"
        );
    }
}
