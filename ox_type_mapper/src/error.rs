use thiserror::Error;

use crate::type_key::TypeKey;

/// Errors raised while registering or applying mappings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    /// A mapping for the pair is already registered; the existing one stays in effect.
    #[error("A mapping from '{source_type}' to '{destination_type}' is already registered")]
    DuplicateMapping {
        source_type: &'static str,
        destination_type: &'static str,
    },

    #[error("No mapping registered from '{source_type}' to '{destination_type}'")]
    MappingNotFound {
        source_type: &'static str,
        destination_type: &'static str,
    },

    /// No source value was supplied, so there is no type to inspect.
    #[error("Cannot map an absent source value to '{destination_type}'")]
    InvalidSource { destination_type: &'static str },

    /// A value reached a mapping function registered for another type.
    #[error("Type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Invalid mapper configuration: {0}")]
    Config(String),
}

impl MapperError {
    pub(crate) fn duplicate(key: &TypeKey) -> Self {
        Self::DuplicateMapping {
            source_type: key.source().name(),
            destination_type: key.destination().name(),
        }
    }

    pub(crate) fn not_found(key: &TypeKey) -> Self {
        Self::MappingNotFound {
            source_type: key.source().name(),
            destination_type: key.destination().name(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapperError>;
