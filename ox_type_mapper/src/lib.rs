//! ox_type_mapper - A type-pair keyed object mapping registry
//!
//! Mapping functions are registered for an ordered (source, destination)
//! pair of types and resolved again at call time, either from the value's
//! runtime type or from the statically named source type.

pub mod config;
pub mod error;
pub mod mappable;
pub mod registry;
pub mod sequence;
pub mod type_identity;
pub mod type_key;

pub use config::{DispatchMode, MapperConfig};
pub use error::{MapperError, Result};
pub use mappable::Mappable;
pub use registry::{MapFn, MappingRegistry};
pub use sequence::MapSequence;
pub use type_identity::TypeIdentity;
pub use type_key::TypeKey;
