//! ox_mapper - register mapping functions per (source, destination) type
//! pair and apply them to single values or lazily to sequences.
//!
//! ```
//! use ox_mapper::MappingRegistry;
//!
//! let mapper = MappingRegistry::new();
//! mapper.register(|name: &String| format!("Hello {}", name))?;
//!
//! let greeting: String = mapper.map(&"Tim".to_string())?;
//! assert_eq!(greeting, "Hello Tim");
//!
//! let names = vec!["Test1".to_string(), "Test2".to_string()];
//! let greetings = mapper
//!     .map_sequence::<String, String, _>(&names)
//!     .collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(greetings, ["Hello Test1", "Hello Test2"]);
//! # Ok::<(), ox_mapper::MapperError>(())
//! ```

pub use ox_type_mapper::{
    DispatchMode, MapFn, MapSequence, Mappable, MapperConfig, MapperError, MappingRegistry,
    Result, TypeIdentity, TypeKey,
};
