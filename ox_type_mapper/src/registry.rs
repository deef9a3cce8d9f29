use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, trace};

use crate::config::{DispatchMode, MapperConfig};
use crate::error::{MapperError, Result};
use crate::mappable::Mappable;
use crate::sequence::MapSequence;
use crate::type_identity::TypeIdentity;
use crate::type_key::TypeKey;

/// Type-erased mapping function as stored in the registry.
///
/// The function downcasts its input itself and fails with
/// [`MapperError::TypeMismatch`] when handed a value of another type.
pub type MapFn = Arc<dyn Fn(&dyn Mappable) -> Result<Box<dyn Mappable>> + Send + Sync>;

/// Registry of mapping functions keyed by (source type, destination type).
///
/// Entries are only ever added. Registration and lookup take `&self`, so a
/// registry can be shared between threads behind an `Arc`.
pub struct MappingRegistry {
    mappings: DashMap<TypeKey, MapFn>,
    config: MapperConfig,
}

impl MappingRegistry {
    /// Create an empty registry using runtime dispatch.
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            mappings: DashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn dispatch_mode(&self) -> DispatchMode {
        self.config.dispatch
    }

    /// Register the function mapping `S` into `D`.
    ///
    /// Fails with [`MapperError::DuplicateMapping`] if the pair is already
    /// registered; the existing function is kept. The check and the insert
    /// happen under the same shard lock, so of two racing registrations for
    /// one pair exactly one succeeds.
    pub fn register<S, D, F>(&self, mapping: F) -> Result<()>
    where
        S: Any,
        D: Any,
        F: Fn(&S) -> D + Send + Sync + 'static,
    {
        let key = TypeKey::of::<S, D>();
        let erased: MapFn = Arc::new(move |source: &dyn Mappable| {
            let typed = source.as_any().downcast_ref::<S>().ok_or_else(|| {
                MapperError::TypeMismatch {
                    expected: std::any::type_name::<S>(),
                    found: source.type_identity().name(),
                }
            })?;
            Ok(Box::new(mapping(typed)) as Box<dyn Mappable>)
        });

        match self.mappings.entry(key) {
            Entry::Occupied(_) => {
                debug!("Rejected duplicate mapping {}", key);
                Err(MapperError::duplicate(&key))
            }
            Entry::Vacant(slot) => {
                slot.insert(erased);
                debug!("Registered mapping {}", key);
                Ok(())
            }
        }
    }

    /// Look up the function stored under `key`.
    ///
    /// The returned handle is detached from the map, so invoking it holds no
    /// registry lock.
    pub fn resolve(&self, key: &TypeKey) -> Result<MapFn> {
        trace!("Resolving mapping {}", key);
        self.mappings
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| MapperError::not_found(key))
    }

    /// Map `source` into a `D`.
    ///
    /// With [`DispatchMode::Runtime`] the lookup uses the concrete type of the
    /// value, so a `&dyn Mappable` resolves by the type behind it. With
    /// [`DispatchMode::Explicit`] the lookup uses `S` as written at the call
    /// site.
    pub fn map<S, D>(&self, source: &S) -> Result<D>
    where
        S: Mappable + ?Sized,
        D: Any,
    {
        self.try_map(Some(source))
    }

    /// Like [`MappingRegistry::map`], but accepts an absent source and fails
    /// with [`MapperError::InvalidSource`] for it.
    pub fn try_map<S, D>(&self, source: Option<&S>) -> Result<D>
    where
        S: Mappable + ?Sized,
        D: Any,
    {
        let source = source.ok_or(MapperError::InvalidSource {
            destination_type: std::any::type_name::<D>(),
        })?;
        let key = TypeKey::new(self.source_identity(source), TypeIdentity::of::<D>());
        let mapping = self.resolve(&key)?;
        apply(&mapping, source.as_mappable())
    }

    /// Map using the statically known source type, whatever the dispatch mode.
    pub fn map_from<S, D>(&self, source: &S) -> Result<D>
    where
        S: Any,
        D: Any,
    {
        let mapping = self.resolve(&TypeKey::of::<S, D>())?;
        apply(&mapping, source)
    }

    /// Lazily map every element of `source` into a `D`.
    ///
    /// Nothing is resolved or invoked until the result is iterated. The
    /// function is resolved once, from the first element, and then applied
    /// to every element; an element of another type fails when it is reached.
    pub fn map_sequence<S, D, I>(&self, source: I) -> MapSequence<'_, I::IntoIter, S, D>
    where
        I: IntoIterator,
        I::Item: Borrow<S>,
        S: Mappable + ?Sized,
        D: Any,
    {
        MapSequence::new(self, source.into_iter())
    }

    pub fn has_mapping<S: Any, D: Any>(&self) -> bool {
        self.contains_key(&TypeKey::of::<S, D>())
    }

    pub fn contains_key(&self, key: &TypeKey) -> bool {
        self.mappings.contains_key(key)
    }

    /// All registered pairs, ordered by source then destination type name.
    pub fn registered_keys(&self) -> Vec<TypeKey> {
        let mut keys: Vec<TypeKey> = self.mappings.iter().map(|entry| *entry.key()).collect();
        keys.sort_by(|a, b| {
            (a.source().name(), a.destination().name())
                .cmp(&(b.source().name(), b.destination().name()))
        });
        keys
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub(crate) fn source_identity<S>(&self, source: &S) -> TypeIdentity
    where
        S: Mappable + ?Sized,
    {
        match self.config.dispatch {
            DispatchMode::Runtime => source.type_identity(),
            DispatchMode::Explicit => TypeIdentity::of::<S>(),
        }
    }
}

impl Default for MappingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MappingRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingRegistry")
            .field("mappings", &self.registered_keys())
            .field("config", &self.config)
            .finish()
    }
}

/// Invoke an erased mapping and restore the destination type.
pub(crate) fn apply<D: Any>(mapping: &MapFn, source: &dyn Mappable) -> Result<D> {
    let mapped = mapping(source)?;
    let found = (*mapped).type_identity().name();
    Mappable::into_any(mapped)
        .downcast::<D>()
        .map(|value| *value)
        .map_err(|_| MapperError::TypeMismatch {
            expected: std::any::type_name::<D>(),
            found,
        })
}
