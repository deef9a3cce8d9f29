//! Lazy mapping over a sequence of source values.

use std::any::Any;
use std::borrow::Borrow;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use log::trace;

use crate::error::Result;
use crate::mappable::Mappable;
use crate::registry::{apply, MapFn, MappingRegistry};
use crate::type_identity::TypeIdentity;
use crate::type_key::TypeKey;

/// Iterator returned by [`MappingRegistry::map_sequence`].
///
/// The mapping function is resolved on the first call to `next` from the
/// first element and reused for every later element, so a sequence is
/// expected to hold a single source type. The first error is yielded and
/// ends the iteration.
pub struct MapSequence<'a, I, S: ?Sized, D> {
    registry: &'a MappingRegistry,
    source: I,
    mapping: Option<MapFn>,
    done: bool,
    _marker: PhantomData<fn(&S) -> D>,
}

impl<'a, I, S: ?Sized, D> MapSequence<'a, I, S, D> {
    pub(crate) fn new(registry: &'a MappingRegistry, source: I) -> Self {
        Self {
            registry,
            source,
            mapping: None,
            done: false,
            _marker: PhantomData,
        }
    }

    /// Whether the mapping function has been resolved yet.
    pub fn is_resolved(&self) -> bool {
        self.mapping.is_some()
    }
}

impl<I, S, D> Iterator for MapSequence<'_, I, S, D>
where
    I: Iterator,
    I::Item: Borrow<S>,
    S: Mappable + ?Sized,
    D: Any,
{
    type Item = Result<D>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let Some(item) = self.source.next() else {
            self.done = true;
            return None;
        };
        let source: &S = item.borrow();

        if self.mapping.is_none() {
            let key = TypeKey::new(self.registry.source_identity(source), TypeIdentity::of::<D>());
            trace!("Resolving sequence mapping {} from first element", key);
            match self.registry.resolve(&key) {
                Ok(mapping) => self.mapping = Some(mapping),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        let mapping = self.mapping.as_ref()?;
        let result = apply(mapping, source.as_mappable());
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, S, D> FusedIterator for MapSequence<'_, I, S, D>
where
    I: Iterator,
    I::Item: Borrow<S>,
    S: Mappable + ?Sized,
    D: Any,
{
}

impl<I: Clone, S: ?Sized, D> Clone for MapSequence<'_, I, S, D> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry,
            source: self.source.clone(),
            mapping: self.mapping.clone(),
            done: self.done,
            _marker: PhantomData,
        }
    }
}
