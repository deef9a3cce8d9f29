//! Runtime type inspection for mapping sources.

use std::any::{Any, TypeId};

use crate::type_identity::TypeIdentity;

/// A value whose concrete type can be asked for at runtime.
///
/// Implemented for every `'static` type, so `&dyn Mappable` can carry any
/// value while still reporting the type behind it. A `Box<dyn Mappable>`
/// is itself a `'static` value, so deref it (`boxed.as_ref()`) before
/// mapping or the box type is what gets reported.
pub trait Mappable: Any {
    /// Identity of the concrete type of this value.
    fn type_identity(&self) -> TypeIdentity;

    fn as_any(&self) -> &dyn Any;

    fn as_mappable(&self) -> &dyn Mappable;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> Mappable for T {
    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::from_parts(TypeId::of::<T>(), std::any::type_name::<T>())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_mappable(&self) -> &dyn Mappable {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_object_reports_concrete_type() {
        let boxed: Box<dyn Mappable> = Box::new(42_i64);
        let value: &dyn Mappable = boxed.as_ref();
        assert!(value.type_identity().is::<i64>());
        assert_eq!(value.as_any().downcast_ref::<i64>(), Some(&42));
    }

    #[test]
    fn test_as_mappable_keeps_concrete_type() {
        let text = String::from("hello");
        let erased: &dyn Mappable = text.as_mappable();
        assert!(erased.as_mappable().type_identity().is::<String>());
    }
}
