use std::fmt;

use crate::type_identity::TypeIdentity;

/// Ordered (source, destination) pair identifying one registered mapping.
///
/// `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    source: TypeIdentity,
    destination: TypeIdentity,
}

impl TypeKey {
    pub fn new(source: TypeIdentity, destination: TypeIdentity) -> Self {
        Self { source, destination }
    }

    /// Key for mapping `S` into `D`.
    pub fn of<S: ?Sized + 'static, D: ?Sized + 'static>() -> Self {
        Self::new(TypeIdentity::of::<S>(), TypeIdentity::of::<D>())
    }

    pub fn source(&self) -> TypeIdentity {
        self.source
    }

    pub fn destination(&self) -> TypeIdentity {
        self.destination
    }

    /// The same pair with source and destination swapped.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.source)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}
