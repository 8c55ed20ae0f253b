use crate::Reflect;
use crate::info::{Type, TypePath, impl_type_fn};

/// Metadata for types whose internals are opaque to the reflection system.
///
/// Scalars such as `u64` or `String` are opaque: a path may end on them,
/// but cannot step into them.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
}

impl OpaqueInfo {
    impl_type_fn!(ty);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: Reflect + TypePath + ?Sized>() -> Self {
        Self { ty: Type::of::<T>() }
    }
}
