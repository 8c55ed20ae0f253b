use core::any::Any;
use core::fmt;

use pp_reflect::Reflect;
use pp_reflect::info::{ReflectKind, TypeInfo};
use pp_reflect::serde::ReflectSerializer;

// -----------------------------------------------------------------------------
// PathValue

/// A value read through a [`CompiledAccessor`], tagged with its static type.
///
/// The tag is the accessor's terminal [`TypeInfo`], so callers can decide
/// how to compare or filter without inspecting the value itself.
///
/// [`CompiledAccessor`]: crate::CompiledAccessor
#[derive(Clone, Copy)]
pub struct PathValue<'a> {
    value: &'a dyn Reflect,
    info: &'static TypeInfo,
}

impl<'a> PathValue<'a> {
    #[inline]
    pub(crate) const fn new(value: &'a dyn Reflect, info: &'static TypeInfo) -> Self {
        Self { value, info }
    }

    /// Returns the erased value.
    #[inline]
    pub const fn as_reflect(&self) -> &'a dyn Reflect {
        self.value
    }

    /// Returns the static type of the value.
    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }

    #[inline]
    pub const fn kind(&self) -> ReflectKind {
        self.info.kind()
    }

    /// Returns `true` if the value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.info.type_is::<T>()
    }

    /// Borrows the value as its concrete type.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }

    /// Compares with another reflected value.
    ///
    /// `None` if the type does not support reflected equality.
    #[inline]
    pub fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        self.value.reflect_partial_eq(other)
    }

    /// Returns a `serde::Serialize` adapter over the value.
    ///
    /// ```
    /// use pp_access::CompilationCache;
    /// use pp_reflect::derive::Reflect;
    ///
    /// #[derive(Reflect)]
    /// struct Order {
    ///     lines: Vec<u32>,
    /// }
    ///
    /// let cache = CompilationCache::<Order>::new();
    /// let accessor = cache.get_or_compile("lines").unwrap();
    ///
    /// let order = Order { lines: vec![3, 5] };
    /// let value = accessor.get(&order).unwrap();
    /// assert_eq!(serde_json::to_string(&value.serializable()).unwrap(), "[3,5]");
    /// ```
    #[inline]
    pub const fn serializable(&self) -> ReflectSerializer<'a> {
        ReflectSerializer::new(self.value)
    }
}

impl PartialEq for PathValue<'_> {
    /// Reflected equality; values without it never compare equal.
    fn eq(&self, other: &Self) -> bool {
        self.reflect_partial_eq(other.value) == Some(true)
    }
}

impl fmt::Debug for PathValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.reflect_debug(f)
    }
}
