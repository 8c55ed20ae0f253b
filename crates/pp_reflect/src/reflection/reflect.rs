use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{DynamicTypePath, DynamicTyped, TypePath, Typed};
use crate::info::{OpaqueInfo, ReflectKind, TypeInfo};
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// Reflect

/// The foundational trait for read-only runtime reflection.
///
/// A `&dyn Reflect` can be inspected without knowing its concrete type:
/// its [`TypeInfo`] describes the shape, [`reflect_ref`] exposes the
/// matching access trait, and [`downcast_ref`] recovers the concrete type.
///
/// # Type Identification
///
/// `Reflect` is a subtrait of [`Any`], but [`Any::type_id`] on a
/// `Box<dyn Reflect>` returns the id of the box. Use [`Reflect::ty_id`]:
///
/// ```rust
/// use pp_reflect::Reflect;
/// use core::any::{Any, TypeId};
///
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
///
/// # Implementation
///
/// Use [the derive macro](crate::derive::Reflect). Non-opaque manual
/// implementations can rely on the helpers in [`impls`](crate::impls)
/// (`struct_partial_eq`, `list_debug`, ...).
///
/// [`reflect_ref`]: Reflect::reflect_ref
/// [`downcast_ref`]: <dyn Reflect>::downcast_ref
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a fully-reflected value.
    ///
    /// ```
    /// use pp_reflect::Reflect;
    ///
    /// let x = 32;
    /// let r: &dyn Reflect = x.as_reflect();
    /// ```
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Boxes the value as a `Box<dyn Reflect>`.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying value.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns the [`ReflectKind`] of the underlying value.
    fn reflect_kind(&self) -> ReflectKind;

    /// Returns the kind-specific access view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// Compares two reflected values.
    ///
    /// Returns `None` if the comparison is not supported.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use crate::impls;
        match self.reflect_ref() {
            ReflectRef::Struct(data) => impls::struct_debug(data, f),
            ReflectRef::List(data) | ReflectRef::Array(data) => impls::list_debug(data, f),
            ReflectRef::Set(data) => impls::set_debug(data, f),
            ReflectRef::Option(Some(data)) => f.debug_tuple("Some").field(&data).finish(),
            ReflectRef::Option(None) => f.pad("None"),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }

    /// Returns a type-erased serde view of the value.
    ///
    /// Implemented by opaque types that support serialization; composite
    /// types are serialized by walking their fields, see
    /// [`ReflectSerializer`](crate::serde::ReflectSerializer).
    #[inline]
    fn reflect_serialize(&self) -> Option<&dyn erased_serde::Serialize> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

impl TypePath for dyn Reflect {
    #[inline]
    fn type_path() -> &'static str {
        "dyn pp_reflect::Reflect"
    }
    #[inline]
    fn type_name() -> &'static str {
        "dyn Reflect"
    }
    #[inline]
    fn type_ident() -> &'static str {
        "dyn Reflect"
    }
}

impl Typed for dyn Reflect {
    fn type_info() -> &'static TypeInfo {
        static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
        CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_kind(&self) -> $crate::info::ReflectKind {
            $crate::info::ReflectKind::$kind
        }

        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;

    use crate::Reflect;

    #[test]
    fn downcast_recovers_the_concrete_type() {
        let name = String::from("Paris");
        let r: &dyn Reflect = &name;

        assert!(r.is::<String>());
        assert!(!r.is::<&'static str>());
        assert_eq!(r.downcast_ref::<String>().map(String::as_str), Some("Paris"));
        assert!(r.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn dyn_reflect_is_an_opaque_type() {
        use crate::info::{ReflectKind, Typed};

        let info = <dyn Reflect>::type_info();
        assert_eq!(info.kind(), ReflectKind::Opaque);
        assert_eq!(info.ty_id(), core::any::TypeId::of::<dyn Reflect>());
        assert_eq!(info.type_path(), "dyn Reflect");
    }

    #[test]
    fn debug_follows_the_reflected_shape() {
        let list: &dyn Reflect = &vec![1_u8, 2];
        assert_eq!(alloc::format!("{list:?}"), "[1, 2]");

        let some: &dyn Reflect = &Some(3_u8);
        assert_eq!(alloc::format!("{some:?}"), "Some(3)");

        let none: &dyn Reflect = &None::<u8>;
        assert_eq!(alloc::format!("{none:?}"), "None");
    }
}
