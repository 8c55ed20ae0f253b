//! Containers for static storage of type information.
//!
//! Used to implement [`Typed`](crate::info::Typed) and, for generic types,
//! [`TypePath`](crate::info::TypePath).
//!
//! ## NonGenericTypeInfoCell
//!
//! Stores the [`TypeInfo`] of one non-generic type in a [`OnceLock`].
//! There is no `NonGenericTypePathCell`: a string literal does the job.
//!
//! ## GenericTypeCell
//!
//! A `static CELL` inside a generic function is shared by every
//! instantiation, so these containers key their entries by [`TypeId`]:
//!
//! - [`GenericTypeInfoCell`]: stores [`TypeInfo`].
//! - [`GenericTypePathCell`]: stores [`String`].
//!
//! Entries are leaked and live for the rest of the program.

use alloc::{boxed::Box, string::String};
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use pp_utils::TypeIdMap;

use crate::info::TypeInfo;

mod sealed {
    use super::TypeInfo;
    use alloc::string::String;
    pub trait TypedProperty: 'static {}

    impl TypedProperty for String {}
    impl TypedProperty for TypeInfo {}
}

use sealed::TypedProperty;

// -----------------------------------------------------------------------------
// NonGenericTypeCell

/// Container for static storage of non-generic type information.
///
/// See [`NonGenericTypeInfoCell`].
pub struct NonGenericTypeCell<T: TypedProperty>(OnceLock<T>);

/// Container for static storage of a non-generic [`TypeInfo`].
///
/// ```
/// use pp_reflect::impls::NonGenericTypeInfoCell;
/// use pp_reflect::info::{OpaqueInfo, TypeInfo, TypePath, Typed};
/// # use pp_reflect::{Reflect, info::ReflectKind, ops::ReflectRef};
///
/// struct Celsius(f64);
/// # impl Reflect for Celsius {
/// #     fn reflect_kind(&self) -> ReflectKind { ReflectKind::Opaque }
/// #     fn reflect_ref(&self) -> ReflectRef<'_> { ReflectRef::Opaque(self) }
/// # }
///
/// impl TypePath for Celsius {
///     fn type_path() -> &'static str { "weather::Celsius" }
///     fn type_name() -> &'static str { "Celsius" }
///     fn type_ident() -> &'static str { "Celsius" }
/// }
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Opaque(OpaqueInfo::new::<Self>()))
///     }
/// }
///
/// assert!(core::ptr::eq(Celsius::type_info(), Celsius::type_info()));
/// ```
pub type NonGenericTypeInfoCell = NonGenericTypeCell<TypeInfo>;

impl<T: TypedProperty> NonGenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored value, generating it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.0.get_or_init(|| {
            #[cfg(all(debug_assertions, feature = "debug"))]
            log::trace!("initializing non-generic `{}` cell", core::any::type_name::<T>());
            f()
        })
    }
}

impl<T: TypedProperty> Default for NonGenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// GenericTypeCell

/// Container for static storage of type information with generics.
///
/// See [`GenericTypeInfoCell`] and [`GenericTypePathCell`].
pub struct GenericTypeCell<T: TypedProperty>(RwLock<TypeIdMap<&'static T>>);

/// Container for static storage of a generic type's [`TypeInfo`].
///
/// ```
/// use pp_reflect::{derive::Reflect, impls::GenericTypeInfoCell};
/// use pp_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
/// use pp_reflect::Reflect;
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Wrapper<T> {
///     inner: T,
/// }
///
/// impl<T: Reflect + Typed> Typed for Wrapper<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<T>(
///                 "inner",
///                 |owner| owner.downcast_ref::<Self>().map(|w| &w.inner as &dyn Reflect),
///             )]))
///         })
///     }
/// }
///
/// let a = <Wrapper<u8>>::type_info().as_struct().unwrap();
/// let b = <Wrapper<String>>::type_info().as_struct().unwrap();
/// assert!(a.field("inner").unwrap().type_is::<u8>());
/// assert!(b.field("inner").unwrap().type_is::<String>());
/// ```
pub type GenericTypeInfoCell = GenericTypeCell<TypeInfo>;

/// Container for static storage of a generic type's path strings.
///
/// ```
/// use pp_reflect::impls::{self, GenericTypePathCell};
/// use pp_reflect::info::TypePath;
///
/// struct Pair<T>(T, T);
///
/// impl<T: TypePath> TypePath for Pair<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["geo::Pair<", T::type_path(), ">"]))
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| impls::concat(&["Pair<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Pair" }
/// }
///
/// assert_eq!(<Pair<i32>>::type_path(), "geo::Pair<i32>");
/// assert_eq!(<Pair<u8>>::type_name(), "Pair<u8>");
/// ```
pub type GenericTypePathCell = GenericTypeCell<String>;

impl<T: TypedProperty> GenericTypeCell<T> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the value stored for `G`, generating it with `f` if absent.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> T) -> &T {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn get_or_insert_by_type_id(&self, type_id: TypeId, f: impl FnOnce() -> T) -> &T {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&T> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // Two threads may both build the value; the first insertion wins and
    // the loser's value is dropped.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: T) -> &T {
        let mut guard = self.0.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(&existing) = guard.get(&type_id) {
            return existing;
        }
        #[cfg(all(debug_assertions, feature = "debug"))]
        log::trace!("initializing generic `{}` cell entry", core::any::type_name::<T>());
        *guard.get_or_insert(type_id, || &*Box::leak(Box::new(value)))
    }
}

impl<T: TypedProperty> Default for GenericTypeCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
