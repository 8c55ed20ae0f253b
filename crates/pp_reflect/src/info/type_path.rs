use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`]: the names do not
/// depend on the compiler version, and error messages built from them stay
/// readable.
///
/// - [`type_path`]: the full, unique path, e.g. `"alloc::vec::Vec<u32>"`.
/// - [`type_name`]: the path without modules, e.g. `"Vec<u32>"`.
/// - [`type_ident`]: the name without generics, e.g. `"Vec"`.
/// - [`module_path`]: the optional module, e.g. `Some("alloc::vec")`.
///
/// None of these names start with `::`.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements this trait.
/// A manual implementation for a non-generic type is a set of literals:
///
/// ```
/// use pp_reflect::info::TypePath;
///
/// struct Person;
///
/// impl TypePath for Person {
///     fn type_path() -> &'static str { "crm::model::Person" }
///     fn type_name() -> &'static str { "Person" }
///     fn type_ident() -> &'static str { "Person" }
///     fn module_path() -> Option<&'static str> { Some("crm::model") }
/// }
/// ```
///
/// Generic types build their names once through
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics.
    fn type_path() -> &'static str;

    /// Returns the path without module prefixes. May be duplicated.
    fn type_name() -> &'static str;

    /// Returns the bare name, without generics.
    fn type_ident() -> &'static str;

    /// Returns the module path, `None` for primitives.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`].
///
/// Implemented for every `T: TypePath`.
///
/// ```
/// use pp_reflect::{Reflect, info::DynamicTypePath};
///
/// let x = String::from("Paris");
/// let r: &dyn Reflect = &x;
/// assert_eq!(r.reflect_type_path(), "alloc::string::String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}

// -----------------------------------------------------------------------------
// TypePathTable

// Names of generic types are built lazily, so the table stores the
// functions rather than the strings.
#[derive(Clone, Copy)]
struct TypePathTable {
    type_path: fn() -> &'static str,
    type_name: fn() -> &'static str,
    type_ident: fn() -> &'static str,
    module_path: fn() -> Option<&'static str>,
}

impl TypePathTable {
    #[inline]
    const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path: T::type_path,
            type_name: T::type_name,
            type_ident: T::type_ident,
            module_path: T::module_path,
        }
    }

    #[inline(always)]
    fn path(&self) -> &'static str {
        (self.type_path)()
    }

    #[inline(always)]
    fn name(&self) -> &'static str {
        (self.type_name)()
    }

    #[inline(always)]
    fn ident(&self) -> &'static str {
        (self.type_ident)()
    }

    #[inline(always)]
    fn module_path(&self) -> Option<&'static str> {
        (self.module_path)()
    }
}

// -----------------------------------------------------------------------------
// Type

/// The identity of a Rust type: its [`TypeId`] and its names.
///
/// Equality and hashing only look at the [`TypeId`].
///
/// ```
/// use core::any::TypeId;
/// use pp_reflect::info::Type;
///
/// let ty = Type::of::<Vec<u32>>();
/// assert!(ty.is::<Vec<u32>>());
/// assert_eq!(ty.id(), TypeId::of::<Vec<u32>>());
/// assert_eq!(ty.name(), "Vec<u32>");
/// ```
#[derive(Copy, Clone)]
pub struct Type {
    type_path_table: TypePathTable,
    type_id: TypeId,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    #[inline]
    pub const fn of<T: TypePath + ?Sized>() -> Self {
        Self {
            type_path_table: TypePathTable::of::<T>(),
            type_id: TypeId::of::<T>(),
        }
    }

    /// Returns the [`TypeId`].
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.type_id
    }

    /// Returns `true` if this is the type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        TypeId::of::<T>() == self.type_id
    }

    /// See [`TypePath::type_path`].
    #[inline]
    pub fn path(&self) -> &'static str {
        self.type_path_table.path()
    }

    /// See [`TypePath::type_name`].
    #[inline]
    pub fn name(&self) -> &'static str {
        self.type_path_table.name()
    }

    /// See [`TypePath::type_ident`].
    #[inline]
    pub fn ident(&self) -> &'static str {
        self.type_path_table.ident()
    }

    /// See [`TypePath::module_path`].
    #[inline]
    pub fn module_path(&self) -> Option<&'static str> {
        self.type_path_table.module_path()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Type {}

impl core::hash::Hash for Type {
    #[inline]
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

/// Only prints the [`TypePath`].
impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

macro_rules! impl_type_fn {
    ($field:ident) => {
        /// Returns the underlying `Type`.
        #[inline(always)]
        pub const fn ty(&self) -> &$crate::info::Type {
            &self.$field
        }
        $crate::info::impl_type_fn!();
    };
    () => {
        /// Returns the `TypeId`.
        #[inline]
        pub const fn ty_id(&self) -> ::core::any::TypeId {
            self.ty().id()
        }

        /// Check if the given type matches this one.
        #[inline]
        pub fn type_is<T: ::core::any::Any>(&self) -> bool {
            self.ty().id() == ::core::any::TypeId::of::<T>()
        }

        /// Returns the type path.
        #[inline]
        pub fn type_path(&self) -> &'static str {
            self.ty().path()
        }

        /// Returns the type name.
        #[inline]
        pub fn type_name(&self) -> &'static str {
            self.ty().name()
        }

        /// Returns the type ident.
        #[inline]
        pub fn type_ident(&self) -> &'static str {
            self.ty().ident()
        }
    };
}

pub(crate) use impl_type_fn;
