use core::any::{Any, TypeId};
use core::fmt;

use crate::Reflect;
use crate::info::{TypeInfo, Typed};

// -----------------------------------------------------------------------------
// FieldGetter

/// Borrows one field out of its owner.
///
/// Returns `None` if `owner` is not the type that declared the field.
/// Generated by [`#[derive(Reflect)]`](crate::derive::Reflect) as a
/// non-capturing closure, so calling it costs a `TypeId` comparison and a
/// field offset.
pub type FieldGetter = fn(&dyn Reflect) -> Option<&dyn Reflect>;

// -----------------------------------------------------------------------------
// NamedField

/// Information for a named struct field.
///
/// ```
/// use pp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// struct Person {
///     #[reflect(rename = "Age")]
///     age: u32,
/// }
///
/// let info = Person::type_info().as_struct().unwrap();
/// let field = info.field("Age").unwrap();
///
/// assert!(field.type_is::<u32>());
///
/// let person = Person { age: 42 };
/// let value = field.get(&person).unwrap();
/// assert_eq!(value.downcast_ref::<u32>(), Some(&42));
/// ```
#[derive(Clone)]
pub struct NamedField {
    ty_id: TypeId,
    name: &'static str,
    // `TypeInfo` is created on first access; a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    getter: FieldGetter,
}

impl NamedField {
    /// Creates a field named `name` of type `T`, read through `getter`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str, getter: FieldGetter) -> Self {
        Self {
            ty_id: TypeId::of::<T>(),
            name,
            type_info: T::type_info,
            getter,
        }
    }

    /// Returns the `TypeId` of the field type.
    #[inline]
    pub const fn ty_id(&self) -> TypeId {
        self.ty_id
    }

    /// Check if the field type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id == TypeId::of::<T>()
    }

    /// Returns the reflected field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the field's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the pre-resolved getter.
    #[inline]
    pub const fn getter(&self) -> FieldGetter {
        self.getter
    }

    /// Borrows this field out of `owner`.
    #[inline]
    pub fn get<'a>(&self, owner: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.getter)(owner)
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("type", &self.type_info().type_path())
            .finish()
    }
}
