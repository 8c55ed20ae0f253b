use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{ContainsFn, Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

use super::list_info::list_contains;

/// A container for compile-time array info, e.g. `[u8; 4]`.
///
/// Arrays share the [`List`] access trait with growable lists.
///
/// ```rust
/// use pp_reflect::info::Typed;
///
/// let info = <[u8; 4] as Typed>::type_info().as_array().unwrap();
///
/// assert_eq!(info.capacity(), 4);
/// assert!(info.item_is::<u8>());
/// ```
#[derive(Clone, Debug)]
pub struct ArrayInfo {
    ty: Type,
    item_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    capacity: usize,
    contains: ContainsFn,
}

impl ArrayInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ArrayInfo`] for an array of `capacity` items.
    #[inline]
    pub fn new<TArray: List + TypePath, TItem: Reflect + Typed>(capacity: usize) -> Self {
        Self {
            ty: Type::of::<TArray>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            capacity,
            contains: list_contains::<TArray, TItem>,
        }
    }

    /// Returns the fixed length of the array.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the [`TypeId`] of array items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of array items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the membership test for this array type.
    #[inline]
    pub const fn contains_fn(&self) -> ContainsFn {
        self.contains
    }
}
