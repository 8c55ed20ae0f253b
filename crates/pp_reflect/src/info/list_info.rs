use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{ContainsFn, Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::List;

/// A container for compile-time list-like info (`Vec<T>`, `VecDeque<T>`).
///
/// ```rust
/// use core::any::TypeId;
/// use pp_reflect::info::Typed;
///
/// let info = <Vec<i32> as Typed>::type_info().as_list().unwrap();
///
/// assert_eq!(info.item_id(), TypeId::of::<i32>());
///
/// let contains = info.contains_fn();
/// assert!(contains(&vec![1, 2, 3], &2));
/// assert!(!contains(&vec![1, 2, 3], &7));
/// ```
#[derive(Clone, Debug)]
pub struct ListInfo {
    ty: Type,
    item_id: TypeId,
    // `TypeInfo` is created on the first visit, use function pointers to delay it.
    item_info: fn() -> &'static TypeInfo,
    contains: ContainsFn,
}

impl ListInfo {
    impl_type_fn!(ty);

    /// Creates a new [`ListInfo`].
    #[inline]
    pub fn new<TList: List + TypePath, TItem: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TList>(),
            item_id: TypeId::of::<TItem>(),
            item_info: TItem::type_info,
            contains: list_contains::<TList, TItem>,
        }
    }

    /// Returns the [`TypeId`] of list items.
    #[inline]
    pub const fn item_id(&self) -> TypeId {
        self.item_id
    }

    /// Returns `true` if the item type is `T`.
    #[inline]
    pub fn item_is<T: Any>(&self) -> bool {
        self.item_id == TypeId::of::<T>()
    }

    /// Returns the [`TypeInfo`] of list items.
    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item_info)()
    }

    /// Returns the membership test for this list type.
    #[inline]
    pub const fn contains_fn(&self) -> ContainsFn {
        self.contains
    }
}

/// Linear scan using the items' reflected equality.
///
/// Shared by [`ListInfo`] and [`ArrayInfo`](crate::info::ArrayInfo).
pub(super) fn list_contains<TList: List, TItem: Reflect>(
    sequence: &dyn Reflect,
    candidate: &dyn Reflect,
) -> bool {
    if !candidate.is::<TItem>() {
        return false;
    }
    let Some(list) = sequence.downcast_ref::<TList>() else {
        return false;
    };
    let list: &dyn List = list;
    list.iter()
        .any(|item| item.reflect_partial_eq(candidate) == Some(true))
}
