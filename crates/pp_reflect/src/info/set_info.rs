use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{ContainsFn, Type, TypeInfo, TypePath, Typed, impl_type_fn};
use crate::ops::Set;

/// A container for compile-time set-like info.
///
/// The membership test delegates to the set's own lookup, so a `HashSet`
/// answers in O(1) and a `BTreeSet` in O(log n).
///
/// ```rust
/// use std::collections::BTreeSet;
/// use pp_reflect::info::Typed;
///
/// let info = <BTreeSet<String> as Typed>::type_info().as_set().unwrap();
/// assert!(info.value_is::<String>());
///
/// let tags: BTreeSet<String> = ["vip".to_string()].into();
/// assert!((info.contains_fn())(&tags, &"vip".to_string()));
/// ```
#[derive(Clone, Debug)]
pub struct SetInfo {
    ty: Type,
    value_id: TypeId,
    // `TypeInfo` is created on first access; use a function pointer to delay it.
    value_info: fn() -> &'static TypeInfo,
    contains: ContainsFn,
}

impl SetInfo {
    impl_type_fn!(ty);

    /// Create a new [`SetInfo`].
    #[inline]
    pub fn new<TSet: Set + TypePath, TValue: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<TSet>(),
            value_id: TypeId::of::<TValue>(),
            value_info: TValue::type_info,
            contains: set_contains::<TSet>,
        }
    }

    /// Returns the [`TypeId`] of set values.
    #[inline]
    pub const fn value_id(&self) -> TypeId {
        self.value_id
    }

    /// Returns `true` if the value type is `T`.
    #[inline]
    pub fn value_is<T: Any>(&self) -> bool {
        self.value_id == TypeId::of::<T>()
    }

    /// Returns the value element's [`TypeInfo`].
    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value_info)()
    }

    /// Returns the membership test for this set type.
    #[inline]
    pub const fn contains_fn(&self) -> ContainsFn {
        self.contains
    }
}

fn set_contains<TSet: Set>(sequence: &dyn Reflect, candidate: &dyn Reflect) -> bool {
    sequence
        .downcast_ref::<TSet>()
        .is_some_and(|set| set.contains(candidate))
}
