use core::any::{Any, TypeId};

use crate::Reflect;
use crate::info::{FieldGetter, Type, TypeInfo, Typed, impl_type_fn};

/// Compile-time info for `Option<T>`.
///
/// Path resolution treats `Option<T>` as a nullable reference to `T`: the
/// [`unwrap`](OptionInfo::unwrap) step yields the payload or `None`.
///
/// ```rust
/// use pp_reflect::{Reflect, info::Typed};
///
/// let info = <Option<u32>>::type_info().as_option().unwrap();
/// assert!(info.some_is::<u32>());
///
/// let unwrap = info.unwrap();
/// assert_eq!(unwrap(&Some(7_u32)).and_then(|v| v.downcast_ref::<u32>()), Some(&7));
/// assert!(unwrap(&None::<u32>).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct OptionInfo {
    ty: Type,
    some_id: TypeId,
    // `TypeInfo` is created on first access; use a function pointer to delay it.
    some_info: fn() -> &'static TypeInfo,
    unwrap: FieldGetter,
}

impl OptionInfo {
    impl_type_fn!(ty);

    /// Creates the info for `Option<T>`.
    #[inline]
    pub fn new<T: Reflect + Typed>() -> Self {
        Self {
            ty: Type::of::<Option<T>>(),
            some_id: TypeId::of::<T>(),
            some_info: T::type_info,
            unwrap: unwrap_option::<T>,
        }
    }

    /// Returns the [`TypeId`] of the payload.
    #[inline]
    pub const fn some_id(&self) -> TypeId {
        self.some_id
    }

    /// Returns `true` if the payload type is `T`.
    #[inline]
    pub fn some_is<T: Any>(&self) -> bool {
        self.some_id == TypeId::of::<T>()
    }

    /// Returns the payload's [`TypeInfo`].
    #[inline]
    pub fn some_info(&self) -> &'static TypeInfo {
        (self.some_info)()
    }

    /// Returns the step borrowing the payload out of an `Option<T>`.
    #[inline]
    pub const fn unwrap(&self) -> FieldGetter {
        self.unwrap
    }
}

fn unwrap_option<T: Reflect>(value: &dyn Reflect) -> Option<&dyn Reflect> {
    value
        .downcast_ref::<Option<T>>()?
        .as_ref()
        .map(|some| some as &dyn Reflect)
}
