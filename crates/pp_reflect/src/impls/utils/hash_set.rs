/// Implements `Typed`, `Reflect` and `Set` for a hash set type with
/// parameters `T` and `S`.
macro_rules! impl_reflect_for_hashset {
    ($ty:ty) => {
        impl<T, S> $crate::info::Typed for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Send + Sync,
        {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell =
                    $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::Set($crate::info::SetInfo::new::<Self, T>())
                })
            }
        }

        impl<T, S> $crate::Reflect for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Send + Sync,
        {
            $crate::reflection::impl_reflect_cast_fn!(Set);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::set_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::set_debug(self, f)
            }
        }

        impl<T, S> $crate::ops::Set for $ty
        where
            T: $crate::Reflect + $crate::info::Typed + Eq + ::core::hash::Hash,
            S: $crate::info::TypePath + ::core::hash::BuildHasher + Send + Sync,
        {
            fn get(&self, value: &dyn $crate::Reflect) -> Option<&dyn $crate::Reflect> {
                value
                    .downcast_ref::<T>()
                    .and_then(|value| Self::get(self, value))
                    .map(|value| value as &dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                Self::len(self)
            }

            fn iter(&self) -> ::alloc::boxed::Box<dyn Iterator<Item = &dyn $crate::Reflect> + '_> {
                ::alloc::boxed::Box::new(
                    Self::iter(self).map(|value| value as &dyn $crate::Reflect),
                )
            }
        }
    };
}

pub(crate) use impl_reflect_for_hashset;
