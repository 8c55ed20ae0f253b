/// Implements the `Reflect` methods of a type that is `PartialEq + Debug`
/// and carries no reflected internals.
macro_rules! impl_simple_type_reflect {
    ($kind:ident) => {
        $crate::reflection::impl_reflect_cast_fn!($kind);

        fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
            match <dyn $crate::Reflect>::downcast_ref::<Self>(value) {
                Some(value) => Some(PartialEq::eq(self, value)),
                None => Some(false),
            }
        }

        fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
            ::core::fmt::Debug::fmt(self, f)
        }
    };
}

pub(crate) use impl_simple_type_reflect;

/// Implements `TypePath`, `Typed` and `Reflect` for a serializable opaque
/// type.
///
/// `impl_opaque_type!(u8)` names a primitive; `impl_opaque_type!(String,
/// "alloc::string")` adds the module path.
macro_rules! impl_opaque_type {
    ($ty:ty, $name:literal) => {
        $crate::impls::impl_opaque_type!(@impl $ty, $name, $name, None);
    };
    ($ty:ty, $name:literal, $module:literal) => {
        $crate::impls::impl_opaque_type!(
            @impl $ty, concat!($module, "::", $name), $name, Some($module)
        );
    };
    (@impl $ty:ty, $path:expr, $name:literal, $module:expr) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }
            #[inline]
            fn type_name() -> &'static str {
                $name
            }
            #[inline]
            fn type_ident() -> &'static str {
                $name
            }
            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::NonGenericTypeInfoCell =
                    $crate::impls::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::Opaque($crate::info::OpaqueInfo::new::<Self>())
                })
            }
        }

        impl $crate::Reflect for $ty {
            $crate::impls::impl_simple_type_reflect!(Opaque);

            #[inline]
            fn reflect_serialize(&self) -> Option<&dyn ::erased_serde::Serialize> {
                Some(self)
            }
        }
    };
}

pub(crate) use impl_opaque_type;
