/// Implements `TypePath` for a non-generic type with a module path.
macro_rules! impl_plain_type_path {
    ($ty:ty, $name:literal, $module:literal) => {
        impl $crate::info::TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                concat!($module, "::", $name)
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
                Some($module)
            }
        }
    };
}

pub(crate) use impl_plain_type_path;

/// Implements `TypePath` for a generic type, e.g.
/// `impl_generic_type_path!(Vec<T>, "Vec", "alloc::vec", <T>)`.
///
/// Names are built once per instantiation in a
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell).
macro_rules! impl_generic_type_path {
    ($ty:ty, $name:literal, $module:literal, <$($param:ident),+>) => {
        impl<$($param: $crate::info::TypePath),+> $crate::info::TypePath for $ty {
            fn type_path() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::generic_name(
                        concat!($module, "::", $name),
                        &[$(<$param as $crate::info::TypePath>::type_path()),+],
                    )
                })
            }

            fn type_name() -> &'static str {
                static CELL: $crate::impls::GenericTypePathCell =
                    $crate::impls::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::impls::generic_name(
                        $name,
                        &[$(<$param as $crate::info::TypePath>::type_name()),+],
                    )
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }
    };
}

pub(crate) use impl_generic_type_path;
