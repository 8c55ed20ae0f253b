use alloc::string::String;

use crate::impls::impl_opaque_type;

impl_opaque_type!(bool, "bool");
impl_opaque_type!(char, "char");
impl_opaque_type!(u8, "u8");
impl_opaque_type!(u16, "u16");
impl_opaque_type!(u32, "u32");
impl_opaque_type!(u64, "u64");
impl_opaque_type!(u128, "u128");
impl_opaque_type!(usize, "usize");
impl_opaque_type!(i8, "i8");
impl_opaque_type!(i16, "i16");
impl_opaque_type!(i32, "i32");
impl_opaque_type!(i64, "i64");
impl_opaque_type!(i128, "i128");
impl_opaque_type!(isize, "isize");
impl_opaque_type!(f32, "f32");
impl_opaque_type!(f64, "f64");
impl_opaque_type!((), "()");
impl_opaque_type!(&'static str, "&str");
impl_opaque_type!(String, "String", "alloc::string");

// -----------------------------------------------------------------------------
// Array

mod array {
    use crate::Reflect;
    use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
    use crate::info::{ArrayInfo, TypeInfo, TypePath, Typed};
    use crate::ops::List;
    use crate::reflection::impl_reflect_cast_fn;

    impl<T: TypePath, const N: usize> TypePath for [T; N] {
        fn type_path() -> &'static str {
            static CELL: GenericTypePathCell = GenericTypePathCell::new();
            CELL.get_or_insert::<Self>(|| {
                concat(&["[", T::type_path(), "; ", &N.to_string(), "]"])
            })
        }

        fn type_name() -> &'static str {
            static CELL: GenericTypePathCell = GenericTypePathCell::new();
            CELL.get_or_insert::<Self>(|| {
                concat(&["[", T::type_name(), "; ", &N.to_string(), "]"])
            })
        }

        #[inline]
        fn type_ident() -> &'static str {
            "[T; N]"
        }
    }

    impl<T: Reflect + Typed, const N: usize> Typed for [T; N] {
        fn type_info() -> &'static TypeInfo {
            static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| TypeInfo::Array(ArrayInfo::new::<Self, T>(N)))
        }
    }

    impl<T: Reflect + Typed, const N: usize> Reflect for [T; N] {
        impl_reflect_cast_fn!(Array);

        #[inline]
        fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
            crate::impls::list_partial_eq(self, value)
        }

        #[inline]
        fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            crate::impls::list_debug(self, f)
        }
    }

    impl<T: Reflect + Typed, const N: usize> List for [T; N] {
        #[inline]
        fn get(&self, index: usize) -> Option<&dyn Reflect> {
            <[T]>::get(self, index).map(|item| item as &dyn Reflect)
        }

        #[inline]
        fn len(&self) -> usize {
            N
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn primitive_paths() {
        assert_eq!(<u32 as TypePath>::type_path(), "u32");
        assert_eq!(<String as TypePath>::type_path(), "alloc::string::String");
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
        assert_eq!(<&'static str as TypePath>::type_name(), "&str");
        assert_eq!(<[u8; 4] as TypePath>::type_path(), "[u8; 4]");
    }

    #[test]
    fn opaque_values_compare_by_value() {
        let a: &dyn Reflect = &String::from("vip");
        assert_eq!(a.reflect_partial_eq(&String::from("vip")), Some(true));
        assert_eq!(a.reflect_partial_eq(&String::from("new")), Some(false));
        // Different concrete types are never equal.
        assert_eq!(a.reflect_partial_eq(&"vip"), Some(false));
        assert_eq!(a.reflect_kind(), ReflectKind::Opaque);
    }

    #[test]
    fn arrays_are_sequences() {
        let info = <[u16; 3]>::type_info();
        assert_eq!(info.kind(), ReflectKind::Array);

        let contains = info.contains_fn().unwrap();
        assert!(contains(&[1_u16, 2, 3], &3_u16));
        assert!(!contains(&[1_u16, 2, 3], &4_u16));
        assert!(!contains(&[1_u16, 2, 3], &3_u32));
    }
}
