use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use pp_utils::hash::FixedHashState;
use pp_utils::hash::hashbrown;

use crate::impls::{impl_generic_type_path, impl_plain_type_path, impl_reflect_for_hashset};

// -----------------------------------------------------------------------------
// Type paths

impl_generic_type_path!(Vec<T>, "Vec", "alloc::vec", <T>);
impl_generic_type_path!(VecDeque<T>, "VecDeque", "alloc::collections::vec_deque", <T>);
impl_generic_type_path!(BTreeSet<T>, "BTreeSet", "alloc::collections::btree_set", <T>);
impl_generic_type_path!(std::collections::HashSet<T, S>, "HashSet", "std::collections::hash_set", <T, S>);
impl_generic_type_path!(hashbrown::HashSet<T, S>, "HashSet", "hashbrown::set", <T, S>);

impl_plain_type_path!(std::hash::RandomState, "RandomState", "std::hash");
impl_plain_type_path!(FixedHashState, "FixedHashState", "pp_utils::hash");

// -----------------------------------------------------------------------------
// Lists

macro_rules! impl_reflect_for_list {
    ($ty:ty, $get:expr) => {
        impl<T: $crate::Reflect + $crate::info::Typed> $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::impls::GenericTypeInfoCell =
                    $crate::impls::GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    $crate::info::TypeInfo::List($crate::info::ListInfo::new::<Self, T>())
                })
            }
        }

        impl<T: $crate::Reflect + $crate::info::Typed> $crate::Reflect for $ty {
            $crate::reflection::impl_reflect_cast_fn!(List);

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn $crate::Reflect) -> Option<bool> {
                $crate::impls::list_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                $crate::impls::list_debug(self, f)
            }
        }

        impl<T: $crate::Reflect + $crate::info::Typed> $crate::ops::List for $ty {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn $crate::Reflect> {
                ($get)(self, index).map(|item| item as &dyn $crate::Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty>::len(self)
            }
        }
    };
}

impl_reflect_for_list!(Vec<T>, <[T]>::get);
impl_reflect_for_list!(VecDeque<T>, VecDeque::<T>::get);

// -----------------------------------------------------------------------------
// Sets

impl_reflect_for_hashset!(std::collections::HashSet<T, S>);
impl_reflect_for_hashset!(hashbrown::HashSet<T, S>);

mod btree_set {
    use alloc::boxed::Box;
    use alloc::collections::BTreeSet;

    use crate::Reflect;
    use crate::impls::GenericTypeInfoCell;
    use crate::info::{SetInfo, TypeInfo, Typed};
    use crate::ops::Set;
    use crate::reflection::impl_reflect_cast_fn;

    impl<T: Reflect + Typed + Ord> Typed for BTreeSet<T> {
        fn type_info() -> &'static TypeInfo {
            static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| TypeInfo::Set(SetInfo::new::<Self, T>()))
        }
    }

    impl<T: Reflect + Typed + Ord> Reflect for BTreeSet<T> {
        impl_reflect_cast_fn!(Set);

        #[inline]
        fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
            crate::impls::set_partial_eq(self, value)
        }

        #[inline]
        fn reflect_debug(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            crate::impls::set_debug(self, f)
        }
    }

    impl<T: Reflect + Typed + Ord> Set for BTreeSet<T> {
        fn get(&self, value: &dyn Reflect) -> Option<&dyn Reflect> {
            value
                .downcast_ref::<T>()
                .and_then(|value| Self::get(self, value))
                .map(|value| value as &dyn Reflect)
        }

        #[inline]
        fn len(&self) -> usize {
            Self::len(self)
        }

        fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
            Box::new(Self::iter(self).map(|value| value as &dyn Reflect))
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeSet, VecDeque};
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use pp_utils::hash::HashSet;

    use crate::Reflect;
    use crate::info::{ReflectKind, TypePath, Typed};

    #[test]
    fn generic_paths() {
        assert_eq!(<Vec<u32> as TypePath>::type_path(), "alloc::vec::Vec<u32>");
        assert_eq!(<Vec<u32> as TypePath>::type_name(), "Vec<u32>");
        assert_eq!(<Vec<u32> as TypePath>::type_ident(), "Vec");
        assert_eq!(
            <HashSet<String> as TypePath>::type_name(),
            "HashSet<String, FixedHashState>"
        );
    }

    #[test]
    fn list_membership() {
        let tags = vec!["vip".to_string(), "new".to_string()];
        let contains = Vec::<String>::type_info().contains_fn().unwrap();

        assert!(contains(&tags, &"vip".to_string()));
        assert!(!contains(&tags, &"gold".to_string()));
        // Wrong element type or wrong container: never a member.
        assert!(!contains(&tags, &"vip"));
        assert!(!contains(&VecDeque::from(tags.clone()), &"vip".to_string()));
    }

    #[test]
    fn set_membership() {
        let hashed: HashSet<u32> = [1, 2, 3].into_iter().collect();
        let ordered: BTreeSet<u32> = [1, 2, 3].into();

        let hashed_contains = HashSet::<u32>::type_info().contains_fn().unwrap();
        let ordered_contains = BTreeSet::<u32>::type_info().contains_fn().unwrap();

        assert!(hashed_contains(&hashed, &2_u32));
        assert!(!hashed_contains(&hashed, &9_u32));
        assert!(ordered_contains(&ordered, &3_u32));
        assert!(!ordered_contains(&hashed, &3_u32));
    }

    #[test]
    fn sets_compare_regardless_of_order() {
        let a: std::collections::HashSet<u8> = [1, 2].into();
        let b: std::collections::HashSet<u8> = [2, 1].into();
        let c: std::collections::HashSet<u8> = [2].into();

        let a: &dyn Reflect = &a;
        assert_eq!(a.reflect_partial_eq(&b), Some(true));
        assert_eq!(a.reflect_partial_eq(&c), Some(false));
        assert_eq!(a.reflect_kind(), ReflectKind::Set);
    }
}
