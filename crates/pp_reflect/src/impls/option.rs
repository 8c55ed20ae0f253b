use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, impl_generic_type_path};
use crate::info::{OptionInfo, ReflectKind, TypeInfo, Typed};
use crate::ops::ReflectRef;

impl_generic_type_path!(Option<T>, "Option", "core::option", <T>);

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Option(OptionInfo::new::<T>()))
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_kind(&self) -> ReflectKind {
        ReflectKind::Option
    }

    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Option(self.as_ref().map(|some| some as &dyn Reflect))
    }

    fn reflect_partial_eq(&self, value: &dyn Reflect) -> Option<bool> {
        let ReflectRef::Option(other) = value.reflect_ref() else {
            return Some(false);
        };
        match (self, other) {
            (Some(some), Some(other)) => some.reflect_partial_eq(other),
            (None, None) => Some(true),
            _ => Some(false),
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
    fn option_is_a_nullable_reference() {
        assert_eq!(<Option<u8> as TypePath>::type_path(), "core::option::Option<u8>");

        let info = <Option<String>>::type_info();
        assert_eq!(info.kind(), ReflectKind::Option);
        assert!(info.strip_options().type_is::<String>());
        assert!(info.contains_fn().is_none());
    }

    #[test]
    fn option_equality() {
        let a: &dyn Reflect = &Some(1_u8);
        assert_eq!(a.reflect_partial_eq(&Some(1_u8)), Some(true));
        assert_eq!(a.reflect_partial_eq(&None::<u8>), Some(false));
        assert_eq!(a.reflect_partial_eq(&1_u8), Some(false));

        let none: &dyn Reflect = &None::<u8>;
        assert_eq!(none.reflect_partial_eq(&None::<u8>), Some(true));
    }
}
