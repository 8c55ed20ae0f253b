use alloc::boxed::Box;

use pp_utils::hash::HashMap;

use crate::info::{NamedField, Type, TypePath, impl_type_fn};
use crate::ops::Struct;

/// A container for compile-time named struct info.
///
/// Field lookup by name is a hash lookup; it only happens while a path is
/// being compiled, never when a compiled accessor runs.
///
/// ```rust
/// use pp_reflect::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Address {
///     street: String,
///     zip_code: u32,
/// }
///
/// let info = Address::type_info().as_struct().unwrap();
///
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("ZipCode"), Some(1));
/// assert!(info.field("zip_code").is_none());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Box<[NamedField]>,
    indices: HashMap<&'static str, usize>,
}

impl StructInfo {
    impl_type_fn!(ty);

    /// Create a new [`StructInfo`].
    ///
    /// Fields keep the input order.
    pub fn new<T: Struct + TypePath>(fields: &[NamedField]) -> Self {
        let indices = fields
            .iter()
            .enumerate()
            .map(|(index, field)| (field.name(), index))
            .collect();

        Self {
            ty: Type::of::<T>(),
            fields: fields.into(),
            indices,
        }
    }

    /// Returns the [`NamedField`] for the given `name`, if present.
    ///
    /// The match is exact and case-sensitive.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.get(*self.indices.get(name)?)
    }

    /// Returns the [`NamedField`] at the given index, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns an iterator over the fields in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> Box<[&'static str]> {
        self.fields.iter().map(NamedField::name).collect()
    }

    /// Returns the index for the given field `name`, if present.
    #[inline]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    /// Returns the number of fields.
    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }
}
