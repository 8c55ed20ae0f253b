use crate::Reflect;

// -----------------------------------------------------------------------------
// Struct trait

/// Access to the named fields of a struct.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) for
/// structs with named fields. Field names are the reflected names, after
/// `rename` and `rename_all` were applied.
///
/// ```
/// use pp_reflect::{derive::Reflect, ops::Struct};
///
/// #[derive(Reflect)]
/// struct City {
///     name: String,
///     population: u64,
/// }
///
/// let city = City { name: "Paris".into(), population: 2_100_000 };
///
/// assert_eq!(city.field_len(), 2);
/// assert_eq!(city.name_at(1), Some("population"));
/// assert_eq!(
///     city.field("name").and_then(|v| v.downcast_ref::<String>()).map(String::as_str),
///     Some("Paris"),
/// );
/// ```
pub trait Struct: Reflect {
    /// Returns the field named `name`.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the field at `index`, in declaration order.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;
}

impl dyn Struct {
    /// Iterates over the fields in declaration order.
    #[inline]
    pub fn iter_fields(&self) -> StructFieldIter<'_> {
        StructFieldIter::new(self)
    }
}

// -----------------------------------------------------------------------------
// StructFieldIter

/// An iterator over the field values of a struct.
pub struct StructFieldIter<'a> {
    struct_val: &'a dyn Struct,
    index: usize,
}

impl<'a> StructFieldIter<'a> {
    /// Creates a new iterator for the given struct.
    #[inline(always)]
    pub const fn new(value: &'a dyn Struct) -> Self {
        StructFieldIter {
            struct_val: value,
            index: 0,
        }
    }
}

impl<'a> Iterator for StructFieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.struct_val.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.struct_val.field_len() - self.index;
        (size, Some(size))
    }
}

impl ExactSizeIterator for StructFieldIter<'_> {}
