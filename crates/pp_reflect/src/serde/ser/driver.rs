use serde_core::{Serialize, Serializer};

use super::error_utils::make_custom_error;
use super::list_serializer::ListSerializer;
use super::set_serializer::SetSerializer;
use super::struct_serializer::StructSerializer;

use crate::Reflect;
use crate::ops::ReflectRef;

// -----------------------------------------------------------------------------
// ReflectSerializer

/// A serializer for reflected values.
///
/// Walks the value through [`Reflect::reflect_ref`] and serializes each
/// part with `serde`. Opaque values must support
/// [`Reflect::reflect_serialize`]; otherwise serialization fails with a
/// custom error naming the type.
///
/// ```
/// use pp_reflect::serde::ReflectSerializer;
///
/// let tags = vec!["vip".to_string()];
/// let json = serde_json::to_string(&ReflectSerializer::new(&tags)).unwrap();
/// assert_eq!(json, r#"["vip"]"#);
/// ```
#[derive(Clone, Copy)]
pub struct ReflectSerializer<'a> {
    value: &'a dyn Reflect,
}

impl<'a> ReflectSerializer<'a> {
    /// Creates a serializer for `value`.
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for ReflectSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.reflect_ref() {
            ReflectRef::Struct(struct_value) => StructSerializer { struct_value }.serialize(serializer),
            ReflectRef::List(list) | ReflectRef::Array(list) => {
                ListSerializer { list }.serialize(serializer)
            }
            ReflectRef::Set(set) => SetSerializer { set }.serialize(serializer),
            ReflectRef::Option(Some(some)) => serializer.serialize_some(&ReflectSerializer::new(some)),
            ReflectRef::Option(None) => serializer.serialize_none(),
            ReflectRef::Opaque(value) => match value.reflect_serialize() {
                Some(erased) => erased.serialize(serializer),
                None => Err(make_custom_error(format_args!(
                    "type `{}` does not support serialization",
                    value.reflect_type_path(),
                ))),
            },
        }
    }
}
