use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by
/// this crate for the supported std types.
///
/// ```
/// use pp_reflect::info::{Typed, ReflectKind};
///
/// let info = <Vec<String> as Typed>::type_info();
/// assert_eq!(info.kind(), ReflectKind::List);
/// ```
///
/// # Manual implementation
///
/// Store the info in a [`NonGenericTypeInfoCell`] (or a
/// [`GenericTypeInfoCell`] for generic types) so it is built once:
///
/// ```
/// use pp_reflect::{
///     Reflect,
///     derive::Reflect,
///     impls::NonGenericTypeInfoCell,
///     info::{NamedField, StructInfo, TypeInfo, Typed},
/// };
///
/// #[derive(Reflect)]
/// #[reflect(Typed = false)]
/// struct Tag {
///     label: String,
/// }
///
/// impl Typed for Tag {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::Struct(StructInfo::new::<Self>(&[NamedField::new::<String>(
///                 "Label",
///                 |owner| owner.downcast_ref::<Tag>().map(|tag| &tag.label as &dyn Reflect),
///             )]))
///         })
///     }
/// }
///
/// let info = Tag::type_info().as_struct().unwrap();
/// assert!(info.field("Label").is_some());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: TypePath {
    /// Returns the static type information of `Self`.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
