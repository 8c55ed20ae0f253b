//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type names (`type_path`, `type_name`, `type_ident`).
//! - [`Type`]: a [`TypeId`](core::any::TypeId) plus its names.
//! - [`TypeInfo`]: the shape of a type, one of:
//!     - [`StructInfo`]: named fields, each a [`NamedField`] with a getter.
//!     - [`ListInfo`]: growable sequences such as `Vec<T>`.
//!     - [`ArrayInfo`]: fixed-size arrays `[T; N]`.
//!     - [`SetInfo`]: sets such as `HashSet<T>`.
//!     - [`OptionInfo`]: `Option<T>`, a nullable reference to `T`.
//!     - [`OpaqueInfo`]: scalars whose internals are not reflected.
//! - [`Typed`]: static access to a type's [`TypeInfo`].
//! - [`DynamicTyped`]: dynamic dispatch for [`Typed`].
//!
//! Sequence-shaped infos ([`ListInfo`], [`ArrayInfo`], [`SetInfo`]) carry a
//! [`ContainsFn`], a membership test monomorphized for the concrete
//! container when its `TypeInfo` is built.

// -----------------------------------------------------------------------------
// Modules

mod array_info;
mod field_info;
mod list_info;
mod opaque_info;
mod option_info;
mod set_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use array_info::ArrayInfo;
pub use field_info::{FieldGetter, NamedField};
pub use list_info::ListInfo;
pub use opaque_info::OpaqueInfo;
pub use option_info::OptionInfo;
pub use set_info::SetInfo;
pub use struct_info::StructInfo;
pub use type_info::{ContainsFn, ReflectKind, ReflectKindError, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
