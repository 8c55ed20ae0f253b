//! Read-only access interfaces for reflected values.
//!
//! ## Menu
//!
//! The following are subtraits of [`Reflect`], each giving access to the
//! data of one shape:
//!
//! - [`Struct`]: named-field structs (e.g. `A { .. }`).
//! - [`List`]: lists and arrays (e.g. `Vec<i32>`, `[i32; 5]`).
//! - [`Set`]: set-like collections (e.g. `HashSet<i32>`).
//!
//! [`ReflectRef`] is returned by [`Reflect::reflect_ref`] and selects the
//! right view for a `&dyn Reflect`.
//!
//! [`Reflect`]: crate::Reflect
//! [`Reflect::reflect_ref`]: crate::Reflect::reflect_ref

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod set_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::ReflectRef;

pub use list_ops::{List, ListItemIter};
pub use set_ops::Set;
pub use struct_ops::{Struct, StructFieldIter};
