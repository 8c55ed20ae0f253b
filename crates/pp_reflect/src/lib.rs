//! Static type metadata for property-path resolution.
//!
//! `pp_reflect` gives every participating type a `'static` [`TypeInfo`]
//! describing its shape (struct fields, list items, set values, `Option`
//! payloads) together with **pre-resolved accessor functions**: a struct
//! field carries a plain `fn` pointer that borrows the field out of a
//! `&dyn Reflect`, a list carries a monomorphized membership function, and
//! so on. Path compilers walk this metadata once and then run only those
//! function pointers.
//!
//! Types opt in with [`#[derive(Reflect)]`](derive::Reflect):
//!
//! ```
//! use pp_reflect::{derive::Reflect, info::Typed};
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct City {
//!     name: String,
//! }
//!
//! let info = City::type_info().as_struct().unwrap();
//! assert_eq!(&*info.field_names(), ["Name"]);
//! ```
//!
//! [`TypeInfo`]: crate::info::TypeInfo

// -----------------------------------------------------------------------------
// Extern Self

// Derive output names the crate as `::pp_reflect`; this alias lets the
// crate's own tests and doctests use the derive macro.
extern crate self as pp_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use pp_reflect_derive as derive;
pub use reflection::Reflect;
