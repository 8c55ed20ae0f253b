//! Structural serialization of reflected values through `serde`.
//!
//! [`ReflectSerializer`] implements [`serde_core::Serialize`] for any
//! `&dyn Reflect`, so the value at the end of a property path can be
//! handed to any serde format without knowing its concrete type:
//!
//! - structs serialize as structs, keyed by their reflected field names;
//! - lists, arrays and sets serialize as sequences;
//! - `Option` serializes as none/some;
//! - opaque values use their own `Serialize` implementation.
//!
//! ```
//! use pp_reflect::{derive::Reflect, serde::ReflectSerializer};
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct City {
//!     name: String,
//!     zip: Option<u32>,
//! }
//!
//! let city = City { name: "Paris".into(), zip: None };
//! let json = serde_json::to_string(&ReflectSerializer::new(&city)).unwrap();
//!
//! assert_eq!(json, r#"{"Name":"Paris","Zip":null}"#);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod ser;

// -----------------------------------------------------------------------------
// Exports

pub use ser::ReflectSerializer;
