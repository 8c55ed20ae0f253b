//! Utilities for implementing reflection traits, and the implementations
//! for std types.
//!
//! - [`NonGenericTypeInfoCell`]: implements [`Typed`] for non-generic types.
//! - [`GenericTypePathCell`]: implements [`TypePath`] for generic types.
//! - [`GenericTypeInfoCell`]: implements [`Typed`] for generic types.
//! - `xxx_partial_eq`: implements [`Reflect::reflect_partial_eq`] (e.g. [`list_partial_eq`]).
//! - `xxx_debug`: implements [`Reflect::reflect_debug`] (e.g. [`struct_debug`]).
//!
//! ## Implemented Menu
//!
//! - opaque: `bool`, `char`, `i8`-`i128`, `u8`-`u128`, `isize`, `usize`,
//!   `f32`, `f64`, `()`, `&'static str`, `String`
//! - lists: `Vec<T>`, `VecDeque<T>`, `[T; N]`
//! - sets: `BTreeSet<T>`, `std::collections::HashSet<T, S>`,
//!   `hashbrown::HashSet<T, S>` (and so [`pp_utils::hash::HashSet`])
//! - `Option<T>`
//!
//! [`TypePath`]: crate::info::TypePath
//! [`Typed`]: crate::info::Typed
//! [`Reflect::reflect_partial_eq`]: crate::Reflect::reflect_partial_eq
//! [`Reflect::reflect_debug`]: crate::Reflect::reflect_debug

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod utils;

mod collections;
mod native;
mod option;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};

pub use utils::{list_debug, list_partial_eq, set_debug, set_partial_eq};
pub use utils::{struct_debug, struct_partial_eq};

pub(crate) use utils::{impl_generic_type_path, impl_plain_type_path};
pub(crate) use utils::{impl_opaque_type, impl_reflect_for_hashset, impl_simple_type_reflect};

/// An efficient string concatenation function.
///
/// Usually used to implement `TypePath` for generic types.
///
/// ```
/// use pp_reflect::impls;
///
/// let s = impls::concat(&["model", "::", "Person", "<", "T", ">"]);
///
/// assert_eq!(s, "model::Person<T>");
/// assert_eq!(s.capacity(), 16);
/// ```
#[inline(never)]
pub fn concat(arr: &[&str]) -> ::alloc::string::String {
    let mut len = 0usize;
    for &item in arr {
        len += item.len();
    }
    let mut res = ::alloc::string::String::with_capacity(len);
    for &item in arr {
        res.push_str(item);
    }
    res
}

/// Builds `base<P0, P1, ...>` from a base name and parameter names.
///
/// ```
/// use pp_reflect::impls;
///
/// assert_eq!(impls::generic_name("Vec", &["u8"]), "Vec<u8>");
/// assert_eq!(impls::generic_name("Pair", &["u8", "char"]), "Pair<u8, char>");
/// ```
#[inline(never)]
pub fn generic_name(base: &str, params: &[&str]) -> ::alloc::string::String {
    let mut parts = ::alloc::vec::Vec::with_capacity(params.len() * 2 + 2);
    parts.push(base);
    parts.push("<");
    for (index, &param) in params.iter().enumerate() {
        if index > 0 {
            parts.push(", ");
        }
        parts.push(param);
    }
    parts.push(">");
    concat(&parts)
}
