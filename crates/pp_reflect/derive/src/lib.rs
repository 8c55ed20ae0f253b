//! The `Reflect` derive macro of `pp_reflect`.
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod manifest;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements the following traits:
///
/// - `TypePath`
/// - `Typed`
/// - `Reflect`
/// - `Struct` (for `struct T { ... }`)
///
/// Only structs with named fields are reflected field by field. Any other
/// type can be derived as `opaque` (see below).
///
/// Generic type parameters are supported; lifetime and const parameters
/// are not, since reflected types are `'static` and named at runtime.
///
/// ## Disabling Implementations
///
/// `TypePath` and `Typed` can be switched off, in which case they must be
/// implemented by hand:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(TypePath = false, Typed = false)]
/// struct Foo { /* ... */ }
/// ```
///
/// ## Custom Type Path
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "crm::model::Person")]
/// struct Person { /* ... */ }
/// ```
///
/// The path must not include generics; they are appended automatically.
/// By default the path is `module_path!()` followed by the type name.
///
/// ## Field Names
///
/// Fields are reflected under their Rust names unless renamed. A
/// container-level `rename_all` converts every snake_case name, and a
/// field-level `rename` overrides it:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(rename_all = "PascalCase")]
/// struct Address {
///     zip_code: String,           // "ZipCode"
///     #[reflect(rename = "Town")]
///     city: City,                 // "Town"
/// }
/// ```
///
/// Supported rules are `"PascalCase"` and `"camelCase"`. Reflected names
/// must be unique.
///
/// ## ignore
///
/// `#[reflect(ignore)]` hides a field from reflection entirely: it has no
/// `NamedField`, is not counted by `field_len`, and no path can reach it.
/// Its type does not need to implement `Reflect`.
///
/// ## Opaque Types
///
/// `#[reflect(opaque)]` treats the type as a leaf. Its internals are not
/// inspected, so it must implement `PartialEq` and `Debug`, which back
/// `reflect_partial_eq` and `reflect_debug`. Add `serialize` when it
/// implements `serde::Serialize`:
///
/// ```rust, ignore
/// #[derive(Reflect, PartialEq, Debug, Serialize)]
/// #[reflect(opaque, serialize)]
/// struct CustomerId(u64);
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(&ast)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
