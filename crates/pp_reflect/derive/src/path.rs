//! Paths into `pp_reflect` used by the generated code.
//!
//! Kept in one place so the generated code follows module moves in
//! `pp_reflect` with a single edit.

use proc_macro2::TokenStream;
use quote::quote;

use crate::manifest::Manifest;

/// Returns the path to the `pp_reflect` crate as seen by the caller.
///
/// Reads the caller's Cargo.toml, so call it once per macro invocation
/// and pass the result around.
pub(crate) fn pp_reflect() -> syn::Path {
    Manifest::shared(|manifest| manifest.get_crate_path("pp_reflect"))
}

#[inline(always)]
pub(crate) fn reflect_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::Reflect }
}

#[inline(always)]
pub(crate) fn type_path_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::info::TypePath }
}

#[inline(always)]
pub(crate) fn typed_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn reflect_kind_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::info::ReflectKind }
}

#[inline(always)]
pub(crate) fn reflect_ref_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::ops::ReflectRef }
}

#[inline(always)]
pub(crate) fn struct_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::ops::Struct }
}

#[inline(always)]
pub(crate) fn impls_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::impls }
}

#[inline(always)]
pub(crate) fn macro_exports_(pp_reflect: &syn::Path) -> TokenStream {
    quote! { #pp_reflect::__macro_exports }
}
