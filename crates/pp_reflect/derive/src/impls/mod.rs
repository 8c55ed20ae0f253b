//! Code generators, one module per emitted trait or kind.

// -----------------------------------------------------------------------------
// Modules

mod opaque_kind;
mod struct_kind;
mod trait_type_path;
mod trait_typed;

// -----------------------------------------------------------------------------
// Entry

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DataStruct, DeriveInput, Fields};

use crate::derive_data::{ReflectMeta, ReflectStruct, TypeAttributes};

pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
    let meta = ReflectMeta::new(ast, attrs)?;

    if meta.attrs.opaque.is_some() {
        return Ok(opaque_kind::impl_opaque(&meta));
    }

    match &ast.data {
        Data::Struct(DataStruct {
            fields: Fields::Named(named),
            ..
        }) => {
            let reflect_struct = ReflectStruct::new(meta, named)?;
            Ok(struct_kind::impl_struct(&reflect_struct))
        }
        Data::Struct(_) => Err(syn::Error::new(
            ast.ident.span(),
            "only structs with named fields are reflected; mark other types `#[reflect(opaque)]`",
        )),
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new(
            ast.ident.span(),
            "enums and unions are only reflected as `#[reflect(opaque)]`",
        )),
    }
}

/// Wraps the generated impls, skipping the ones switched off by attributes.
fn assemble(
    meta: &ReflectMeta,
    type_info_expr: TokenStream,
    bounds: &[TokenStream],
    kind_impls: TokenStream,
) -> TokenStream {
    let type_path_impl = meta
        .attrs
        .impl_type_path
        .then(|| trait_type_path::impl_trait_type_path(meta));
    let typed_impl = meta
        .attrs
        .impl_typed
        .then(|| trait_typed::impl_trait_typed(meta, type_info_expr, bounds));

    quote! {
        #type_path_impl
        #typed_impl
        #kind_impls
    }
}
