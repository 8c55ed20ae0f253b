use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path;

/// Generates `Typed`, storing `type_info_expr` in the matching cell.
///
/// `bounds` are the extra predicates of the kind's `Reflect` impl; the
/// `TypeInfo` constructors need `Self` to implement it.
pub(crate) fn impl_trait_typed(
    meta: &ReflectMeta,
    type_info_expr: TokenStream,
    bounds: &[TokenStream],
) -> TokenStream {
    let pp_reflect = &meta.pp_reflect;
    let typed_ = path::typed_(pp_reflect);
    let type_info_ = path::type_info_(pp_reflect);
    let impls_ = path::impls_(pp_reflect);

    let ident = meta.ident;
    let (impl_generics, ty_generics, _) = meta.generics.split_for_impl();
    let where_clause = meta.where_clause(bounds);

    let body = if meta.is_generic() {
        quote! {
            static CELL: #impls_::GenericTypeInfoCell = #impls_::GenericTypeInfoCell::new();
            CELL.get_or_insert::<Self>(|| { #type_info_expr })
        }
    } else {
        quote! {
            static CELL: #impls_::NonGenericTypeInfoCell = #impls_::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| { #type_info_expr })
        }
    };

    quote! {
        impl #impl_generics #typed_ for #ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #body
            }
        }
    }
}
