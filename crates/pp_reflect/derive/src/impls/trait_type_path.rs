use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path;

/// Generates `TypePath`.
///
/// Non-generic types return literals. Generic types build
/// `path<P0, P1>` once per instantiation in a `GenericTypePathCell`.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let pp_reflect = &meta.pp_reflect;
    let type_path_ = path::type_path_(pp_reflect);
    let impls_ = path::impls_(pp_reflect);

    let ident = meta.ident;
    let (impl_generics, ty_generics, _) = meta.generics.split_for_impl();
    let where_clause = meta.where_clause(&[]);

    let (base_path, module_path) = meta.base_paths();
    let type_ident = meta.type_ident();

    let (type_path, type_name) = if meta.is_generic() {
        let params: Vec<_> = meta.type_params().collect();
        (
            quote! {
                static CELL: #impls_::GenericTypePathCell = #impls_::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    #impls_::generic_name(#base_path, &[#(<#params as #type_path_>::type_path()),*])
                })
            },
            quote! {
                static CELL: #impls_::GenericTypePathCell = #impls_::GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    #impls_::generic_name(#type_ident, &[#(<#params as #type_path_>::type_name()),*])
                })
            },
        )
    } else {
        (quote!(#base_path), quote!(#type_ident))
    };

    quote! {
        impl #impl_generics #type_path_ for #ident #ty_generics #where_clause {
            fn type_path() -> &'static str {
                #type_path
            }

            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_ident
            }

            #[inline]
            fn module_path() -> ::core::option::Option<&'static str> {
                #module_path
            }
        }
    }
}
