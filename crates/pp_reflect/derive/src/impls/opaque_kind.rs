use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;
use crate::path;

/// Generates `TypePath`, `Typed` and `Reflect` for an opaque type.
///
/// Equality and debug output come from the type's own `PartialEq` and
/// `Debug`; `serialize` also exposes its `serde::Serialize`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let pp_reflect = &meta.pp_reflect;
    let reflect_ = path::reflect_(pp_reflect);
    let type_info_ = path::type_info_(pp_reflect);
    let reflect_kind_ = path::reflect_kind_(pp_reflect);
    let reflect_ref_ = path::reflect_ref_(pp_reflect);
    let macro_exports_ = path::macro_exports_(pp_reflect);

    let ident = meta.ident;
    let (impl_generics, ty_generics, _) = meta.generics.split_for_impl();

    let mut bounds = Vec::new();
    if meta.is_generic() {
        bounds.push(quote!(#ident #ty_generics: ::core::cmp::PartialEq + ::core::fmt::Debug));
        if meta.attrs.serialize.is_some() {
            bounds.push(quote!(#ident #ty_generics: #macro_exports_::erased_serde::Serialize));
        }
    }
    let where_clause = meta.where_clause(&bounds);

    let serialize_fn = meta.attrs.serialize.map(|_| {
        quote! {
            #[inline]
            fn reflect_serialize(
                &self,
            ) -> ::core::option::Option<&dyn #macro_exports_::erased_serde::Serialize> {
                ::core::option::Option::Some(self)
            }
        }
    });

    let type_info_expr = quote! {
        #type_info_::Opaque(#pp_reflect::info::OpaqueInfo::new::<Self>())
    };

    let kind_impls = quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Opaque
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Opaque(self)
            }

            fn reflect_partial_eq(&self, value: &dyn #reflect_) -> ::core::option::Option<bool> {
                match <dyn #reflect_>::downcast_ref::<Self>(value) {
                    ::core::option::Option::Some(value) => {
                        ::core::option::Option::Some(::core::cmp::PartialEq::eq(self, value))
                    }
                    ::core::option::Option::None => ::core::option::Option::Some(false),
                }
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }

            #serialize_fn
        }
    };

    super::assemble(meta, type_info_expr, &bounds, kind_impls)
}
