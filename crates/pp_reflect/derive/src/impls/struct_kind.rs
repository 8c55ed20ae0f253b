use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::{ReflectStruct, StructField};
use crate::path;

/// Generates `TypePath`, `Typed`, `Reflect` and `Struct` for a struct with
/// named fields.
///
/// Each `NamedField` carries a non-capturing getter that downcasts the
/// owner to `Self` and borrows the field, so resolving a field name is
/// done once, when the `TypeInfo` is built.
pub(crate) fn impl_struct(reflect_struct: &ReflectStruct) -> TokenStream {
    let meta = &reflect_struct.meta;
    let pp_reflect = &meta.pp_reflect;
    let reflect_ = path::reflect_(pp_reflect);
    let typed_ = path::typed_(pp_reflect);
    let struct_ = path::struct_(pp_reflect);
    let type_info_ = path::type_info_(pp_reflect);
    let reflect_kind_ = path::reflect_kind_(pp_reflect);
    let reflect_ref_ = path::reflect_ref_(pp_reflect);
    let impls_ = path::impls_(pp_reflect);

    let ident = meta.ident;
    let (impl_generics, ty_generics, _) = meta.generics.split_for_impl();

    let fields = &reflect_struct.fields;
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    let idents = fields.iter().map(|field| field.ident);
    let indices = 0..fields.len();
    let field_len = fields.len();

    let bounds = field_bounds(fields, meta.is_generic(), &reflect_, &typed_);
    let where_clause = meta.where_clause(&bounds);

    let named_fields = fields.iter().map(|field| {
        let StructField { ident, ty, name } = field;
        quote! {
            #pp_reflect::info::NamedField::new::<#ty>(#name, |owner| {
                <dyn #reflect_>::downcast_ref::<Self>(owner).map(|this| &this.#ident as &dyn #reflect_)
            })
        }
    });

    let type_info_expr = quote! {
        #type_info_::Struct(#pp_reflect::info::StructInfo::new::<Self>(&[
            #(#named_fields,)*
        ]))
    };

    let field_arms = fields.iter().map(|field| {
        let (name, ident) = (&field.name, field.ident);
        quote!(#name => ::core::option::Option::Some(&self.#ident as &dyn #reflect_))
    });
    let field_at_arms = idents
        .zip(indices.clone())
        .map(|(ident, index)| quote!(#index => ::core::option::Option::Some(&self.#ident as &dyn #reflect_)));
    let name_at_arms = names
        .iter()
        .zip(indices)
        .map(|(name, index)| quote!(#index => ::core::option::Option::Some(#name)));

    let kind_impls = quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_kind(&self) -> #reflect_kind_ {
                #reflect_kind_::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::Struct(self)
            }

            #[inline]
            fn reflect_partial_eq(&self, value: &dyn #reflect_) -> ::core::option::Option<bool> {
                #impls_::struct_partial_eq(self, value)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                #impls_::struct_debug(self, f)
            }
        }

        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> ::core::option::Option<&dyn #reflect_> {
                match name {
                    #(#field_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_at(&self, index: usize) -> ::core::option::Option<&dyn #reflect_> {
                match index {
                    #(#field_at_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            fn name_at(&self, index: usize) -> ::core::option::Option<&str> {
                match index {
                    #(#name_at_arms,)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }
        }
    };

    super::assemble(meta, type_info_expr, &bounds, kind_impls)
}

/// `FieldType: Reflect + Typed` for every reflected field of a generic
/// struct. Non-generic structs need none: the types are concrete.
fn field_bounds(
    fields: &[StructField],
    is_generic: bool,
    reflect_: &TokenStream,
    typed_: &TokenStream,
) -> Vec<TokenStream> {
    if !is_generic {
        return Vec::new();
    }
    fields
        .iter()
        .map(|field| {
            let ty = field.ty;
            quote!(#ty: #reflect_ + #typed_)
        })
        .collect()
}
