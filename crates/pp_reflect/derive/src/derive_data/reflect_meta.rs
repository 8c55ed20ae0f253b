use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam, Generics, Ident};

use super::TypeAttributes;
use crate::path;

/// Type-level information shared by every generated impl.
pub(crate) struct ReflectMeta<'a> {
    pub pp_reflect: syn::Path,
    pub ident: &'a Ident,
    pub generics: &'a Generics,
    pub attrs: TypeAttributes,
}

impl<'a> ReflectMeta<'a> {
    pub(crate) fn new(ast: &'a DeriveInput, attrs: TypeAttributes) -> syn::Result<Self> {
        for param in &ast.generics.params {
            match param {
                GenericParam::Type(_) => {}
                GenericParam::Lifetime(lifetime) => {
                    return Err(syn::Error::new_spanned(
                        lifetime,
                        "reflected types must be `'static`; lifetime parameters are not supported",
                    ));
                }
                GenericParam::Const(param) => {
                    return Err(syn::Error::new_spanned(
                        param,
                        "const parameters are not supported by `#[derive(Reflect)]`",
                    ));
                }
            }
        }

        Ok(Self {
            pp_reflect: path::pp_reflect(),
            ident: &ast.ident,
            generics: &ast.generics,
            attrs,
        })
    }

    /// Returns `true` if the type has type parameters.
    pub(crate) fn is_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// Returns the type parameter idents, in order.
    pub(crate) fn type_params(&self) -> impl Iterator<Item = &Ident> {
        self.generics.type_params().map(|param| &param.ident)
    }

    /// Builds a `where` clause from the type's own predicates, a
    /// `TypePath + Send + Sync` bound per type parameter, and `extra`.
    pub(crate) fn where_clause(&self, extra: &[TokenStream]) -> TokenStream {
        let type_path_ = path::type_path_(&self.pp_reflect);
        let existing = self
            .generics
            .where_clause
            .as_ref()
            .map(|clause| &clause.predicates)
            .into_iter()
            .flatten();
        let params = self.type_params();

        quote! {
            where
                #(#existing,)*
                #(#params: #type_path_ + ::core::marker::Send + ::core::marker::Sync,)*
                #(#extra,)*
        }
    }

    /// Returns the expression for the full type path without generics,
    /// and the expression for the module path.
    pub(crate) fn base_paths(&self) -> (TokenStream, TokenStream) {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let module = match value.rsplit_once("::") {
                    Some((module, _)) => quote!(::core::option::Option::Some(#module)),
                    None => quote!(::core::option::Option::None),
                };
                (quote!(#lit), module)
            }
            None => {
                let ident = self.ident.to_string();
                (
                    quote!(::core::concat!(::core::module_path!(), "::", #ident)),
                    quote!(::core::option::Option::Some(::core::module_path!())),
                )
            }
        }
    }

    /// Returns the bare type name, the last segment of a custom path.
    pub(crate) fn type_ident(&self) -> String {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                match value.rsplit_once("::") {
                    Some((_, ident)) => ident.to_owned(),
                    None => value,
                }
            }
            None => self.ident.to_string(),
        }
    }
}
