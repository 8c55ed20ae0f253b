use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Attribute, LitBool, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// RenameRule

/// Case conversion applied to every field name by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// `zip_code` -> `ZipCode`
    PascalCase,
    /// `zip_code` -> `zipCode`
    CamelCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "PascalCase" => Ok(Self::PascalCase),
            "camelCase" => Ok(Self::CamelCase),
            other => Err(syn::Error::new(
                lit.span(),
                format!("unknown rename rule `{other}`, expected \"PascalCase\" or \"camelCase\""),
            )),
        }
    }

    /// Converts a snake_case identifier.
    pub(crate) fn apply(self, field: &str) -> String {
        let mut out = String::with_capacity(field.len());
        let words = field.split('_').filter(|word| !word.is_empty());
        for (index, word) in words.enumerate() {
            let mut chars = word.chars();
            let Some(first) = chars.next() else { continue };
            if index == 0 && self == Self::CamelCase {
                out.push(first);
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
        out
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Type-level `#[reflect(...)]` options.
#[derive(Debug)]
pub(crate) struct TypeAttributes {
    /// `type_path = "a::b::Name"`, without generics.
    pub type_path: Option<LitStr>,
    /// `rename_all = "PascalCase" | "camelCase"`
    pub rename_all: Option<RenameRule>,
    /// Default is `true`, use `#[reflect(TypePath = false)]` to disable it.
    pub impl_type_path: bool,
    /// Default is `true`, use `#[reflect(Typed = false)]` to disable it.
    pub impl_typed: bool,
    /// `opaque`: do not reflect the internals.
    pub opaque: Option<Span>,
    /// `serialize`: the type implements `serde::Serialize`.
    pub serialize: Option<Span>,
}

impl Default for TypeAttributes {
    fn default() -> Self {
        Self {
            type_path: None,
            rename_all: None,
            impl_type_path: true,
            impl_typed: true,
            opaque: None,
            serialize: None,
        }
    }
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().starts_with("::") || lit.value().contains('<') {
                        return Err(meta.error("`type_path` must not start with `::` or contain generics"));
                    }
                    this.type_path = Some(lit);
                } else if meta.path.is_ident("rename_all") {
                    let lit: LitStr = meta.value()?.parse()?;
                    this.rename_all = Some(RenameRule::parse(&lit)?);
                } else if meta.path.is_ident("TypePath") {
                    this.impl_type_path = meta.value()?.parse::<LitBool>()?.value;
                } else if meta.path.is_ident("Typed") {
                    this.impl_typed = meta.value()?.parse::<LitBool>()?.value;
                } else if meta.path.is_ident("opaque") {
                    this.opaque = Some(meta.path.span());
                } else if meta.path.is_ident("serialize") {
                    this.serialize = Some(meta.path.span());
                } else {
                    return Err(meta.error("unsupported type attribute"));
                }
                Ok(())
            })?;
        }

        if let Some(span) = this.serialize
            && this.opaque.is_none()
        {
            return Err(syn::Error::new(span, "`serialize` only applies to `opaque` types"));
        }

        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Field-level `#[reflect(...)]` options.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `rename = "Name"`, takes precedence over `rename_all`.
    pub rename: Option<LitStr>,
    /// `ignore`: the field is invisible to reflection.
    pub ignore: bool,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();

        for attr in reflect_attrs(attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() || lit.value().contains('.') {
                        return Err(meta.error("a field name must be non-empty and contain no `.`"));
                    }
                    this.rename = Some(lit);
                } else if meta.path.is_ident("ignore") {
                    this.ignore = true;
                } else {
                    return Err(meta.error("unsupported field attribute"));
                }
                Ok(())
            })?;
        }

        Ok(this)
    }
}

fn reflect_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::PascalCase.apply("zip_code"), "ZipCode");
        assert_eq!(RenameRule::CamelCase.apply("zip_code"), "zipCode");
        assert_eq!(RenameRule::PascalCase.apply("name"), "Name");
        assert_eq!(RenameRule::CamelCase.apply("_private_id"), "privateId");
    }
}
