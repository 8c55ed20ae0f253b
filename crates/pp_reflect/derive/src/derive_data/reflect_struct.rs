use std::collections::BTreeSet;

use syn::{FieldsNamed, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// A reflected field.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The name used by reflection, after renaming.
    pub name: String,
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta<'a>,
    /// Reflected fields in declaration order; ignored fields are absent.
    pub fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub(crate) fn new(meta: ReflectMeta<'a>, named: &'a FieldsNamed) -> syn::Result<Self> {
        let mut fields = Vec::with_capacity(named.named.len());
        let mut seen = BTreeSet::new();

        for field in &named.named {
            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if attrs.ignore {
                continue;
            }
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            let raw = ident.to_string();
            let raw = raw.strip_prefix("r#").unwrap_or(&raw);
            let name = match (&attrs.rename, meta.attrs.rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(raw),
                (None, None) => raw.to_owned(),
            };

            if !seen.insert(name.clone()) {
                return Err(syn::Error::new_spanned(
                    ident,
                    format!("duplicate reflected field name `{name}`"),
                ));
            }

            fields.push(StructField {
                ident,
                ty: &field.ty,
                name,
            });
        }

        Ok(Self { meta, fields })
    }
}
