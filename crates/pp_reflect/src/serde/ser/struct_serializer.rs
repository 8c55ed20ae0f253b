use serde_core::{Serialize, Serializer, ser::SerializeStruct};

use super::ReflectSerializer;
use super::error_utils::make_custom_error;

use crate::ops::Struct;

pub(super) struct StructSerializer<'a> {
    pub struct_value: &'a dyn Struct,
}

impl Serialize for StructSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serde wants `'static` field names; they live in the `StructInfo`.
        let info = match self.struct_value.reflect_type_info().as_struct() {
            Ok(info) => info,
            Err(err) => return Err(make_custom_error(err)),
        };

        let mut state = serializer.serialize_struct(info.type_ident(), info.field_len())?;
        for (field, value) in info.iter().zip(self.struct_value.iter_fields()) {
            state.serialize_field(field.name(), &ReflectSerializer::new(value))?;
        }
        state.end()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::serde::ReflectSerializer;

    #[derive(Reflect)]
    struct City {
        name: String,
    }

    #[derive(Reflect)]
    #[reflect(rename_all = "camelCase")]
    struct Address {
        street_name: String,
        city: Option<City>,
        #[reflect(rename = "tags")]
        labels: Vec<String>,
    }

    #[test]
    fn nested_struct_to_json() {
        let address = Address {
            street_name: "Rue de Rivoli".into(),
            city: Some(City { name: "Paris".into() }),
            labels: vec!["home".into()],
        };

        let json = serde_json::to_value(ReflectSerializer::new(&address)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "streetName": "Rue de Rivoli",
                "city": { "name": "Paris" },
                "tags": ["home"],
            })
        );
    }

    #[test]
    fn unserializable_opaque_reports_its_type() {
        #[derive(Reflect, PartialEq, Debug)]
        #[reflect(opaque)]
        struct Handle(u32);

        let err = serde_json::to_string(&ReflectSerializer::new(&Handle(1))).unwrap_err();
        assert!(err.to_string().contains("Handle"), "{err}");
    }

    #[test]
    fn serializable_opaque_uses_its_own_impl() {
        #[derive(Reflect, serde::Serialize, PartialEq, Debug)]
        #[reflect(opaque, serialize)]
        struct Zip {
            code: u32,
            country: &'static str,
        }

        #[derive(Reflect)]
        struct Place {
            zip: Zip,
            previous: Option<Zip>,
        }

        let zip = Zip {
            code: 75001,
            country: "FR",
        };
        let json = serde_json::to_value(ReflectSerializer::new(&zip)).unwrap();
        assert_eq!(json, serde_json::json!({ "code": 75001, "country": "FR" }));

        let place = Place {
            zip,
            previous: None,
        };
        let json = serde_json::to_value(ReflectSerializer::new(&place)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "zip": { "code": 75001, "country": "FR" },
                "previous": null,
            })
        );
    }
}
