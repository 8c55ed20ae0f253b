use serde_core::{Serialize, Serializer, ser::SerializeSeq};

use super::ReflectSerializer;

use crate::ops::Set;

pub(super) struct SetSerializer<'a> {
    pub set: &'a dyn Set,
}

impl Serialize for SetSerializer<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_seq(Some(self.set.len()))?;
        for value in self.set.iter() {
            state.serialize_element(&ReflectSerializer::new(value))?;
        }
        state.end()
    }
}
