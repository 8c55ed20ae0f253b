mod common;
pub use common::*;

mod simple_type;
pub(crate) use simple_type::{impl_opaque_type, impl_simple_type_reflect};

mod type_path;
pub(crate) use type_path::{impl_generic_type_path, impl_plain_type_path};

mod hash_set;
pub(crate) use hash_set::impl_reflect_for_hashset;
