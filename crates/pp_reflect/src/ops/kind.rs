use core::fmt;

use crate::Reflect;
use crate::info::ReflectKind;
use crate::ops::{List, Set, Struct};

/// An immutable view of a reflected value, by kind.
///
/// ```
/// use pp_reflect::{Reflect, ops::ReflectRef};
///
/// let x: &dyn Reflect = &vec![1_u8, 2, 3];
/// let ReflectRef::List(list) = x.reflect_ref() else { unreachable!() };
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Clone, Copy)]
pub enum ReflectRef<'a> {
    Struct(&'a dyn Struct),
    List(&'a dyn List),
    Array(&'a dyn List),
    Set(&'a dyn Set),
    /// The payload of an `Option`, `None` when absent.
    Option(Option<&'a dyn Reflect>),
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Returns the [`ReflectKind`] of this view.
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::List(_) => ReflectKind::List,
            Self::Array(_) => ReflectKind::Array,
            Self::Set(_) => ReflectKind::Set,
            Self::Option(_) => ReflectKind::Option,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns the struct view, if any.
    #[inline]
    pub const fn as_struct(self) -> Option<&'a dyn Struct> {
        match self {
            Self::Struct(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the list view of a list or an array.
    #[inline]
    pub const fn as_list(self) -> Option<&'a dyn List> {
        match self {
            Self::List(value) | Self::Array(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the set view, if any.
    #[inline]
    pub const fn as_set(self) -> Option<&'a dyn Set> {
        match self {
            Self::Set(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Debug for ReflectRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReflectRef").field(&self.kind()).finish()
    }
}
