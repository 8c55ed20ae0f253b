use core::{error, fmt};

use crate::Reflect;
use crate::info::{ArrayInfo, ListInfo, OpaqueInfo, OptionInfo, SetInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ContainsFn

/// A membership test for one concrete container type.
///
/// `contains(sequence, candidate)` returns `true` if `candidate` is an
/// element of `sequence`. It returns `false` when `sequence` is not the
/// container the function was built for, or `candidate` is not its element
/// type.
pub type ContainsFn = fn(&dyn Reflect, &dyn Reflect) -> bool;

// -----------------------------------------------------------------------------
// ReflectKind

/// An enumeration of the "kinds" of a reflected type.
///
/// Obtained through [`TypeInfo::kind`] or [`Reflect::reflect_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    Struct,
    List,
    Array,
    Set,
    Option,
    Opaque,
}

impl ReflectKind {
    /// Returns `true` for lists, arrays and sets.
    #[inline]
    pub const fn is_sequence(self) -> bool {
        matches!(self, Self::List | Self::Array | Self::Set)
    }
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::List => f.pad("List"),
            Self::Array => f.pad("Array"),
            Self::Set => f.pad("Set"),
            Self::Option => f.pad("Option"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

/// Error returned when a `TypeInfo` value is not the expected `ReflectKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectKindError {
    pub expected: ReflectKind,
    pub received: ReflectKind,
}

impl fmt::Display for ReflectKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reflect kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ReflectKindError {}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information for a reflected type.
///
/// Obtained through [`Typed::type_info`] when the type is known statically,
/// or [`DynamicTyped::reflect_type_info`] from a `&dyn Reflect`.
///
/// ```
/// use pp_reflect::info::{Typed, ReflectKind};
///
/// let info = <Option<Vec<u8>>>::type_info();
/// let option = info.as_option().unwrap();
///
/// assert_eq!(option.some_info().kind(), ReflectKind::List);
/// assert!(option.some_info().contains_fn().is_some());
/// ```
///
/// [`Typed::type_info`]: crate::info::Typed::type_info
/// [`DynamicTyped::reflect_type_info`]: crate::info::DynamicTyped::reflect_type_info
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    List(ListInfo),
    Array(ArrayInfo),
    Set(SetInfo),
    Option(OptionInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements type-safe accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeInfo`] to specific type information.
        pub const fn $name(&self) -> Result<&$info, ReflectKindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(ReflectKindError {
                    expected: ReflectKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_list: List => ListInfo);
    impl_cast_method!(as_array: Array => ArrayInfo);
    impl_cast_method!(as_set: Set => SetInfo);
    impl_cast_method!(as_option: Option => OptionInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`] metadata.
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::List(info) => info.ty(),
            Self::Array(info) => info.ty(),
            Self::Set(info) => info.ty(),
            Self::Option(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`] for this `TypeInfo`.
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

    /// Returns the element type of a list, array or set.
    pub fn element_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::List(info) => Some(info.item_info()),
            Self::Array(info) => Some(info.item_info()),
            Self::Set(info) => Some(info.value_info()),
            _ => None,
        }
    }

    /// Returns the membership test of a list, array or set.
    ///
    /// `None` for every other kind.
    pub const fn contains_fn(&self) -> Option<ContainsFn> {
        match self {
            Self::List(info) => Some(info.contains_fn()),
            Self::Array(info) => Some(info.contains_fn()),
            Self::Set(info) => Some(info.contains_fn()),
            _ => None,
        }
    }

    /// Strips every `Option` layer, returning the innermost type.
    ///
    /// ```
    /// use pp_reflect::info::Typed;
    ///
    /// let info = <Option<Option<u32>>>::type_info();
    /// assert!(info.strip_options().type_is::<u32>());
    /// ```
    pub fn strip_options(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Self::Option(option) = info {
            info = option.some_info();
        }
        info
    }
}
