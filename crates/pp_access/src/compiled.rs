use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;

use pp_reflect::Reflect;
use pp_reflect::info::{FieldGetter, NamedField, Type, TypeInfo};

use crate::{MembershipTest, PathValue};

// -----------------------------------------------------------------------------
// ResolvedSegment

/// One member of an access plan, as resolved at compile time.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedSegment {
    pub(crate) declaring_type: Type,
    pub(crate) field: &'static NamedField,
    pub(crate) through_option: bool,
}

impl ResolvedSegment {
    /// Returns the struct the member belongs to.
    #[inline]
    pub const fn declaring_type(&self) -> Type {
        self.declaring_type
    }

    /// Returns the reflected member name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Returns the declared type of the member, `Option` included.
    #[inline]
    pub fn field_info(&self) -> &'static TypeInfo {
        self.field.type_info()
    }

    /// Returns `true` if an `Option` was unwrapped to reach the declaring
    /// struct.
    #[inline]
    pub const fn through_option(&self) -> bool {
        self.through_option
    }
}

// -----------------------------------------------------------------------------
// CompiledAccessor

/// A compiled property path over `T`.
///
/// Holds the access plan as a slice of pre-resolved getters. Reading a
/// value calls each getter in turn; no name lookup and no metadata walk
/// happens per call.
///
/// Built by [`PathCompiler::compile`] and shared through a
/// [`CompilationCache`].
///
/// ```
/// use pp_access::CompilationCache;
/// use pp_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct City {
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// struct Address {
///     city: Option<City>,
/// }
///
/// let cache = CompilationCache::<Address>::new();
/// let accessor = cache.get_or_compile("city.name").unwrap();
///
/// assert!(accessor.terminal_type().type_is::<String>());
/// assert!(accessor.is_nullable());
///
/// let address = Address { city: Some(City { name: "Paris".into() }) };
/// assert_eq!(accessor.get_as::<String>(&address).unwrap(), "Paris");
///
/// let nowhere = Address { city: None };
/// assert!(accessor.get(&nowhere).is_none());
/// ```
///
/// [`PathCompiler::compile`]: crate::PathCompiler::compile
/// [`CompilationCache`]: crate::CompilationCache
pub struct CompiledAccessor<T> {
    path: Box<str>,
    terminal_type: &'static TypeInfo,
    nullable: bool,
    steps: Box<[FieldGetter]>,
    segments: Box<[ResolvedSegment]>,
    membership: Option<MembershipTest>,
    // `fn(&T)` keeps the accessor `Send + Sync` whatever `T` is.
    _marker: PhantomData<fn(&T)>,
}

impl<T: Reflect> CompiledAccessor<T> {
    pub(crate) fn new(
        path: &str,
        terminal_type: &'static TypeInfo,
        nullable: bool,
        steps: Box<[FieldGetter]>,
        segments: Box<[ResolvedSegment]>,
    ) -> Self {
        Self {
            path: path.into(),
            terminal_type,
            nullable,
            steps,
            segments,
            membership: MembershipTest::of(terminal_type),
            _marker: PhantomData,
        }
    }

    /// Reads the value at the end of the path.
    ///
    /// Returns `None` if an `Option` along the way is `None`.
    pub fn get<'a>(&self, input: &'a T) -> Option<PathValue<'a>> {
        let mut current: &'a dyn Reflect = input;
        for step in &self.steps {
            current = step(current)?;
        }
        Some(PathValue::new(current, self.terminal_type))
    }

    /// Reads the value and downcasts it to `V`.
    ///
    /// Returns `None` on a `None` along the path, or if `V` is not the
    /// terminal type.
    #[inline]
    pub fn get_as<'a, V: Reflect>(&self, input: &'a T) -> Option<&'a V> {
        self.get(input)?.downcast_ref::<V>()
    }
}

impl<T> CompiledAccessor<T> {
    /// Returns the path this accessor was compiled from.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the static type at the end of the path, `Option` stripped.
    #[inline]
    pub const fn terminal_type(&self) -> &'static TypeInfo {
        self.terminal_type
    }

    /// Returns `true` if the path crosses an `Option`, so [`get`] may
    /// return `None`.
    ///
    /// [`get`]: CompiledAccessor::get
    #[inline]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Returns the membership test when the terminal type is a list, array
    /// or set.
    #[inline]
    pub const fn membership(&self) -> Option<&MembershipTest> {
        self.membership.as_ref()
    }

    /// Returns the resolved members, one per path segment.
    #[inline]
    pub fn segments(&self) -> &[ResolvedSegment] {
        &self.segments
    }

    /// Returns the number of getters run per read. At least the number of
    /// segments, plus one per unwrapped `Option`.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl<T> fmt::Debug for CompiledAccessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledAccessor")
            .field("path", &self.path)
            .field("terminal_type", self.terminal_type.ty())
            .field("nullable", &self.nullable)
            .field("membership", &self.membership)
            .finish()
    }
}
