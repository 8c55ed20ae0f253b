use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use pp_reflect::Reflect;
use pp_reflect::info::{FieldGetter, Type, TypeInfo, Typed};

use crate::{
    AccessError, CompiledAccessor, PropertyPath, ResolveCause, ResolveError, ResolvedSegment,
};

// -----------------------------------------------------------------------------
// RootParameter

/// The starting point of every path compiled for `T`.
///
/// Symbolic only: it holds the static description of `T`, not an
/// instance, so one value is shared by all compilations for `T`.
pub struct RootParameter<T> {
    info: &'static TypeInfo,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Typed> RootParameter<T> {
    pub fn new() -> Self {
        Self {
            info: T::type_info(),
            _marker: PhantomData,
        }
    }
}

impl<T: Typed> Default for RootParameter<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RootParameter<T> {
    #[inline]
    pub const fn ty(&self) -> &Type {
        self.info.ty()
    }

    #[inline]
    pub const fn type_info(&self) -> &'static TypeInfo {
        self.info
    }
}

impl<T> fmt::Debug for RootParameter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RootParameter").field(self.ty()).finish()
    }
}

// -----------------------------------------------------------------------------
// PathCompiler

/// Turns a dotted path into a [`CompiledAccessor`].
///
/// Resolution walks `T`'s static [`TypeInfo`]: each segment must name a
/// field of the struct reached so far. `Option` fields are transparent;
/// stepping through one adds an unwrap step and makes the accessor
/// nullable.
///
/// Usually driven by a [`CompilationCache`], which calls it at most once
/// per path. Direct use compiles every time:
///
/// ```
/// use pp_access::{PathCompiler, RootParameter};
/// use pp_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Person {
///     age: u32,
/// }
///
/// let root = RootParameter::<Person>::new();
/// let accessor = PathCompiler::compile(&root, "age").unwrap();
///
/// assert_eq!(accessor.get_as::<u32>(&Person { age: 7 }), Some(&7));
/// assert!(accessor.membership().is_none());
/// ```
///
/// [`CompilationCache`]: crate::CompilationCache
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCompiler;

impl PathCompiler {
    /// Compiles `path` against the type described by `root`.
    ///
    /// # Errors
    ///
    /// - [`AccessError::Usage`] if the path is empty or has an empty segment.
    /// - [`AccessError::Resolve`] if a segment is not a member of the type
    ///   reached so far.
    pub fn compile<T: Reflect>(
        root: &RootParameter<T>,
        path: &str,
    ) -> Result<CompiledAccessor<T>, AccessError> {
        let parsed = PropertyPath::parse(path)?;

        let mut current = root.type_info();
        let mut nullable = false;
        let mut steps: Vec<FieldGetter> = Vec::with_capacity(parsed.len());
        let mut segments = Vec::with_capacity(parsed.len());

        for &name in parsed.segments() {
            let through_option = unwrap_options(&mut current, &mut steps);
            nullable |= through_option;

            let info = match current {
                TypeInfo::Struct(info) => info,
                other => {
                    return Err(unresolved(other, &parsed, name, ResolveCause::NotAStruct(other.kind())));
                }
            };
            let Some(field) = info.field(name) else {
                return Err(unresolved(current, &parsed, name, ResolveCause::MissingMember));
            };

            steps.push(field.getter());
            segments.push(ResolvedSegment {
                declaring_type: *info.ty(),
                field,
                through_option,
            });
            current = field.type_info();
        }

        nullable |= unwrap_options(&mut current, &mut steps);

        log::debug!(
            "compiled path `{path}` on `{}`: {} step(s), terminal `{}`",
            root.ty(),
            steps.len(),
            current.type_path(),
        );

        Ok(CompiledAccessor::new(
            path,
            current,
            nullable,
            steps.into_boxed_slice(),
            segments.into_boxed_slice(),
        ))
    }
}

/// Steps through every `Option` layer of `current`, one unwrap per layer.
fn unwrap_options(current: &mut &'static TypeInfo, steps: &mut Vec<FieldGetter>) -> bool {
    let mut unwrapped = false;
    while let TypeInfo::Option(option) = *current {
        steps.push(option.unwrap());
        *current = option.some_info();
        unwrapped = true;
    }
    unwrapped
}

#[cold]
fn unresolved(
    declaring: &TypeInfo,
    path: &PropertyPath<'_>,
    segment: &str,
    cause: ResolveCause,
) -> AccessError {
    AccessError::Resolve(ResolveError {
        declaring_type: *declaring.ty(),
        path: path.as_str().into(),
        segment: segment.into(),
        cause,
    })
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use pp_reflect::derive::Reflect;
    use pp_reflect::info::{ReflectKind, Typed};

    use super::{PathCompiler, RootParameter};
    use crate::{AccessError, ResolveCause, UsageError};

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(opaque)]
    struct Zip(u32);

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct City {
        name: String,
        zip: Option<Zip>,
    }

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Address {
        city: City,
        lines: [String; 2],
    }

    #[derive(Reflect)]
    #[reflect(rename_all = "PascalCase")]
    struct Person {
        address: Option<Address>,
        tags: Vec<String>,
        badges: BTreeSet<u16>,
        age: u32,
        #[reflect(rename = "nick")]
        nickname: Option<Option<String>>,
    }

    fn paris() -> Person {
        Person {
            address: Some(Address {
                city: City {
                    name: "Paris".into(),
                    zip: Some(Zip(75001)),
                },
                lines: ["1 Rue de Rivoli".into(), String::new()],
            }),
            tags: vec!["vip".into(), "early".into()],
            badges: [3, 5].into_iter().collect(),
            age: 41,
            nickname: Some(None),
        }
    }

    fn compile(path: &str) -> Result<crate::CompiledAccessor<Person>, AccessError> {
        PathCompiler::compile(&RootParameter::<Person>::new(), path)
    }

    #[test]
    fn nested_path_reads_the_terminal_value() {
        let accessor = compile("Address.City.Name").unwrap();

        assert!(accessor.terminal_type().type_is::<String>());
        assert!(accessor.is_nullable());
        assert_eq!(accessor.step_count(), 4);
        assert_eq!(accessor.get_as::<String>(&paris()).unwrap(), "Paris");

        let names: Vec<_> = accessor.segments().iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Address", "City", "Name"]);
        assert!(accessor.segments()[0].declaring_type().is::<Person>());
        assert!(accessor.segments()[1].through_option());
    }

    #[test]
    fn none_along_the_path_is_absent() {
        let accessor = compile("Address.City.Name").unwrap();
        let homeless = Person {
            address: None,
            ..paris()
        };
        assert!(accessor.get(&homeless).is_none());

        let accessor = compile("Address.City.Zip").unwrap();
        assert!(accessor.terminal_type().type_is::<Zip>());
        assert_eq!(accessor.get_as::<Zip>(&paris()), Some(&Zip(75001)));

        // Nested options are all stripped.
        let accessor = compile("nick").unwrap();
        assert!(accessor.terminal_type().type_is::<String>());
        assert_eq!(accessor.step_count(), 3);
        assert!(accessor.get(&paris()).is_none());
    }

    #[test]
    fn non_nullable_paths_are_flagged() {
        let accessor = compile("Age").unwrap();
        assert!(!accessor.is_nullable());
        assert_eq!(accessor.get_as::<u32>(&paris()), Some(&41));
        assert_eq!(accessor.get_as::<u64>(&paris()), None);
    }

    #[test]
    fn missing_member_names_declaring_type_and_full_path() {
        let err = compile("Address.Country.Name").unwrap_err();
        let resolve = err.as_resolve().unwrap();

        assert!(resolve.declaring_type.is::<Address>());
        assert_eq!(&*resolve.path, "Address.Country.Name");
        assert_eq!(&*resolve.segment, "Country");
        assert_eq!(resolve.cause, ResolveCause::MissingMember);

        let message = err.to_string();
        assert!(message.contains("Address.Country.Name"));
        assert!(message.contains(Address::type_info().type_path()));
    }

    #[test]
    fn names_are_case_sensitive_and_renamed() {
        assert!(compile("address").is_err());
        assert!(compile("Nickname").is_err());
        assert!(compile("nick").is_ok());
    }

    #[test]
    fn members_of_non_structs_are_rejected() {
        let err = compile("Tags.Count").unwrap_err();
        let resolve = err.as_resolve().unwrap();
        assert!(resolve.declaring_type.is::<Vec<String>>());
        assert_eq!(resolve.cause, ResolveCause::NotAStruct(ReflectKind::List));

        let err = compile("Age.Value").unwrap_err();
        assert_eq!(
            err.as_resolve().unwrap().cause,
            ResolveCause::NotAStruct(ReflectKind::Opaque)
        );
    }

    #[test]
    fn sequence_terminals_expose_membership() {
        let person = paris();

        let tags = compile("Tags").unwrap();
        let test = tags.membership().unwrap();
        let value = tags.get(&person).unwrap();
        assert!(test.contains_value(value, &String::from("vip")));
        assert!(!test.contains_value(value, &String::from("late")));

        let badges = compile("Badges").unwrap();
        let test = badges.membership().unwrap();
        assert!(test.contains(&person.badges, &5_u16));

        let lines = compile("Address.Lines").unwrap();
        assert_eq!(lines.terminal_type().kind(), ReflectKind::Array);
        assert!(lines.membership().is_some());

        assert!(compile("Age").unwrap().membership().is_none());
        assert!(compile("Address.City.Name").unwrap().membership().is_none());
    }

    #[test]
    fn malformed_paths_are_usage_errors() {
        assert_eq!(
            compile("").unwrap_err(),
            AccessError::Usage(UsageError::EmptyPath)
        );
        for path in [".", "a..b", ".a", "a.", "Address..Name"] {
            assert!(compile(path).unwrap_err().is_usage(), "{path}");
        }
    }

    #[test]
    fn repeated_reads_are_deterministic() {
        let accessor = compile("Address.City.Name").unwrap();
        let person = paris();

        let first = accessor.get(&person).unwrap();
        for _ in 0..8 {
            assert_eq!(accessor.get(&person).unwrap(), first);
        }
    }
}
