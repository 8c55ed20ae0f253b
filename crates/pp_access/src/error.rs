use alloc::boxed::Box;

use pp_reflect::info::{ReflectKind, Type};
use thiserror::Error;

// -----------------------------------------------------------------------------
// AccessError

/// Error returned when a path cannot be compiled.
///
/// A runtime `None` along the chain is not an error; see
/// [`CompiledAccessor::get`](crate::CompiledAccessor::get).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccessError {
    /// The path string is malformed. Raised before any resolution.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A segment does not name a member of the composed type.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl AccessError {
    /// Returns `true` for a malformed path.
    #[inline]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns the resolution failure, if this is one.
    #[inline]
    pub const fn as_resolve(&self) -> Option<&ResolveError> {
        match self {
            Self::Resolve(err) => Some(err),
            Self::Usage(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// UsageError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UsageError {
    #[error("property path is empty")]
    EmptyPath,

    #[error("property path `{path}` has an empty segment at byte {offset}")]
    EmptySegment { path: Box<str>, offset: usize },
}

// -----------------------------------------------------------------------------
// ResolveError

/// A segment that could not be resolved against its declaring type.
///
/// Carries the full original path, not only the failing segment.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("cannot resolve `{segment}` on `{declaring_type}` in path `{path}`: {cause}")]
pub struct ResolveError {
    /// The type the segment was looked up on.
    pub declaring_type: Type,
    /// The complete path being compiled.
    pub path: Box<str>,
    /// The failing segment.
    pub segment: Box<str>,
    pub cause: ResolveCause,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ResolveCause {
    #[error("no field with this name")]
    MissingMember,

    #[error("{0} types have no named members")]
    NotAStruct(ReflectKind),
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use pp_reflect::info::{ReflectKind, Type};

    use super::{AccessError, ResolveCause, ResolveError, UsageError};

    #[test]
    fn messages_name_type_path_and_segment() {
        let err = AccessError::from(ResolveError {
            declaring_type: Type::of::<u32>(),
            path: "Age.Years".into(),
            segment: "Years".into(),
            cause: ResolveCause::NotAStruct(ReflectKind::Opaque),
        });

        assert_eq!(
            err.to_string(),
            "cannot resolve `Years` on `u32` in path `Age.Years`: Opaque types have no named members"
        );
        assert!(!err.is_usage());
        assert_eq!(err.as_resolve().map(|e| &*e.segment), Some("Years"));
    }

    #[test]
    fn usage_errors_report_offsets() {
        let err = AccessError::from(UsageError::EmptySegment {
            path: "a..b".into(),
            offset: 2,
        });
        assert!(err.is_usage());
        assert_eq!(
            err.to_string(),
            "property path `a..b` has an empty segment at byte 2"
        );
    }
}
