use alloc::vec::Vec;
use core::fmt;

use crate::UsageError;

// -----------------------------------------------------------------------------
// PropertyPath

/// A validated, dot-separated sequence of member names.
///
/// Names are matched exactly, so no trimming or case folding happens here.
///
/// ```
/// use pp_access::PropertyPath;
///
/// let path = PropertyPath::parse("Address.City.Name").unwrap();
/// assert_eq!(path.segments(), ["Address", "City", "Name"]);
///
/// assert!(PropertyPath::parse("Address..Name").is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PropertyPath<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> PropertyPath<'a> {
    /// Splits `raw` on `.`.
    ///
    /// Rejects the empty string and any empty segment, reporting the byte
    /// offset where the empty segment starts.
    pub fn parse(raw: &'a str) -> Result<Self, UsageError> {
        if raw.is_empty() {
            return Err(UsageError::EmptyPath);
        }

        let mut segments = Vec::with_capacity(raw.bytes().filter(|&b| b == b'.').count() + 1);
        let mut offset = 0;
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(UsageError::EmptySegment {
                    path: raw.into(),
                    offset,
                });
            }
            segments.push(segment);
            offset += segment.len() + 1;
        }

        Ok(Self { raw, segments })
    }

    /// Returns the original string.
    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.raw
    }

    #[inline]
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns the number of segments, at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Debug for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PropertyPath").field(&self.raw).finish()
    }
}

impl fmt::Display for PropertyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::PropertyPath;
    use crate::UsageError;

    fn empty_at(path: &str) -> Option<usize> {
        match PropertyPath::parse(path) {
            Err(UsageError::EmptySegment { offset, .. }) => Some(offset),
            _ => None,
        }
    }

    #[test]
    fn splits_on_dots() {
        let path = PropertyPath::parse("Tags").unwrap();
        assert_eq!(path.segments(), ["Tags"]);
        assert_eq!(path.len(), 1);

        let path = PropertyPath::parse("a.b_c.D1").unwrap();
        assert_eq!(path.segments(), ["a", "b_c", "D1"]);
        assert_eq!(path.to_string(), "a.b_c.D1");
    }

    #[test]
    fn rejects_malformed_paths() {
        assert_eq!(PropertyPath::parse(""), Err(UsageError::EmptyPath));
        assert_eq!(empty_at("."), Some(0));
        assert_eq!(empty_at(".a"), Some(0));
        assert_eq!(empty_at("a..b"), Some(2));
        assert_eq!(empty_at("a."), Some(2));
        assert_eq!(empty_at("ab.cd."), Some(6));
    }
}
