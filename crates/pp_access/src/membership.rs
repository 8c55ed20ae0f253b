use core::fmt;

use pp_reflect::Reflect;
use pp_reflect::info::{ContainsFn, TypeInfo};

use crate::PathValue;

// -----------------------------------------------------------------------------
// MembershipTest

/// A "value is one of" predicate for a sequence-typed terminal.
///
/// Derived once at compile time from the container's [`TypeInfo`]; the
/// wrapped function is monomorphized for the concrete container, so a call
/// performs a downcast and a scan without consulting type metadata.
///
/// ```
/// use pp_access::MembershipTest;
/// use pp_reflect::info::Typed;
///
/// let test = MembershipTest::of(<Vec<String>>::type_info()).unwrap();
/// let tags = vec!["vip".to_string(), "new".to_string()];
///
/// assert!(test.contains(&tags, &"vip".to_string()));
/// assert!(!test.contains(&tags, &"old".to_string()));
///
/// assert!(MembershipTest::of(<u32>::type_info()).is_none());
/// ```
#[derive(Clone, Copy)]
pub struct MembershipTest {
    contains: ContainsFn,
    sequence: &'static TypeInfo,
    element: &'static TypeInfo,
}

impl MembershipTest {
    /// Builds the test for a list, array or set type.
    ///
    /// Returns `None` for every other kind.
    pub fn of(sequence: &'static TypeInfo) -> Option<Self> {
        Some(Self {
            contains: sequence.contains_fn()?,
            sequence,
            element: sequence.element_info()?,
        })
    }

    /// Returns `true` if `candidate` is an element of `sequence`.
    ///
    /// `false` when `sequence` is not the container this test was built for
    /// or `candidate` is not its element type.
    #[inline]
    pub fn contains(&self, sequence: &dyn Reflect, candidate: &dyn Reflect) -> bool {
        (self.contains)(sequence, candidate)
    }

    /// Same as [`contains`](Self::contains) for a value read by an accessor.
    #[inline]
    pub fn contains_value(&self, sequence: PathValue<'_>, candidate: &dyn Reflect) -> bool {
        self.contains(sequence.as_reflect(), candidate)
    }

    /// Returns the container type.
    #[inline]
    pub const fn sequence_info(&self) -> &'static TypeInfo {
        self.sequence
    }

    /// Returns the element type candidates must have.
    #[inline]
    pub const fn element_info(&self) -> &'static TypeInfo {
        self.element
    }
}

impl fmt::Debug for MembershipTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipTest")
            .field("sequence", self.sequence.ty())
            .field("element", self.element.ty())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use std::collections::HashSet;

    use pp_reflect::info::Typed;

    use super::MembershipTest;

    #[test]
    fn sets_and_arrays_have_tests() {
        let test = MembershipTest::of(<BTreeSet<u32>>::type_info()).unwrap();
        let set: BTreeSet<u32> = [1, 2, 3].into_iter().collect();
        assert!(test.contains(&set, &2_u32));
        assert!(!test.contains(&set, &7_u32));
        assert!(test.element_info().type_is::<u32>());

        let test = MembershipTest::of(<HashSet<char>>::type_info()).unwrap();
        let set: HashSet<char> = ['a', 'b'].into_iter().collect();
        assert!(test.contains(&set, &'b'));

        let test = MembershipTest::of(<[i8; 3]>::type_info()).unwrap();
        assert!(test.contains(&[1_i8, -1, 0], &-1_i8));
    }

    #[test]
    fn mismatched_inputs_are_not_members() {
        let test = MembershipTest::of(<Vec<u32>>::type_info()).unwrap();
        let numbers = vec![1_u32, 2];

        // wrong element type
        assert!(!test.contains(&numbers, &1_u64));
        // wrong container type
        assert!(!test.contains(&vec![1_u64], &1_u32));
    }

    #[test]
    fn scalars_and_options_have_none() {
        assert!(MembershipTest::of(<String>::type_info()).is_none());
        assert!(MembershipTest::of(<Option<Vec<u32>>>::type_info()).is_none());
    }
}
