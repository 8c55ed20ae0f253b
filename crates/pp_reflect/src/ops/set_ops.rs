use alloc::boxed::Box;

use crate::Reflect;

/// Access to an unordered collection of unique values.
///
/// ```
/// use std::collections::BTreeSet;
/// use pp_reflect::ops::Set;
///
/// let tags: BTreeSet<String> = ["vip".to_string()].into();
///
/// assert!(Set::contains(&tags, &"vip".to_string()));
/// assert!(!Set::contains(&tags, &"new".to_string()));
/// // A value of another type is never a member.
/// assert!(!Set::contains(&tags, &7_u32));
/// ```
pub trait Set: Reflect {
    /// Returns the stored value equal to `value`.
    fn get(&self, value: &dyn Reflect) -> Option<&dyn Reflect>;

    /// Returns `true` if the set holds a value equal to `value`.
    #[inline]
    fn contains(&self, value: &dyn Reflect) -> bool {
        self.get(value).is_some()
    }

    /// Returns the number of values.
    fn len(&self) -> usize;

    /// Returns `true` if the set holds no values.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the values in the set's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
