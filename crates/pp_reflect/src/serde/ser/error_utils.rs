use core::fmt::Display;
use serde_core::ser::Error;

#[inline]
pub(super) fn make_custom_error<E: Error>(msg: impl Display) -> E {
    E::custom(msg)
}
