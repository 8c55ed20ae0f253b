//! Items named by the `#[derive(Reflect)]` output, so that deriving crates
//! do not need these dependencies themselves.

pub use erased_serde;
