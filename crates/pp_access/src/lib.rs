//! Compiled, cached property-path accessors.
//!
//! A dotted path such as `"Address.City.Name"` is compiled once per input
//! type into a [`CompiledAccessor`]: a plan of pre-resolved field getters,
//! the static type at the end of the path, and, for list, array and set
//! terminals, a [`MembershipTest`].
//!
//! - [`PathCompiler`] resolves a path against the input type's
//!   [`TypeInfo`](pp_reflect::info::TypeInfo).
//! - [`CompilationCache`] runs the compiler at most once per path, even
//!   under concurrent first use, and never evicts.
//! - [`AccessorRegistry`] holds one cache per input type; the application
//!   owns it.
//!
//! ```
//! use pp_access::AccessorRegistry;
//! use pp_reflect::derive::Reflect;
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct City {
//!     name: String,
//! }
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct Address {
//!     city: City,
//! }
//!
//! #[derive(Reflect)]
//! #[reflect(rename_all = "PascalCase")]
//! struct Person {
//!     address: Option<Address>,
//! }
//!
//! let registry = AccessorRegistry::new();
//! let accessor = registry.get_or_compile::<Person>("Address.City.Name").unwrap();
//!
//! let person = Person {
//!     address: Some(Address { city: City { name: "Paris".into() } }),
//! };
//! assert_eq!(accessor.get_as::<String>(&person).unwrap(), "Paris");
//!
//! // `None` along the path is an absent value, not an error.
//! assert!(accessor.get(&Person { address: None }).is_none());
//!
//! // Unknown members fail at compile time.
//! let err = registry.get_or_compile::<Person>("Address.Country.Name").unwrap_err();
//! assert!(err.to_string().contains("Address.Country.Name"));
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod cache;
mod compiled;
mod compiler;
mod config;
mod error;
mod membership;
mod path;
mod registry;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use cache::{CompilationCache, CompileFn};
pub use compiled::{CompiledAccessor, ResolvedSegment};
pub use compiler::{PathCompiler, RootParameter};
pub use config::{EngineConfig, FailurePolicy};
pub use error::{AccessError, ResolveCause, ResolveError, UsageError};
pub use membership::MembershipTest;
pub use path::PropertyPath;
pub use registry::AccessorRegistry;
pub use value::PathValue;
