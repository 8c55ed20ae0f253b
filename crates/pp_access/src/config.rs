// -----------------------------------------------------------------------------
// FailurePolicy

/// What a cache remembers about a path that failed to compile.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailurePolicy {
    /// Nothing is kept; callers waiting on the failed attempt share its
    /// error, and the next request compiles again.
    #[default]
    Retry,
    /// The first error is stored and returned for every later request.
    Sticky,
}

// -----------------------------------------------------------------------------
// EngineConfig

/// Settings shared by an [`AccessorRegistry`] and the caches it creates.
///
/// ```
/// use pp_access::{EngineConfig, FailurePolicy};
///
/// let config = EngineConfig::new()
///     .with_failure_policy(FailurePolicy::Sticky)
///     .with_initial_capacity(32);
///
/// assert_eq!(config.failure_policy, FailurePolicy::Sticky);
/// ```
///
/// [`AccessorRegistry`]: crate::AccessorRegistry
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub failure_policy: FailurePolicy,
    /// Paths each cache reserves room for up front.
    pub initial_capacity: usize,
}

impl EngineConfig {
    /// `Retry`, no pre-allocation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            failure_policy: FailurePolicy::Retry,
            initial_capacity: 0,
        }
    }

    #[inline]
    pub const fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    #[inline]
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
