use alloc::boxed::Box;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};

use pp_reflect::Reflect;
use pp_reflect::info::Typed;
use pp_utils::hash::{FixedHashState, HashMap};

use crate::{
    AccessError, CompiledAccessor, EngineConfig, FailurePolicy, PathCompiler, PropertyPath,
    RootParameter,
};

// -----------------------------------------------------------------------------
// Slot

type Compiled<T> = Result<Arc<CompiledAccessor<T>>, AccessError>;

/// The storage of one path.
///
/// `lock` serializes compilations of this path only; `value` publishes the
/// finished artifact to lock-free readers. Under [`FailurePolicy::Retry`] a
/// failed slot is detached from the map with its error set, so callers that
/// already hold it see that attempt's error and new requests start over.
struct Slot<T> {
    lock: Mutex<()>,
    value: OnceLock<Compiled<T>>,
}

impl<T> Slot<T> {
    const fn new() -> Self {
        Self {
            lock: Mutex::new(()),
            value: OnceLock::new(),
        }
    }

    fn compiled(&self) -> Option<&Arc<CompiledAccessor<T>>> {
        self.value.get()?.as_ref().ok()
    }
}

// -----------------------------------------------------------------------------
// CompilationCache

/// The compile function used by a cache.
pub type CompileFn<T> =
    dyn Fn(&RootParameter<T>, &str) -> Result<CompiledAccessor<T>, AccessError> + Send + Sync;

/// Compiles each path over `T` at most once.
///
/// - A path that already compiled is returned without invoking the compiler.
/// - Concurrent first requests for the same path run the compiler once, and
///   every caller receives the same [`Arc`].
/// - Requests for different paths never wait for each other's compilation:
///   the map lock is only held to find or insert a per-path slot.
/// - Compiled entries are never removed or replaced.
///
/// Failed compilations follow the configured [`FailurePolicy`].
///
/// ```
/// use std::sync::Arc;
///
/// use pp_access::CompilationCache;
/// use pp_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Person {
///     age: u32,
/// }
///
/// let cache = CompilationCache::<Person>::new();
/// let first = cache.get_or_compile("age").unwrap();
/// let again = cache.get_or_compile("age").unwrap();
///
/// assert!(Arc::ptr_eq(&first, &again));
/// assert_eq!(cache.compilations(), 1);
/// ```
pub struct CompilationCache<T> {
    config: EngineConfig,
    root: OnceLock<RootParameter<T>>,
    slots: RwLock<HashMap<Box<str>, Arc<Slot<T>>>>,
    compilations: AtomicUsize,
    compiler: Box<CompileFn<T>>,
}

impl<T: Reflect + Typed> CompilationCache<T> {
    /// Creates an empty cache using [`PathCompiler`].
    #[inline]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_compiler(config, PathCompiler::compile::<T>)
    }

    /// Creates an empty cache that compiles through `compiler`.
    ///
    /// Paths reach `compiler` already validated. Useful to wrap
    /// [`PathCompiler::compile`] with instrumentation.
    pub fn with_compiler<F>(config: EngineConfig, compiler: F) -> Self
    where
        F: Fn(&RootParameter<T>, &str) -> Result<CompiledAccessor<T>, AccessError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            config,
            root: OnceLock::new(),
            slots: RwLock::new(HashMap::with_capacity_and_hasher(
                config.initial_capacity,
                FixedHashState,
            )),
            compilations: AtomicUsize::new(0),
            compiler: Box::new(compiler),
        }
    }

    /// Returns the accessor for `path`, compiling it on first request.
    ///
    /// # Errors
    ///
    /// Malformed paths fail with [`AccessError::Usage`] before the cache is
    /// touched. Resolution failures are returned to every caller that was
    /// waiting on the compilation; whether later requests retry depends on
    /// the [`FailurePolicy`]. Under [`FailurePolicy::Retry`] a failed path
    /// leaves no entry behind.
    pub fn get_or_compile(&self, path: &str) -> Result<Arc<CompiledAccessor<T>>, AccessError> {
        PropertyPath::parse(path)?;

        let slot = self.slot(path);
        if let Some(done) = slot.value.get() {
            if done.is_ok() {
                log::trace!("accessor cache hit: `{path}` on `{}`", T::type_path());
            }
            return done.clone();
        }

        let _guard = slot.lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have finished, or failed, while this one waited.
        if let Some(done) = slot.value.get() {
            return done.clone();
        }

        let root = self.root.get_or_init(|| {
            log::trace!("created root parameter for `{}`", T::type_path());
            RootParameter::new()
        });

        self.compilations.fetch_add(1, Ordering::Relaxed);
        let result = (self.compiler)(root, path).map(Arc::new);
        let _ = slot.value.set(result.clone());

        if let Err(err) = &result {
            log::warn!("failed to compile accessor: {err}");
            if self.config.failure_policy == FailurePolicy::Retry {
                self.detach(path, &slot);
            }
        }

        result
    }

    /// Removes `slot` from the map if it is still the entry for `path`.
    ///
    /// Must be called with `slot.lock` held.
    fn detach(&self, path: &str, slot: &Arc<Slot<T>>) {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if slots.get(path).is_some_and(|current| Arc::ptr_eq(current, slot)) {
            slots.remove(path);
        }
    }

    /// Finds or inserts the slot for `path`.
    fn slot(&self, path: &str) -> Arc<Slot<T>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = slots.get(path) {
            return slot.clone();
        }
        drop(slots);

        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry(path.into())
            .or_insert_with(|| Arc::new(Slot::new()))
            .clone()
    }
}

impl<T: Reflect + Typed> Default for CompilationCache<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CompilationCache<T> {
    /// Returns the compiled accessor for `path` without compiling.
    pub fn get(&self, path: &str) -> Option<Arc<CompiledAccessor<T>>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(path)?.compiled().cloned()
    }

    /// Returns `true` if `path` has compiled successfully.
    pub fn contains(&self, path: &str) -> bool {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.get(path).is_some_and(|slot| slot.compiled().is_some())
    }

    /// Returns the number of compiled accessors.
    pub fn len(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.compiled().is_some()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the compiled paths in arbitrary order.
    pub fn paths(&self) -> Vec<Box<str>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .iter()
            .filter(|(_, slot)| slot.compiled().is_some())
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Returns how many times the compiler has been invoked.
    #[inline]
    pub fn compilations(&self) -> usize {
        self.compilations.load(Ordering::Relaxed)
    }

    /// Returns the root parameter, `None` before the first compilation.
    #[inline]
    pub fn root(&self) -> Option<&RootParameter<T>> {
        self.root.get()
    }

    #[inline]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<T> fmt::Debug for CompilationCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationCache")
            .field("config", &self.config)
            .field("root", &self.root.get())
            .field("len", &self.len())
            .field("compilations", &self.compilations())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use core::time::Duration;
    use std::sync::Barrier;
    use std::thread;

    use pp_reflect::derive::Reflect;

    use super::CompilationCache;
    use crate::{
        AccessError, CompiledAccessor, EngineConfig, FailurePolicy, PathCompiler, RootParameter,
    };

    #[derive(Reflect)]
    struct City {
        name: String,
    }

    #[derive(Reflect)]
    struct Person {
        city: Option<City>,
        tags: Vec<String>,
        age: u32,
    }

    #[test]
    fn hits_return_the_same_artifact() {
        let cache = CompilationCache::<Person>::new();
        assert!(cache.is_empty());
        assert!(cache.root().is_none());

        let first = cache.get_or_compile("city.name").unwrap();
        let again = cache.get_or_compile("city.name").unwrap();
        let other = cache.get_or_compile("age").unwrap();

        assert!(Arc::ptr_eq(&first, &again));
        assert!(!Arc::ptr_eq(&first, &other));
        assert_eq!(cache.compilations(), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.contains("age"));
        assert!(!cache.contains("tags"));
        assert!(cache.root().unwrap().ty().is::<Person>());

        let cached = cache.get("city.name").unwrap();
        assert!(Arc::ptr_eq(&first, &cached));
        assert!(cache.get("tags").is_none());

        let mut paths = cache.paths();
        paths.sort();
        assert_eq!(paths, [Box::<str>::from("age"), Box::from("city.name")]);
    }

    #[test]
    fn malformed_paths_never_reach_the_compiler() {
        let cache = CompilationCache::<Person>::new();
        for path in ["", ".", "a..b", ".a", "a."] {
            assert!(cache.get_or_compile(path).unwrap_err().is_usage());
        }
        assert_eq!(cache.compilations(), 0);
        assert!(cache.root().is_none());
    }

    #[test]
    fn concurrent_first_use_compiles_once() {
        const CALLERS: usize = 16;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cache = CompilationCache::<Person>::with_compiler(EngineConfig::new(), move |root, path| {
            counter.fetch_add(1, Ordering::SeqCst);
            // Widen the race window.
            thread::sleep(Duration::from_millis(20));
            PathCompiler::compile(root, path)
        });

        let barrier = Barrier::new(CALLERS);
        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_or_compile("tags").unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.compilations(), 1);
        assert_eq!(results.len(), CALLERS);
        assert!(results.iter().all(|acc| Arc::ptr_eq(acc, &results[0])));
    }

    #[test]
    fn concurrent_failures_share_one_attempt() {
        const CALLERS: usize = 8;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let cache = CompilationCache::<Person>::with_compiler(EngineConfig::new(), move |root, path| {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            PathCompiler::compile(root, path)
        });

        let barrier = Barrier::new(CALLERS);
        let errors: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get_or_compile("missing").unwrap_err()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // Callers that arrive after the failed attempt is detached start a
        // new one, so only a lower bound on sharing is deterministic.
        assert!(calls.load(Ordering::SeqCst) < CALLERS);
        assert!(errors.iter().all(|err| *err == errors[0]));
        assert!(cache.slots.read().unwrap().is_empty());
    }

    #[test]
    fn failed_paths_leave_no_entries() {
        let cache = CompilationCache::<Person>::new();
        for i in 0..64 {
            let path = alloc::format!("bogus{i}");
            assert!(cache.get_or_compile(&path).unwrap_err().as_resolve().is_some());
        }

        assert_eq!(cache.compilations(), 64);
        assert!(cache.is_empty());
        assert!(cache.slots.read().unwrap().is_empty());

        cache.get_or_compile("age").unwrap();
        assert_eq!(cache.slots.read().unwrap().len(), 1);
    }

    #[test]
    fn slow_compile_does_not_block_other_paths() {
        let started = Arc::new(AtomicBool::new(false));
        let release = Arc::new(AtomicBool::new(false));
        let (started_in, release_in) = (started.clone(), release.clone());

        let cache = CompilationCache::<Person>::with_compiler(
            EngineConfig::new(),
            move |root: &RootParameter<Person>, path: &str| {
                if path == "age" {
                    started_in.store(true, Ordering::SeqCst);
                    while !release_in.load(Ordering::SeqCst) {
                        thread::yield_now();
                    }
                }
                PathCompiler::compile(root, path)
            },
        );

        thread::scope(|scope| {
            let slow = scope.spawn(|| cache.get_or_compile("age"));
            while !started.load(Ordering::SeqCst) {
                thread::yield_now();
            }

            // "age" is still compiling; "tags" must complete regardless.
            let tags = cache.get_or_compile("tags").unwrap();
            assert!(tags.membership().is_some());
            assert!(!cache.contains("age"));

            release.store(true, Ordering::SeqCst);
            assert!(slow.join().unwrap().is_ok());
        });

        assert_eq!(cache.len(), 2);
    }

    fn flaky(
        fail: &'static AtomicBool,
    ) -> impl Fn(&RootParameter<Person>, &str) -> Result<CompiledAccessor<Person>, AccessError>
    + Send
    + Sync
    + 'static {
        move |root, path| {
            if fail.load(Ordering::SeqCst) {
                PathCompiler::compile(root, "missing")
            } else {
                PathCompiler::compile(root, path)
            }
        }
    }

    #[test]
    fn retry_policy_recompiles_after_failure() {
        static FAIL: AtomicBool = AtomicBool::new(true);
        let cache = CompilationCache::with_compiler(EngineConfig::new(), flaky(&FAIL));

        let err = cache.get_or_compile("age").unwrap_err();
        assert!(err.as_resolve().is_some());
        assert!(!cache.contains("age"));
        assert!(cache.is_empty());
        assert!(cache.slots.read().unwrap().is_empty());

        FAIL.store(false, Ordering::SeqCst);
        assert!(cache.get_or_compile("age").is_ok());
        assert_eq!(cache.compilations(), 2);
    }

    #[test]
    fn sticky_policy_replays_the_first_failure() {
        static FAIL: AtomicBool = AtomicBool::new(true);
        let config = EngineConfig::new().with_failure_policy(FailurePolicy::Sticky);
        let cache = CompilationCache::with_compiler(config, flaky(&FAIL));

        let first = cache.get_or_compile("age").unwrap_err();
        FAIL.store(false, Ordering::SeqCst);
        let second = cache.get_or_compile("age").unwrap_err();

        assert_eq!(first, second);
        assert_eq!(cache.compilations(), 1);
        assert!(cache.get("age").is_none());
        assert!(cache.is_empty());
        assert_eq!(cache.slots.read().unwrap().len(), 1);
    }

    #[test]
    fn accessors_are_deterministic_across_threads() {
        let cache = CompilationCache::<Person>::new();
        let person = Person {
            city: Some(City {
                name: "Paris".into(),
            }),
            tags: vec!["vip".into()],
            age: 30,
        };

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let accessor = cache.get_or_compile("city.name").unwrap();
                    for _ in 0..16 {
                        assert_eq!(accessor.get_as::<String>(&person).unwrap(), "Paris");
                    }
                });
            }
        });
        assert_eq!(cache.compilations(), 1);
    }
}
