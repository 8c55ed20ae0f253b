use alloc::sync::Arc;
use core::any::{Any, TypeId};
use core::fmt;
use std::sync::{PoisonError, RwLock};

use pp_reflect::Reflect;
use pp_reflect::info::Typed;
use pp_utils::TypeIdMap;

use crate::{AccessError, CompilationCache, CompiledAccessor, EngineConfig};

type ErasedCache = Arc<dyn Any + Send + Sync>;

// -----------------------------------------------------------------------------
// AccessorRegistry

/// Owns one [`CompilationCache`] per input type.
///
/// Created by the application's composition root and shared (by reference
/// or in an `Arc`) with everything that needs accessors. All caches it
/// creates use its [`EngineConfig`].
///
/// ```
/// use std::sync::Arc;
///
/// use pp_access::AccessorRegistry;
/// use pp_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Person {
///     tags: Vec<String>,
/// }
///
/// let registry = AccessorRegistry::new();
/// let accessor = registry.get_or_compile::<Person>("tags").unwrap();
///
/// let person = Person { tags: vec!["vip".into()] };
/// let tags = accessor.get(&person).unwrap();
/// let test = accessor.membership().unwrap();
/// assert!(test.contains_value(tags, &String::from("vip")));
///
/// assert!(Arc::ptr_eq(&registry.cache::<Person>(), &registry.cache::<Person>()));
/// ```
pub struct AccessorRegistry {
    config: EngineConfig,
    caches: RwLock<TypeIdMap<ErasedCache>>,
}

impl AccessorRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::new())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            caches: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the cache for `T`, creating it on first use.
    pub fn cache<T: Reflect + Typed>(&self) -> Arc<CompilationCache<T>> {
        let caches = self.caches.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(cache) = caches.get_type::<T>() {
            return downcast_cache(cache.clone());
        }
        drop(caches);

        let mut caches = self.caches.write().unwrap_or_else(PoisonError::into_inner);
        let cache = caches.get_or_insert(TypeId::of::<T>(), || {
            log::debug!("created accessor cache for `{}`", T::type_path());
            Arc::new(CompilationCache::<T>::with_config(self.config)) as ErasedCache
        });
        downcast_cache(cache.clone())
    }

    /// Shorthand for `self.cache::<T>().get_or_compile(path)`.
    pub fn get_or_compile<T: Reflect + Typed>(
        &self,
        path: &str,
    ) -> Result<Arc<CompiledAccessor<T>>, AccessError> {
        self.cache::<T>().get_or_compile(path)
    }

    /// Returns `true` if a cache exists for `T`.
    pub fn contains<T: Reflect>(&self) -> bool {
        let caches = self.caches.read().unwrap_or_else(PoisonError::into_inner);
        caches.contains_type::<T>()
    }

    /// Returns the number of input types with a cache.
    pub fn len(&self) -> usize {
        let caches = self.caches.read().unwrap_or_else(PoisonError::into_inner);
        caches.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AccessorRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorRegistry")
            .field("config", &self.config)
            .field("types", &self.len())
            .finish()
    }
}

/// Caches are stored under their own `TypeId`, so the downcast cannot fail.
fn downcast_cache<T: Reflect>(cache: ErasedCache) -> Arc<CompilationCache<T>> {
    match cache.downcast::<CompilationCache<T>>() {
        Ok(cache) => cache,
        Err(_) => unreachable!("accessor cache stored under a foreign `TypeId`"),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use std::sync::Barrier;
    use std::thread;

    use pp_reflect::derive::Reflect;

    use super::AccessorRegistry;
    use crate::{EngineConfig, FailurePolicy};

    #[derive(Reflect)]
    struct Order {
        id: u64,
    }

    #[derive(Reflect)]
    struct Invoice {
        id: u64,
        order: Option<Order>,
    }

    #[test]
    fn one_cache_per_input_type() {
        let registry = AccessorRegistry::new();
        assert!(registry.is_empty());

        let order_id = registry.get_or_compile::<Order>("id").unwrap();
        let invoice_id = registry.get_or_compile::<Invoice>("id").unwrap();
        registry.get_or_compile::<Invoice>("order.id").unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains::<Order>());
        assert_eq!(registry.cache::<Order>().len(), 1);
        assert_eq!(registry.cache::<Invoice>().len(), 2);

        assert_eq!(order_id.get_as::<u64>(&Order { id: 7 }), Some(&7));
        let invoice = Invoice {
            id: 9,
            order: None,
        };
        assert_eq!(invoice_id.get_as::<u64>(&invoice), Some(&9));
    }

    #[test]
    fn registries_are_independent() {
        let first = AccessorRegistry::new();
        let second = AccessorRegistry::new();

        let a = first.get_or_compile::<Order>("id").unwrap();
        let b = second.get_or_compile::<Order>("id").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert!(!second.contains::<Invoice>());
    }

    #[test]
    fn caches_inherit_the_config() {
        let config = EngineConfig::new()
            .with_failure_policy(FailurePolicy::Sticky)
            .with_initial_capacity(8);
        let registry = AccessorRegistry::with_config(config);

        assert_eq!(*registry.cache::<Order>().config(), config);
    }

    #[test]
    fn concurrent_cache_creation_yields_one_cache() {
        const CALLERS: usize = 8;

        let registry = AccessorRegistry::new();
        let barrier = Barrier::new(CALLERS);

        let caches: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..CALLERS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        registry.cache::<Invoice>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(registry.len(), 1);
        assert!(caches.iter().all(|c| Arc::ptr_eq(c, &caches[0])));
    }
}
