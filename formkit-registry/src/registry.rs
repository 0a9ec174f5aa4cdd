//! Id → element type resolution with graceful fallback.

use crate::base::resolve_default_properties;
use crate::builtin::{UNKNOWN_TYPE_ID, builtin_types, unknown_type};
use crate::error::{RegistryError, RegistryResult};
use formkit_model::{ElementInstance, ElementType};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// The element type registry and dispatcher.
///
/// Types are registered once at startup and shared as `Arc<ElementType>` for
/// the life of the process; lookups after construction are read-only and safe
/// across threads. Resolved default property maps are cached lazily — the
/// cache is an optimization only, and concurrent compute-and-store races are
/// harmless because resolution is deterministic.
pub struct ElementTypeRegistry {
    types: HashMap<String, Arc<ElementType>>,
    fallback: Arc<ElementType>,
    defaults_cache: RwLock<HashMap<String, Arc<Map<String, Value>>>>,
}

impl std::fmt::Debug for ElementTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementTypeRegistry")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl ElementTypeRegistry {
    /// Creates a registry holding the given types plus the `unknown` fallback.
    pub fn new(types: impl IntoIterator<Item = ElementType>) -> RegistryResult<Self> {
        let mut registry = Self {
            types: HashMap::new(),
            fallback: Arc::new(unknown_type()),
            defaults_cache: RwLock::new(HashMap::new()),
        };
        for ty in types {
            registry.register(ty)?;
        }
        Ok(registry)
    }

    /// Creates a registry with the builtin element catalogue.
    pub fn builtin() -> Self {
        // The builtin catalogue has unique, non-reserved ids.
        Self::new(builtin_types()).expect("builtin catalogue is well-formed")
    }

    /// Registers one type. Fails on duplicate ids and on the reserved
    /// fallback id; only call during startup, before lookups begin.
    pub fn register(&mut self, ty: ElementType) -> RegistryResult<()> {
        if ty.id == UNKNOWN_TYPE_ID {
            return Err(RegistryError::ReservedId(ty.id));
        }
        if self.types.contains_key(&ty.id) {
            return Err(RegistryError::DuplicateType(ty.id));
        }
        debug!(type_id = %ty.id, "element type registered");
        self.types.insert(ty.id.clone(), Arc::new(ty));
        Ok(())
    }

    /// Looks up a type by id, if registered.
    pub fn get(&self, type_id: &str) -> Option<Arc<ElementType>> {
        self.types.get(type_id).cloned()
    }

    /// Resolves a type id, degrading to the hidden `unknown` placeholder when
    /// the id is unregistered. Never fails: a missing type must render as a
    /// visible-but-inert placeholder, not crash form display.
    pub fn resolve(&self, type_id: &str) -> Arc<ElementType> {
        match self.types.get(type_id) {
            Some(ty) => Arc::clone(ty),
            None => {
                warn!(type_id, "unresolvable element type, using placeholder");
                Arc::clone(&self.fallback)
            }
        }
    }

    /// The hidden placeholder type used for unresolvable ids.
    pub fn fallback(&self) -> Arc<ElementType> {
        Arc::clone(&self.fallback)
    }

    /// Resolves a type id applying per-instance configuration overrides.
    ///
    /// With no overrides this returns the process-wide shared descriptor;
    /// with overrides it returns a fresh descriptor whose declared defaults
    /// are extended by the override map. The shared/fresh split is an
    /// optimization, not a correctness requirement.
    pub fn resolve_with_overrides(
        &self,
        type_id: &str,
        overrides: Option<&Map<String, Value>>,
    ) -> Arc<ElementType> {
        let base = self.resolve(type_id);
        match overrides {
            None => base,
            Some(overrides) if overrides.is_empty() => base,
            Some(overrides) => {
                let mut ty = (*base).clone();
                for (key, value) in overrides {
                    ty.default_properties.insert(key.clone(), value.clone());
                }
                Arc::new(ty)
            }
        }
    }

    /// The effective default property map for a type id, cached per id.
    ///
    /// Unresolvable ids yield the placeholder type's defaults.
    pub fn default_properties(&self, type_id: &str) -> Arc<Map<String, Value>> {
        if let Some(cached) = self.defaults_cache.read().expect("cache poisoned").get(type_id) {
            return Arc::clone(cached);
        }
        let resolved = Arc::new(resolve_default_properties(&self.resolve(type_id)));
        let mut cache = self.defaults_cache.write().expect("cache poisoned");
        Arc::clone(cache.entry(type_id.to_string()).or_insert(resolved))
    }

    /// Layered property lookup for an instance: instance property, else the
    /// type's resolved default, else `None` (undefined — distinct from a
    /// property explicitly set to `null`).
    pub fn property(&self, instance: &ElementInstance, name: &str) -> Option<Value> {
        if let Some(value) = instance.property(name) {
            return Some(value.clone());
        }
        self.default_properties(&instance.type_id)
            .get(name)
            .cloned()
    }

    /// Registered type ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Registered types that should appear in type listings.
    pub fn visible_types(&self) -> Vec<Arc<ElementType>> {
        let mut visible: Vec<_> = self
            .types
            .values()
            .filter(|ty| !ty.caps.hidden)
            .cloned()
            .collect();
        visible.sort_by(|a, b| a.id.cmp(&b.id));
        visible
    }
}
