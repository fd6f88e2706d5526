//! Per-type mapping from external (column/parameter) names to field identifiers.

use std::any::{TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::record::{FieldDef, Record};

/// Immutable mapping from external name to field identifier for one record type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: HashMap<String, &'static str>,
}

impl FieldMap {
    /// Build a mapping from field declarations.
    ///
    /// When two fields share an external name the later declaration wins.
    #[must_use]
    pub fn build(fields: &[FieldDef]) -> Self {
        let mut entries = HashMap::with_capacity(fields.len());
        for field in fields {
            let external = field.external_name();
            if let Some(previous) = entries.insert(external.to_string(), field.ident) {
                tracing::warn!(
                    external,
                    previous,
                    field = field.ident,
                    "duplicate binding name, later field wins"
                );
            }
        }
        Self { entries }
    }

    /// Field identifier bound to `external`, or `None` when unresolved.
    #[must_use]
    pub fn get(&self, external: &str) -> Option<&'static str> {
        self.entries.get(external).copied()
    }

    #[must_use]
    pub fn contains(&self, external: &str) -> bool {
        self.entries.contains_key(external)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

type Slot = Arc<OnceLock<Arc<FieldMap>>>;

/// Cache of [`FieldMap`]s keyed by record type.
///
/// Each type's map is built at most once, even when several threads resolve
/// the same unseen type concurrently; every caller observes the same
/// completed map. Share one cache between binders with an `Arc`.
#[derive(Debug, Default)]
pub struct FieldMapCache {
    maps: RwLock<HashMap<TypeId, Slot>>,
}

impl FieldMapCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the field map for `R`, building and caching it on first use.
    pub fn resolve<R: Record>(&self) -> Arc<FieldMap> {
        let slot = self.slot(TypeId::of::<R>());
        slot.get_or_init(|| {
            let map = FieldMap::build(R::fields());
            tracing::debug!(
                record = type_name::<R>(),
                fields = map.len(),
                "built field map"
            );
            Arc::new(map)
        })
        .clone()
    }

    /// Whether a completed map for `R` is cached.
    #[must_use]
    pub fn contains<R: Record>(&self) -> bool {
        self.maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<R>())
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Number of record types with a slot in the cache.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The map lock only guards slot creation; the build itself runs under the
    // slot's `OnceLock`, so other types are never blocked by it.
    fn slot(&self, key: TypeId) -> Slot {
        if let Some(slot) = self
            .maps
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(slot);
        }

        let mut maps = self.maps.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(maps.entry(key).or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bind_record;

    #[derive(Default)]
    struct Person {
        name: String,
        age: i64,
    }

    bind_record!(Person {
        name => "name,omitempty",
        age,
    });

    #[derive(Default)]
    struct Empty {}

    bind_record!(Empty {});

    #[test]
    fn maps_tagged_and_untagged_fields() {
        let map = FieldMap::build(&[
            FieldDef::new("Name", Some("name,omitempty")),
            FieldDef::new("Age", None),
        ]);
        assert_eq!(map.get("name"), Some("Name"));
        assert_eq!(map.get("Age"), Some("Age"));
        assert_eq!(map.get("Name"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn later_duplicate_wins() {
        let map = FieldMap::build(&[
            FieldDef::new("First", Some("id")),
            FieldDef::new("Second", Some("id,pk")),
        ]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("id"), Some("Second"));
    }

    #[test]
    fn resolve_caches_per_type() {
        let cache = FieldMapCache::new();
        assert!(!cache.contains::<Person>());

        let first = cache.resolve::<Person>();
        let second = cache.resolve::<Person>();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains::<Person>());
        assert_eq!(first.get("name"), Some("name"));
        assert_eq!(first.get("age"), Some("age"));

        let empty = cache.resolve::<Empty>();
        assert!(empty.is_empty());
        assert_eq!(cache.len(), 2);
    }
}
