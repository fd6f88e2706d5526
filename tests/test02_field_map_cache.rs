use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use sql_binding::prelude::*;

static BUILDS: AtomicUsize = AtomicUsize::new(0);

// Hand-written impl so construction can be counted.
#[derive(Default)]
struct Counted {
    name: String,
    age: i64,
}

impl Record for Counted {
    fn fields() -> &'static [FieldDef] {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        const FIELDS: &[FieldDef] = &[
            FieldDef::new("name", Some("name,omitempty")),
            FieldDef::new("Age", None),
        ];
        FIELDS
    }

    fn field_value(&self, ident: &str) -> Option<RowValues> {
        match ident {
            "name" => Some(self.name.to_value()),
            "Age" => Some(self.age.to_value()),
            _ => None,
        }
    }

    fn field_slot(&mut self, ident: &str) -> Option<Destination<'_>> {
        match ident {
            "name" => Some(self.name.destination()),
            "Age" => Some(self.age.destination()),
            _ => None,
        }
    }
}

#[derive(Default)]
struct Tagged {
    user_name: String,
    created: chrono::NaiveDateTime,
    note: String,
}

bind_record!(Tagged {
    user_name => "  user ,omitempty",
    created => ",readonly",
    note,
});

#[test]
fn concurrent_first_use_builds_once() {
    const CALLERS: usize = 16;
    let cache = Arc::new(FieldMapCache::new());
    let barrier = Arc::new(Barrier::new(CALLERS));

    let maps: Vec<Arc<FieldMap>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..CALLERS)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let barrier = Arc::clone(&barrier);
                scope.spawn(move || {
                    barrier.wait();
                    cache.resolve::<Counted>()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("resolver thread panicked"))
            .collect()
    });

    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
    for map in &maps {
        assert!(Arc::ptr_eq(map, &maps[0]));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some("name"));
        assert_eq!(map.get("Age"), Some("Age"));
    }

    // Later lookups reuse the cached map.
    let again = cache.resolve::<Counted>();
    assert!(Arc::ptr_eq(&again, &maps[0]));
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
}

#[test]
fn tags_are_trimmed_and_blank_tags_fall_back() {
    let cache = FieldMapCache::new();
    let map = cache.resolve::<Tagged>();
    assert_eq!(map.get("user"), Some("user_name"));
    assert_eq!(map.get("created"), Some("created"));
    assert_eq!(map.get("note"), Some("note"));
    assert_eq!(map.get("user_name"), None);

    let mut keys: Vec<&str> = map.iter().map(|(external, _)| external).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["created", "note", "user"]);
}

#[test]
fn separate_caches_are_independent() {
    let first = FieldMapCache::new();
    let second = FieldMapCache::new();
    first.resolve::<Tagged>();
    assert!(first.contains::<Tagged>());
    assert!(!second.contains::<Tagged>());
    assert!(second.is_empty());
}
