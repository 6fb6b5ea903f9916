//! Untyped registry core: the name-to-entry association map.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::options;

/// Separator between alternate names in an install name spec.
const NAME_SEPARATOR: char = '|';

/// The association map backing one dispatcher.
///
/// The map is created lazily on the first installation, so a `static` table
/// needs no runtime constructor and nothing here depends on the order the
/// host initializes its statics. Entries are held as observer `Arc` clones:
/// the table never constructs or destroys an entry, and uninstalling severs
/// every clone the table holds.
///
/// Slots are cleared, never removed. A name whose entry was uninstalled
/// stays in the map, bound to nothing, and reads as absent.
pub struct DispatchTable<T: ?Sized + Send + Sync> {
    slots: RwLock<Option<BTreeMap<String, Option<Arc<T>>>>>,
}

impl<T: ?Sized + Send + Sync> DispatchTable<T> {
    /// Creates a table with no backing map yet.
    pub const fn new() -> Self {
        Self {
            slots: RwLock::new(None),
        }
    }

    /// Installs `entry` under every non-empty alternate name in `name_spec`.
    ///
    /// `name_spec` may join several names with `|`; empty alternates are
    /// silently skipped. A name already bound to a different live entry
    /// displaces that entry to a stash alias (`name:<generation>`, smallest
    /// free generation) instead of dropping it, with a warning naming both.
    ///
    /// Callers must not pass a spec containing `,`; the command layer
    /// reserves it for joining dispatcher results.
    pub(crate) fn install(&self, name_spec: &str, entry: &Arc<T>) {
        debug_assert!(
            !name_spec.contains(','),
            "name spec contains reserved ',': {name_spec}"
        );

        let mut guard = self.slots.write();
        let map = guard.get_or_insert_with(BTreeMap::new);

        for name in name_spec.split(NAME_SEPARATOR) {
            if name.is_empty() {
                continue;
            }
            let displaced = match map.get(name) {
                Some(Some(existing)) if !Arc::ptr_eq(existing, entry) => Some(Arc::clone(existing)),
                _ => None,
            };
            if let Some(old) = displaced {
                let alias = stash_alias(map, name);
                warn!("{name}: already installed, stashing previous entry as {alias}");
                map.insert(alias, Some(old));
            }
            debug!("installing '{name}'");
            map.insert(name.to_string(), Some(Arc::clone(entry)));
        }
    }

    /// Clears every slot bound to `entry`, by identity.
    ///
    /// Names stay in the map; only the associations are severed. Calling
    /// this before anything was ever installed is a guard-misuse bug.
    pub(crate) fn uninstall(&self, entry: &Arc<T>) {
        let mut guard = self.slots.write();
        debug_assert!(guard.is_some(), "uninstall before any install");
        let Some(map) = guard.as_mut() else {
            return;
        };

        for (name, slot) in map.iter_mut() {
            if matches!(slot, Some(existing) if Arc::ptr_eq(existing, entry)) {
                debug!("clearing '{name}'");
                *slot = None;
            }
        }

        debug_assert!(
            map.values().flatten().all(|e| !Arc::ptr_eq(e, entry)),
            "entry still referenced after uninstall"
        );
    }

    /// Looks up the entry bound to `name`.
    ///
    /// On an exact miss, retries with the lowercase-folded name when the
    /// process-wide case-insensitive option is set. Absence (no map yet,
    /// unknown name, or a cleared slot) is `None`, never an error.
    pub fn lookup(&self, name: &str) -> Option<Arc<T>> {
        let guard = self.slots.read();
        let map = guard.as_ref()?;
        if let Some(Some(entry)) = map.get(name) {
            return Some(Arc::clone(entry));
        }
        if options::case_insensitive() {
            if let Some(Some(entry)) = map.get(&options::fold_name(name)) {
                return Some(Arc::clone(entry));
            }
        }
        None
    }

    /// Returns whether `name` is bound to a live entry (exact match only).
    pub fn contains(&self, name: &str) -> bool {
        let guard = self.slots.read();
        matches!(
            guard.as_ref().and_then(|map| map.get(name)),
            Some(Some(_))
        )
    }

    /// All live associations, in natural key order.
    pub fn entries(&self) -> Vec<(String, Arc<T>)> {
        let guard = self.slots.read();
        guard
            .as_ref()
            .map(|map| {
                map.iter()
                    .filter_map(|(name, slot)| {
                        slot.as_ref().map(|e| (name.clone(), Arc::clone(e)))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Names with live entries, in natural key order.
    pub fn names(&self) -> Vec<String> {
        let guard = self.slots.read();
        guard
            .as_ref()
            .map(|map| {
                map.iter()
                    .filter(|(_, slot)| slot.is_some())
                    .map(|(name, _)| name.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of live associations.
    pub fn len(&self) -> usize {
        let guard = self.slots.read();
        guard
            .as_ref()
            .map(|map| map.values().filter(|slot| slot.is_some()).count())
            .unwrap_or(0)
    }

    /// Returns whether no live associations exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: ?Sized + Send + Sync> Default for DispatchTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest-generation alias `name:<g>` whose slot is vacant or cleared.
fn stash_alias<T: ?Sized>(map: &BTreeMap<String, Option<Arc<T>>>, name: &str) -> String {
    let mut generation = 0usize;
    loop {
        let alias = format!("{name}:{generation}");
        if !matches!(map.get(&alias), Some(Some(_))) {
            return alias;
        }
        generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEntry {
        #[allow(dead_code)]
        tag: &'static str,
    }

    fn entry(tag: &'static str) -> Arc<TestEntry> {
        Arc::new(TestEntry { tag })
    }

    fn assert_bound(table: &DispatchTable<TestEntry>, name: &str, expected: &Arc<TestEntry>) {
        let found = table.lookup(name);
        assert!(found.is_some(), "expected '{name}' to be bound");
        assert!(Arc::ptr_eq(&found.unwrap(), expected));
    }

    #[test]
    fn test_lookup_before_any_install() {
        let table: DispatchTable<TestEntry> = DispatchTable::new();
        assert!(table.lookup("anything").is_none());
        assert!(table.is_empty());
        assert!(table.entries().is_empty());
    }

    #[test]
    fn test_table_default() {
        let table: DispatchTable<TestEntry> = DispatchTable::default();
        assert!(table.is_empty());
        assert!(table.names().is_empty());
    }

    #[test]
    fn test_install_then_lookup() {
        let table = DispatchTable::new();
        let e = entry("diode");
        table.install("diode", &e);
        assert_bound(&table, "diode", &e);
        assert!(table.contains("diode"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_unknown_name_is_none() {
        let table = DispatchTable::new();
        table.install("diode", &entry("diode"));
        assert!(table.lookup("resistor").is_none());
        assert!(!table.contains("resistor"));
    }

    #[test]
    fn test_alternate_names_share_entry() {
        let table = DispatchTable::new();
        let e = entry("vsource");
        table.install("v|vsource|vdc", &e);
        assert_eq!(table.len(), 3);
        assert_bound(&table, "v", &e);
        assert_bound(&table, "vsource", &e);
        assert_bound(&table, "vdc", &e);
    }

    #[test]
    fn test_empty_alternates_skipped() {
        let table = DispatchTable::new();
        let e = entry("isource");
        table.install("|i||isource|", &e);
        assert_eq!(table.len(), 2);
        assert_bound(&table, "i", &e);
        assert_bound(&table, "isource", &e);
    }

    #[test]
    fn test_collision_stashes_previous_entry() {
        let table = DispatchTable::new();
        let e1 = entry("amp_v1");
        let e2 = entry("amp_v2");
        table.install("amp", &e1);
        table.install("amp", &e2);
        assert_bound(&table, "amp", &e2);
        assert_bound(&table, "amp:0", &e1);
    }

    #[test]
    fn test_collision_generation_increments() {
        let table = DispatchTable::new();
        let e1 = entry("v1");
        let e2 = entry("v2");
        let e3 = entry("v3");
        table.install("amp", &e1);
        table.install("amp", &e2);
        table.install("amp", &e3);
        assert_bound(&table, "amp", &e3);
        assert_bound(&table, "amp:0", &e1);
        assert_bound(&table, "amp:1", &e2);
    }

    #[test]
    fn test_reinstall_same_entry_does_not_stash() {
        let table = DispatchTable::new();
        let e = entry("amp");
        table.install("amp", &e);
        table.install("amp", &e);
        assert_bound(&table, "amp", &e);
        assert!(table.lookup("amp:0").is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_uninstall_clears_every_slot_for_entry() {
        let table = DispatchTable::new();
        let e1 = entry("v1");
        let e2 = entry("other");
        table.install("v|vsource", &e1);
        table.install("isource", &e2);

        table.uninstall(&e1);
        assert!(table.lookup("v").is_none());
        assert!(table.lookup("vsource").is_none());
        assert_bound(&table, "isource", &e2);
        assert_eq!(table.names(), vec!["isource".to_string()]);
    }

    #[test]
    fn test_cleared_slot_is_reused_for_stash() {
        let table = DispatchTable::new();
        let e1 = entry("v1");
        let e2 = entry("v2");
        let e3 = entry("v3");
        table.install("amp", &e1);
        table.install("amp", &e2); // e1 stashed as amp:0
        table.uninstall(&e1); // amp:0 cleared
        table.install("amp", &e3); // e2 stashed, reusing amp:0
        assert_bound(&table, "amp", &e3);
        assert_bound(&table, "amp:0", &e2);
    }

    #[test]
    fn test_entries_in_key_order() {
        let table = DispatchTable::new();
        let e = entry("shared");
        table.install("delta", &e);
        table.install("alpha", &e);
        table.install("charlie", &e);
        let names: Vec<String> = table.entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["alpha", "charlie", "delta"]);
    }

    // The only test that touches the process-wide flag; every other test
    // sticks to lowercase names so the fold is an identity for them.
    #[test]
    fn test_case_insensitive_fallback() {
        let table = DispatchTable::new();
        let e = entry("gain");
        table.install("gain", &e);

        assert!(table.lookup("GAIN").is_none());

        options::set_case_insensitive(true);
        assert_bound(&table, "GAIN", &e);
        assert_bound(&table, "Gain", &e);
        assert_bound(&table, "gain", &e);
        assert!(table.lookup("OFFSET").is_none());
        options::set_case_insensitive(false);

        assert!(table.lookup("GAIN").is_none());
    }
}
