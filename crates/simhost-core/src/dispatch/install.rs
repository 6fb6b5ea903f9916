//! Scoped installation guard.

use std::sync::Arc;

use simhost_protocols::Registrable;
use tracing::debug;

use super::dispatcher::Dispatcher;

/// Scope-bound registration of one entry under one name spec.
///
/// Constructing the guard installs the entry; dropping it uninstalls by
/// identity. This is the only registration path, which keeps install and
/// uninstall symmetric no matter how control leaves the owning module:
/// normal unload, an early return in module initialization, or static
/// teardown. A module keeps one guard per (name spec, entry) pair in its
/// load-time state and drops them on unload.
///
/// The guard holds the owning `Arc` for its entry. Uninstall severs every
/// clone the table holds, so the table never extends an entry's life past
/// its guard.
pub struct Installed<'d, T: ?Sized + Registrable> {
    dispatcher: &'d Dispatcher<T>,
    entry: Arc<T>,
}

impl<'d, T: ?Sized + Registrable> Installed<'d, T> {
    /// Installs `entry` under `name_spec` in `dispatcher`.
    pub fn new(dispatcher: &'d Dispatcher<T>, name_spec: &str, entry: Arc<T>) -> Self {
        dispatcher.table().install(name_spec, &entry);
        debug!("installed '{}' ({})", name_spec, entry.type_tag());
        Self { dispatcher, entry }
    }

    /// The installed entry.
    pub fn entry(&self) -> &Arc<T> {
        &self.entry
    }
}

impl<T: ?Sized + Registrable> Drop for Installed<'_, T> {
    fn drop(&mut self) {
        debug!("uninstalling ({})", self.entry.type_tag());
        self.dispatcher.table().uninstall(&self.entry);
    }
}
