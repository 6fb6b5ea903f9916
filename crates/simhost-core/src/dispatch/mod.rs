//! Name-based dispatch tables for dynamically loaded modules.
//!
//! Three pieces, leaves first:
//!
//! - [`DispatchTable`] - the untyped association map from names to entries,
//!   with lazy creation, collision stashing, and identity-based uninstall.
//! - [`Dispatcher`] - the typed facade for one capability kind: name lookup,
//!   token-consuming lookup with scanner rewind, and prototype cloning.
//! - [`Installed`] - the scoped guard that is the only registration path,
//!   keeping install and uninstall symmetric across module load and unload.

mod dispatcher;
mod install;
mod table;

pub use dispatcher::Dispatcher;
pub use install::Installed;
pub use table::DispatchTable;
