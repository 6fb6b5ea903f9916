//! Capability contract for registrable entries.

use std::sync::Arc;

/// Trait for entries that can be held in a dispatch table.
///
/// A dispatch table never constructs, owns, or destroys entries; it only
/// keeps name associations. Ownership stays with the module loader that
/// built the entry, and a module removes its associations by dropping its
/// installation guards.
pub trait Registrable: Send + Sync {
    /// Returns a stable tag identifying the concrete kind of this entry.
    fn type_tag(&self) -> &str;
}

/// Prototype cloning for registered entries.
///
/// Implemented on the trait-object type of each capability kind, forwarding
/// to whatever clone method that capability trait defines:
///
/// ```ignore
/// impl ClonePrototype for dyn Device {
///     fn clone_prototype(&self) -> Arc<dyn Device> {
///         self.device_clone()
///     }
/// }
/// ```
///
/// This lets a typed dispatcher hand out fresh copies of a registered
/// prototype without knowing the concrete type behind it.
pub trait ClonePrototype: Registrable {
    /// Produces an independent copy with equivalent configuration.
    ///
    /// A live prototype must always be able to produce a copy; an
    /// implementation that cannot is violating the capability contract and
    /// should panic rather than hand back a partial entry.
    fn clone_prototype(&self) -> Arc<Self>;
}
