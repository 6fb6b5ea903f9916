//! # SimHost Protocols
//!
//! Contract definitions shared between the SimHost dispatch core and
//! pluggable modules.
//!
//! Modules implement the capability contract ([`Registrable`], and
//! [`ClonePrototype`] on each capability trait-object type) so their entries
//! can be registered in a dispatch table. The command layer implements
//! [`TokenScanner`] so dispatchers can resolve a name pulled off an input
//! stream and hand the token back on a miss.

mod capability;
mod error;
mod scanner;

pub use capability::{ClonePrototype, Registrable};
pub use error::DispatchError;
pub use scanner::{Cursor, TokenScanner};
