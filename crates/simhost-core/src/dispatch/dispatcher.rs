//! Typed dispatcher facade over the untyped table.

use std::sync::Arc;

use simhost_protocols::{ClonePrototype, DispatchError, Registrable, TokenScanner};

use super::table::DispatchTable;

/// Dispatch surface for one capability kind.
///
/// One static dispatcher exists per kind of pluggable thing (device models,
/// analysis commands, output formatters). Entries register through
/// [`Installed`](super::Installed) guards; clients resolve them by literal
/// name or by consuming a token from a command scanner.
///
/// `new` is `const`, so a dispatcher can be a plain `static` with no lazy
/// wrapper and no static-initialization-order hazard.
pub struct Dispatcher<T: ?Sized + Registrable> {
    table: DispatchTable<T>,
}

impl<T: ?Sized + Registrable> Dispatcher<T> {
    pub const fn new() -> Self {
        Self {
            table: DispatchTable::new(),
        }
    }

    /// The association map behind this dispatcher.
    pub fn table(&self) -> &DispatchTable<T> {
        &self.table
    }

    /// Looks up an entry by name.
    ///
    /// Applies the case-insensitive fallback when the process-wide option
    /// is set. Absence is `None`, never an error.
    pub fn lookup(&self, name: &str) -> Option<Arc<T>> {
        self.table.lookup(name)
    }

    /// Like [`lookup`](Self::lookup), but reports absence as an error
    /// carrying the name.
    pub fn require(&self, name: &str) -> Result<Arc<T>, DispatchError> {
        self.lookup(name)
            .ok_or_else(|| DispatchError::NotFound(name.to_string()))
    }

    /// Consumes one token from `scanner` and resolves it.
    ///
    /// On a miss the scanner is rewound to where it was, so the caller can
    /// try the token against another dispatcher or report it unrecognized.
    /// On a hit the cursor stays past the consumed token.
    pub fn lookup_token(&self, scanner: &mut dyn TokenScanner) -> Option<Arc<T>> {
        let here = scanner.cursor();
        let token = scanner.read_token();
        match self.lookup(&token) {
            Some(entry) => Some(entry),
            None => {
                scanner.reset(here);
                None
            }
        }
    }

    /// Token-consuming variant of [`require`](Self::require); the scanner
    /// is rewound on the error path.
    pub fn require_token(&self, scanner: &mut dyn TokenScanner) -> Result<Arc<T>, DispatchError> {
        let here = scanner.cursor();
        let token = scanner.read_token();
        match self.lookup(&token) {
            Some(entry) => Ok(entry),
            None => {
                scanner.reset(here);
                Err(DispatchError::UnrecognizedToken(token))
            }
        }
    }

    /// All live (name, entry) associations, in key order.
    pub fn entries(&self) -> Vec<(String, Arc<T>)> {
        self.table.entries()
    }

    /// Names with live entries, in key order. Used by help and
    /// introspection commands.
    pub fn names(&self) -> Vec<String> {
        self.table.names()
    }
}

impl<T: ?Sized + ClonePrototype> Dispatcher<T> {
    /// Clones the prototype registered under `name`.
    ///
    /// Returns a fresh, independently owned copy, or `None` when the name
    /// is unbound. A live prototype is contractually able to clone itself,
    /// so there is no failure mode between those two.
    pub fn clone_prototype(&self, name: &str) -> Option<Arc<T>> {
        self.lookup(name).map(|proto| proto.clone_prototype())
    }
}

impl<T: ?Sized + Registrable> Default for Dispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}
