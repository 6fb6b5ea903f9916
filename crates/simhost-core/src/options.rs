//! Process-wide lookup options.
//!
//! One flag, modeled after the embedding framework's option block: lookups
//! read it on every miss, framework setup writes it once.

use std::sync::atomic::{AtomicBool, Ordering};

static CASE_INSENSITIVE: AtomicBool = AtomicBool::new(false);

/// Returns whether failed exact-match lookups retry with a folded name.
pub fn case_insensitive() -> bool {
    CASE_INSENSITIVE.load(Ordering::Relaxed)
}

/// Enables or disables the case-insensitive lookup fallback.
///
/// Intended for framework initialization; dispatch code only ever reads
/// the flag.
pub fn set_case_insensitive(enabled: bool) {
    CASE_INSENSITIVE.store(enabled, Ordering::Relaxed);
}

/// Folds a name to its canonical lowercase form for the fallback lookup.
pub fn fold_name(name: &str) -> String {
    name.to_ascii_lowercase()
}
