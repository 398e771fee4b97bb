//! Deduplicated analyzer warnings.
//!
//! Snapshot values that cannot be parsed are absorbed with a default, and a
//! batch of hundreds of slides tends to repeat the same oddity on every
//! element. Warnings raised here are emitted once per unique message through
//! the `log` facade, so the binary decides where they end up.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about a lenient fallback (emitted once per unique message).
///
/// Returns `true` when the warning was emitted, `false` when it had already
/// been seen.
///
/// # Example
/// ```ignore
/// warn_once("style", "unparsable margin-top 'calc(1px + 2em)', using 0");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    let first_time = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if first_time {
        log::warn!(target: "slidescore", "[{component}] {message}");
    }
    first_time
}

/// Clear all recorded warnings (call between independent runs).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
