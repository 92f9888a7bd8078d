//! Modal helpers: dismissal keys and body scroll locking.
//!
//! Scroll locks are counted so nested modals keep the page locked until the
//! outermost one closes.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "hydrate")]
const SCROLL_LOCK_CLASS: &str = "modal-open";

static SCROLL_LOCKS: AtomicUsize = AtomicUsize::new(0);

/// Whether a `KeyboardEvent.key` value should close the topmost modal.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Lock depth after one modal mounts (`locked`) or unmounts. Unbalanced
/// unlocks saturate at zero.
fn next_lock_depth(depth: usize, locked: bool) -> usize {
    if locked { depth + 1 } else { depth.saturating_sub(1) }
}

fn update_scroll_lock(locked: bool) {
    let previous = SCROLL_LOCKS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |depth| Some(next_lock_depth(depth, locked)))
        .unwrap_or_default();
    let depth = next_lock_depth(previous, locked);
    if (previous == 0) != (depth == 0) {
        set_body_scroll_locked(depth > 0);
    }
}

/// Register a mounted modal; the first one locks body scrolling.
pub fn lock_body_scroll() {
    update_scroll_lock(true);
}

/// Release a modal's lock; scrolling resumes when the last one is released.
pub fn unlock_body_scroll() {
    update_scroll_lock(false);
}

/// Add or remove the body class that stops the page behind a modal from
/// scrolling.
fn set_body_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        let _ = if locked {
            classes.add_1(SCROLL_LOCK_CLASS)
        } else {
            classes.remove_1(SCROLL_LOCK_CLASS)
        };
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
