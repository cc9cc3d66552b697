use serde::{Deserialize, Serialize};
use std::cell::RefCell;

///
/// ExprCounters
/// Ephemeral, in-memory counters for expression parsing and application.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExprCounters {
    // Parsing
    pub parse_calls: u64,
    pub parse_rejected: u64,

    // Application
    pub apply_calls: u64,
    pub apply_count: u64,
    pub apply_metric: u64,
}

thread_local! {
    static EXPR_STATE: RefCell<ExprCounters> = RefCell::new(ExprCounters::default());
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut ExprCounters) -> R) -> R {
    EXPR_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn report() -> ExprCounters {
    EXPR_STATE.with(|m| *m.borrow())
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = ExprCounters::default());
}
