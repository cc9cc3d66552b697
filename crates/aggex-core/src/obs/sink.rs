//! Expression event sink boundary.
//!
//! Expression logic MUST NOT touch obs::metrics directly.
//! All instrumentation flows through ExprEvent and ExprSink.

#[cfg(feature = "metrics")]
use crate::obs::metrics;
use crate::expr::AggregateFn;
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn ExprSink>> = const { RefCell::new(None) };
}

///
/// ExprEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExprEvent {
    Parsed { func: AggregateFn },
    Rejected,
    Applied { func: AggregateFn },
}

///
/// ExprSink
///

pub trait ExprSink {
    fn record(&self, event: ExprEvent);
}

/// GlobalExprSink
/// Default sink that writes into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalExprSink;

impl ExprSink for GlobalExprSink {
    #[cfg(feature = "metrics")]
    fn record(&self, event: ExprEvent) {
        metrics::with_state_mut(|m| match event {
            ExprEvent::Parsed { .. } => {
                m.parse_calls = m.parse_calls.saturating_add(1);
            }
            ExprEvent::Rejected => {
                m.parse_calls = m.parse_calls.saturating_add(1);
                m.parse_rejected = m.parse_rejected.saturating_add(1);
            }
            ExprEvent::Applied { func } => {
                m.apply_calls = m.apply_calls.saturating_add(1);
                if func.targets_field() {
                    m.apply_metric = m.apply_metric.saturating_add(1);
                } else {
                    m.apply_count = m.apply_count.saturating_add(1);
                }
            }
        });
    }

    #[cfg(not(feature = "metrics"))]
    fn record(&self, _: ExprEvent) {}
}

///
/// DebugSink
///
/// Prints one `[debug]` line per event to stdout.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DebugSink;

impl ExprSink for DebugSink {
    fn record(&self, event: ExprEvent) {
        match event {
            ExprEvent::Parsed { func } => println!("[debug] parsed aggregate ({func})"),
            ExprEvent::Rejected => println!("[debug] rejected aggregate shorthand"),
            ExprEvent::Applied { func } => println!("[debug] applied aggregate ({func})"),
        }
    }
}

pub(crate) const GLOBAL_EXPR_SINK: GlobalExprSink = GlobalExprSink;

pub(crate) fn record(event: ExprEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - `ptr` was produced from a live `&dyn ExprSink` in `with_expr_sink`.
        // - `with_expr_sink` restores the previous slot on every exit, including
        //   unwinding, so `ptr` never outlives the borrow it came from.
        // - `record` is synchronous and never stores `ptr`.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_EXPR_SINK.record(event);
    }
}

/// Run a closure with a temporary expression sink override.
pub fn with_expr_sink<T>(sink: &dyn ExprSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn ExprSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - The pointer is installed only for this dynamic scope and `Guard`
    //   restores the previous slot on all exits.
    // - Only shared access is ever materialized from it.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn ExprSink, *const dyn ExprSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
