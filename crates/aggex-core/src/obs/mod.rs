//! Observability: expression events, the sink boundary, and thread-local
//! counters. Instrumentation never changes expression semantics.

pub mod metrics;
pub mod sink;


pub use metrics::ExprCounters;
pub use sink::{DebugSink, ExprEvent, ExprSink, with_expr_sink};
