//! Core runtime for aggex: the field model, aggregate expressions and their
//! shorthand syntax, the aggregation-builder contract, and observability.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod builder;
pub mod error;
pub mod expr;
pub mod model;
pub mod obs;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or counters are re-exported here.
///

pub mod prelude {
    pub use crate::{
        builder::{AggregateRow, AggregationBuilder, Bucket, BucketAggregation, OrderDirection},
        expr::{AggregateExpr, AggregateFn},
        model::{DataType, Field, FieldRegistry},
    };
}
