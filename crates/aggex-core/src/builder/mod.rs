//! Module: builder
//! Responsibility: the aggregation-builder capability contract and a terms
//! aggregation that implements it.
//! Does not own: query execution against a search backend.
//! Boundary: expressions depend on `AggregationBuilder` only.

pub mod contract;
pub mod terms;


pub use contract::{
    AggregateRow, AggregationBuilder, Bucket, BucketMapper, MetricSpec, OrderDirection,
    default_row,
};
pub use terms::BucketAggregation;
