//! Shared test doubles and fixtures.

use crate::{
    builder::{AggregationBuilder, Bucket, BucketMapper, MetricSpec, OrderDirection},
    model::{DataType, Field},
};

///
/// RecordingBuilder
///
/// Builder double that records every contract call in order.
///

pub(crate) struct RecordingBuilder<T> {
    pub(crate) registered: Vec<(String, MetricSpec)>,
    pub(crate) orderings: Vec<(String, OrderDirection)>,
    pub(crate) mapper: Option<BucketMapper<T>>,
}

impl<T> RecordingBuilder<T> {
    pub(crate) const fn new() -> Self {
        Self {
            registered: Vec::new(),
            orderings: Vec::new(),
            mapper: None,
        }
    }

    /// Run the installed mapper over one bucket.
    pub(crate) fn map(&self, bucket: &Bucket) -> T {
        let mapper = self.mapper.as_ref().expect("bucket mapper installed");

        mapper(bucket)
    }
}

impl<T> AggregationBuilder for RecordingBuilder<T> {
    type Output = T;

    fn register_aggregation(&mut self, name: &str, spec: MetricSpec) {
        self.registered.push((name.to_string(), spec));
    }

    fn configure_ordering(&mut self, name: &str, direction: OrderDirection) {
        self.orderings.push((name.to_string(), direction));
    }

    fn set_bucket_mapper(&mut self, mapper: BucketMapper<T>) {
        self.mapper = Some(mapper);
    }
}

pub(crate) fn amount() -> Field {
    Field::number("amt", "Amount")
}

pub(crate) fn created() -> Field {
    Field::date("created", "Created")
}

pub(crate) fn status() -> Field {
    Field::new("status", "Status", DataType::Other("keyword".to_string()))
}

/// Mixed schema: date, keyword, number, number.
pub(crate) fn schema() -> Vec<Field> {
    vec![
        created(),
        status(),
        amount(),
        Field::number("qty", "Quantity"),
    ]
}
