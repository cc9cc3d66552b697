use crate::{
    builder::contract::{AggregationBuilder, Bucket, BucketMapper, MetricSpec, OrderDirection},
    error::InternalError,
};
use serde_json::{Map, Value, json};
use std::fmt;

///
/// BucketAggregation
///
/// In-memory terms aggregation over one grouping field.
///
/// This builder:
/// - Records named metric specs in registration order
/// - Keeps a single bucket ordering (last configuration wins)
/// - Maps backend buckets through the most recently installed mapper
///
/// It does not execute anything; `to_request` renders the accumulated
/// request body and `map_buckets` post-processes backend results.
///

pub struct BucketAggregation<T> {
    group_field: String,
    aggregations: Vec<(String, MetricSpec)>,
    ordering: Option<(String, OrderDirection)>,
    mapper: Option<BucketMapper<T>>,
}

impl<T> BucketAggregation<T> {
    /// Create an empty terms aggregation grouped by `group_field`.
    pub fn new(group_field: impl Into<String>) -> Self {
        Self {
            group_field: group_field.into(),
            aggregations: Vec::new(),
            ordering: None,
            mapper: None,
        }
    }

    #[must_use]
    pub fn group_field(&self) -> &str {
        &self.group_field
    }

    #[must_use]
    pub fn aggregations(&self) -> &[(String, MetricSpec)] {
        &self.aggregations
    }

    #[must_use]
    pub fn ordering(&self) -> Option<(&str, OrderDirection)> {
        self.ordering
            .as_ref()
            .map(|(name, direction)| (name.as_str(), *direction))
    }

    #[must_use]
    pub const fn has_mapper(&self) -> bool {
        self.mapper.is_some()
    }

    /// Render the accumulated request body.
    #[must_use]
    pub fn to_request(&self) -> Value {
        let mut terms = Map::new();
        terms.insert("field".to_string(), json!(self.group_field));
        if let Some((name, direction)) = &self.ordering {
            let mut order = Map::new();
            order.insert(name.clone(), json!(direction.as_str()));
            terms.insert("order".to_string(), Value::Object(order));
        }

        let mut request = Map::new();
        request.insert("terms".to_string(), Value::Object(terms));

        if !self.aggregations.is_empty() {
            let aggs: Map<String, Value> = self
                .aggregations
                .iter()
                .map(|(name, spec)| (name.clone(), json!(spec)))
                .collect();
            request.insert("aggs".to_string(), Value::Object(aggs));
        }

        Value::Object(request)
    }

    /// Map backend buckets through the installed mapper.
    pub fn map_buckets(&self, buckets: &[Bucket]) -> Result<Vec<T>, InternalError> {
        let mapper = self.mapper.as_ref().ok_or_else(|| {
            InternalError::builder_internal(format!(
                "no bucket mapper installed for terms aggregation on '{}'",
                self.group_field
            ))
        })?;

        Ok(buckets.iter().map(|bucket| mapper(bucket)).collect())
    }
}

impl<T> AggregationBuilder for BucketAggregation<T> {
    type Output = T;

    fn register_aggregation(&mut self, name: &str, spec: MetricSpec) {
        match self.aggregations.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.aggregations.push((name.to_string(), spec)),
        }
    }

    fn configure_ordering(&mut self, name: &str, direction: OrderDirection) {
        self.ordering = Some((name.to_string(), direction));
    }

    fn set_bucket_mapper(&mut self, mapper: BucketMapper<T>) {
        self.mapper = Some(mapper);
    }
}

impl<T> fmt::Debug for BucketAggregation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketAggregation")
            .field("group_field", &self.group_field)
            .field("aggregations", &self.aggregations)
            .field("ordering", &self.ordering)
            .field("has_mapper", &self.mapper.is_some())
            .finish()
    }
}
