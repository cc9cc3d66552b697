use crate::expr::AggregateFn;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// AggregationBuilder
///
/// Capability surface an aggregate expression needs from a backend query
/// builder. Implementations own query construction and bucket mapping;
/// expressions only register specs, ordering, and a row mapper.
///

pub trait AggregationBuilder {
    type Output;

    /// Register a named metric sub-aggregation.
    fn register_aggregation(&mut self, name: &str, spec: MetricSpec);

    /// Order result buckets by the named metric.
    fn configure_ordering(&mut self, name: &str, direction: OrderDirection);

    /// Install the per-bucket result mapper.
    fn set_bucket_mapper(&mut self, mapper: BucketMapper<Self::Output>);
}

/// Per-bucket result mapper installed on a builder.
pub type BucketMapper<T> = Box<dyn Fn(&Bucket) -> T>;

///
/// MetricSpec
///
/// Backend metric request for one field, serialized as
/// `{ "<fn>": { "field": "<name>" } }`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MetricSpec {
    pub func: AggregateFn,
    pub field: String,
}

impl MetricSpec {
    pub fn new(func: AggregateFn, field: impl Into<String>) -> Self {
        Self {
            func,
            field: field.into(),
        }
    }
}

impl Serialize for MetricSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Target<'a> {
            field: &'a str,
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.func.as_str(), &Target { field: &self.field })?;
        map.end()
    }
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Asc,
    Desc,
}

impl OrderDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

///
/// Bucket
///
/// One grouped result row returned by the backend.
///
/// `key` is whatever the grouping field produced (string, number, or a date
/// rendered as epoch millis). Sub-aggregation results sit beside it as
/// `"<name>": { "value": .. }` objects, keyed by the registered name.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Bucket {
    pub key: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_as_string: Option<String>,
    pub doc_count: u64,
    #[serde(flatten)]
    pub aggregations: BTreeMap<String, Value>,
}

impl Bucket {
    pub fn new(key: impl Into<Value>, doc_count: u64) -> Self {
        Self {
            key: key.into(),
            key_as_string: None,
            doc_count,
            aggregations: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_key_as_string(mut self, key_as_string: impl Into<String>) -> Self {
        self.key_as_string = Some(key_as_string.into());
        self
    }

    /// Attach a computed metric value under `name`.
    #[must_use]
    pub fn with_metric(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value: Value = value.into();
        self.aggregations
            .insert(name.into(), serde_json::json!({ "value": value }));
        self
    }

    /// Label handed to row mappers.
    ///
    /// Prefers the backend's `key_as_string`; otherwise string keys are used
    /// as-is and any other key is rendered as JSON text.
    #[must_use]
    pub fn key_label(&self) -> String {
        match (&self.key_as_string, &self.key) {
            (Some(rendered), _) => rendered.clone(),
            (None, Value::String(key)) => key.clone(),
            (None, Value::Null) => String::new(),
            (None, key) => key.to_string(),
        }
    }

    /// Metric value for `name`, or `Null` when the backend produced none.
    #[must_use]
    pub fn metric(&self, name: &str) -> Value {
        self.aggregations
            .get(name)
            .and_then(|result| result.get("value"))
            .cloned()
            .unwrap_or(Value::Null)
    }
}

///
/// AggregateRow
///
/// Default mapped result: the bucket key as label plus the aggregate value.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AggregateRow {
    pub label: String,
    pub value: Value,
}

impl AggregateRow {
    pub fn new(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Mapper used when `apply` is called without one.
#[must_use]
pub fn default_row(key: &str, value: Value) -> AggregateRow {
    AggregateRow::new(key, value)
}
