use crate::{
    builder::{AggregateRow, AggregationBuilder, Bucket, MetricSpec, OrderDirection, default_row},
    expr::AggregateExpr,
    obs::sink::{self, ExprEvent},
};
use serde_json::Value;

impl AggregateExpr {
    /// Apply this expression to `agg` with the default `{label, value}` row mapper.
    pub fn apply<'a, B>(&self, agg: &'a mut B) -> &'a mut B
    where
        B: AggregationBuilder<Output = AggregateRow>,
    {
        self.apply_with(agg, default_row)
    }

    /// Apply this expression to `agg`, mapping each bucket through `mapper`.
    ///
    /// Field aggregates register a metric named after the shorthand, order
    /// buckets by it descending, and map `(key label, metric)`. `count`
    /// registers nothing and maps `(key label, doc_count)`.
    pub fn apply_with<'a, B, F>(&self, agg: &'a mut B, mapper: F) -> &'a mut B
    where
        B: AggregationBuilder,
        F: Fn(&str, Value) -> B::Output + 'static,
    {
        sink::record(ExprEvent::Applied { func: self.func() });

        match self.field() {
            Some(field) if self.func().targets_field() => {
                let name = self.to_string();

                agg.register_aggregation(&name, MetricSpec::new(self.func(), &field.name));
                agg.configure_ordering(&name, OrderDirection::Desc);
                agg.set_bucket_mapper(Box::new(move |bucket: &Bucket| {
                    mapper(&bucket.key_label(), bucket.metric(&name))
                }));
            }
            _ => {
                agg.set_bucket_mapper(Box::new(move |bucket: &Bucket| {
                    mapper(&bucket.key_label(), Value::from(bucket.doc_count))
                }));
            }
        }

        agg
    }
}
