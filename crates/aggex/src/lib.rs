//! ## Crate layout
//! - `core`: field model, aggregate expressions, builder contract, and
//!   observability.
//! - `error`: public error taxonomy.
//!
//! Aggregate expressions are written as `count` or `<fn>:<field>` with
//! `fn` one of `sum`, `avg`, `max`, `min`. Parse them against the caller's
//! fields, then apply them to an `AggregationBuilder`:
//!
//! ```ignore
//! let fields = FieldRegistry::from(vec![Field::number("amt", "Amount")]);
//! let expr = AggregateExpr::parse(&fields, "sum:amt")?;
//!
//! let mut agg = BucketAggregation::new("region");
//! expr.apply(&mut agg);
//! ```

pub use aggex_core as core;

pub mod error;

pub use error::Error;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::error::Error;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn prelude_covers_the_parse_apply_map_path() -> Result<(), Error> {
        let fields = FieldRegistry::from(vec![
            Field::number("amt", "Amount"),
            Field::date("created", "Created"),
        ]);

        let expr = AggregateExpr::parse(&fields, "avg:amt")?;
        let mut agg = BucketAggregation::new("region");
        expr.apply(&mut agg);

        let rows = agg.map_buckets(&[Bucket::new("EU", 2).with_metric("avg:amt", 12.5)])?;

        assert_eq!(expr.label(), "Average Amount");
        assert_eq!(rows, vec![AggregateRow::new("EU", 12.5)]);

        Ok(())
    }

    #[test]
    fn version_is_set() {
        assert!(!super::VERSION.is_empty());
    }
}
