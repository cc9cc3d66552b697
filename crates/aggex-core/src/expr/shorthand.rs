//! Shorthand syntax: `count` or `<fn>:<field>`.

use crate::{
    error::ValidationError,
    expr::{AggregateExpr, AggregateFn},
    model::{Field, field::lookup},
    obs::sink::{self, ExprEvent},
};

const SEPARATOR: char = ':';

// Per-field emission order.
const FIELD_FUNCTIONS: [AggregateFn; 4] = [
    AggregateFn::Max,
    AggregateFn::Min,
    AggregateFn::Sum,
    AggregateFn::Avg,
];

impl AggregateExpr {
    /// Every shorthand string that `parse` accepts for `fields`.
    ///
    /// `count` comes first, then per field in input order `max`, `min`, and
    /// for numeric fields `sum`, `avg`. Fields that are neither numeric nor
    /// dates contribute nothing.
    #[must_use]
    pub fn valid_shorthands(fields: &[Field]) -> Vec<String> {
        let mut out = vec![AggregateFn::Count.as_str().to_string()];

        for field in fields {
            out.extend(
                FIELD_FUNCTIONS
                    .into_iter()
                    .filter(|func| func.supports(&field.data_type))
                    .map(|func| format!("{func}{SEPARATOR}{}", field.name)),
            );
        }

        out
    }

    /// Parse and validate a shorthand expression against `fields`.
    ///
    /// The input must be an exact member of `valid_shorthands(fields)`.
    pub fn parse(fields: &[Field], expr: &str) -> Result<Self, ValidationError> {
        let allowed = Self::valid_shorthands(fields);
        if !allowed.iter().any(|candidate| candidate == expr) {
            sink::record(ExprEvent::Rejected);

            return Err(ValidationError::new(expr, allowed));
        }

        let parsed = resolve(fields, expr);
        match &parsed {
            Some(parsed) => sink::record(ExprEvent::Parsed {
                func: parsed.func(),
            }),
            None => sink::record(ExprEvent::Rejected),
        }

        parsed.ok_or_else(|| ValidationError::new(expr, allowed))
    }
}

// Split an already-validated shorthand into its function and field.
fn resolve(fields: &[Field], expr: &str) -> Option<AggregateExpr> {
    let (token, field_name) = match expr.split_once(SEPARATOR) {
        Some((token, name)) => (token, Some(name)),
        None => (expr, None),
    };
    let func = AggregateFn::from_token(token)?;

    match field_name {
        Some(name) => lookup(fields, name).map(|field| AggregateExpr::targeting(func, field)),
        None => Some(AggregateExpr::count()),
    }
}
