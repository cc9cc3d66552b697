use crate::{expr::AggregateFn, model::Field};
use serde::{Serialize, Serializer};
use std::fmt;

///
/// AggregateExpr
///
/// Immutable aggregate over an optional field.
///
/// `field` is absent exactly for `count`. The typed factories are trusted and
/// do not check field type compatibility; `parse` is the validating path.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct AggregateExpr {
    func: AggregateFn,
    field: Option<Field>,
}

impl AggregateExpr {
    // ------------------------------------------------------------------
    // Factories
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn count() -> Self {
        Self {
            func: AggregateFn::Count,
            field: None,
        }
    }

    #[must_use]
    pub const fn sum(field: Field) -> Self {
        Self::with_field(AggregateFn::Sum, field)
    }

    #[must_use]
    pub const fn avg(field: Field) -> Self {
        Self::with_field(AggregateFn::Avg, field)
    }

    #[must_use]
    pub const fn max(field: Field) -> Self {
        Self::with_field(AggregateFn::Max, field)
    }

    #[must_use]
    pub const fn min(field: Field) -> Self {
        Self::with_field(AggregateFn::Min, field)
    }

    /// Build a field-targeted expression; `Count` ignores the field.
    pub(crate) fn targeting(func: AggregateFn, field: &Field) -> Self {
        if func.targets_field() {
            Self::with_field(func, field.clone())
        } else {
            Self::count()
        }
    }

    const fn with_field(func: AggregateFn, field: Field) -> Self {
        Self {
            func,
            field: Some(field),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn func(&self) -> AggregateFn {
        self.func
    }

    #[must_use]
    pub const fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    #[must_use]
    pub const fn is_count(&self) -> bool {
        matches!(self.func, AggregateFn::Count)
    }

    // ------------------------------------------------------------------
    // Labels
    // ------------------------------------------------------------------

    /// Human-readable label, e.g. "Total Revenue".
    #[must_use]
    pub fn label(&self) -> String {
        match (self.func, &self.field) {
            (AggregateFn::Count, _) => "Total Count".to_string(),
            (AggregateFn::Sum, Some(field)) => format!("Total {}", field.label),
            (AggregateFn::Avg, Some(field)) => format!("Average {}", field.label),
            (AggregateFn::Max, Some(field)) => format!("Max {}", field.label),
            (AggregateFn::Min, Some(field)) => format!("Min {}", field.label),
            _ => "Unknown".to_string(),
        }
    }

    /// Bare field label without the function prefix.
    #[must_use]
    pub fn field_label(&self) -> Option<&str> {
        self.field.as_ref().map(|field| field.label.as_str())
    }
}

impl fmt::Display for AggregateExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) if self.func.targets_field() => write!(f, "{}:{}", self.func, field.name),
            _ => f.write_str(self.func.as_str()),
        }
    }
}

impl Serialize for AggregateExpr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
