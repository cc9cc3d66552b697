use crate::model::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// AggregateFn
///
/// Closed set of aggregate functions understood by the shorthand syntax.
/// Declaration order is the canonical generation order.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateFn {
    Count,
    Sum,
    Avg,
    Max,
    Min,
}

impl AggregateFn {
    /// Every function in canonical order.
    pub const ALL: [Self; 5] = [Self::Count, Self::Sum, Self::Avg, Self::Max, Self::Min];

    /// Shorthand token.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Sum => "sum",
            Self::Avg => "avg",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    pub(crate) fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.as_str() == token)
    }

    /// Return whether this function aggregates over an explicit field.
    #[must_use]
    pub const fn targets_field(self) -> bool {
        !matches!(self, Self::Count)
    }

    /// Return whether this function belongs to the extrema family.
    #[must_use]
    pub const fn is_extrema(self) -> bool {
        matches!(self, Self::Max | Self::Min)
    }

    /// Return whether a field of `data_type` can be aggregated by this function.
    #[must_use]
    pub const fn supports(self, data_type: &DataType) -> bool {
        match self {
            Self::Count => false,
            Self::Sum | Self::Avg => data_type.is_numeric(),
            Self::Max | Self::Min => data_type.is_ordered(),
        }
    }
}

impl fmt::Display for AggregateFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
