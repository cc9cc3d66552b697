use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Field
///
/// Read-only schema metadata consumed by aggregate expressions.
/// `name` is the lookup key; `label` is display-only.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub label: String,
    pub data_type: DataType,
}

impl Field {
    pub fn new(name: impl Into<String>, label: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            data_type,
        }
    }

    /// Shorthand for a `number` field.
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, DataType::Number)
    }

    /// Shorthand for a `date` field.
    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, DataType::Date)
    }
}

///
/// DataType
///
/// Declared field type as far as aggregation cares.
/// Anything other than `number` or `date` is carried through verbatim in
/// `Other` and never contributes aggregates.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum DataType {
    Number,
    Date,
    Other(String),
}

impl DataType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Number => "number",
            Self::Date => "date",
            Self::Other(raw) => raw,
        }
    }

    /// Numeric fields support every field-targeted function.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Number)
    }

    /// Ordered fields support the extrema family (`max` / `min`).
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        matches!(self, Self::Number | Self::Date)
    }
}

impl From<&str> for DataType {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<String> for DataType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "number" => Self::Number,
            "date" => Self::Date,
            _ => Self::Other(raw),
        }
    }
}

impl From<DataType> for String {
    fn from(data_type: DataType) -> Self {
        match data_type {
            DataType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// FieldRegistry
///
/// Ordered field collection supplied by the caller.
/// Lookups resolve to the first field with an exactly matching name.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldRegistry(#[into_iterator(owned, ref)] Vec<Field>);

impl FieldRegistry {
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self(fields)
    }

    /// Return the first field registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        lookup(&self.0, name)
    }
}

impl From<Vec<Field>> for FieldRegistry {
    fn from(fields: Vec<Field>) -> Self {
        Self(fields)
    }
}

impl FromIterator<Field> for FieldRegistry {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// First-match lookup by exact field name.
pub(crate) fn lookup<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|field| field.name == name)
}
