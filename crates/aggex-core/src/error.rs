use std::fmt;
use thiserror::Error as ThisError;

///
/// ValidationError
///
/// Raised when a shorthand expression is not a member of the valid set for
/// the supplied fields. Carries the rejected input and the full allowed set
/// it was checked against.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("\"{value}\" must be one of [{}]", .allowed.join(", "))]
pub struct ValidationError {
    pub value: String,
    pub allowed: Vec<String>,
}

impl ValidationError {
    pub fn new(value: impl Into<String>, allowed: Vec<String>) -> Self {
        Self {
            value: value.into(),
            allowed,
        }
    }
}

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Not a stable API; the facade crate maps it into its public error.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl InternalError {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a builder-origin internal error.
    pub fn builder_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Builder, message)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<ValidationError> for InternalError {
    fn from(err: ValidationError) -> Self {
        Self::new(ErrorClass::Validation, ErrorOrigin::Expr, err.to_string())
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Validation,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Expr,
    Builder,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Expr => "expr",
            Self::Builder => "builder",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_value_and_allowed_set() {
        let err = ValidationError::new("sum:created", vec!["count".into(), "max:created".into()]);

        assert_eq!(
            err.to_string(),
            "\"sum:created\" must be one of [count, max:created]"
        );
    }

    #[test]
    fn validation_error_lowers_into_expr_origin() {
        let err: InternalError = ValidationError::new("nope", vec!["count".into()]).into();

        assert_eq!(err.class, ErrorClass::Validation);
        assert_eq!(err.origin, ErrorOrigin::Expr);
        assert_eq!(
            err.display_with_class(),
            "expr:validation: \"nope\" must be one of [count]"
        );
    }
}
