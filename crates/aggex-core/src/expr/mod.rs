//! Module: expr
//! Responsibility: the aggregate expression model, shorthand parsing and
//! serialization, enumeration of valid expressions, and builder application.
//! Does not own: field metadata or backend query construction.
//! Boundary: depends on `model` for fields and `builder` for the contract.

mod aggregate;
mod apply;
mod function;
mod generate;
mod shorthand;

#[cfg(test)]
mod tests;

pub use aggregate::AggregateExpr;
pub use function::AggregateFn;
