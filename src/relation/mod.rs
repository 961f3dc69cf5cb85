//! Relational operators.
//!
//! Two views of the same six operators:
//!
//! - **Tags** ([`Equal`], [`NotEqual`], [`Less`], ...): zero-sized types used
//!   at compile time to select which element-wise comparison a quantifier
//!   applies. Each tag forwards to the element's own operator method, so
//!   `NotEqual` calls `PartialEq::ne` and never negates `eq`.
//! - **[`Operator`]**: a plain enum naming an operator at runtime, for
//!   callers that pick the comparison from data.

mod operator;
mod tags;

pub use operator::{Operator, ParseOperatorError};
pub use tags::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual, Relation};
