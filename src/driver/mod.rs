//! Test conditions and the driver that evaluates them
//!
//! A driver owns an ordered set of named conditions. Evaluating it binds the
//! caller's inputs to `@0..`, evaluates every condition independently and
//! stores a `TestResult`: the conjunction of all verdicts plus the verdicts
//! themselves in condition order.
//!
//! A condition that cannot be evaluated is an error, never a `false`
//! verdict. When any condition fails the stored result is cleared.

mod condition;
mod driver;
mod verdict;

pub use condition::TestCondition;
pub use driver::TestDriver;
pub use verdict::{TestResult, Verdict};
