//! lineage - test oracles that explain their verdicts
//!
//! Conditions are expression trees over literals, references, operators and
//! quantifiers, evaluated against DOM-like inputs. Every verdict carries a
//! witness: the original objects and constants that determined it, each with
//! the designator path from the object to the value that was used.
//!
//! Modules:
//! - `designator`: paths from objects to derived values
//! - `document`: the document capability seam and an in-memory tree
//! - `operator`: the closed operator set
//! - `expression`: expression trees, binding contexts, evaluation
//! - `driver`: named conditions, verdicts and results
//! - `explain`: text and JSON renderings of results

pub mod config;
pub mod designator;
pub mod document;
pub mod driver;
pub mod errors;
pub mod explain;
pub mod expression;
pub mod observability;
pub mod operator;
pub mod value;

pub use config::{EmptyDomainPolicy, EvaluationConfig, WitnessPolicy};
pub use designator::{CompoundDesignator, DesignatedObject, Designator};
pub use driver::{TestCondition, TestDriver, TestResult, Verdict};
pub use errors::{LineageError, LineageResult};
pub use expression::{ComposedFunction, Expression, Quantifier, Reference};
pub use operator::Operator;
pub use value::Value;
