//! Observable evaluation events
//!
//! Events are explicit and typed. They are emitted through `tracing` with the
//! event name in the `event` field; installing a subscriber is left to the
//! host.

use std::fmt;

/// Observable events during evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A driver starts evaluating its conditions
    EvaluationBegin,
    /// Every condition evaluated without error
    EvaluationComplete,
    /// A condition produced a verdict
    ConditionEvaluated,
    /// A condition could not be evaluated
    ConditionFailed,
    /// A quantifier stopped at a deciding candidate
    QuantifierShortCircuit,
    /// A quantifier visited its whole domain
    QuantifierExhausted,
    /// A quantifier domain had no members
    DomainEmpty,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::EvaluationBegin => "EVALUATION_BEGIN",
            Event::EvaluationComplete => "EVALUATION_COMPLETE",
            Event::ConditionEvaluated => "CONDITION_EVALUATED",
            Event::ConditionFailed => "CONDITION_FAILED",
            Event::QuantifierShortCircuit => "QUANTIFIER_SHORT_CIRCUIT",
            Event::QuantifierExhausted => "QUANTIFIER_EXHAUSTED",
            Event::DomainEmpty => "DOMAIN_EMPTY",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
