//! Test driver

use tracing::{debug, warn};

use super::condition::TestCondition;
use super::verdict::TestResult;
use crate::config::EvaluationConfig;
use crate::errors::{ConditionFailure, LineageError, LineageResult};
use crate::expression::{Context, Evaluator};
use crate::observability::Event;
use crate::value::Value;

/// Evaluates a fixed set of conditions against caller-supplied inputs
#[derive(Debug, Clone)]
pub struct TestDriver {
    conditions: Vec<TestCondition>,
    config: EvaluationConfig,
    result: Option<TestResult>,
}

impl TestDriver {
    /// Creates a driver with the default configuration
    pub fn new(conditions: impl IntoIterator<Item = TestCondition>) -> Self {
        Self::with_config(conditions, EvaluationConfig::default())
    }

    pub fn with_config(conditions: impl IntoIterator<Item = TestCondition>, config: EvaluationConfig) -> Self {
        Self {
            conditions: conditions.into_iter().collect(),
            config,
            result: None,
        }
    }

    pub fn conditions(&self) -> &[TestCondition] {
        &self.conditions
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Evaluates every condition with `inputs` bound to `@0..`.
    ///
    /// Replaces the stored result on success. On failure the stored result
    /// is cleared and the error lists every condition that failed.
    pub fn evaluate_all(&mut self, inputs: impl IntoIterator<Item = Value>) -> LineageResult<()> {
        self.result = None;
        self.config.validate()?;

        let context = Context::new(inputs);
        let evaluator = Evaluator::new(&self.config);
        debug!(
            event = %Event::EvaluationBegin,
            conditions = self.conditions.len(),
            inputs = context.input_count()
        );

        let mut verdicts = Vec::with_capacity(self.conditions.len());
        let mut failures = Vec::new();
        for condition in &self.conditions {
            match condition.evaluate(&evaluator, &context) {
                Ok(verdict) => {
                    debug!(
                        event = %Event::ConditionEvaluated,
                        condition = condition.name(),
                        result = verdict.result(),
                        witness = verdict.witness().len()
                    );
                    verdicts.push(verdict);
                }
                Err(error) => {
                    warn!(
                        event = %Event::ConditionFailed,
                        condition = condition.name(),
                        code = error.code(),
                        error = %error
                    );
                    failures.push(ConditionFailure {
                        condition: condition.name().to_string(),
                        error,
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(LineageError::ConditionsFailed { failures });
        }

        let result = TestResult::new(verdicts);
        debug!(event = %Event::EvaluationComplete, result = result.result());
        self.result = Some(result);
        Ok(())
    }

    /// The result of the last successful `evaluate_all`
    pub fn result(&self) -> LineageResult<&TestResult> {
        self.result.as_ref().ok_or(LineageError::QueryBeforeEvaluation)
    }
}
