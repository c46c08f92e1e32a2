//! Verdicts and aggregate results

use serde::Serialize;

use crate::designator::DesignatedObject;

/// Outcome of one condition with the leaves that determined it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    condition: String,
    result: bool,
    witness: Vec<DesignatedObject>,
}

impl Verdict {
    pub fn new(condition: impl Into<String>, result: bool, witness: Vec<DesignatedObject>) -> Self {
        Self {
            condition: condition.into(),
            result,
            witness,
        }
    }

    /// Name of the condition this verdict is for
    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn result(&self) -> bool {
        self.result
    }

    /// Ordered leaves justifying the result
    pub fn witness(&self) -> &[DesignatedObject] {
        &self.witness
    }
}

/// Conjunction of all verdicts of one driver run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    result: bool,
    verdicts: Vec<Verdict>,
}

impl TestResult {
    /// Aggregates verdicts; an empty set passes
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        let result = verdicts.iter().all(Verdict::result);
        Self { result, verdicts }
    }

    pub fn result(&self) -> bool {
        self.result
    }

    /// Verdicts in condition order
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Looks up the verdict of a condition by name
    pub fn verdict(&self, condition: &str) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.condition == condition)
    }

    /// Verdicts that did not hold
    pub fn failed(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_is_conjunction() {
        let result = TestResult::new(vec![
            Verdict::new("a", true, vec![]),
            Verdict::new("b", false, vec![DesignatedObject::leaf(1)]),
        ]);
        assert!(!result.result());
        assert_eq!(result.verdicts().len(), 2);
        assert_eq!(result.failed().map(Verdict::condition).collect::<Vec<_>>(), vec!["b"]);
        assert!(result.verdict("a").unwrap().result());
        assert!(result.verdict("c").is_none());
    }

    #[test]
    fn test_empty_result_passes() {
        assert!(TestResult::new(vec![]).result());
    }

    #[test]
    fn test_verdict_serializes() {
        let verdict = Verdict::new("gt", true, vec![DesignatedObject::leaf(100)]);
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["condition"], "gt");
        assert_eq!(json["result"], true);
        assert_eq!(json["witness"][0]["object"], 100.0);
    }
}
