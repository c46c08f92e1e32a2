//! Verdict explanations
//!
//! Renders a `TestResult` as deterministic text and as JSON. Each witness
//! entry names the original object (an element description or a literal)
//! and the designator path that leads from it to the value that was used.
//!
//! Explanations are read-only views; building one never re-evaluates.

use std::fmt;

use serde::Serialize;

use crate::designator::DesignatedObject;
use crate::driver::{TestResult, Verdict};

/// One witness leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WitnessEntry {
    /// Kind of the original object ("element", "number", ...)
    pub kind: String,
    /// Element description or literal
    pub object: String,
    /// Designator steps, outermost first; empty for the trivial path
    pub path: Vec<String>,
}

impl WitnessEntry {
    pub fn from_object(leaf: &DesignatedObject) -> Self {
        let path = if leaf.designator().is_trivial() {
            Vec::new()
        } else {
            leaf.designator().iter().map(ToString::to_string).collect()
        };
        Self {
            kind: leaf.object().kind().to_string(),
            object: leaf.object().to_string(),
            path,
        }
    }
}

/// Explanation of one verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerdictExplanation {
    pub condition: String,
    pub result: bool,
    pub witness: Vec<WitnessEntry>,
}

impl VerdictExplanation {
    pub fn from_verdict(verdict: &Verdict) -> Self {
        Self {
            condition: verdict.condition().to_string(),
            result: verdict.result(),
            witness: verdict.witness().iter().map(WitnessEntry::from_object).collect(),
        }
    }

    /// JSON form of the explanation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn write_body(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let status = if self.result { "PASS" } else { "FAIL" };
        writeln!(f, "{}[{}] {}", indent, status, self.condition)?;
        if self.witness.is_empty() {
            return writeln!(f, "{}  Witness: (none)", indent);
        }
        writeln!(f, "{}  Witness:", indent)?;
        for (i, entry) in self.witness.iter().enumerate() {
            if entry.path.is_empty() {
                writeln!(f, "{}    {}. {} {}", indent, i + 1, entry.kind, entry.object)?;
            } else {
                writeln!(
                    f,
                    "{}    {}. {} {} via {}",
                    indent,
                    i + 1,
                    entry.kind,
                    entry.object,
                    entry.path.join(" -> ")
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for VerdictExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_body(f, "")
    }
}

/// Explanation of a whole driver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultExplanation {
    pub result: bool,
    pub passed: usize,
    pub failed: usize,
    pub verdicts: Vec<VerdictExplanation>,
}

impl ResultExplanation {
    pub fn from_result(result: &TestResult) -> Self {
        let verdicts: Vec<VerdictExplanation> = result
            .verdicts()
            .iter()
            .map(VerdictExplanation::from_verdict)
            .collect();
        let passed = verdicts.iter().filter(|v| v.result).count();
        Self {
            result: result.result(),
            passed,
            failed: verdicts.len() - passed,
            verdicts,
        }
    }

    /// JSON form of the explanation
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ResultExplanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TEST RESULT ===")?;
        writeln!(f, "Status: {}", if self.result { "PASSED" } else { "FAILED" })?;
        writeln!(f, "Conditions: {} passed, {} failed", self.passed, self.failed)?;
        if !self.verdicts.is_empty() {
            writeln!(f, "Verdicts:")?;
            for verdict in &self.verdicts {
                verdict.write_body(f, "  ")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designator::{CompoundDesignator, Designator};

    fn sample() -> TestResult {
        let bound = CompoundDesignator::from_steps([
            Designator::selector_match("#h2", 0),
            Designator::bound("$x"),
        ]);
        TestResult::new(vec![
            Verdict::new(
                "visible",
                true,
                vec![DesignatedObject::new("body", bound), DesignatedObject::leaf(0.9)],
            ),
            Verdict::new("empty", false, vec![]),
        ])
    }

    #[test]
    fn test_witness_entry() {
        let entry = WitnessEntry::from_object(&DesignatedObject::leaf(0.9));
        assert_eq!(entry.kind, "number");
        assert_eq!(entry.object, "0.9");
        assert!(entry.path.is_empty());
    }

    #[test]
    fn test_result_text() {
        let text = ResultExplanation::from_result(&sample()).to_string();
        assert!(text.starts_with("=== TEST RESULT ===\nStatus: FAILED\n"));
        assert!(text.contains("Conditions: 1 passed, 1 failed"));
        assert!(text.contains("[PASS] visible"));
        assert!(text.contains(
            "1. text \"body\" via element matching \"#h2\" (match 0) -> bound to $x"
        ));
        assert!(text.contains("2. number 0.9\n"));
        assert!(text.contains("[FAIL] empty\n    Witness: (none)"));
    }

    #[test]
    fn test_result_json() {
        let json = ResultExplanation::from_result(&sample()).to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["result"], false);
        assert_eq!(parsed["verdicts"][0]["witness"][0]["path"][1], "bound to $x");
        assert_eq!(parsed["verdicts"][1]["witness"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_explanation_deterministic() {
        let result = sample();
        assert_eq!(
            ResultExplanation::from_result(&result).to_string(),
            ResultExplanation::from_result(&result).to_string()
        );
    }
}
