//! Composed provenance paths

use std::fmt;

use serde::Serialize;

use super::designator::Designator;

/// A non-empty sequence of designators, from an evaluation root to a value
///
/// The trivial path is exactly `[Identity]`. Any other path contains no
/// `Identity` step, which keeps composition associative with the trivial
/// path as its neutral element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompoundDesignator {
    steps: Vec<Designator>,
}

impl CompoundDesignator {
    /// The trivial path
    pub fn trivial() -> Self {
        Self {
            steps: vec![Designator::Identity],
        }
    }

    /// A path of a single step
    pub fn single(step: Designator) -> Self {
        Self::from_steps([step])
    }

    /// A path made of `steps`, in order
    pub fn from_steps(steps: impl IntoIterator<Item = Designator>) -> Self {
        let steps: Vec<Designator> = steps.into_iter().filter(|s| !s.is_identity()).collect();
        if steps.is_empty() {
            Self::trivial()
        } else {
            Self { steps }
        }
    }

    /// This path followed by `other`
    pub fn compose(&self, other: &CompoundDesignator) -> Self {
        Self::from_steps(self.steps.iter().chain(other.steps.iter()).cloned())
    }

    /// This path followed by one more step
    pub fn then(&self, step: Designator) -> Self {
        Self::from_steps(self.steps.iter().cloned().chain(std::iter::once(step)))
    }

    /// Returns true for the trivial path
    pub fn is_trivial(&self) -> bool {
        self.steps.len() == 1 && self.steps[0].is_identity()
    }

    /// Number of steps; the trivial path has one
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: a path has at least one step
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn steps(&self) -> &[Designator] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Designator> {
        self.steps.iter()
    }

    /// The step closest to the designated value
    pub fn last(&self) -> &Designator {
        // Non-empty by construction
        &self.steps[self.steps.len() - 1]
    }
}

impl Default for CompoundDesignator {
    fn default() -> Self {
        Self::trivial()
    }
}

impl From<Designator> for CompoundDesignator {
    fn from(step: Designator) -> Self {
        Self::single(step)
    }
}

impl<'a> IntoIterator for &'a CompoundDesignator {
    type Item = &'a Designator;
    type IntoIter = std::slice::Iter<'a, Designator>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

impl fmt::Display for CompoundDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
