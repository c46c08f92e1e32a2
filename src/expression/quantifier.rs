//! Quantifiers over element collections
//!
//! A quantifier evaluates its domain once, then binds its variable to each
//! member in domain order and evaluates the body. Evaluation stops at the
//! first deciding candidate (a false body for a universal, a true body for
//! an existential); later members are never evaluated.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::context::{Binding, Context};
use super::evaluation::Evaluation;
use super::{Evaluator, Expression};
use crate::config::{EmptyDomainPolicy, WitnessPolicy};
use crate::designator::{DesignatedObject, Designator};
use crate::errors::{LineageError, LineageResult};
use crate::observability::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantifierKind {
    /// For all members
    Universal,
    /// For some member
    Existential,
}

impl QuantifierKind {
    pub fn name(&self) -> &'static str {
        match self {
            QuantifierKind::Universal => "UniversalQuantifier",
            QuantifierKind::Existential => "ExistentialQuantifier",
        }
    }

    /// The body outcome that decides the quantifier on its own
    fn deciding(&self) -> bool {
        matches!(self, QuantifierKind::Existential)
    }
}

/// A quantified expression: `kind variable in domain: body`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantifier {
    kind: QuantifierKind,
    variable: String,
    domain: Box<Expression>,
    body: Box<Expression>,
}

impl Quantifier {
    pub fn new(
        kind: QuantifierKind,
        variable: impl Into<String>,
        domain: impl Into<Expression>,
        body: impl Into<Expression>,
    ) -> Self {
        Self {
            kind,
            variable: variable.into(),
            domain: Box::new(domain.into()),
            body: Box::new(body.into()),
        }
    }

    /// Body holds for every member of the domain
    pub fn universal(
        variable: impl Into<String>,
        domain: impl Into<Expression>,
        body: impl Into<Expression>,
    ) -> Self {
        Self::new(QuantifierKind::Universal, variable, domain, body)
    }

    /// Body holds for at least one member of the domain
    pub fn existential(
        variable: impl Into<String>,
        domain: impl Into<Expression>,
        body: impl Into<Expression>,
    ) -> Self {
        Self::new(QuantifierKind::Existential, variable, domain, body)
    }

    pub fn kind(&self) -> QuantifierKind {
        self.kind
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn domain(&self) -> &Expression {
        &self.domain
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }

    pub(super) fn evaluate(
        &self,
        evaluator: &Evaluator<'_>,
        context: &Context,
        depth: usize,
    ) -> LineageResult<Evaluation> {
        let name = self.kind.name();
        let config = evaluator.config();
        let domain = evaluator.evaluate_at(&self.domain, context, depth + 1)?;
        let (members, domain_path, domain_witness) = domain.into_members(name)?;

        if members.is_empty() {
            debug!(event = %Event::DomainEmpty, variable = %self.variable, quantifier = name);
            return match config.empty_domain {
                EmptyDomainPolicy::Vacuous => Ok(Evaluation::decided(!self.kind.deciding(), Vec::new())),
                EmptyDomainPolicy::Reject => Err(LineageError::EmptyDomain {
                    variable: self.variable.clone(),
                }),
            };
        }

        // Candidates are reported through the object the domain started from
        let anchor = domain_witness.first().map(|leaf| leaf.object().clone());
        let deciding = self.kind.deciding();
        let total = members.len();
        let mut kept: Option<Vec<DesignatedObject>> = None;

        for (position, member) in members.into_iter().enumerate() {
            let path = domain_path
                .then(member.step)
                .then(Designator::bound(self.variable.clone()));
            let object = anchor.clone().unwrap_or_else(|| member.value.clone());
            let binding = Binding::new(member.value, DesignatedObject::new(object, path));
            let scope = context.extend(self.variable.clone(), binding);

            let (outcome, witness) = evaluator
                .evaluate_at(&self.body, &scope, depth + 1)?
                .into_boolean(name)?;

            if outcome == deciding {
                trace!(
                    event = %Event::QuantifierShortCircuit,
                    variable = %self.variable,
                    position,
                    total
                );
                return Ok(Evaluation::decided(outcome, witness));
            }
            match config.witness_policy {
                WitnessPolicy::First if kept.is_some() => {}
                _ => kept = Some(witness),
            }
        }

        trace!(event = %Event::QuantifierExhausted, variable = %self.variable, total);
        Ok(Evaluation::decided(!deciding, kept.unwrap_or_default()))
    }
}
