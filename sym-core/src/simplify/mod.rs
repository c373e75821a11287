//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the complexity of an
//! expression. It does this in passes over the whole tree, until a pass leaves the tree unchanged.
//! Each pass works bottom-up, and at every node:
//!
//! 1. [folds](fold()) the node if its operands are literals, using exact arithmetic only,
//! 2. sorts the operands of commutative operators into canonical order,
//! 3. then tries the rewriting [rules] on the node, settling the result with steps 1 and 2 again,
//!    until no more rules apply.
//!
//! Every pass and every rule firing consumes one iteration of the [`Ctxt`]'s quota; if the quota
//! runs out before the tree settles, simplification fails with
//! [`QuotaExceeded`](crate::error::QuotaExceeded). The cancellation token, if any, is checked
//! before every pass and every rewrite attempt.
//!
//! [`expand`] is separate from simplification, and is never invoked by it.

mod canonical;
mod expand;
pub mod fold;
pub mod rules;
pub mod step;

use crate::ctxt::Ctxt;
use crate::entity::Entity;
use crate::error::{Cancelled, QuotaExceeded};
use crate::pattern::RuleTable;
use crate::step_collector::StepCollector;
use sym_error::Error;
use tracing::{debug, trace, warn};

pub use canonical::canonicalize;
pub use expand::expand;
pub use fold::{fold, Mode};
pub use step::Step;

/// Tracks the iterations spent by a single simplification.
struct Budget<'a> {
    ctxt: &'a Ctxt,
    spent: usize,
}

impl<'a> Budget<'a> {
    fn new(ctxt: &'a Ctxt) -> Self {
        Self { ctxt, spent: 0 }
    }

    /// Fails if cancellation was requested.
    fn check(&self) -> Result<(), Error> {
        if self.ctxt.is_cancelled() {
            debug!(spent = self.spent, "simplification cancelled");
            return Err(Cancelled.into());
        }
        Ok(())
    }

    /// Consumes one iteration, failing if the quota is exhausted or cancellation was requested.
    fn spend(&mut self) -> Result<(), Error> {
        self.check()?;
        if self.spent >= self.ctxt.max_iterations {
            warn!(limit = self.ctxt.max_iterations, "simplification quota exhausted");
            return Err(QuotaExceeded { limit: self.ctxt.max_iterations }.into());
        }
        self.spent += 1;
        Ok(())
    }
}

/// Folds and canonicalizes a single node.
fn settle(expr: &Entity) -> Result<Entity, Error> {
    Ok(canonicalize(&fold(expr, Mode::Exact)?))
}

/// A simplifier, configured with a context and a table of rules.
#[derive(Debug, Clone, Copy)]
pub struct Simplifier<'a> {
    ctxt: &'a Ctxt,
    rules: &'a RuleTable,
}

impl<'a> Simplifier<'a> {
    /// Creates a simplifier using the default [rules](rules::all).
    pub fn new(ctxt: &'a Ctxt) -> Self {
        Self { ctxt, rules: rules::all() }
    }

    /// Replaces the rules used by the simplifier.
    pub fn with_rules(self, rules: &'a RuleTable) -> Self {
        Self { rules, ..self }
    }

    /// Simplifies the given expression.
    pub fn simplify(&self, expr: &Entity) -> Result<Entity, Error> {
        self.run(expr, &mut ())
    }

    /// Simplifies the given expression, and returns the steps taken by the simplifier, in the
    /// order the rules fired.
    pub fn simplify_with_steps(&self, expr: &Entity) -> Result<(Entity, Vec<Step>), Error> {
        let mut steps = Vec::new();
        let expr = self.run(expr, &mut steps)?;
        Ok((expr, steps))
    }

    /// Simplifies the given expression, reporting each step to the given collector.
    pub fn simplify_into(
        &self,
        expr: &Entity,
        collector: &mut dyn StepCollector<Step>,
    ) -> Result<Entity, Error> {
        self.run(expr, collector)
    }

    /// Runs passes over the whole tree until it reaches a fixed point.
    #[tracing::instrument(skip_all)]
    fn run(&self, expr: &Entity, steps: &mut dyn StepCollector<Step>) -> Result<Entity, Error> {
        let mut budget = Budget::new(self.ctxt);
        let mut current = expr.clone();
        let mut pass = 0usize;

        loop {
            budget.spend()?;
            pass += 1;

            let next = self.simplify_node(&current, &mut budget, steps)?;
            debug!(pass, spent = budget.spent, expr = %next, "finished pass");
            if next == current {
                return Ok(next);
            }
            current = next;
        }
    }

    /// Simplifies the children of the node, then the node itself.
    fn simplify_node(
        &self,
        expr: &Entity,
        budget: &mut Budget,
        steps: &mut dyn StepCollector<Step>,
    ) -> Result<Entity, Error> {
        let expr = expr.try_map_children(|child| self.simplify_node(child, budget, steps))?;
        let mut current = settle(&expr)?;

        loop {
            budget.check()?;
            let Some((step, rewritten)) = self.rules.apply(&current) else {
                break;
            };

            trace!(?step, from = %current, to = %rewritten, "applied rule");
            budget.spend()?;
            steps.push(step);

            let next = settle(&rewritten)?;
            if next == current {
                break;
            }
            current = next;
        }

        Ok(current)
    }
}

/// Simplifies the given expression using the default rules.
pub fn simplify(ctxt: &Ctxt, expr: &Entity) -> Result<Entity, Error> {
    Simplifier::new(ctxt).simplify(expr)
}

/// Simplifies the given expression using the given rules.
///
/// The rules are tried in their order in the table, at every node of the tree. A table whose rules
/// undo each other never settles, and fails once the quota is exhausted.
pub fn simplify_with(ctxt: &Ctxt, expr: &Entity, rules: &RuleTable) -> Result<Entity, Error> {
    Simplifier::new(ctxt).with_rules(rules).simplify(expr)
}

/// Simplifies the given expression using the default rules. The steps taken by the simplifier
/// will also be collected and returned. This is useful for debugging, and also for displaying the
/// steps taken to the user.
pub fn simplify_with_steps(ctxt: &Ctxt, expr: &Entity) -> Result<(Entity, Vec<Step>), Error> {
    Simplifier::new(ctxt).simplify_with_steps(expr)
}

impl Entity {
    /// Simplifies this expression using the default rules. See [`simplify`](simplify()).
    pub fn simplify(&self, ctxt: &Ctxt) -> Result<Entity, Error> {
        simplify(ctxt, self)
    }

    /// Expands this expression. See [`expand`](expand()).
    pub fn expand(&self) -> Entity {
        expand(self)
    }
}
