//! Sinks for the rewrite steps reported by the simplifier.

use std::collections::HashMap;
use std::hash::Hash;

/// Receives each step of an algorithm as it happens.
///
/// Pass `()` to discard the steps, a [`Vec`] to record them in the order they fired, or a
/// [`HashMap`] to count how many times each one fired.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

impl<S: Eq + Hash> StepCollector<S> for HashMap<S, usize> {
    fn push(&mut self, step: S) {
        *self.entry(step).or_default() += 1;
    }
}
