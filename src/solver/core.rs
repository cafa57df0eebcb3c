use std::sync::Arc;

use log::info;
use rayon::prelude::*;

use crate::expression::{Expression, Op};
use crate::utils::{all_splits, subset_permutations};

/// A candidate expression paired with its value, cached so the search never
/// re-evaluates a subtree it has already combined.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub expr: Arc<Expression>,
    pub value: u64,
}

/// Main solver for the countdown numbers game
pub struct CountdownSolver {}

impl CountdownSolver {
    /// Create a new solver
    pub fn new() -> Self {
        Self {}
    }

    /// Find every expression over a subset of `numbers` that evaluates
    /// exactly to `target`.
    ///
    /// Each number may be used at most once per expression. Candidate
    /// sequences are independent of one another, so the outer enumeration is
    /// fanned out across the rayon thread pool and the matches concatenated;
    /// the returned order is unspecified. Structurally distinct expressions
    /// with the same value are all kept.
    pub fn solve(&self, numbers: &[u64], target: u64) -> Vec<Arc<Expression>> {
        info!(
            "Searching expressions over {} source numbers for target {}",
            numbers.len(),
            target
        );

        let solutions: Vec<Arc<Expression>> = subset_permutations(numbers)
            .into_par_iter()
            .flat_map_iter(|sequence| {
                self.results(&sequence)
                    .into_iter()
                    .filter(|candidate| candidate.value == target)
                    .map(|candidate| candidate.expr)
            })
            .collect();

        info!("Found {} matching expressions", solutions.len());
        solutions
    }

    /// Every admissible expression using all of `numbers` in the given order
    /// as its leaves, left to right.
    ///
    /// Exhaustive cross-product over split points, left results, right
    /// results, and operators, pruned only by the admissibility predicate.
    pub fn results(&self, numbers: &[u64]) -> Vec<Candidate> {
        match numbers {
            [] => Vec::new(),
            [n] => {
                // Source numbers are assumed positive, but composed recursive
                // calls still hit this guard.
                if *n > 0 {
                    vec![Candidate {
                        expr: Arc::new(Expression::Literal(*n)),
                        value: *n,
                    }]
                } else {
                    Vec::new()
                }
            }
            _ => {
                let mut combined = Vec::new();
                for (left, right) in all_splits(numbers) {
                    let left_results = self.results(left);
                    let right_results = self.results(right);
                    for lx in &left_results {
                        for ry in &right_results {
                            for op in Op::ALL {
                                if op.is_valid(lx.value, ry.value) {
                                    combined.push(Candidate {
                                        expr: Arc::new(Expression::App(
                                            op,
                                            Arc::clone(&lx.expr),
                                            Arc::clone(&ry.expr),
                                        )),
                                        value: op.apply(lx.value, ry.value),
                                    });
                                }
                            }
                        }
                    }
                }
                combined
            }
        }
    }
}

impl Default for CountdownSolver {
    fn default() -> Self {
        Self::new()
    }
}
