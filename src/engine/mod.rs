//! The rule evaluation engine.
//!
//! Evaluation is a single synchronous pass over an immutable [`Task`]:
//! forward chaining first ([`closure`]), then best-evidence scoring of the
//! eligible conclusions ([`scoring`]). The engine holds no state across
//! invocations and never fails; malformed input degrades as documented in
//! the crate root.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fact::{Fact, FactSet};
use crate::task::Task;
use crate::trace::DerivationStep;

pub mod closure;
pub mod scoring;

pub use closure::derive_closure;
pub use scoring::score_conclusions;

/// Per-conclusion evidence score. Counts directly observed facts only.
pub type ScoreMap = BTreeMap<Fact, usize>;

/// Per-conclusion best evidence subset (one picked fact per group,
/// duplicates collapsed).
pub type EvidenceMap = BTreeMap<Fact, FactSet>;

/// Complete, immutable result of evaluating one task.
///
/// Absence of a conclusion from [`scores`](Self::scores) is the
/// ineligibility signal: at least one of its rule's groups had no available
/// fact. It is never an error and never scored as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Intermediate facts proven by forward chaining.
    pub derived: FactSet,

    /// Best evidence score per eligible conclusion.
    pub scores: ScoreMap,

    /// The observed-and-derived facts achieving each conclusion's score.
    pub evidence: EvidenceMap,

    /// Provenance: one step per fired intermediate rule, in firing order.
    pub steps: Vec<DerivationStep>,
}

impl Evaluation {
    /// Returns the score for a conclusion, or `None` if it was ineligible.
    #[must_use]
    pub fn score_of(&self, conclusion: &Fact) -> Option<usize> {
        self.scores.get(conclusion).copied()
    }

    /// Returns true if the conclusion's rule had every group satisfiable.
    #[must_use]
    pub fn is_eligible(&self, conclusion: &Fact) -> bool {
        self.scores.contains_key(conclusion)
    }
}

/// Evaluates a task: forward-chaining closure, then conclusion scoring.
///
/// Pure with respect to the task: re-evaluating the same task yields
/// identical `derived` and `scores` (step IDs and timestamps are fresh per
/// call).
///
/// # Examples
///
/// ```
/// use remedi::{evaluate, Fact, Group, Rule, Task};
///
/// let task = Task::builder()
///     .rule(Rule::conclusion("tranquilizers", vec![Group::of(["migraine", "thirsty"])]))
///     .observe("migraine")
///     .build()
///     .unwrap();
///
/// let result = evaluate(&task);
/// assert_eq!(result.score_of(&Fact::new("tranquilizers")), Some(1));
/// ```
#[must_use]
pub fn evaluate(task: &Task) -> Evaluation {
    let (derived, steps) = closure::derive_closure(&task.rules, &task.observed);
    let (scores, evidence) = scoring::score_conclusions(&task.rules, &task.observed, &derived);
    Evaluation {
        derived,
        scores,
        evidence,
        steps,
    }
}
