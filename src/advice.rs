//! Advice and answer grading on top of an evaluation's score map.
//!
//! The engine itself is tie-break agnostic: it exposes the full set of
//! top-scoring conclusions. The simulated "AI" pick is a uniform draw from
//! that set through an injected randomness source, so callers seed an RNG
//! for reproducible tests and use a thread RNG in production.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::ScoreMap;
use crate::fact::{Fact, FactSet};

/// The top-scoring conclusions of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The maximum score across all eligible conclusions.
    pub best_score: usize,
    /// Every conclusion achieving [`best_score`](Self::best_score).
    pub best_set: FactSet,
}

impl Recommendation {
    /// Extracts the best-scoring conclusions from a score map.
    ///
    /// Returns `None` when no conclusion was eligible.
    #[must_use]
    pub fn from_scores(scores: &ScoreMap) -> Option<Self> {
        let best_score = scores.values().copied().max()?;
        let best_set = scores
            .iter()
            .filter(|(_, score)| **score == best_score)
            .map(|(fact, _)| fact.clone())
            .collect();
        Some(Self {
            best_score,
            best_set,
        })
    }

    /// Returns true if the recommendation is a single unambiguous winner.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.best_set.len() == 1
    }

    /// Draws one conclusion uniformly from the best set.
    ///
    /// Returns `None` only if the best set is empty, which
    /// [`from_scores`](Self::from_scores) never produces.
    pub fn pick<'a, R: Rng>(&'a self, rng: &mut R) -> Option<&'a Fact> {
        if self.best_set.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.best_set.len());
        self.best_set.iter().nth(index)
    }
}

/// Three-way grading of a user-chosen conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correctness {
    /// The answer is among the top-scoring conclusions.
    Best,
    /// The answer is eligible with a positive score, but not top-scoring.
    Suboptimal,
    /// The answer is ineligible, scored zero, or missing entirely.
    Wrong,
}

impl fmt::Display for Correctness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => write!(f, "best"),
            Self::Suboptimal => write!(f, "suboptimal"),
            Self::Wrong => write!(f, "wrong"),
        }
    }
}

/// Grades an answer against a score map.
///
/// `None` (the player gave no answer) is always [`Correctness::Wrong`], as
/// is an answer absent from the map or scored zero.
#[must_use]
pub fn classify(answer: Option<&Fact>, scores: &ScoreMap) -> Correctness {
    let Some(answer) = answer else {
        return Correctness::Wrong;
    };

    if let Some(recommendation) = Recommendation::from_scores(scores) {
        if recommendation.best_set.contains(answer) {
            return Correctness::Best;
        }
    }

    match scores.get(answer) {
        Some(score) if *score > 0 => Correctness::Suboptimal,
        _ => Correctness::Wrong,
    }
}
