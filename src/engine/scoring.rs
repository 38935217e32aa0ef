//! Best-evidence scoring of conclusion rules.
//!
//! For each eligible conclusion the engine enumerates every way of picking
//! one available fact per group and keeps the combination using the most
//! distinct *directly observed* facts. Derived facts can make a group
//! satisfiable but never add to the score, so conclusions backed by direct
//! symptom matches outrank those resting on multi-hop inference.
//!
//! Enumeration is the full Cartesian product of per-group choices, so cost
//! is exponential in group count. Rule sets here are small and fixed; this
//! is a documented scaling limit, not something to optimize.

use crate::engine::{EvidenceMap, ScoreMap};
use crate::fact::{Fact, FactSet};
use crate::rule::RuleSet;

/// Scores every eligible conclusion rule.
///
/// A conclusion is eligible when each of its rule's groups has at least one
/// fact in `observed ∪ derived`; ineligible conclusions are absent from
/// both returned maps (never scored as zero). Ties between equal-score
/// combinations keep the first seen, enumerating groups in definition
/// order and facts within a group in definition order, so the returned
/// evidence subset is deterministic.
///
/// If the same conclusion appears as the result of several rules, later
/// rules overwrite earlier ones (last-write-wins in rule order);
/// [`RuleSet::validate`](crate::RuleSet::validate) rejects such rule sets
/// up front.
#[must_use]
pub fn score_conclusions(
    rules: &RuleSet,
    observed: &FactSet,
    derived: &FactSet,
) -> (ScoreMap, EvidenceMap) {
    let mut have = observed.clone();
    have.extend(derived.iter().cloned());

    let mut scores = ScoreMap::new();
    let mut evidence = EvidenceMap::new();

    for rule in rules.iter().filter(|r| !r.is_intermediate()) {
        if rule.groups.is_empty() {
            continue;
        }

        let available: Vec<Vec<&Fact>> =
            rule.groups.iter().map(|g| g.available(&have)).collect();
        if available.iter().any(Vec::is_empty) {
            continue;
        }

        let (best_score, best_set) = best_combination(&available, FactSet::new(), observed);
        scores.insert(rule.result.clone(), best_score);
        evidence.insert(rule.result.clone(), best_set);
    }

    (scores, evidence)
}

/// Enumerates one pick per remaining group and returns the best
/// `(score, picked set)` pair.
///
/// Pure recursion with the accumulator threaded explicitly; strict
/// greater-than comparison keeps the first-seen winner on ties. Picks going
/// into the same set collapse, so a fact chosen from two groups counts
/// once.
fn best_combination(
    available: &[Vec<&Fact>],
    picked: FactSet,
    observed: &FactSet,
) -> (usize, FactSet) {
    let Some((group, rest)) = available.split_first() else {
        let score = picked.iter().filter(|f| observed.contains(*f)).count();
        return (score, picked);
    };

    let mut best: Option<(usize, FactSet)> = None;
    for fact in group {
        let mut next = picked.clone();
        next.insert((*fact).clone());
        let candidate = best_combination(rest, next, observed);
        best = match best {
            Some(current) if candidate.0 <= current.0 => Some(current),
            _ => Some(candidate),
        };
    }

    // Callers only pass groups with at least one available fact.
    best.unwrap_or((0, picked))
}
