//! Forward-chaining closure over intermediate rules.
//!
//! Fixed-point computation: full passes over the rule list repeat until a
//! pass derives nothing new. Each pass either adds at least one fact or
//! ends the loop, and the number of intermediate results is finite, so at
//! most one pass per intermediate rule occurs.

use crate::fact::FactSet;
use crate::rule::RuleSet;
use crate::trace::DerivationStep;

/// Derives every reachable intermediate fact.
///
/// A rule fires when every one of its groups has at least one fact in
/// `observed` or already derived; its result then joins the derived set.
/// Self-referential rules (a group naming the rule's own result) simply
/// never fire and are excluded naturally rather than detected as an error.
///
/// Returns the derived set together with one [`DerivationStep`] per fired
/// rule, in firing order. Pure function; the inputs are never mutated.
#[must_use]
pub fn derive_closure(rules: &RuleSet, observed: &FactSet) -> (FactSet, Vec<DerivationStep>) {
    let mut have = observed.clone();
    let mut derived = FactSet::new();
    let mut steps = Vec::new();

    loop {
        let mut changed = false;

        for rule in rules.iter().filter(|r| r.is_intermediate()) {
            if derived.contains(&rule.result) {
                continue;
            }
            if !rule.is_satisfied_by(&have) {
                continue;
            }

            // First available fact per group, in group order.
            let premises: FactSet = rule
                .groups
                .iter()
                .filter_map(|g| g.facts().iter().find(|f| have.contains(*f)))
                .cloned()
                .collect();

            steps.push(DerivationStep::new(rule.result.clone(), premises));
            derived.insert(rule.result.clone());
            have.insert(rule.result.clone());
            changed = true;
        }

        if !changed {
            break;
        }
    }

    (derived, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fact::fact_set;
    use crate::rule::{Group, Rule};

    #[test]
    fn derives_from_observed_facts() {
        let rules = RuleSet::new(vec![Rule::intermediate(
            "fast heart rate",
            vec![Group::of(["bloating"])],
        )]);
        let (derived, steps) = derive_closure(&rules, &fact_set(["bloating"]));
        assert_eq!(derived, fact_set(["fast heart rate"]));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].premises, fact_set(["bloating"]));
    }

    #[test]
    fn chains_across_passes() {
        // "c" only becomes derivable once "b" has been derived; rule order
        // forces a second pass.
        let rules = RuleSet::new(vec![
            Rule::intermediate("c", vec![Group::of(["b"])]),
            Rule::intermediate("b", vec![Group::of(["a"])]),
        ]);
        let (derived, steps) = derive_closure(&rules, &fact_set(["a"]));
        assert_eq!(derived, fact_set(["b", "c"]));
        let order: Vec<&str> = steps.iter().map(|s| s.fact.as_str()).collect();
        assert_eq!(order, vec!["b", "c"]);
    }

    #[test]
    fn unmet_groups_block_derivation() {
        let rules = RuleSet::new(vec![Rule::intermediate(
            "low blood pressure",
            vec![Group::of(["dizziness"]), Group::of(["pale skin"])],
        )]);
        let (derived, _) = derive_closure(&rules, &fact_set(["dizziness"]));
        assert!(derived.is_empty());
    }

    #[test]
    fn conclusion_rules_never_derive() {
        let rules = RuleSet::new(vec![Rule::conclusion("m", vec![Group::of(["a"])])]);
        let (derived, steps) = derive_closure(&rules, &fact_set(["a"]));
        assert!(derived.is_empty());
        assert!(steps.is_empty());
    }

    #[test]
    fn self_referential_rule_never_fires() {
        let rules = RuleSet::new(vec![Rule::intermediate("x", vec![Group::of(["x"])])]);
        let (derived, _) = derive_closure(&rules, &fact_set(["a"]));
        assert!(derived.is_empty());
    }

    #[test]
    fn mutual_recursion_resolves_to_nothing() {
        let rules = RuleSet::new(vec![
            Rule::intermediate("x", vec![Group::of(["y"])]),
            Rule::intermediate("y", vec![Group::of(["x"])]),
        ]);
        let (derived, _) = derive_closure(&rules, &FactSet::new());
        assert!(derived.is_empty());
    }

    #[test]
    fn derived_fact_unlocks_later_rule() {
        let rules = RuleSet::new(vec![
            Rule::intermediate("b", vec![Group::of(["a"])]),
            Rule::intermediate("d", vec![Group::of(["b"]), Group::of(["c"])]),
        ]);
        let (derived, steps) = derive_closure(&rules, &fact_set(["a", "c"]));
        assert_eq!(derived, fact_set(["b", "d"]));
        assert_eq!(steps[1].premises, fact_set(["b", "c"]));
    }

    #[test]
    fn idempotent_over_its_own_output() {
        let rules = RuleSet::new(vec![
            Rule::intermediate("b", vec![Group::of(["a"])]),
            Rule::intermediate("c", vec![Group::of(["b"])]),
        ]);
        let observed = fact_set(["a"]);
        let (derived, _) = derive_closure(&rules, &observed);

        let mut widened = observed.clone();
        widened.extend(derived.iter().cloned());
        let (again, _) = derive_closure(&rules, &widened);
        assert_eq!(again, derived);
    }

    #[test]
    fn result_already_observed_still_derives() {
        // The derived set tracks what the rules proved, independent of the
        // same fact also being directly observed.
        let rules = RuleSet::new(vec![Rule::intermediate("b", vec![Group::of(["a"])])]);
        let (derived, _) = derive_closure(&rules, &fact_set(["a", "b"]));
        assert_eq!(derived, fact_set(["b"]));
    }

    #[test]
    fn duplicate_intermediate_results_fire_once() {
        let rules = RuleSet::new(vec![
            Rule::intermediate("b", vec![Group::of(["a"])]),
            Rule::intermediate("b", vec![Group::of(["z"])]),
        ]);
        let (derived, steps) = derive_closure(&rules, &fact_set(["a", "z"]));
        assert_eq!(derived, fact_set(["b"]));
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].premises, fact_set(["a"]));
    }

    #[test]
    fn empty_rule_set_derives_nothing() {
        let (derived, steps) = derive_closure(&RuleSet::default(), &fact_set(["a"]));
        assert!(derived.is_empty());
        assert!(steps.is_empty());
    }

    #[test]
    fn monotone_in_observed() {
        let rules = RuleSet::new(vec![
            Rule::intermediate("b", vec![Group::of(["a"])]),
            Rule::intermediate("c", vec![Group::of(["b"]), Group::of(["z"])]),
        ]);
        let (small, _) = derive_closure(&rules, &fact_set(["a"]));
        let (large, _) = derive_closure(&rules, &fact_set(["a", "z"]));
        assert!(small.is_subset(&large));
    }
}
