//! Rule model: OR-groups ANDed together into one produced fact.
//!
//! A rule reads "if every group has at least one holding fact, then
//! `result` holds". Intermediate rules feed the forward-chaining closure;
//! conclusion rules are scored for advice.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, ValidationResult};
use crate::fact::{Fact, FactSet};

/// An OR-group of facts within a rule.
///
/// The group is satisfied when at least one of its facts holds. Fact order
/// is the definition order and drives deterministic enumeration during
/// scoring, so it is preserved rather than sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Group(Vec<Fact>);

impl Group {
    /// Creates a group from facts, preserving order.
    #[must_use]
    pub fn new(facts: Vec<Fact>) -> Self {
        Self(facts)
    }

    /// Creates a group from fact names, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use remedi::Group;
    ///
    /// let group = Group::of(["thirsty", "dry mouth"]);
    /// assert_eq!(group.len(), 2);
    /// ```
    #[must_use]
    pub fn of<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Fact::new).collect())
    }

    /// Returns the facts in definition order.
    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.0
    }

    /// Returns the number of facts in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the group has no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if at least one fact of the group is in `have`.
    #[must_use]
    pub fn is_satisfied_by(&self, have: &FactSet) -> bool {
        self.0.iter().any(|f| have.contains(f))
    }

    /// Returns the facts of the group present in `have`, in definition order.
    #[must_use]
    pub fn available<'a>(&'a self, have: &FactSet) -> Vec<&'a Fact> {
        self.0.iter().filter(|f| have.contains(*f)).collect()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Fact::as_str).collect();
        write!(f, "({})", names.join(" | "))
    }
}

/// Whether a rule derives an intermediate fact or produces a final conclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// The result feeds back into forward chaining.
    Intermediate,
    /// The result is a scorable final conclusion (a medicine).
    Conclusion,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intermediate => write!(f, "intermediate"),
            Self::Conclusion => write!(f, "conclusion"),
        }
    }
}

/// A single inference rule.
///
/// Groups are ANDed; facts within a group are ORed. A rule with zero groups
/// never fires (a vacuous AND would contradict the design intent, so
/// satisfaction additionally requires at least one group).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The fact this rule produces when satisfied.
    pub result: Fact,
    /// ANDed OR-groups, in definition order.
    pub groups: Vec<Group>,
    /// Intermediate or final conclusion.
    pub kind: RuleKind,
}

impl Rule {
    /// Creates an intermediate rule.
    #[must_use]
    pub fn intermediate(result: impl Into<Fact>, groups: Vec<Group>) -> Self {
        Self {
            result: result.into(),
            groups,
            kind: RuleKind::Intermediate,
        }
    }

    /// Creates a conclusion rule.
    #[must_use]
    pub fn conclusion(result: impl Into<Fact>, groups: Vec<Group>) -> Self {
        Self {
            result: result.into(),
            groups,
            kind: RuleKind::Conclusion,
        }
    }

    /// Returns true if this rule derives an intermediate fact.
    #[must_use]
    pub fn is_intermediate(&self) -> bool {
        self.kind == RuleKind::Intermediate
    }

    /// Returns true if every group has at least one fact in `have`.
    ///
    /// A rule with no groups is never satisfied.
    #[must_use]
    pub fn is_satisfied_by(&self, have: &FactSet) -> bool {
        !self.groups.is_empty() && self.groups.iter().all(|g| g.is_satisfied_by(have))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.groups.iter().map(|g| format!("{g}")).collect();
        write!(f, "{} => {} [{}]", groups.join(" & "), self.result, self.kind)
    }
}

/// An ordered rule list with validation and a stable content fingerprint.
///
/// Rule order matters: it is the pass order for forward chaining and the
/// processing order for scoring (where a duplicated conclusion would be
/// last-write-wins). Validation exists precisely so callers can reject such
/// rule sets up front instead of relying on that overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    /// Creates a rule set from rules, preserving order.
    #[must_use]
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    /// Returns the rules in definition order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.0
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the rules in definition order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }

    /// Pre-flight structural validation.
    ///
    /// The engine evaluates unvalidated rule sets without error (degrading
    /// as documented in the crate root); this check lets callers surface
    /// rule-authoring mistakes instead:
    ///
    /// - blank fact names anywhere in a rule,
    /// - rules with zero groups or empty groups (never satisfiable),
    /// - the same conclusion produced by more than one rule,
    /// - a fact that is both an intermediate result and a conclusion.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut intermediate_results: HashSet<&Fact> = HashSet::new();
        let mut conclusion_results: HashSet<&Fact> = HashSet::new();

        for rule in &self.0 {
            if rule.result.is_blank() {
                return Err(ValidationError::BlankFactName {
                    result: rule.result.clone(),
                });
            }
            if rule.groups.is_empty() {
                return Err(ValidationError::RuleWithoutGroups {
                    result: rule.result.clone(),
                });
            }
            for (group_index, group) in rule.groups.iter().enumerate() {
                if group.is_empty() {
                    return Err(ValidationError::EmptyGroup {
                        result: rule.result.clone(),
                        group_index,
                    });
                }
                if group.facts().iter().any(Fact::is_blank) {
                    return Err(ValidationError::BlankFactName {
                        result: rule.result.clone(),
                    });
                }
            }

            match rule.kind {
                RuleKind::Intermediate => {
                    intermediate_results.insert(&rule.result);
                }
                RuleKind::Conclusion => {
                    if !conclusion_results.insert(&rule.result) {
                        return Err(ValidationError::DuplicateConclusion {
                            result: rule.result.clone(),
                        });
                    }
                }
            }
        }

        if let Some(fact) = conclusion_results.intersection(&intermediate_results).next() {
            return Err(ValidationError::ConclusionAlsoIntermediate {
                result: (*fact).clone(),
            });
        }

        Ok(())
    }

    /// Stable content fingerprint of the rule set.
    ///
    /// Two rule sets with identical rules in identical order produce the
    /// same hex digest, independent of process or platform. Useful for
    /// tagging evaluation results with the exact rule set that produced
    /// them.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"remedi.ruleset.v1");
        hasher.update(&u64::try_from(self.0.len()).unwrap_or(0).to_be_bytes());
        for rule in &self.0 {
            hasher.update(&[match rule.kind {
                RuleKind::Intermediate => 0u8,
                RuleKind::Conclusion => 1u8,
            }]);
            hash_str(&mut hasher, rule.result.as_str());
            hasher.update(&u64::try_from(rule.groups.len()).unwrap_or(0).to_be_bytes());
            for group in &rule.groups {
                hasher.update(&u64::try_from(group.len()).unwrap_or(0).to_be_bytes());
                for fact in group.facts() {
                    hash_str(&mut hasher, fact.as_str());
                }
            }
        }
        hasher.finalize().to_hex().to_string()
    }
}

// Length-prefixed so "ab"+"c" and "a"+"bc" hash differently.
fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&u64::try_from(s.len()).unwrap_or(0).to_be_bytes());
    hasher.update(s.as_bytes());
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self(rules)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
