//! Task: one immutable quiz scenario.
//!
//! A task pairs a rule set ("treatment plans") with the facts the player
//! observed ("symptoms"). It is constructed once from static configuration
//! and never mutated; evaluation takes it by reference and returns a fresh
//! result, so re-evaluating the same task is idempotent.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationResult;
use crate::fact::{Fact, FactSet};
use crate::rule::{Rule, RuleSet};

/// Stable identifier for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task ID from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable quiz scenario: rules plus observed facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier.
    pub id: TaskId,
    /// When this task was constructed.
    pub created_at: DateTime<Utc>,
    /// The rule set in definition order.
    pub rules: RuleSet,
    /// Directly observed facts. Only these count toward evidence scores.
    pub observed: FactSet,
}

impl Task {
    /// Creates a task without validating the rule set.
    ///
    /// The engine evaluates unvalidated rule sets gracefully; use
    /// [`Task::builder`] to reject authoring mistakes up front.
    #[must_use]
    pub fn new(rules: RuleSet, observed: FactSet) -> Self {
        Self {
            id: TaskId::new(),
            created_at: Utc::now(),
            rules,
            observed,
        }
    }

    /// Starts a validating task builder.
    #[must_use]
    pub fn builder() -> TaskBuilder {
        TaskBuilder::default()
    }
}

/// Builder for [`Task`] that validates the rule set on `build`.
///
/// # Examples
///
/// ```
/// use remedi::{Group, Rule, Task};
///
/// let task = Task::builder()
///     .rule(Rule::intermediate("fast heart rate", vec![Group::of(["bloating"])]))
///     .rule(Rule::conclusion("tranquilizers", vec![Group::of(["migraine"])]))
///     .observe("migraine")
///     .observe("bloating")
///     .build()
///     .unwrap();
/// assert_eq!(task.rules.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TaskBuilder {
    rules: Vec<Rule>,
    observed: FactSet,
}

impl TaskBuilder {
    /// Adds a rule, preserving definition order.
    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several rules, preserving definition order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = Rule>,
    {
        self.rules.extend(rules);
        self
    }

    /// Marks a fact as directly observed.
    #[must_use]
    pub fn observe(mut self, fact: impl Into<Fact>) -> Self {
        self.observed.insert(fact.into());
        self
    }

    /// Marks several facts as directly observed.
    #[must_use]
    pub fn observe_all<I, F>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Fact>,
    {
        self.observed.extend(facts.into_iter().map(Into::into));
        self
    }

    /// Validates the rule set and builds the task.
    pub fn build(self) -> ValidationResult<Task> {
        let rules = RuleSet::new(self.rules);
        rules.validate()?;
        Ok(Task::new(rules, self.observed))
    }
}
