//! Derivation provenance.
//!
//! Each time an intermediate rule fires during forward chaining, the engine
//! records a step linking the derived fact to the premise facts that
//! satisfied the rule's groups. The step list is an audit trail for
//! explaining an evaluation after the fact; it carries no engine semantics.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::fact::{Fact, FactSet};

/// Stable identifier for a derivation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivationId(Uuid);

impl DerivationId {
    /// Creates a new random derivation ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DerivationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DerivationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fired intermediate rule: the fact it derived and the premises used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivationStep {
    /// Step identifier.
    pub id: DerivationId,

    /// When the step was recorded.
    pub at: DateTime<Utc>,

    /// The derived fact.
    pub fact: Fact,

    /// One satisfying fact per group of the fired rule (first available in
    /// group order). A premise may itself be a derived fact.
    pub premises: FactSet,
}

impl DerivationStep {
    /// Creates a step recorded now.
    #[must_use]
    pub fn new(fact: Fact, premises: FactSet) -> Self {
        Self {
            id: DerivationId::new(),
            at: Utc::now(),
            fact,
            premises,
        }
    }
}

impl fmt::Display for DerivationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let premises: Vec<&str> = self.premises.iter().map(Fact::as_str).collect();
        write!(f, "{} <- [{}]", self.fact, premises.join(", "))
    }
}
