//! Fact identifiers.
//!
//! A fact is an opaque named boolean: a symptom the player observed, an
//! intermediate finding a rule derived, or a final conclusion (a medicine).
//! The engine never distinguishes the three roles structurally; role is
//! determined by where a fact appears in the rule set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque fact identifier.
///
/// Facts compare by name only. Display names and localization belong to the
/// UI layer; the engine only ever sees these identifiers.
///
/// # Examples
///
/// ```
/// use remedi::Fact;
///
/// let fact = Fact::new("migraine");
/// assert_eq!(fact.as_str(), "migraine");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fact(String);

impl Fact {
    /// Creates a fact from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the fact name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Fact {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Fact {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Fact {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// An ordered set of facts.
///
/// A `BTreeSet` keeps iteration and serialization order deterministic, which
/// makes evaluation results directly comparable in tests and golden files.
pub type FactSet = BTreeSet<Fact>;

/// Builds a [`FactSet`] from anything iterable as fact names.
///
/// # Examples
///
/// ```
/// use remedi::fact_set;
///
/// let observed = fact_set(["thirsty", "migraine"]);
/// assert_eq!(observed.len(), 2);
/// ```
pub fn fact_set<I, S>(names: I) -> FactSet
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(|n| Fact::new(n)).collect()
}
