//! # Remedi - rule evaluation for diagnostic quiz advice
//!
//! Remedi is the reasoning core of a symptom quiz: given a fixed set of
//! treatment-plan rules and the symptoms a player observed, it forward-
//! chains to derive intermediate findings, scores the eligible medicines by
//! how much *directly observed* evidence supports them, and grades the
//! player's answer against the best-supported medicine. Rendering, timers,
//! and quiz flow live in the UI layer; they call [`evaluate`] once per
//! scenario and consume the immutable [`Evaluation`] it returns.
//!
//! ## Core concepts
//!
//! - **Fact**: a named boolean - a symptom, a derived finding, or a medicine
//! - **Rule**: ANDed OR-groups of facts producing one result fact
//! - **Task**: one immutable scenario (rules plus observed facts)
//! - **Evaluation**: derived facts, per-medicine scores, and the evidence
//!   subsets behind those scores
//!
//! ## Usage
//!
//! ```rust
//! use remedi::{classify, evaluate, Correctness, Fact, Group, Rule, Task};
//!
//! let task = Task::builder()
//!     .rule(Rule::intermediate("fast heart rate", vec![Group::of(["bloating"])]))
//!     .rule(Rule::conclusion(
//!         "tranquilizers",
//!         vec![Group::of(["migraine"]), Group::of(["thirsty", "fast heart rate"])],
//!     ))
//!     .observe_all(["migraine", "thirsty", "bloating"])
//!     .build()
//!     .unwrap();
//!
//! let result = evaluate(&task);
//! assert_eq!(result.score_of(&Fact::new("tranquilizers")), Some(2));
//! assert_eq!(
//!     classify(Some(&Fact::new("tranquilizers")), &result.scores),
//!     Correctness::Best,
//! );
//! ```
//!
//! ## Failure model
//!
//! Evaluation never fails: unknown facts in groups simply never match,
//! rules with no groups never fire, and an ineligible medicine is absent
//! from the score map rather than scored zero. Rule-authoring mistakes are
//! caught separately by [`RuleSet::validate`] (or [`Task::builder`], which
//! runs it).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod advice;
pub mod engine;
pub mod error;
pub mod fact;
pub mod rule;
pub mod task;
pub mod trace;

// Re-export primary types at crate root for convenience
pub use advice::{classify, Correctness, Recommendation};
pub use engine::{derive_closure, evaluate, score_conclusions, Evaluation, EvidenceMap, ScoreMap};
pub use error::{ValidationError, ValidationResult};
pub use fact::{fact_set, Fact, FactSet};
pub use rule::{Group, Rule, RuleKind, RuleSet};
pub use task::{Task, TaskBuilder, TaskId};
pub use trace::{DerivationId, DerivationStep};
