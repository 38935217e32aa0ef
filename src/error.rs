//! Error types for remedi.
//!
//! Evaluation itself is infallible by design: malformed input degrades
//! gracefully (unknown facts never match, zero-group rules never fire, and
//! an absent conclusion is the ineligibility signal). Validation errors are
//! produced only by the opt-in pre-flight check on a rule set.

use thiserror::Error;

use crate::fact::Fact;

/// Validation errors reported by [`RuleSet::validate`](crate::RuleSet::validate).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A fact name in a rule is empty or whitespace-only.
    #[error("Rule for '{result}' contains a blank fact name")]
    BlankFactName {
        /// Result fact of the offending rule.
        result: Fact,
    },

    /// A rule has no groups and therefore can never fire.
    #[error("Rule for '{result}' has no groups and can never be satisfied")]
    RuleWithoutGroups {
        /// Result fact of the offending rule.
        result: Fact,
    },

    /// A group contains no facts and therefore can never be satisfied.
    #[error("Rule for '{result}' has an empty group at index {group_index}")]
    EmptyGroup {
        /// Result fact of the offending rule.
        result: Fact,
        /// Zero-based index of the empty group.
        group_index: usize,
    },

    /// Two rules produce the same conclusion; evaluation would silently
    /// keep only the later rule's score (last-write-wins in rule order).
    #[error("Conclusion '{result}' is produced by more than one rule")]
    DuplicateConclusion {
        /// The duplicated conclusion fact.
        result: Fact,
    },

    /// The same fact is the result of both an intermediate rule and a
    /// conclusion rule, which makes its role ambiguous.
    #[error("Fact '{result}' is both an intermediate result and a final conclusion")]
    ConclusionAlsoIntermediate {
        /// The ambiguous fact.
        result: Fact,
    },
}

/// Result type alias for validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_fact() {
        let err = ValidationError::RuleWithoutGroups {
            result: Fact::new("tranquilizers"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("tranquilizers"));
        assert!(msg.contains("no groups"));
    }

    #[test]
    fn empty_group_reports_index() {
        let err = ValidationError::EmptyGroup {
            result: Fact::new("stimulants"),
            group_index: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("stimulants"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn duplicate_conclusion_message() {
        let err = ValidationError::DuplicateConclusion {
            result: Fact::new("antibiotics"),
        };
        assert!(format!("{err}").contains("more than one rule"));
    }
}
