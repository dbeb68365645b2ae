//! Partition key validation.
//!
//! A key is valid when none of the forbidden substrings appear anywhere in
//! it. Matching is literal and case-sensitive; keys are never trimmed.

use shared::partition::{ForbiddenSubstring, PARTITION_KEY_FORBIDDEN_SUBSTRINGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// The whole forbidden set in readable form when invalid, empty otherwise.
    pub violations: Vec<&'static str>,
}

impl ValidationResult {
    pub fn tooltip(&self) -> Option<String> {
        if self.is_valid {
            return None;
        }
        Some(format!(
            "Partition names may not contain: {}",
            self.violations.join(", ")
        ))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NameValidator {
    forbidden: &'static [ForbiddenSubstring],
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new(PARTITION_KEY_FORBIDDEN_SUBSTRINGS)
    }
}

impl NameValidator {
    pub const fn new(forbidden: &'static [ForbiddenSubstring]) -> Self {
        Self { forbidden }
    }

    pub fn forbidden(&self) -> &'static [ForbiddenSubstring] {
        self.forbidden
    }

    pub fn is_valid(&self, candidate: &str) -> bool {
        !self
            .forbidden
            .iter()
            .any(|entry| candidate.contains(entry.pattern))
    }

    /// Readable forbidden tokens to show for `candidate`. Lists the full set,
    /// not only the offending entries.
    pub fn violations(&self, candidate: &str) -> Vec<&'static str> {
        if self.is_valid(candidate) {
            Vec::new()
        } else {
            self.forbidden.iter().map(|entry| entry.readable).collect()
        }
    }

    pub fn validate(&self, candidate: &str) -> ValidationResult {
        let violations = self.violations(candidate);
        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}

pub fn validate_partition_key(candidate: &str) -> ValidationResult {
    NameValidator::default().validate(candidate)
}

pub fn is_valid_partition_key(candidate: &str) -> bool {
    NameValidator::default().is_valid(candidate)
}

pub fn partition_key_violations(candidate: &str) -> Vec<&'static str> {
    NameValidator::default().violations(candidate)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
