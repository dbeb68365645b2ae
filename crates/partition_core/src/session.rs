//! State behind one open "add partition" dialog.

use std::sync::Arc;

use shared::domain::RepositorySelector;

use crate::{
    controller::{RejectReason, SubmissionController, SubmitReport},
    validation::ValidationResult,
};

pub struct PartitionDialogSession {
    controller: Arc<SubmissionController>,
    selector: RepositorySelector,
    partition_set_name: Option<String>,
    candidate: String,
}

impl PartitionDialogSession {
    pub fn new(
        controller: Arc<SubmissionController>,
        selector: RepositorySelector,
        partition_set_name: Option<String>,
    ) -> Self {
        Self {
            controller,
            selector,
            partition_set_name,
            candidate: String::new(),
        }
    }

    /// Called on every keystroke with the full field contents.
    pub fn set_candidate(&mut self, value: impl Into<String>) {
        self.candidate = value.into();
    }

    pub fn candidate(&self) -> &str {
        &self.candidate
    }

    pub fn validation(&self) -> ValidationResult {
        self.controller.validator().validate(&self.candidate)
    }

    pub fn is_valid(&self) -> bool {
        self.controller.validator().is_valid(&self.candidate)
    }

    pub fn violations(&self) -> Vec<&'static str> {
        self.controller.validator().violations(&self.candidate)
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_in_flight()
    }

    /// Whether the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.candidate.is_empty() && self.is_valid() && !self.is_submitting()
    }

    /// Submits the current name. The field is cleared once the partition
    /// exists and kept as typed otherwise so it can be corrected.
    pub async fn on_submit(&mut self) -> SubmitReport {
        if self.candidate.is_empty() {
            return SubmitReport::Rejected(RejectReason::EmptyName);
        }

        let report = self
            .controller
            .submit(
                &self.candidate,
                &self.selector,
                self.partition_set_name.as_deref(),
            )
            .await;
        if matches!(report, SubmitReport::Created { .. }) {
            self.candidate.clear();
        }
        report
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
