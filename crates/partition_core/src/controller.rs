//! Drives one partition creation request from submit to its visible effect.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use shared::{
    domain::{CreatePartitionOutcome, CreatePartitionRequest, RepositorySelector},
    error::TransportError,
};
use tracing::{debug, info, warn};

use crate::{
    dialog::{PartitionAlert, PartitionDialog, PartitionRefetcher},
    transport::PartitionCreator,
    validation::{NameValidator, ValidationResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyName,
    InvalidName(ValidationResult),
    InFlight,
}

/// What a call to [`SubmissionController::submit`] ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReport {
    /// Nothing was sent.
    Rejected(RejectReason),
    /// The partition exists; the selection was extended and close requested.
    Created { partition_key: String },
    /// The request settled without creating anything and the alert was shown.
    Alerted(PartitionAlert),
}

/// Releases the in-flight flag on every exit path, unwinding included.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

pub struct SubmissionController {
    validator: NameValidator,
    creator: Arc<dyn PartitionCreator>,
    dialog: Arc<dyn PartitionDialog>,
    refetcher: Option<Arc<dyn PartitionRefetcher>>,
    in_flight: AtomicBool,
}

impl SubmissionController {
    pub fn new(creator: Arc<dyn PartitionCreator>, dialog: Arc<dyn PartitionDialog>) -> Self {
        Self {
            validator: NameValidator::default(),
            creator,
            dialog,
            refetcher: None,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn with_validator(mut self, validator: NameValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn with_refetcher(mut self, refetcher: Arc<dyn PartitionRefetcher>) -> Self {
        self.refetcher = Some(refetcher);
        self
    }

    pub fn validator(&self) -> &NameValidator {
        &self.validator
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::InFlight
        } else {
            SubmissionState::Idle
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.state() == SubmissionState::InFlight
    }

    fn begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }

    pub async fn submit(
        &self,
        candidate: &str,
        selector: &RepositorySelector,
        partition_set_name: Option<&str>,
    ) -> SubmitReport {
        let validation = self.validator.validate(candidate);
        if !validation.is_valid {
            debug!(candidate, "refusing to submit invalid partition key");
            return SubmitReport::Rejected(RejectReason::InvalidName(validation));
        }

        let Some(guard) = self.begin() else {
            warn!(candidate, "partition creation already in flight");
            return SubmitReport::Rejected(RejectReason::InFlight);
        };

        let request = CreatePartitionRequest::new(selector.clone(), partition_set_name, candidate);
        info!(
            location = %request.selector.repository_location_name,
            repository = %request.selector.repository_name,
            partitions_def = %request.partition_set_name,
            partition_key = %request.partition_key,
            "creating dynamic partition"
        );
        let result = self.creator.create_partition(request).await;
        drop(guard);

        self.apply(candidate, result).await
    }

    async fn apply(
        &self,
        candidate: &str,
        result: Result<CreatePartitionOutcome, TransportError>,
    ) -> SubmitReport {
        let alert = match result {
            Ok(CreatePartitionOutcome::Success { partition_key, .. }) => {
                if partition_key != candidate {
                    debug!(candidate, %partition_key, "service echoed a different key");
                }
                self.dialog.append_selection(candidate).await;
                if let Some(refetcher) = &self.refetcher {
                    if let Err(err) = refetcher.refetch().await {
                        warn!(error = %err, "refetch after partition creation failed");
                    }
                }
                self.dialog.request_close().await;
                info!(partition_key = candidate, "dynamic partition created");
                return SubmitReport::Created {
                    partition_key: candidate.to_string(),
                };
            }
            Ok(CreatePartitionOutcome::DuplicateName) => PartitionAlert::DuplicateName,
            Ok(CreatePartitionOutcome::Unauthorized { message }) => {
                debug!(%message, "partition creation unauthorized");
                PartitionAlert::Unauthorized
            }
            Ok(CreatePartitionOutcome::UnderlyingError { message, trace }) => {
                PartitionAlert::Underlying { message, trace }
            }
            Ok(CreatePartitionOutcome::Unrecognized) => {
                warn!("unrecognized partition creation result");
                PartitionAlert::Unknown
            }
            Err(err) => {
                warn!(error = %err, "partition creation request failed");
                PartitionAlert::Unknown
            }
        };

        self.dialog.show_alert(&alert).await;
        SubmitReport::Alerted(alert)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
