//! Client-side core for adding keys to a dynamic partitions definition:
//! key validation, the submission state machine, and the GraphQL transport.

pub mod config;
pub mod controller;
pub mod dialog;
pub mod session;
pub mod transport;
pub mod validation;

pub use config::{load_settings, load_settings_from, Settings};
pub use controller::{RejectReason, SubmissionController, SubmissionState, SubmitReport};
pub use dialog::{PartitionAlert, PartitionDialog, PartitionRefetcher};
pub use session::PartitionDialogSession;
pub use transport::{GraphQlPartitionCreator, MissingPartitionCreator, PartitionCreator};
pub use validation::{
    is_valid_partition_key, partition_key_violations, validate_partition_key, NameValidator,
    ValidationResult,
};

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;
