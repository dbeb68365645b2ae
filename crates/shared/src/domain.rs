use serde::{Deserialize, Serialize};

/// Identifies the code location that owns a dynamic partitions definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySelector {
    pub repository_location_name: String,
    pub repository_name: String,
}

impl RepositorySelector {
    pub fn new(location: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            repository_location_name: location.into(),
            repository_name: repository.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePartitionRequest {
    pub selector: RepositorySelector,
    pub partition_set_name: String,
    pub partition_key: String,
}

impl CreatePartitionRequest {
    /// An absent partition set name is sent as the empty string.
    pub fn new(
        selector: RepositorySelector,
        partition_set_name: Option<&str>,
        partition_key: impl Into<String>,
    ) -> Self {
        Self {
            selector,
            partition_set_name: partition_set_name.unwrap_or_default().to_string(),
            partition_key: partition_key.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreatePartitionOutcome {
    Success {
        partition_set_name: String,
        partition_key: String,
    },
    DuplicateName,
    Unauthorized {
        message: String,
    },
    UnderlyingError {
        message: String,
        trace: String,
    },
    Unrecognized,
}

impl CreatePartitionOutcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::DuplicateName => "duplicate_name",
            Self::Unauthorized { .. } => "unauthorized",
            Self::UnderlyingError { .. } => "underlying_error",
            Self::Unrecognized => "unrecognized",
        }
    }
}
