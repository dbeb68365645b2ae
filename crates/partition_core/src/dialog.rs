//! Hooks into the presentation layer that owns the selection list, the
//! dialog, and alert rendering.

use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

pub const DUPLICATE_NAME_MESSAGE: &str = "A partition this name already exists.";
pub const UNAUTHORIZED_MESSAGE: &str = "You do not have permission to do this.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionAlert {
    DuplicateName,
    Unauthorized,
    Underlying { message: String, trace: String },
    Unknown,
}

impl fmt::Display for PartitionAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName => f.write_str(DUPLICATE_NAME_MESSAGE),
            Self::Unauthorized => f.write_str(UNAUTHORIZED_MESSAGE),
            Self::Underlying { message, trace } if trace.is_empty() => f.write_str(message),
            Self::Underlying { message, trace } => write!(f, "{message}\n\n{trace}"),
            Self::Unknown => f.write_str(UNKNOWN_ERROR_MESSAGE),
        }
    }
}

#[async_trait]
pub trait PartitionDialog: Send + Sync {
    async fn append_selection(&self, partition_key: &str);
    async fn request_close(&self);
    async fn show_alert(&self, alert: &PartitionAlert);
}

#[async_trait]
pub trait PartitionRefetcher: Send + Sync {
    async fn refetch(&self) -> Result<()>;
}
