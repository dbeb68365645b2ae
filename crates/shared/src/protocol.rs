use serde::{Deserialize, Serialize};

use crate::domain::{CreatePartitionOutcome, CreatePartitionRequest, RepositorySelector};

pub const ADD_DYNAMIC_PARTITION_MUTATION: &str = r#"mutation AddDynamicPartition(
  $partitionsDefName: String!
  $partitionKey: String!
  $repositorySelector: RepositorySelector!
) {
  addDynamicPartition(
    partitionsDefName: $partitionsDefName
    partitionKey: $partitionKey
    repositorySelector: $repositorySelector
  ) {
    __typename
    ... on AddDynamicPartitionSuccess {
      partitionsDefName
      partitionKey
    }
    ... on UnauthorizedError {
      message
    }
    ... on PythonError {
      message
      stack
    }
  }
}"#;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDynamicPartitionVariables {
    pub partitions_def_name: String,
    pub partition_key: String,
    pub repository_selector: RepositorySelector,
}

impl From<&CreatePartitionRequest> for AddDynamicPartitionVariables {
    fn from(request: &CreatePartitionRequest) -> Self {
        Self {
            partitions_def_name: request.partition_set_name.clone(),
            partition_key: request.partition_key.clone(),
            repository_selector: request.selector.clone(),
        }
    }
}

pub fn add_dynamic_partition_request(
    request: &CreatePartitionRequest,
) -> GraphQlRequest<AddDynamicPartitionVariables> {
    GraphQlRequest {
        query: ADD_DYNAMIC_PARTITION_MUTATION,
        variables: request.into(),
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDynamicPartitionData {
    pub add_dynamic_partition: AddDynamicPartitionResult,
}

/// Mutation result keyed by the GraphQL `__typename` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "__typename")]
pub enum AddDynamicPartitionResult {
    #[serde(rename_all = "camelCase")]
    AddDynamicPartitionSuccess {
        partitions_def_name: String,
        partition_key: String,
    },
    DuplicateDynamicPartitionError,
    UnauthorizedError {
        #[serde(default)]
        message: String,
    },
    PythonError {
        message: String,
        #[serde(default)]
        stack: Vec<String>,
    },
    #[serde(other)]
    Unrecognized,
}

impl From<AddDynamicPartitionResult> for CreatePartitionOutcome {
    fn from(value: AddDynamicPartitionResult) -> Self {
        match value {
            AddDynamicPartitionResult::AddDynamicPartitionSuccess {
                partitions_def_name,
                partition_key,
            } => Self::Success {
                partition_set_name: partitions_def_name,
                partition_key,
            },
            AddDynamicPartitionResult::DuplicateDynamicPartitionError => Self::DuplicateName,
            AddDynamicPartitionResult::UnauthorizedError { message } => {
                Self::Unauthorized { message }
            }
            // Stack frames arrive with their own line terminators.
            AddDynamicPartitionResult::PythonError { message, stack } => Self::UnderlyingError {
                message,
                trace: stack.concat(),
            },
            AddDynamicPartitionResult::Unrecognized => Self::Unrecognized,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
