use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{CreatePartitionOutcome, CreatePartitionRequest},
    error::TransportError,
    protocol::{add_dynamic_partition_request, AddDynamicPartitionData, GraphQlResponse},
};
use tracing::{debug, warn};
use url::Url;

/// The remote create operation. One call is one round trip; implementations
/// do not retry.
#[async_trait]
pub trait PartitionCreator: Send + Sync {
    async fn create_partition(
        &self,
        request: CreatePartitionRequest,
    ) -> Result<CreatePartitionOutcome, TransportError>;
}

pub struct MissingPartitionCreator;

#[async_trait]
impl PartitionCreator for MissingPartitionCreator {
    async fn create_partition(
        &self,
        _request: CreatePartitionRequest,
    ) -> Result<CreatePartitionOutcome, TransportError> {
        Err(TransportError::unavailable(
            "no graphql endpoint configured for partition creation",
        ))
    }
}

pub struct GraphQlPartitionCreator {
    http: Client,
    endpoint: Url,
    api_token: Option<String>,
}

impl GraphQlPartitionCreator {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PartitionCreator for GraphQlPartitionCreator {
    async fn create_partition(
        &self,
        request: CreatePartitionRequest,
    ) -> Result<CreatePartitionOutcome, TransportError> {
        let body = add_dynamic_partition_request(&request);
        let mut builder = self.http.post(self.endpoint.clone()).json(&body);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let res = builder
            .send()
            .await
            .map_err(|err| TransportError::Http(err.to_string()))?;
        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        let bytes = res
            .bytes()
            .await
            .map_err(|err| TransportError::Http(err.to_string()))?;
        let response: GraphQlResponse<AddDynamicPartitionData> = serde_json::from_slice(&bytes)
            .map_err(|err| TransportError::Decode(err.to_string()))?;

        let errors: Vec<String> = response.errors.into_iter().map(|e| e.message).collect();
        match response.data {
            Some(data) => {
                if !errors.is_empty() {
                    warn!(?errors, "graphql response carried errors alongside data");
                }
                let outcome = CreatePartitionOutcome::from(data.add_dynamic_partition);
                debug!(
                    endpoint = %self.endpoint,
                    outcome = outcome.kind(),
                    "add dynamic partition response"
                );
                Ok(outcome)
            }
            None if !errors.is_empty() => Err(TransportError::GraphQl(errors)),
            None => Err(TransportError::MissingData),
        }
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
