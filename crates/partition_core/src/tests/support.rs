use std::{
    collections::VecDeque,
    sync::atomic::{AtomicUsize, Ordering},
};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{
    domain::{CreatePartitionOutcome, CreatePartitionRequest, RepositorySelector},
    error::TransportError,
};
use tokio::sync::{Mutex, Notify};

use crate::{
    dialog::{PartitionAlert, PartitionDialog, PartitionRefetcher},
    transport::PartitionCreator,
};

pub fn selector() -> RepositorySelector {
    RepositorySelector::new("data_location", "__repository__")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEffect {
    Selected(String),
    CloseRequested,
    Alert(PartitionAlert),
}

#[derive(Default)]
pub struct RecordingDialog {
    effects: Mutex<Vec<DialogEffect>>,
}

impl RecordingDialog {
    pub async fn effects(&self) -> Vec<DialogEffect> {
        self.effects.lock().await.clone()
    }
}

#[async_trait]
impl PartitionDialog for RecordingDialog {
    async fn append_selection(&self, partition_key: &str) {
        self.effects
            .lock()
            .await
            .push(DialogEffect::Selected(partition_key.to_string()));
    }

    async fn request_close(&self) {
        self.effects.lock().await.push(DialogEffect::CloseRequested);
    }

    async fn show_alert(&self, alert: &PartitionAlert) {
        self.effects
            .lock()
            .await
            .push(DialogEffect::Alert(alert.clone()));
    }
}

/// Replies from a queue; optionally parks each call until released.
#[derive(Default)]
pub struct ScriptedCreator {
    replies: Mutex<VecDeque<Result<CreatePartitionOutcome, TransportError>>>,
    requests: Mutex<Vec<CreatePartitionRequest>>,
    gated: bool,
    pub started: Notify,
    pub release: Notify,
}

impl ScriptedCreator {
    pub fn replying(reply: Result<CreatePartitionOutcome, TransportError>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([reply])),
            ..Self::default()
        }
    }

    pub fn outcome(outcome: CreatePartitionOutcome) -> Self {
        Self::replying(Ok(outcome))
    }

    pub fn gated(mut self) -> Self {
        self.gated = true;
        self
    }

    pub async fn push(&self, reply: Result<CreatePartitionOutcome, TransportError>) {
        self.replies.lock().await.push_back(reply);
    }

    pub async fn requests(&self) -> Vec<CreatePartitionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl PartitionCreator for ScriptedCreator {
    async fn create_partition(
        &self,
        request: CreatePartitionRequest,
    ) -> Result<CreatePartitionOutcome, TransportError> {
        self.requests.lock().await.push(request);
        if self.gated {
            self.started.notify_one();
            self.release.notified().await;
        }
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::unavailable("no scripted reply")))
    }
}

pub struct PanickingCreator;

#[async_trait]
impl PartitionCreator for PanickingCreator {
    async fn create_partition(
        &self,
        _request: CreatePartitionRequest,
    ) -> Result<CreatePartitionOutcome, TransportError> {
        panic!("transport blew up");
    }
}

#[derive(Default)]
pub struct CountingRefetcher {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingRefetcher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PartitionRefetcher for CountingRefetcher {
    async fn refetch(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(anyhow!("partition definitions unavailable"));
        }
        Ok(())
    }
}
