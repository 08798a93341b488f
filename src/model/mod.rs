//! Zero-shot classification capability.
//!
//! The analysis pipeline never talks to an ML library directly. It is handed
//! a [`ZeroShotClassifier`] once at startup; the model-backed implementation
//! routes calls to the sidecar worker, while [`DisabledClassifier`] is the
//! heuristic-only mode used when no model is configured or loading failed.
//! Raw prediction dictionaries from the model never cross this boundary;
//! they are mapped into [`LabelScore`] / [`LabeledSpan`] here.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::worker::protocol::{self, methods};
use crate::worker::{WorkerClient, WorkerError};

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Errors from the model-backed classifier.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// The worker RPC failed (spawn, transport, timeout, or remote error).
    #[error(transparent)]
    Worker(#[from] WorkerError),
}

/// A scored candidate label from zero-shot classification.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelScore {
    /// The candidate label.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f64,
}

/// A labeled span extracted from text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSpan {
    /// The matched span text.
    pub text: String,
    /// The predicted label.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f64,
}

/// Capability trait for zero-shot text classification.
///
/// Selected once at startup. Implementations must be cheap to call through
/// an `Arc<dyn ZeroShotClassifier>` shared across the analysis run.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    /// Whether a live model backs this classifier.
    ///
    /// When this returns `false` the analyzer skips model calls entirely and
    /// uses its heuristic fallbacks; the methods below are never invoked.
    fn is_available(&self) -> bool;

    /// Score candidate `labels` against `text`, best first.
    async fn classify_text(&self, text: &str, labels: &[&str]) -> ClassifierResult<Vec<LabelScore>>;

    /// Extract labeled spans from `text` using the given span labels.
    async fn extract_spans(&self, text: &str, labels: &[&str])
        -> ClassifierResult<Vec<LabeledSpan>>;
}

/// Model-backed classifier that delegates to the sidecar worker.
pub struct WorkerClassifier {
    client: Arc<WorkerClient>,
}

impl WorkerClassifier {
    /// Create a classifier backed by an already-spawned worker.
    pub fn new(client: Arc<WorkerClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ZeroShotClassifier for WorkerClassifier {
    fn is_available(&self) -> bool {
        self.client.is_alive()
    }

    async fn classify_text(
        &self,
        text: &str,
        labels: &[&str],
    ) -> ClassifierResult<Vec<LabelScore>> {
        let response: protocol::ClassifyTextResponse = self
            .client
            .request(
                methods::CLASSIFY_TEXT,
                protocol::ClassifyTextParams {
                    text: text.to_string(),
                    labels: labels.iter().map(|l| l.to_string()).collect(),
                },
            )
            .await?;

        Ok(response
            .predictions
            .into_iter()
            .map(|p| LabelScore {
                label: p.label,
                score: p.score,
            })
            .collect())
    }

    async fn extract_spans(
        &self,
        text: &str,
        labels: &[&str],
    ) -> ClassifierResult<Vec<LabeledSpan>> {
        let response: protocol::ExtractEntitiesResponse = self
            .client
            .request(
                methods::EXTRACT_ENTITIES,
                protocol::ExtractEntitiesParams {
                    text: text.to_string(),
                    labels: labels.iter().map(|l| l.to_string()).collect(),
                },
            )
            .await?;

        Ok(response
            .entities
            .into_iter()
            .map(|e| LabeledSpan {
                text: e.text,
                label: e.label,
                score: e.score,
            })
            .collect())
    }
}

/// Heuristic-only mode: no model is consulted.
///
/// `is_available` returns `false`, so the analyzer routes every decision to
/// its deterministic fallbacks. The trait methods are still total and simply
/// return empty predictions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl ZeroShotClassifier for DisabledClassifier {
    fn is_available(&self) -> bool {
        false
    }

    async fn classify_text(
        &self,
        _text: &str,
        _labels: &[&str],
    ) -> ClassifierResult<Vec<LabelScore>> {
        Ok(Vec::new())
    }

    async fn extract_spans(
        &self,
        _text: &str,
        _labels: &[&str],
    ) -> ClassifierResult<Vec<LabeledSpan>> {
        Ok(Vec::new())
    }
}
