//! @acp:module "Submitter"
//! @acp:summary "Simulated submission with a fixed delay and in-flight lock"
//! @acp:domain core
//! @acp:layer service

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::{SubmissionForm, ValidationError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("a submission is already in progress")]
    InProgress,
}

/// @acp:summary "Acknowledgment of a simulated submission"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: Uuid,
    pub task: String,
    pub full_name: String,
    pub photos: usize,
    pub videos: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Pretends to upload a form. Clones share the in-flight flag, so only one
/// submission runs at a time per submitter.
#[derive(Debug, Clone)]
pub struct Submitter {
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Submitter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether the submit control should be disabled
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// @acp:summary "Validate, wait out the delay, acknowledge and clear the form"
    ///
    /// While another submission is running nothing else is checked. A form
    /// that fails validation is left untouched.
    pub async fn submit(
        &self,
        form: &mut SubmissionForm,
        task: &str,
    ) -> Result<Receipt, SubmissionError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(SubmissionError::InProgress);
        }
        let _guard = InFlight(&self.in_flight);

        form.validate()?;

        tracing::info!(
            "Submitting task for {} ({} photos, {} videos)",
            form.full_name(),
            form.photos.len(),
            form.videos.len()
        );
        tokio::time::sleep(self.delay).await;

        let receipt = Receipt {
            id: Uuid::new_v4(),
            task: task.to_string(),
            full_name: form.full_name(),
            photos: form.photos.len(),
            videos: form.videos.len(),
            submitted_at: Utc::now(),
        };
        form.clear();
        tracing::info!("Submission {} acknowledged", receipt.id);

        Ok(receipt)
    }
}
