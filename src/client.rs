//! Generation service client
//!
//! Issues the single multipart POST that turns a submission into a PNG.
//! The call runs to completion or failure exactly once per user action:
//! no retries, no timeout, no cancellation. While the TUI has a request
//! outstanding, the work runs on a background thread and reports back over
//! an mpsc channel polled by the event loop.

use std::sync::mpsc::Sender;
use std::thread;

use serde::Deserialize;
use tracing::{debug, error, info};

use crate::error::{QrWizardError, Result};
use crate::request::Submission;

/// Default generation endpoint, overridable via CLI or environment.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/generate";

/// Fallback message when a failure body is absent or unparseable.
pub const GENERIC_FAILURE: &str = "Failed to generate QR code";

/// Structured error body returned by the service on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the service-provided message from a failure body, falling back
/// to the generic message when the body is missing or not the expected
/// shape.
pub fn error_message_from_body(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if !parsed.error.is_empty() => parsed.error,
        _ => GENERIC_FAILURE.to_string(),
    }
}

/// Client for the external generation service.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    endpoint: String,
    http: reqwest::blocking::Client,
}

impl GenerationClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the submission and return the raw image bytes.
    ///
    /// A non-success status fails with the service's error message when the
    /// body parses as `{"error": "..."}`, otherwise with a generic message.
    pub fn generate(&self, submission: Submission) -> Result<Vec<u8>> {
        debug!("posting submission to {}", self.endpoint);
        let form = submission.into_form()?;
        let response = self.http.post(&self.endpoint).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = error_message_from_body(&body);
            error!("generation failed with status {}: {}", status, message);
            return Err(QrWizardError::generation(message));
        }

        let bytes = response.bytes()?.to_vec();
        info!("generation succeeded ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

/// Outcome of a background generation request.
///
/// `seq` identifies the request so the app can drop a settle that arrives
/// after a newer request started or after a reset.
#[derive(Debug)]
pub enum GenerateMessage {
    /// The service returned an image payload.
    Completed { seq: u64, image: Vec<u8> },
    /// The request failed; `message` is user-facing.
    Failed { seq: u64, message: String },
}

impl GenerateMessage {
    /// The sequence number this settle belongs to.
    pub fn seq(&self) -> u64 {
        match self {
            Self::Completed { seq, .. } | Self::Failed { seq, .. } => *seq,
        }
    }
}

/// Run a generation request on a background thread, reporting the outcome
/// over `tx`. The receiving side restores the generate control whichever
/// way the request settles.
pub fn spawn_generate(
    client: GenerationClient,
    submission: Submission,
    seq: u64,
    tx: Sender<GenerateMessage>,
) {
    thread::spawn(move || {
        let message = match client.generate(submission) {
            Ok(image) => GenerateMessage::Completed { seq, image },
            Err(e) => GenerateMessage::Failed {
                seq,
                message: e.to_string(),
            },
        };
        // The receiver may be gone if the app exited mid-request.
        let _ = tx.send(message);
    });
}
