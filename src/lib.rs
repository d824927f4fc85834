//! QR Wizard Library
//!
//! Core functionality for the guided QR code wizard: the step state
//! machine, field validation, request assembly, the generation client, and
//! result lifetime management.

pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod request;
pub mod result_store;
pub mod theme;
pub mod types;
pub mod ui;
pub mod validation;
pub mod wizard;

// Re-export main types for convenience
pub use app::{App, AppState, StatusKind};
pub use client::{DEFAULT_ENDPOINT, GENERIC_FAILURE, GenerateMessage, GenerationClient};
pub use error::QrWizardError;
pub use request::Submission;
pub use result_store::{GeneratedImage, ResultStore};
pub use types::{ContentType, ErrorCorrection, WifiSecurity};
pub use validation::validate_content;
pub use wizard::{
    ContentField, ContentForm, DesignField, DesignForm, StepIndicator, WizardData, WizardStep,
};
