//! Application state definitions
//!
//! `AppState` owns the wizard position, form data, focus, and the status
//! line, and implements every guarded transition as a method returning a
//! `Result`. Nothing here touches the terminal or the network, so the whole
//! orchestration layer is testable without a UI.

use strum::IntoEnumIterator;
use tracing::debug;

use crate::client::GenerateMessage;
use crate::error::{QrWizardError, Result};
use crate::request::Submission;
use crate::result_store::ResultStore;
use crate::types::ContentType;
use crate::wizard::{ContentField, DesignField, WizardData, WizardStep};

/// Classification of the status line for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

const WELCOME: &str = "Welcome! Pick a QR code type to get started";

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current wizard step; exactly one panel renders at a time
    pub step: WizardStep,
    /// Selection, content fields, and design options
    pub data: WizardData,
    /// Highlighted card on the type selection step
    pub card_selection: usize,
    /// Focused field index on the content and design steps
    pub focus: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// How to style the status message
    pub status_kind: StatusKind,
    /// Whether a generation request is outstanding
    pub generating: bool,
    /// Sequence number of the most recent generation request
    pub generation_seq: u64,
    /// Where the last download landed, shown on the result panel
    pub last_saved: Option<std::path::PathBuf>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            step: WizardStep::default(),
            data: WizardData::default(),
            card_selection: 0,
            focus: 0,
            status_message: WELCOME.to_string(),
            status_kind: StatusKind::Info,
            generating: false,
            generation_seq: 0,
            last_saved: None,
        }
    }
}

impl AppState {
    /// Set an informational status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_kind = StatusKind::Info;
    }

    /// Set a success status message.
    pub fn set_success(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_kind = StatusKind::Success;
    }

    /// Surface an error as the status line. The session stays interactive.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_kind = StatusKind::Error;
    }

    /// Jump to a step unconditionally.
    ///
    /// No validation happens here; forward callers must have validated
    /// already, and backward jumps are always allowed. Field focus resets
    /// with the panel.
    pub fn go_to_step(&mut self, step: WizardStep) {
        debug!("step {} -> {}", self.step.step_number(), step.step_number());
        self.step = step;
        self.focus = 0;
    }

    /// The content types shown as selection cards, in display order.
    pub fn cards() -> Vec<ContentType> {
        ContentType::iter().collect()
    }

    /// Move the card highlight up or down.
    pub fn move_card_selection(&mut self, down: bool) {
        let count = Self::cards().len();
        if down {
            self.card_selection = (self.card_selection + 1) % count;
        } else {
            self.card_selection = (self.card_selection + count - 1) % count;
        }
    }

    /// Select the highlighted card as the content type.
    pub fn choose_card(&mut self) {
        let cards = Self::cards();
        self.data.selected_type = Some(cards[self.card_selection]);
    }

    /// Fields of the panel the focus currently cycles through.
    fn focus_field_count(&self) -> usize {
        match self.step {
            WizardStep::Content => self
                .data
                .selected_type
                .map(|ty| ContentField::for_type(ty).len())
                .unwrap_or(0),
            WizardStep::Design => DesignField::all().len(),
            _ => 0,
        }
    }

    /// Move field focus forward or backward within the current panel.
    pub fn move_focus(&mut self, down: bool) {
        let count = self.focus_field_count();
        if count == 0 {
            return;
        }
        if down {
            self.focus = (self.focus + 1) % count;
        } else {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// The focused content field, when the content panel is active.
    pub fn focused_content_field(&self) -> Option<ContentField> {
        if self.step != WizardStep::Content {
            return None;
        }
        let ty = self.data.selected_type?;
        ContentField::for_type(ty).get(self.focus).copied()
    }

    /// The focused design field, when the design panel is active.
    pub fn focused_design_field(&self) -> Option<DesignField> {
        if self.step != WizardStep::Design {
            return None;
        }
        DesignField::all().get(self.focus).copied()
    }

    /// Attempt the guarded forward transition for the current step.
    ///
    /// Step 1 requires a selected type; step 2 requires the active type's
    /// fields to validate. Step 3 advances only through a successful
    /// generation, never through this method. On failure the step does not
    /// change and the error carries the user-facing message.
    pub fn advance(&mut self) -> Result<()> {
        match self.step {
            WizardStep::SelectType => {
                if !self.data.has_selection() {
                    return Err(QrWizardError::validation("Please select a QR code type"));
                }
                self.go_to_step(WizardStep::Content);
            }
            WizardStep::Content => {
                let ty = self
                    .data
                    .selected_type
                    .ok_or_else(|| QrWizardError::state("content step with no selected type"))?;
                crate::validation::validate_content(ty, &self.data.content)?;
                self.go_to_step(WizardStep::Design);
            }
            WizardStep::Design | WizardStep::Result => {}
        }
        Ok(())
    }

    /// Go back one step. Always allowed; no validation.
    pub fn go_back(&mut self) {
        if let Some(previous) = self.step.previous() {
            self.go_to_step(previous);
        }
    }

    /// Start a generation request: assemble the submission, bump the
    /// sequence counter, and mark the generate control in progress.
    ///
    /// Returns the submission and its sequence number for the caller to
    /// hand to the client. Refused while a request is already outstanding.
    pub fn begin_generate(&mut self) -> Result<(Submission, u64)> {
        if self.generating {
            return Err(QrWizardError::state("generation already in progress"));
        }
        let ty = self
            .data
            .selected_type
            .ok_or_else(|| QrWizardError::state("generate with no selected type"))?;

        let submission = Submission::build(ty, &self.data.content, &self.data.design);
        self.generation_seq += 1;
        self.generating = true;
        self.set_status("Generating...");
        Ok((submission, self.generation_seq))
    }

    /// Apply a settled generation request.
    ///
    /// A settle whose sequence number is not the current one is stale (a
    /// newer request started, or the session was reset) and is dropped
    /// without touching any state. Otherwise the generate control is
    /// restored whichever way the request settled; on success the image is
    /// bound and the wizard advances, on failure the wizard stays on the
    /// design step and any previously bound image is left intact.
    pub fn apply_generate_message(&mut self, store: &mut ResultStore, message: GenerateMessage) {
        if message.seq() != self.generation_seq {
            debug!("dropping stale generation settle (seq {})", message.seq());
            return;
        }
        self.generating = false;

        match message {
            GenerateMessage::Completed { image, .. } => match store.bind(&image) {
                Ok(_) => {
                    self.set_success("QR code generated");
                    self.go_to_step(WizardStep::Result);
                }
                Err(e) => self.set_error(format!("Error: {}", e)),
            },
            GenerateMessage::Failed { message, .. } => {
                self.set_error(format!("Error: {}", message));
            }
        }
    }

    /// Save the bound image to `output_dir`, naming it from the selected
    /// type and the current instant. Wizard state is unchanged.
    pub fn download(&mut self, store: &ResultStore, output_dir: &std::path::Path) -> Result<()> {
        let ty = self.data.selected_type.ok_or(QrWizardError::NoResult)?;
        let timestamp_ms = chrono::Utc::now().timestamp_millis();
        let saved = store.download(output_dir, ty, timestamp_ms)?;
        self.set_success(format!("Saved {}", saved.display()));
        self.last_saved = Some(saved);
        Ok(())
    }

    /// Restore everything to initial state for a new session.
    ///
    /// Clears the selection and every form field, releases the bound image,
    /// bumps the sequence counter so a still-pending generation settles as
    /// stale, and returns to step 1.
    pub fn reset(&mut self, store: &mut ResultStore) {
        self.data.reset();
        store.release();
        self.card_selection = 0;
        self.generating = false;
        self.generation_seq += 1;
        self.last_saved = None;
        self.set_status(WELCOME);
        self.go_to_step(WizardStep::SelectType);
    }
}
