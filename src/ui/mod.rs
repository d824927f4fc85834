//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, stepper row, status line, nav bar
//! - `screens` - The four wizard step panels

mod header;
mod screens;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::AppState;
use crate::result_store::ResultStore;
use crate::wizard::WizardStep;

/// UI renderer for the application
///
/// Main entry point for rendering: lays out the frame and delegates the
/// content area to the panel for the current step.
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState, store: &ResultStore) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Stepper
                Constraint::Min(1),    // Step panel
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title(f, chunks[0]);
        header::render_stepper(f, chunks[1], state.step);

        match state.step {
            WizardStep::SelectType => screens::render_select_type(f, chunks[2], state),
            WizardStep::Content => screens::render_content_form(f, chunks[2], state),
            WizardStep::Design => screens::render_design_form(f, chunks[2], state),
            WizardStep::Result => screens::render_result(f, chunks[2], state, store),
        }

        header::render_status(f, chunks[3], state);
        header::render_nav_bar(f, chunks[4], state);
    }
}
