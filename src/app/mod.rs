//! Application module
//!
//! Contains the main application event loop, key handling, and the wiring
//! between the wizard state, the generation client, and the result store.
//!
//! # Module Structure
//! - `state` - Application state and guarded transitions (AppState)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppState, StatusKind};

use std::io::Stdout;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::client::{GenerateMessage, GenerationClient, spawn_generate};
use crate::error::Result;
use crate::result_store::ResultStore;
use crate::ui::UiRenderer;
use crate::wizard::WizardStep;

/// How long the event loop waits for input before polling the worker
/// channel again.
const TICK: Duration = Duration::from_millis(100);

/// Main application struct
pub struct App {
    state: AppState,
    store: ResultStore,
    ui_renderer: UiRenderer,
    client: GenerationClient,
    output_dir: PathBuf,
    /// Channel sender for generation outcomes (cloned into worker threads)
    generate_tx: Sender<GenerateMessage>,
    /// Channel receiver for generation outcomes (polled in the main loop)
    generate_rx: Receiver<GenerateMessage>,
    running: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(endpoint: impl Into<String>, output_dir: PathBuf) -> Self {
        let client = GenerationClient::new(endpoint);
        info!("creating app, endpoint {}", client.endpoint());
        let (generate_tx, generate_rx) = mpsc::channel();

        Self {
            state: AppState::default(),
            store: ResultStore::new(),
            ui_renderer: UiRenderer::new(),
            client,
            output_dir,
            generate_tx,
            generate_rx,
            running: true,
        }
    }

    /// Run the event loop until the user quits.
    ///
    /// The loop draws, drains any settled generation requests, then waits
    /// briefly for input. The only suspension point is the network call,
    /// which runs on a worker thread, so the interface stays responsive
    /// (including backward navigation) while a request is outstanding.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        while self.running {
            terminal.draw(|f| self.ui_renderer.render(f, &self.state, &self.store))?;

            while let Ok(message) = self.generate_rx.try_recv() {
                self.state.apply_generate_message(&mut self.store, message);
            }

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Dispatch a key press. Every failure surfaces as the status line;
    /// nothing here aborts the session.
    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => {
                    debug!("quit requested");
                    self.running = false;
                }
                KeyCode::Char('r') => self.state.reset(&mut self.store),
                _ => {}
            }
            return;
        }

        match self.state.step {
            WizardStep::SelectType => self.handle_select_type_key(key),
            WizardStep::Content | WizardStep::Design => self.handle_form_key(key),
            WizardStep::Result => self.handle_result_key(key),
        }
    }

    fn handle_select_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_card_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_card_selection(true),
            KeyCode::Char(' ') => self.state.choose_card(),
            KeyCode::Enter => self.try_advance(),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Tab | KeyCode::Down => self.state.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.state.move_focus(false),
            KeyCode::Left => self.cycle_focused(false),
            KeyCode::Right => self.cycle_focused(true),
            KeyCode::Enter => {
                if self.state.step == WizardStep::Design {
                    self.start_generate();
                } else {
                    self.try_advance();
                }
            }
            KeyCode::Backspace => self.edit_focused(|value| {
                value.pop();
            }),
            KeyCode::Char(c) => {
                // Space cycles toggle/selection fields and types into text fields
                if c == ' ' && !self.focused_is_text() {
                    self.cycle_focused(true);
                } else {
                    self.edit_focused(|value| value.push(c));
                }
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.go_back(),
            KeyCode::Enter | KeyCode::Char('d') | KeyCode::Char('D') => {
                if let Err(e) = self.state.download(&self.store, &self.output_dir) {
                    self.state.set_error(e.to_string());
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.state.reset(&mut self.store),
            _ => {}
        }
    }

    /// Forward transition with its guard; failures become the status line.
    fn try_advance(&mut self) {
        if let Err(e) = self.state.advance() {
            self.state.set_error(e.to_string());
        }
    }

    /// Kick off a generation request on a worker thread.
    ///
    /// The generate control is disabled (and its label changed) until the
    /// request settles; both are restored by `apply_generate_message` on
    /// every settle path.
    fn start_generate(&mut self) {
        if self.state.generating {
            return;
        }
        match self.state.begin_generate() {
            Ok((submission, seq)) => {
                spawn_generate(self.client.clone(), submission, seq, self.generate_tx.clone());
            }
            Err(e) => self.state.set_error(e.to_string()),
        }
    }

    /// Whether the focused field takes free text.
    fn focused_is_text(&self) -> bool {
        if let Some(field) = self.state.focused_content_field() {
            return field.is_text();
        }
        if let Some(field) = self.state.focused_design_field() {
            return field.is_text();
        }
        false
    }

    /// Apply an edit to the focused text field, if there is one.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(field) = self.state.focused_content_field() {
            if let Some(value) = self.state.data.content.text_mut(field) {
                edit(value);
            }
            return;
        }
        if let Some(field) = self.state.focused_design_field() {
            if let Some(value) = self.state.data.design.text_mut(field) {
                edit(value);
            }
        }
    }

    /// Cycle the focused toggle/selection field, if there is one.
    fn cycle_focused(&mut self, forward: bool) {
        if let Some(field) = self.state.focused_content_field() {
            self.state.data.content.cycle(field, forward);
            return;
        }
        if let Some(field) = self.state.focused_design_field() {
            self.state.data.design.cycle(field, forward);
        }
    }
}
