//! Title, stepper, status line, and nav bar rendering

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{AppState, StatusKind};
use crate::theme::{Colors, Styles};
use crate::wizard::{StepIndicator, WizardStep};

/// Render the application title bar.
pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("QR Code Wizard")
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

/// Render the stepper row.
///
/// For current step `c`, indicator `i` renders completed iff `i < c`,
/// active iff `i == c`, and upcoming otherwise.
pub fn render_stepper(f: &mut Frame, area: Rect, current: WizardStep) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, step) in WizardStep::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ──  ", Styles::muted()));
        }
        let text = format!("{} {}", step.step_number(), step.title());
        let span = match StepIndicator::for_step(*step, current) {
            StepIndicator::Completed => Span::styled(
                format!("✔ {}", text),
                Style::default().fg(Colors::SUCCESS),
            ),
            StepIndicator::Active => Span::styled(
                format!("▶ {}", text),
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            StepIndicator::Upcoming => Span::styled(format!("  {}", text), Styles::muted()),
        };
        spans.push(span);
    }

    let stepper = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM))
        .alignment(Alignment::Center);
    f.render_widget(stepper, area);
}

/// Render the status line, styled by message kind.
pub fn render_status(f: &mut Frame, area: Rect, state: &AppState) {
    let style = match state.status_kind {
        StatusKind::Info => Style::default().fg(Colors::SECONDARY),
        StatusKind::Success => Styles::success(),
        StatusKind::Error => Styles::error(),
    };
    let status = Paragraph::new(state.status_message.as_str())
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(status, area);
}

/// Render the navigation bar with the hints for the current step.
pub fn render_nav_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let mut hints: Vec<(&str, &str)> = Vec::new();
    match state.step {
        WizardStep::SelectType => {
            hints.push(("↑/↓", "Navigate"));
            hints.push(("Space", "Select"));
            hints.push(("Enter", "Next"));
        }
        WizardStep::Content => {
            hints.push(("Tab/↑/↓", "Field"));
            hints.push(("Enter", "Next"));
            hints.push(("Esc", "Back"));
        }
        WizardStep::Design => {
            hints.push(("Tab/↑/↓", "Field"));
            hints.push(("←/→", "Change"));
            if state.generating {
                hints.push(("", "Generating..."));
            } else {
                hints.push(("Enter", "Generate QR"));
            }
            hints.push(("Esc", "Back"));
        }
        WizardStep::Result => {
            hints.push(("d/Enter", "Download"));
            hints.push(("n", "New QR Code"));
            hints.push(("Esc", "Back"));
        }
    }
    hints.push(("Ctrl+R", "Start Over"));
    hints.push(("Ctrl+Q", "Quit"));

    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in hints {
        if !key.is_empty() {
            spans.push(Span::styled(format!(" [{}] ", key), Styles::key_hint()));
        }
        spans.push(Span::raw(format!("{}  ", action)));
    }

    let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(nav, area);
}
