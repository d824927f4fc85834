//! Wizard step panels
//!
//! One render function per wizard step. Exactly one panel is visible at a
//! time; the renderer dispatches on the current step, so re-rendering the
//! same step is naturally idempotent.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::AppState;
use crate::result_store::ResultStore;
use crate::theme::{Colors, Styles};
use crate::wizard::{ContentField, DesignField};

/// Render the type selection cards.
pub fn render_select_type(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = AppState::cards()
        .into_iter()
        .map(|ty| {
            let selected = state.data.selected_type == Some(ty);
            let marker = if selected { "●" } else { "○" };
            let title_style = if selected {
                Style::default().fg(Colors::SUCCESS)
            } else {
                Style::default().fg(Colors::PRIMARY)
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!(" {} ", marker), title_style),
                    Span::styled(ty.card_title(), title_style),
                ]),
                Line::from(Span::styled(
                    format!("   {}", ty.card_description()),
                    Styles::muted(),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" What do you want to encode? "),
        )
        .highlight_style(Styles::focused());

    let mut list_state = ListState::default().with_selected(Some(state.card_selection));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Render the content form for the selected type.
pub fn render_content_form(f: &mut Frame, area: Rect, state: &AppState) {
    let Some(ty) = state.data.selected_type else {
        // Unreachable through normal flow; step 1 guards the transition.
        let empty = Paragraph::new("No content type selected")
            .block(Block::default().borders(Borders::ALL))
            .style(Styles::error());
        f.render_widget(empty, area);
        return;
    };

    let lines: Vec<Line> = ContentField::for_type(ty)
        .iter()
        .enumerate()
        .flat_map(|(i, field)| {
            let mut value = state.data.content.display_value(*field);
            if field.is_masked() {
                value = "*".repeat(value.chars().count());
            }
            field_lines(field.label(), &value, field.is_text(), i == state.focus)
        })
        .collect();

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ty.card_title())),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

/// Render the shared design options form.
pub fn render_design_form(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = DesignField::all()
        .iter()
        .enumerate()
        .flat_map(|(i, field)| {
            let value = state.data.design.display_value(*field);
            field_lines(field.label(), &value, field.is_text(), i == state.focus)
        })
        .collect();

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Design "))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

/// Render the result panel: preview details when an image is bound, a
/// placeholder before any successful generation.
pub fn render_result(f: &mut Frame, area: Rect, state: &AppState, store: &ResultStore) {
    let lines: Vec<Line> = match store.current() {
        Some(image) => {
            let mut lines = vec![
                Line::from(Span::styled("Your QR code is ready!", Styles::success())),
                Line::from(""),
                Line::from(format!("Image size: {} bytes", image.len())),
                Line::from(vec![
                    Span::raw("Preview file: "),
                    Span::styled(image.path().display().to_string(), Styles::muted()),
                ]),
            ];
            if let Some(saved) = &state.last_saved {
                lines.push(Line::from(""));
                lines.push(Line::from(vec![
                    Span::raw("Saved to: "),
                    Span::styled(saved.display().to_string(), Styles::success()),
                ]));
            }
            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Your QR code will appear here",
                Styles::muted(),
            )),
        ],
    };

    let panel = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

/// Lines for one form field: label, value, spacer. The focused field gets
/// the highlight style and a cursor marker on text fields.
fn field_lines(label: &str, value: &str, is_text: bool, focused: bool) -> Vec<Line<'static>> {
    let label_style = if focused {
        Styles::title()
    } else {
        Style::default().fg(Colors::SECONDARY)
    };
    let prefix = if focused { "▶ " } else { "  " };

    let shown = if is_text && focused {
        format!("{}_", value)
    } else if !is_text {
        format!("◂ {} ▸", value)
    } else {
        value.to_string()
    };
    let value_style = if focused {
        Styles::focused()
    } else {
        Style::default()
    };

    vec![
        Line::from(Span::styled(format!("{}{}", prefix, label), label_style)),
        Line::from(Span::styled(format!("    {}", shown), value_style)),
        Line::from(""),
    ]
}
