//! Pure view/render functions for the TUI.
//!
//! Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};
use tally_core::ViewState;
use unicode_width::UnicodeWidthStr;

use crate::features::menu::Button;
use crate::state::AppState;
use crate::view::{Element, ElementKind, Screen};

/// Card width including borders.
const CARD_WIDTH: u16 = 48;

/// Column where input values start (label plus gap).
const LABEL_WIDTH: usize = 10;

const FOOTER_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let screen = Screen::build(app);
    let (lines, cursor) = screen_lines(&screen);

    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
            .areas(frame.area());

    let card_height = u16::try_from(lines.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let card = centered(body_area, CARD_WIDTH, card_height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Tally ")
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));
    let inner = block.inner(card);

    frame.render_widget(Paragraph::new(lines).block(block), card);

    if let Some((row, col)) = cursor
        && row < inner.height
        && col < inner.width
    {
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }

    frame.render_widget(footer(screen.view, &app.buttons()), footer_area);
}

/// Lays out the screen elements and locates the input cursor (row, col)
/// relative to the card's inner area.
fn screen_lines(screen: &Screen) -> (Vec<Line<'static>>, Option<(u16, u16)>) {
    let mut lines = Vec::new();
    let mut cursor = None;
    let mut buttons = Vec::new();

    for element in &screen.elements {
        match element.kind {
            ElementKind::Heading => {
                lines.push(Line::styled(
                    element.text.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                lines.push(Line::default());
            }
            ElementKind::Text => lines.push(Line::raw(element.text.clone())),
            ElementKind::Hint => {
                lines.push(Line::default());
                lines.push(Line::styled(
                    element.text.clone(),
                    Style::default().fg(Color::Red),
                ));
            }
            ElementKind::Input => {
                if let Some(col) = element.cursor {
                    let before: String = element.text.chars().take(col).collect();
                    let x = LABEL_WIDTH + before.width();
                    cursor = Some((
                        u16::try_from(lines.len()).unwrap_or(u16::MAX),
                        u16::try_from(x).unwrap_or(u16::MAX),
                    ));
                }
                lines.push(input_line(element));
            }
            ElementKind::Button => buttons.push(element),
        }
    }

    if !buttons.is_empty() {
        lines.push(Line::default());
        lines.push(button_row(&buttons));
    }

    (lines, cursor)
}

fn input_line(element: &Element) -> Line<'static> {
    let label = format!(
        "{:<width$}",
        element.label.unwrap_or_default(),
        width = LABEL_WIDTH
    );
    let value_style = if element.active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(element.text.clone(), value_style),
    ])
}

fn button_row(buttons: &[&Element]) -> Line<'static> {
    let mut spans = Vec::with_capacity(buttons.len() * 2);
    for (i, button) in buttons.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if button.active {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("[ {} ]", button.text), style));
    }
    Line::from(spans)
}

/// Key hints for the current screen.
fn footer(view: ViewState, buttons: &[Button]) -> Paragraph<'static> {
    let hints = if view == ViewState::LoggedOut {
        vec!["Tab next", "Enter sign in", "Esc quit"]
    } else {
        let mut hints = vec!["←/→ select", "Enter press"];
        if buttons.contains(&Button::Back) {
            hints.push("Esc back");
        }
        hints.push("Ctrl+C quit");
        hints
    };
    Paragraph::new(Line::styled(
        hints.join(" · "),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
