use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::label::{Label, high_score_text, score_text, speed_text};
use crate::message::Toxicity;
use crate::speed::Speed;

/// Rows above the board: title and subtitle.
pub const HEADER_HEIGHT: u16 = 2;

/// Rows below the board: scores, controls, message, label footer and key help.
pub const FOOTER_HEIGHT: u16 = 4 + TAGLINE_HEIGHT;

/// The label footer wraps onto two rows on the default board width.
const TAGLINE_HEIGHT: u16 = 2;

/// Values displayed around the board.
#[derive(Debug, Clone)]
pub struct HudInfo<'a> {
    pub label: Label,
    pub speed: Speed,
    pub toxicity: Toxicity,
    pub score: u32,
    pub high_score: u32,
    pub theme_name: &'a str,
    pub message: &'a str,
    /// Extra diagnostics row, shown with `--debug`.
    pub debug_line: Option<String>,
}

/// Draws the title and subtitle, tinted with the snake color.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, info: &HudInfo<'_>, accent: Color) {
    let lines = vec![
        Line::from(Span::styled(
            info.label.title(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            info.label.subtitle(),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Draws the rows below the board.
pub fn render_footer(frame: &mut Frame<'_>, area: Rect, info: &HudInfo<'_>) {
    let debug_height = u16::from(info.debug_line.is_some());
    let [score_row, controls_row, message_row, tagline_rows, help_row, debug_row] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(TAGLINE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(debug_height),
        ])
        .areas(area);

    let [score_left, score_right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(score_row);
    frame.render_widget(
        Paragraph::new(score_text(info.label, info.score))
            .alignment(Alignment::Left)
            .style(Style::default().fg(Color::White)),
        score_left,
    );
    frame.render_widget(
        Paragraph::new(high_score_text(info.label, info.high_score))
            .alignment(Alignment::Right)
            .style(Style::default().fg(Color::Yellow)),
        score_right,
    );

    frame.render_widget(
        Paragraph::new(controls_line(info)).alignment(Alignment::Center),
        controls_row,
    );

    frame.render_widget(
        Paragraph::new(info.message)
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::ITALIC)),
        message_row,
    );

    frame.render_widget(
        Paragraph::new(info.label.footer())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(Color::Gray)),
        tagline_rows,
    );

    frame.render_widget(
        Paragraph::new(help_line(info.label))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_row,
    );

    if let Some(debug_line) = &info.debug_line {
        frame.render_widget(
            Paragraph::new(debug_line.as_str()).style(Style::default().fg(Color::DarkGray)),
            debug_row,
        );
    }
}

fn controls_line(info: &HudInfo<'_>) -> Line<'static> {
    let muted = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan);

    Line::from(vec![
        Span::styled(speed_text(info.label, info.speed), value),
        Span::styled(" | Theme: ", muted),
        Span::styled(info.theme_name.to_owned(), value),
        Span::styled(" | Toxicity: ", muted),
        Span::styled(info.toxicity.label(), value),
    ])
}

fn help_line(label: Label) -> String {
    format!(
        "[R] {} [S]peed [T]heme [G]ender [X]toxic [Q]uit",
        label.reset_text()
    )
}
