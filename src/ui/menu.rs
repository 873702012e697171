use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

const POPUP_WIDTH: u16 = 36;
const POPUP_HEIGHT: u16 = 6;

/// Draws the resize hint shown while the board does not fit.
pub fn render_too_small(frame: &mut Frame<'_>, area: Rect, required: (u16, u16)) {
    frame.render_widget(Clear, area);

    let (columns, rows) = required;
    let lines = vec![
        Line::from("Terminal too small").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("Need {columns}x{rows}, have {}x{}", area.width, area.height)),
        Line::from("Resize to continue, [Q] quits"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" paused ")),
        centered_popup(area, POPUP_WIDTH, POPUP_HEIGHT),
    );
}

/// Printed to stderr when the terminal cannot host the game at all.
pub const SURFACE_UNAVAILABLE_MESSAGE: &str =
    "Unable to initialize game terminal. Please try a different terminal.";

/// Fixed-size box centered in `area`, clipped to it.
fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::centered_popup;

    #[test]
    fn popup_is_centered_and_clipped() {
        assert_eq!(
            centered_popup(Rect::new(0, 0, 40, 12), 36, 6),
            Rect::new(2, 3, 36, 6)
        );
        assert_eq!(
            centered_popup(Rect::new(0, 0, 20, 4), 36, 6),
            Rect::new(0, 0, 20, 4)
        );
    }
}
