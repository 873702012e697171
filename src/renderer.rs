use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::CELL_WIDTH;
use crate::game::GameSession;
use crate::grid::{GridSize, Position};
use crate::theme::Theme;
use crate::ui::hud::{FOOTER_HEIGHT, HEADER_HEIGHT, HudInfo, render_footer, render_header};
use crate::ui::menu::render_too_small;

const GLYPH_CELL: &str = "██";

/// Snake cells to draw, head first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SnakeView {
    pub cells: Vec<Position>,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FoodView {
    pub position: Position,
    pub color: Color,
}

/// Immutable snapshot of everything the board shows.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub bounds: GridSize,
    pub snake: SnakeView,
    pub food: FoodView,
}

impl Scene {
    /// Copies the drawable state out of `session` with `theme` colors.
    #[must_use]
    pub fn capture(session: &GameSession, theme: &Theme) -> Self {
        Self {
            bounds: session.bounds(),
            snake: SnakeView {
                cells: session.snake.segments().copied().collect(),
                color: theme.snake,
            },
            food: FoodView {
                position: session.food.position,
                color: theme.food,
            },
        }
    }
}

/// Terminal size needed to show the board and HUD, as `(columns, rows)`.
#[must_use]
pub fn required_size(bounds: GridSize, debug: bool) -> (u16, u16) {
    let columns = bounds.width.saturating_mul(CELL_WIDTH).saturating_add(2);
    let rows = bounds
        .height
        .saturating_add(2)
        .saturating_add(HEADER_HEIGHT)
        .saturating_add(FOOTER_HEIGHT)
        .saturating_add(u16::from(debug));
    (columns, rows)
}

/// Returns true when `area` can hold the board and HUD.
#[must_use]
pub fn fits(area: Rect, bounds: GridSize, debug: bool) -> bool {
    let (columns, rows) = required_size(bounds, debug);
    area.width >= columns && area.height >= rows
}

/// Renders the full frame from an immutable scene.
pub fn render(frame: &mut Frame<'_>, scene: &Scene, hud: &HudInfo<'_>) {
    let area = frame.area();
    if !fits(area, scene.bounds, hud.debug_line.is_some()) {
        render_too_small(frame, area, required_size(scene.bounds, hud.debug_line.is_some()));
        return;
    }

    let (board_width, _) = required_size(scene.bounds, false);
    let board_height = scene.bounds.height + 2;
    let footer_height = FOOTER_HEIGHT + u16::from(hud.debug_line.is_some());

    let [column] = Layout::horizontal([Constraint::Length(board_width)])
        .flex(Flex::Center)
        .areas(area);
    let [header_area, board_area, footer_area] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(board_height),
        Constraint::Length(footer_height),
    ])
    .flex(Flex::Center)
    .areas(column);

    render_header(frame, header_area, hud, scene.snake.color);

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_food(frame, inner, scene);
    render_snake(frame, inner, scene);

    render_footer(frame, footer_area, hud);
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    let Some((x, y)) = logical_to_terminal(inner, scene.bounds, scene.food.position) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_CELL, Style::new().fg(scene.food.color));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, scene: &Scene) {
    let style = Style::new().fg(scene.snake.color);
    let buffer = frame.buffer_mut();

    for segment in &scene.snake.cells {
        let Some((x, y)) = logical_to_terminal(inner, scene.bounds, *segment) else {
            continue;
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
