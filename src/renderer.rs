use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{
    CELL_SIZE_PX, CELL_TERM_COLS, GLYPH_FOOD, GLYPH_SNAKE, HUD_HEIGHT, THEME_DEFAULT, Theme,
};
use crate::grid::{ContainerSize, GridSize};
use crate::session::{CellContent, Phase, Session};
use crate::snake::Cell;
use crate::ui::hud::render_hud;
use crate::ui::menu::{
    render_game_over_menu, render_pause_menu, render_start_menu, render_victory_menu,
};

/// Maps the terminal window to a container size in logical pixels.
///
/// The board block's border and the HUD row are subtracted first, and each
/// remaining cell slot (CELL_TERM_COLS × 1 terminal cells) counts as one
/// CELL_SIZE_PX square, so the derived grid always fits the drawn area.
#[must_use]
pub fn container_from_terminal(width: u16, height: u16) -> ContainerSize {
    let inner_cols = width.saturating_sub(2) / CELL_TERM_COLS;
    let inner_rows = height.saturating_sub(2 + HUD_HEIGHT);

    ContainerSize {
        width: u32::from(inner_cols) * CELL_SIZE_PX,
        height: u32::from(inner_rows) * CELL_SIZE_PX,
    }
}

/// Renders the full frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, session: &Session) {
    let theme = &THEME_DEFAULT;
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(HUD_HEIGHT)]).areas(frame.area());

    let block = Block::bordered().border_style(Style::new().fg(theme.border_fg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    render_cells(frame, inner, session, theme);

    match session.phase {
        Phase::Idle => render_start_menu(frame, board_area),
        Phase::Paused => render_pause_menu(frame, board_area),
        Phase::GameOver => render_game_over_menu(frame, board_area, session.score),
        Phase::Won => render_victory_menu(frame, board_area, session.score),
        Phase::Playing => {}
    }

    render_hud(frame, hud_area, session, theme);
}

fn render_cells(frame: &mut Frame<'_>, inner: Rect, session: &Session, theme: &Theme) {
    let grid = session.grid();
    let head = session.snake.head();
    let buffer = frame.buffer_mut();
    buffer.set_style(inner, Style::new().bg(theme.play_bg));

    for row in 0..i32::from(grid.rows) {
        for col in 0..i32::from(grid.cols) {
            let cell = Cell { row, col };
            let Some((x, y)) = cell_to_terminal(inner, grid, cell) else {
                continue;
            };

            match session.content_at(cell) {
                CellContent::Snake if cell == head => buffer.set_string(
                    x,
                    y,
                    GLYPH_SNAKE,
                    Style::new()
                        .fg(theme.snake_head)
                        .bg(theme.play_bg)
                        .add_modifier(Modifier::BOLD),
                ),
                CellContent::Snake => buffer.set_string(
                    x,
                    y,
                    GLYPH_SNAKE,
                    Style::new().fg(theme.snake_body).bg(theme.play_bg),
                ),
                CellContent::Food => buffer.set_string(
                    x,
                    y,
                    GLYPH_FOOD,
                    Style::new().fg(theme.food).bg(theme.play_bg),
                ),
                CellContent::Empty => {}
            }
        }
    }
}

fn cell_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within(grid) {
        return None;
    }

    let col = u16::try_from(cell.col).ok()?;
    let row = u16::try_from(cell.row).ok()?;

    let x = inner.x.saturating_add(col.saturating_mul(CELL_TERM_COLS));
    let y = inner.y.saturating_add(row);
    if x + CELL_TERM_COLS > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
