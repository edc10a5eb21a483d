use ratatui::style::Color;

use crate::input::Direction;
use crate::snake::Cell;

/// Fixed logical cell size, in container pixels.
///
/// The grid is whatever number of these cells fits the container.
pub const CELL_SIZE_PX: u32 = 50;

/// Movement tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 160;

/// Initial snake layout, head first: three vertically adjacent cells.
pub const INITIAL_SNAKE: [Cell; 3] = [
    Cell { row: 3, col: 5 },
    Cell { row: 4, col: 5 },
    Cell { row: 5, col: 5 },
];

/// Direction the snake moves on the first tick and after every reset.
pub const INITIAL_DIRECTION: Direction = Direction::Left;

/// Terminal columns spanned by one logical cell.
///
/// Two columns per cell keeps cells roughly square in most fonts.
pub const CELL_TERM_COLS: u16 = 2;

/// Terminal rows reserved below the board for the HUD.
pub const HUD_HEIGHT: u16 = 1;

/// Glyph pair filling one snake cell.
pub const GLYPH_SNAKE: &str = "██";

/// Glyph pair filling the food cell.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_fg: Color,
    pub overlay_title: Color,
}

/// Default theme: white snake, red food, violet field.
pub const THEME_DEFAULT: Theme = Theme {
    snake_head: Color::White,
    snake_body: Color::Gray,
    food: Color::Red,
    play_bg: Color::Indexed(54),
    border_fg: Color::White,
    hud_fg: Color::White,
    overlay_title: Color::Green,
};
