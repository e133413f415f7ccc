use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Cells are 1-indexed on both axes: valid coordinates run from `(1, 1)` to
/// `(width, height)` inclusive.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// The fixed play field.
pub const GRID: GridSize = GridSize {
    width: 20,
    height: 20,
};

/// Tick interval at the start of every run, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 200;

/// The tick interval never shrinks past this, in milliseconds.
pub const TICK_INTERVAL_FLOOR_MS: u64 = 25;

/// Glyph for snake segments.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph for food.
pub const GLYPH_FOOD: &str = "●";

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub border_fg: Color,
    pub play_bg: Color,
    pub hud_score: Color,
    pub hud_high_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-on-dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    food: Color::Red,
    border_fg: Color::White,
    play_bg: Color::Black,
    hud_score: Color::White,
    hud_high_score: Color::Yellow,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};
