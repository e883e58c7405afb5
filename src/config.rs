use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Width and height are in grid cells, not pixels or terminal columns.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// A color theme applied to all visual elements.
///
/// The `snake` and `apple` colors are fixed onto the entities when a
/// session is created; the rest style the chrome around the playfield.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Snake body color, fixed on the snake at construction.
    pub snake: Color,
    /// Apple color, fixed on each spawned apple.
    pub apple: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_text: Color,
    pub hud_value: Color,
    pub menu_title: Color,
}

/// Red snake chasing a green apple, the original palette.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    snake: Color::Red,
    apple: Color::Green,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_text: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    snake: Color::Cyan,
    apple: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_text: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    snake: Color::Magenta,
    apple: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_text: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a theme by its name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Returns the names of all available themes.
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|theme| theme.name).collect()
}

/// Starting snake length in cells.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Default snake speed in grid cells per second.
pub const DEFAULT_SPEED_CELLS_PER_SEC: f64 = 10.0;

/// Default playfield size in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;
pub const DEFAULT_GRID_HEIGHT: u16 = 24;

/// Sleep between frame-loop iterations, approximating a display refresh.
pub const FRAME_SLEEP_MS: u64 = 16;

/// Snake segments and apples draw as a disc inset within its cell.
pub const GLYPH_SNAKE_SEGMENT: &str = "●";
pub const GLYPH_APPLE: &str = "●";
