use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,    // resting bars
    pub active: Color, // indices being compared or moved
    pub sorted: Color, // indices already in final position
    pub primary: Color,
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(137, 180, 250),    // blue
    active: Color::Rgb(243, 139, 168), // red
    sorted: Color::Rgb(166, 227, 161), // green
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70), // slightly lighter bg for the status bar
};
