use crossterm::style::Color;

/// Foreground colors for each kind of REPL output
pub struct Theme {
    pub prompt: Color,
    pub value: Color,     // Dark yellow
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub secondary: Color, // White, AST dumps and timings
    pub info: Color,      // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    prompt: Color::Grey,
    value: Color::DarkYellow,
    error: Color::Red,
    warning: Color::Yellow,
    secondary: Color::White,
    info: Color::Grey,
};
