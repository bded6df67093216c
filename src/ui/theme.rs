use crossterm::style::Color;

/// Design tokens for ctc CLI output.
///
/// All colors and icons used by views come from this module.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const BULLET: &str = "•";
    pub const SKIP: &str = "○";
    pub const ARROW: &str = "↳";
    pub const BUILD: &str = "🔨";
    pub const DIFF: &str = "Δ";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const BULLET: &str = "*";
    pub const SKIP: &str = "[--]";
    pub const ARROW: &str = "[>]";
    pub const BUILD: &str = "[BUILD]";
    pub const DIFF: &str = "[DIFF]";
}

/// Horizontal rule used around grouped listings
pub const RULE_UNICODE: &str = "─";
pub const RULE_ASCII: &str = "=";
pub const RULE_WIDTH: usize = 50;
