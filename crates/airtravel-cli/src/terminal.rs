//! Terminal styling and color utilities.
//!
//! ANSI escape codes plus capability detection, so text output can show route
//! highlight colors as swatches when the terminal allows it.

use airtravel_lib::Rgb;

/// ANSI escape codes for text styling.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary details.
    pub const GRAY: &str = "\x1b[90m";
}

/// Resolved styling codes, empty when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    truecolor: bool,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            truecolor: true,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            truecolor: false,
        }
    }

    /// Pick `colored()` or `plain()` from the environment.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// A two-cell block painted in `color`, or nothing when color is off.
    #[must_use]
    pub fn swatch(&self, color: Rgb) -> String {
        if self.truecolor {
            format!(
                "\x1b[38;2;{};{};{}m██{} ",
                color.r, color.g, color.b, self.reset
            )
        } else {
            String::new()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// Respects `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
