//! Terminal styling and number formatting utilities.

use std::io::IsTerminal;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for STRT tags.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for intermediate steps.
    pub const TAG_STEP: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for GOAL tags.
    pub const TAG_GOAL: &str = "\x1b[1;7;35m";
    /// Bright bold white for node identifiers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for coordinates and decorations.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for segment distances.
    pub const GREEN: &str = "\x1b[32m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color
/// is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_step: &'static str,
    pub tag_goal: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_step: colors::TAG_STEP,
            tag_goal: colors::TAG_GOAL,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_step: "",
            tag_goal: "",
            white_bold: "",
            gray: "",
            green: "",
        }
    }

    /// Pick a palette based on the terminal capabilities.
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Whether ANSI colors should be emitted on stdout.
///
/// Colors are off when stdout is not a terminal, when `NO_COLOR` is set,
/// or when `TERM=dumb`.
pub fn supports_color() -> bool {
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

fn color_allowed(no_color: bool, term: Option<&str>, stdout_is_terminal: bool) -> bool {
    let dumb = term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    stdout_is_terminal && !no_color && !dumb
}

/// Format an integer with thousands separators (`1234567` -> `1,234,567`).
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let lead = match digits.len() % 3 {
        0 => 3,
        rem => rem,
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    out.push_str(&digits[..lead]);
    for group in digits.as_bytes()[lead..].chunks(3) {
        out.push(',');
        out.extend(group.iter().map(|&digit| char::from(digit)));
    }
    out
}

/// Format a distance in meters with separators and two decimals.
pub fn format_meters(meters: f64) -> String {
    let hundredths = (meters.max(0.0) * 100.0).round() as u64;
    format!(
        "{}.{:02}",
        format_with_separators(hundredths / 100),
        hundredths % 100
    )
}
