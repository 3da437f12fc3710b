//! Terminal color support for formatting output.
//!
//! With the `ansi` feature (default) styling goes through the `colored`
//! crate, which respects `NO_COLOR`, `CLICOLOR_FORCE` and TTY detection.
//! Without it every helper returns the input unchanged.

#[cfg(feature = "ansi")]
use colored::Colorize;

/// Semantic style of a piece of report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Section titles.
    Heading,
    /// Passing checks.
    Good,
    /// Failing checks.
    Bad,
    /// Secondary information (seed, shapes).
    Muted,
    /// Numbers worth drawing the eye to.
    Highlight,
}

/// Apply a tone to `s`.
#[cfg(feature = "ansi")]
pub fn paint(s: &str, tone: Tone) -> String {
    match tone {
        Tone::Heading => s.bold().to_string(),
        Tone::Good => s.green().bold().to_string(),
        Tone::Bad => s.red().bold().to_string(),
        Tone::Muted => s.dimmed().to_string(),
        Tone::Highlight => s.cyan().to_string(),
    }
}

/// Apply a tone to `s` (plain build: no-op).
#[cfg(not(feature = "ansi"))]
pub fn paint(s: &str, _tone: Tone) -> String {
    String::from(s)
}

pub fn bold(s: &str) -> String {
    paint(s, Tone::Heading)
}

pub fn good(s: &str) -> String {
    paint(s, Tone::Good)
}

pub fn bad(s: &str) -> String {
    paint(s, Tone::Bad)
}

pub fn dim(s: &str) -> String {
    paint(s, Tone::Muted)
}

pub fn highlight(s: &str) -> String {
    paint(s, Tone::Highlight)
}
