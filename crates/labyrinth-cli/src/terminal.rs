//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for maze rendering. It abstracts terminal capabilities and provides a
//! consistent interface for styled text output.

use labyrinth_lib::Glyphs;

/// ANSI escape codes for maze cells and headings.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Gray for walls.
    pub const WALL: &str = "\x1b[90m";
    /// Bold reverse red for the start marker.
    pub const START: &str = "\x1b[1;7;31m";
    /// Bold reverse green for the goal marker.
    pub const GOAL: &str = "\x1b[1;7;32m";
    /// Bright yellow for solution path cells.
    pub const PATH: &str = "\x1b[1;93m";
    /// Red for explored cells off the solution path.
    pub const EXPLORED: &str = "\x1b[31m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub wall: &'static str,
    pub start: &'static str,
    pub goal: &'static str,
    pub path: &'static str,
    pub explored: &'static str,
    pub heading: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            wall: colors::WALL,
            start: colors::START,
            goal: colors::GOAL,
            path: colors::PATH,
            explored: colors::EXPLORED,
            heading: colors::WHITE_BOLD,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            wall: "",
            start: "",
            goal: "",
            path: "",
            explored: "",
            heading: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Whether this palette emits any escape codes.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI colour should be emitted.
///
/// `NO_COLOR` (any value) and `TERM=dumb` turn colour off.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    !term_is_dumb()
}

/// Whether the block wall glyph `█` can be drawn.
///
/// A UTF-8 `LC_ALL` or `LANG` enables it. Windows consoles draw it unless
/// `TERM=dumb`. Everywhere else the maze falls back to `#` walls.
#[must_use]
pub fn supports_unicode() -> bool {
    if ["LC_ALL", "LANG"]
        .iter()
        .any(|key| std::env::var(key).is_ok_and(|value| locale_is_utf8(&value)))
    {
        return true;
    }
    cfg!(windows) && !term_is_dumb()
}

/// Glyph set for maze drawings: ASCII when forced or when the terminal
/// cannot draw block walls.
#[must_use]
pub fn maze_glyphs(force_ascii: bool) -> Glyphs {
    if force_ascii || !supports_unicode() {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}

fn term_is_dumb() -> bool {
    std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"))
}

fn locale_is_utf8(value: &str) -> bool {
    let upper = value.to_ascii_uppercase();
    upper.contains("UTF-8") || upper.contains("UTF8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_palette_colored() {
        let p = ColorPalette::colored();
        assert!(!p.reset.is_empty());
        assert!(!p.start.is_empty());
        assert!(!p.is_plain());
    }

    #[test]
    fn test_color_palette_plain() {
        let p = ColorPalette::plain();
        assert!(p.reset.is_empty());
        assert!(p.path.is_empty());
        assert!(p.is_plain());
    }

    // supports_color() and supports_unicode() read process-global environment
    // variables, so every test that modifies them holds ENV_MUTEX.

    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Run `f` with temporary environment variable changes, restoring the
    /// previous values afterwards.
    fn with_env_vars<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        use std::env;

        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let saved: Vec<_> = vars.iter().map(|(k, _)| (*k, env::var_os(k))).collect();

        for (key, value) in vars {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        let result = f();

        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }

        result
    }

    #[test]
    fn test_supports_color_no_color_set() {
        with_env_vars(&[("NO_COLOR", Some("1")), ("TERM", None)], || {
            assert!(!supports_color(), "NO_COLOR=1 should disable colors");
        });
    }

    #[test]
    fn test_supports_color_term_dumb() {
        with_env_vars(&[("NO_COLOR", None), ("TERM", Some("dumb"))], || {
            assert!(!supports_color(), "TERM=dumb should disable colors");
        });
    }

    #[test]
    fn test_supports_color_default() {
        with_env_vars(
            &[("NO_COLOR", None), ("TERM", Some("xterm-256color"))],
            || {
                assert!(supports_color(), "Normal terminal should support colors");
            },
        );
    }

    #[test]
    fn test_supports_unicode_lang_utf8() {
        with_env_vars(&[("LANG", Some("en_US.UTF-8")), ("LC_ALL", None)], || {
            assert!(supports_unicode(), "LANG=en_US.UTF-8 should enable Unicode");
        });
    }

    #[test]
    fn test_locale_detection_accepts_both_spellings() {
        assert!(locale_is_utf8("en_US.UTF-8"));
        assert!(locale_is_utf8("C.utf8"));
        assert!(!locale_is_utf8("POSIX"));
    }

    #[test]
    fn test_forced_ascii_glyphs_ignore_locale() {
        with_env_vars(&[("LANG", Some("en_US.UTF-8")), ("LC_ALL", None)], || {
            assert_eq!(maze_glyphs(true).wall, '#');
            assert_eq!(maze_glyphs(false).wall, '█');
        });
    }

    #[test]
    #[cfg(not(windows))]
    fn test_maze_glyphs_fall_back_without_utf_locale() {
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert_eq!(maze_glyphs(false), Glyphs::ascii());
        });
    }

    #[test]
    #[cfg(not(windows))]
    fn test_supports_unicode_no_utf_hint() {
        with_env_vars(&[("LANG", Some("C")), ("LC_ALL", None)], || {
            assert!(
                !supports_unicode(),
                "Non-UTF locale should disable Unicode on Unix"
            );
        });
    }
}
