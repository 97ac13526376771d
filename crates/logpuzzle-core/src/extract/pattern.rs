//! The puzzle fragment grammar, kept as a named pattern so it can be tested on its own.

use regex::Regex;

use super::ExtractError;

/// Built-in grammar: non-empty `/`-separated segments, one of which holds a
/// whole-word `puzzle` token, ending in `-<answer>.<ext>`. The answer may
/// contain dots; the last dot starts the extension.
///
/// Segments never contain `.`, so a match cannot begin inside `//host.name`.
/// Matches both `/edu/languages/google-python-class/images/puzzle/a-baaa.jpg`
/// and `/~foo/puzzle-bar-aaab.jpg`.
pub const DEFAULT_PUZZLE_PATTERN: &str =
    r"(?:/[\w~-]+)*?/[\w~-]*?\bpuzzle\b[\w~-]*(?:/[\w~-]+)*-[\w.]+\.\w+";

/// Fixed eight-segment grammar (`dir/dir/a-b-c/dir/dir/dir-answer.ext`),
/// anchored on one leading non-whitespace character that is part of the match.
/// Only matches the classic `/edu/languages/google-python-class/...` layout.
pub const LEGACY_PUZZLE_PATTERN: &str = r"\S\w+/\w+/\w+-\w+-\w+/\w+/\w+/\w+-\D+\.\w+";

/// Compiled fragment grammar.
#[derive(Debug, Clone)]
pub struct PuzzlePattern {
    regex: Regex,
}

impl PuzzlePattern {
    /// Compile a custom grammar (e.g. from config).
    pub fn new(pattern: &str) -> Result<Self, ExtractError> {
        let regex = Regex::new(pattern).map_err(|source| ExtractError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Built-in grammar, or `pattern` when given.
    pub fn from_override(pattern: Option<&str>) -> Result<Self, ExtractError> {
        match pattern {
            Some(p) => Self::new(p),
            None => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping fragments in `text`, left to right.
    pub fn fragments<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex.find_iter(text).map(|m| m.as_str())
    }
}

impl Default for PuzzlePattern {
    fn default() -> Self {
        Self {
            regex: Regex::new(DEFAULT_PUZZLE_PATTERN).expect("built-in puzzle pattern compiles"),
        }
    }
}
