//! Error types for crossword construction, each with a stable code and an optional hint.
//!
//! # Error Codes
//!
//! - V001-V006: [`ValidationError`] (a word or word list the builder refuses)
//! - C001-C005: [`ConfigError`] (a [`BuilderConfig`](crate::config::BuilderConfig) that cannot work)
//! - G001-G002: [`GridError`] (a refused write to the board)
//!
//! Failing to place a word is not an error; the word is reported as skipped.
//!
//! ```
//! use xwordbuild::errors::ValidationError;
//!
//! let err = ValidationError::TooShort { word: "A".to_string(), length: 1, min: 2 };
//! assert_eq!(err.code(), "V003");
//! assert!(err.display_detailed().contains("at least"));
//! ```

use crate::GridCoord;

/// A word or word list rejected before construction starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty word (input position {input_index})")]
    Empty { input_index: usize },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    NotAlphabetic { word: String, invalid_char: char },

    #[error("Word \"{word}\" is too short: {length} letters, minimum is {min}")]
    TooShort { word: String, length: usize, min: usize },

    #[error("Word \"{word}\" is too long: {length} letters, maximum is {max}")]
    TooLong { word: String, length: usize, max: usize },

    #[error("Too many words: {count} given, maximum is {max}")]
    TooManyWords { count: usize, max: usize },

    #[error("Word \"{word}\" does not match its letters \"{letters}\"")]
    LettersMismatch { word: String, letters: String },
}

impl ValidationError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Empty { .. } => "V001",
            ValidationError::NotAlphabetic { .. } => "V002",
            ValidationError::TooShort { .. } => "V003",
            ValidationError::TooLong { .. } => "V004",
            ValidationError::TooManyWords { .. } => "V005",
            ValidationError::LettersMismatch { .. } => "V006",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAlphabetic { .. } => Some("Words may only contain the letters A-Z (in either case)"),
            ValidationError::TooShort { .. } => Some("Every word must have at least two letters"),
            ValidationError::TooLong { .. } => Some("A word cannot be longer than the grid is wide"),
            ValidationError::TooManyWords { .. } => Some("Drop some words or raise `max_words` in the builder config"),
            ValidationError::LettersMismatch { .. } => Some("Build words with `Word::parse` rather than editing their fields"),
            ValidationError::Empty { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A builder configuration that cannot produce a valid construction run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid size {size} is too small (minimum is {min})")]
    GridTooSmall { size: usize, min: usize },

    #[error("Minimum word length {min_word_length} is below 2")]
    MinWordLengthTooSmall { min_word_length: usize },

    #[error("contradictory word length bounds: min={min}, max={max}")]
    ContradictoryLengthBounds { min: usize, max: usize },

    #[error("Maximum word length {max_word_length} exceeds grid size {grid_size}")]
    WordLongerThanGrid { max_word_length: usize, grid_size: usize },

    #[error("Grid size {size} is too large (maximum is {max})")]
    GridTooLarge { size: usize, max: usize },
}

impl ConfigError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::GridTooSmall { .. } => "C001",
            ConfigError::MinWordLengthTooSmall { .. } => "C002",
            ConfigError::ContradictoryLengthBounds { .. } => "C003",
            ConfigError::WordLongerThanGrid { .. } => "C004",
            ConfigError::GridTooLarge { .. } => "C005",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ConfigError::ContradictoryLengthBounds { .. } => Some("The minimum word length cannot exceed the maximum"),
            ConfigError::WordLongerThanGrid { .. } => Some("The longest word is centered on the middle row, so it must fit across the grid"),
            ConfigError::GridTooLarge { .. } => Some("The board is stored as grid_size * grid_size cells; pick a smaller size"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// A write the grid refused. The engine validates every placement before writing, so seeing one
/// of these from a construction run means the fit check let something through.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Cell {coord:?} is outside the {size}x{size} grid")]
    OutOfBounds { coord: GridCoord, size: usize },

    #[error("Cell {coord:?} already holds '{existing}', refusing to write '{attempted}'")]
    Conflict { coord: GridCoord, existing: char, attempted: char },
}

impl GridError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::OutOfBounds { .. } => "G001",
            GridError::Conflict { .. } => "G002",
        }
    }
}

/// Top-level error returned by [`CrosswordBuilder::build`](crate::CrosswordBuilder::build).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CrosswordError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),
}

impl CrosswordError {
    /// Returns the code of the wrapped error
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CrosswordError::Validation(e) => e.code(),
            CrosswordError::Config(e) => e.code(),
            CrosswordError::Grid(e) => e.code(),
        }
    }

    /// Formats the wrapped error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            CrosswordError::Validation(e) => e.display_detailed(),
            CrosswordError::Config(e) => e.display_detailed(),
            CrosswordError::Grid(e) => format_error_with_code_and_help(&e.to_string(), e.code(), None),
        }
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_error_codes_and_help() {
        let err = ValidationError::TooLong { word: "ABCDEFGHIJKLMNOP".to_string(), length: 16, max: 15 };
        assert_eq!(err.code(), "V004");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("V004"));
        assert!(detailed.contains("longer than the grid"));
    }

    #[test]
    fn test_detailed_without_help_has_no_trailing_line() {
        let err = ValidationError::Empty { input_index: 3 };
        assert_eq!(err.display_detailed(), "Empty word (input position 3) (V001)");
    }

    #[test]
    fn test_wrapped_error_keeps_inner_code() {
        let err: CrosswordError = ConfigError::GridTooSmall { size: 2, min: 3 }.into();
        assert_eq!(err.code(), "C001");
        assert_eq!(err.to_string(), "Grid size 2 is too small (minimum is 3)");

        let err: CrosswordError = GridError::Conflict { coord: (1, 2), existing: 'A', attempted: 'B' }.into();
        assert_eq!(err.code(), "G002");
        assert!(err.display_detailed().ends_with("(G002)"));
    }

    /// Test that all error variants have unique error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let codes: Vec<&'static str> = vec![
            ValidationError::Empty { input_index: 0 }.code(),
            ValidationError::NotAlphabetic { word: "A1".to_string(), invalid_char: '1' }.code(),
            ValidationError::TooShort { word: "A".to_string(), length: 1, min: 2 }.code(),
            ValidationError::TooLong { word: "A".to_string(), length: 1, max: 0 }.code(),
            ValidationError::TooManyWords { count: 21, max: 20 }.code(),
            ValidationError::LettersMismatch { word: "CAT".to_string(), letters: "COT".to_string() }.code(),
            ConfigError::GridTooSmall { size: 1, min: 3 }.code(),
            ConfigError::MinWordLengthTooSmall { min_word_length: 1 }.code(),
            ConfigError::ContradictoryLengthBounds { min: 5, max: 3 }.code(),
            ConfigError::WordLongerThanGrid { max_word_length: 16, grid_size: 15 }.code(),
            ConfigError::GridTooLarge { size: 1 << 33, max: 1024 }.code(),
            GridError::OutOfBounds { coord: (15, 0), size: 15 }.code(),
            GridError::Conflict { coord: (0, 0), existing: 'A', attempted: 'B' }.code(),
        ];

        let unique: HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len(), "Duplicate error code in {codes:?}");
    }
}
