use crate::errors::ConfigError;
use crate::{GRID_SIZE, MAX_WORDS, MAX_WORD_LENGTH, MIN_WORD_LENGTH};

/// The smallest grid a construction run accepts.
pub const MIN_GRID_SIZE: usize = 3;

/// The largest grid a construction run accepts.
pub const MAX_GRID_SIZE: usize = 1024;

/// Static settings for a construction run. The defaults reproduce the classic 15x15 board with at
/// most 20 words of 2 to 15 letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    pub grid_size: usize,
    pub max_words: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            grid_size: GRID_SIZE,
            max_words: MAX_WORDS,
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
        }
    }
}

impl BuilderConfig {
    /// Default config on an `n`x`n` board. The maximum word length follows the grid size.
    pub fn with_grid_size(grid_size: usize) -> Self {
        BuilderConfig {
            grid_size,
            max_word_length: grid_size,
            ..BuilderConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall { size: self.grid_size, min: MIN_GRID_SIZE });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge { size: self.grid_size, max: MAX_GRID_SIZE });
        }
        if self.min_word_length < MIN_WORD_LENGTH {
            return Err(ConfigError::MinWordLengthTooSmall { min_word_length: self.min_word_length });
        }
        if self.min_word_length > self.max_word_length {
            return Err(ConfigError::ContradictoryLengthBounds {
                min: self.min_word_length,
                max: self.max_word_length,
            });
        }
        // The first word is always laid across the middle row, so it has to fit.
        if self.max_word_length > self.grid_size {
            return Err(ConfigError::WordLongerThanGrid {
                max_word_length: self.max_word_length,
                grid_size: self.grid_size,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BuilderConfig::default();
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.max_words, 20);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_with_grid_size_clamps_word_length() {
        let config = BuilderConfig::with_grid_size(9);
        assert_eq!(config.max_word_length, 9);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            BuilderConfig::with_grid_size(2).validate(),
            Err(ConfigError::GridTooSmall { size: 2, min: 3 })
        );
        assert_eq!(
            BuilderConfig::with_grid_size(1 << 33).validate(),
            Err(ConfigError::GridTooLarge { size: 1 << 33, max: MAX_GRID_SIZE })
        );
        assert_eq!(BuilderConfig::with_grid_size(MAX_GRID_SIZE).validate(), Ok(()));
        assert_eq!(
            BuilderConfig { min_word_length: 1, ..BuilderConfig::default() }.validate(),
            Err(ConfigError::MinWordLengthTooSmall { min_word_length: 1 })
        );
        assert_eq!(
            BuilderConfig { min_word_length: 6, max_word_length: 5, ..BuilderConfig::default() }.validate(),
            Err(ConfigError::ContradictoryLengthBounds { min: 6, max: 5 })
        );
        assert_eq!(
            BuilderConfig { max_word_length: 16, ..BuilderConfig::default() }.validate(),
            Err(ConfigError::WordLongerThanGrid { max_word_length: 16, grid_size: 15 })
        );
    }
}
