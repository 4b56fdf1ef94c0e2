use smallvec::SmallVec;

use crate::config::BuilderConfig;
use crate::errors::ValidationError;
use crate::MAX_WORD_LENGTH;

/// A validated, uppercase word ready for placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub letters: SmallVec<[char; MAX_WORD_LENGTH]>,
    /// Position of this word in the list the caller passed in, before ranking.
    pub input_index: usize,
}

impl Word {
    /// Validate a raw token against `config` and normalize it to uppercase.
    pub fn parse(raw: &str, input_index: usize, config: &BuilderConfig) -> Result<Word, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ValidationError::Empty { input_index });
        }

        if let Some(invalid_char) = raw.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(ValidationError::NotAlphabetic { word: raw.to_string(), invalid_char });
        }

        // ASCII only from here on, so bytes == chars.
        let length = raw.len();
        if length < config.min_word_length {
            return Err(ValidationError::TooShort { word: raw.to_string(), length, min: config.min_word_length });
        }
        if length > config.max_word_length {
            return Err(ValidationError::TooLong { word: raw.to_string(), length, max: config.max_word_length });
        }

        let text = raw.to_ascii_uppercase();
        let letters = text.chars().collect();

        Ok(Word { text, letters, input_index })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Validate a whole word list: the count first, then every token in order. The first failure is
/// returned.
pub fn parse_words<S: AsRef<str>>(tokens: &[S], config: &BuilderConfig) -> Result<Vec<Word>, ValidationError> {
    if tokens.len() > config.max_words {
        return Err(ValidationError::TooManyWords { count: tokens.len(), max: config.max_words });
    }

    tokens
        .iter()
        .enumerate()
        .map(|(input_index, token)| Word::parse(token.as_ref(), input_index, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let word = Word::parse("Tiger", 4, &BuilderConfig::default()).unwrap();
        assert_eq!(word.text, "TIGER");
        assert_eq!(word.letters.as_slice(), &['T', 'I', 'G', 'E', 'R']);
        assert_eq!(word.input_index, 4);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn test_parse_rejects_bad_words() {
        let config = BuilderConfig::default();

        assert_eq!(
            Word::parse("cat5", 0, &config),
            Err(ValidationError::NotAlphabetic { word: "cat5".to_string(), invalid_char: '5' })
        );
        assert_eq!(
            Word::parse("café", 0, &config),
            Err(ValidationError::NotAlphabetic { word: "café".to_string(), invalid_char: 'é' })
        );
        assert_eq!(
            Word::parse("a", 0, &config),
            Err(ValidationError::TooShort { word: "a".to_string(), length: 1, min: 2 })
        );
        assert_eq!(
            Word::parse("abcdefghijklmnop", 0, &config),
            Err(ValidationError::TooLong { word: "abcdefghijklmnop".to_string(), length: 16, max: 15 })
        );
        assert_eq!(Word::parse("   ", 7, &config), Err(ValidationError::Empty { input_index: 7 }));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let config = BuilderConfig::default();
        assert!(Word::parse("ab", 0, &config).is_ok());
        assert!(Word::parse("abcdefghijklmno", 0, &config).is_ok());
    }

    #[test]
    fn test_parse_words_checks_count() {
        let config = BuilderConfig { max_words: 2, ..BuilderConfig::default() };
        assert_eq!(
            parse_words(&["one", "two", "six"], &config),
            Err(ValidationError::TooManyWords { count: 3, max: 2 })
        );

        let words = parse_words(&["one", "two"], &config).unwrap();
        assert_eq!(words.iter().map(Word::as_str).collect::<Vec<_>>(), vec!["ONE", "TWO"]);
        assert_eq!(words[1].input_index, 1);
    }
}
