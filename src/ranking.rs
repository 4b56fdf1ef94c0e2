use std::cmp::Reverse;

use crate::word::Word;

/// Order words longest first, so the most constraining words are placed while the grid is still
/// open. `sort_by_key` is stable, so equal-length words keep their input order.
pub fn rank_words(mut words: Vec<Word>) -> Vec<Word> {
    words.sort_by_key(|word| Reverse(word.len()));
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuilderConfig;
    use crate::word::parse_words;

    fn ranked(tokens: &[&str]) -> Vec<String> {
        let words = parse_words(tokens, &BuilderConfig::default()).unwrap();
        rank_words(words).into_iter().map(|word| word.text).collect()
    }

    #[test]
    fn test_longest_first() {
        assert_eq!(ranked(&["ox", "zebra", "cat"]), vec!["ZEBRA", "CAT", "OX"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        assert_eq!(ranked(&["tiger", "cat", "dog"]), vec!["TIGER", "CAT", "DOG"]);
        assert_eq!(ranked(&["dog", "cat", "tiger", "ant"]), vec!["TIGER", "DOG", "CAT", "ANT"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_words(vec![]).is_empty());
    }

    #[test]
    fn test_input_index_survives_ranking() {
        let words = parse_words(&["ab", "abcd", "abc"], &BuilderConfig::default()).unwrap();
        let indices: Vec<_> = rank_words(words).iter().map(|word| word.input_index).collect();
        assert_eq!(indices, vec![1, 2, 0]);
    }
}
