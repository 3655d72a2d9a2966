use std::collections::BTreeSet;
use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{is_valid_word, split_words};
use crate::core::error::{Error, Result};

#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    pub stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    /// Build from any string container. Empty entries are skipped and
    /// duplicates collapse; a word with control characters is rejected.
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = BTreeSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(Error::invalid_argument(format!(
                    "Stop word {:?} contains control characters",
                    word
                )));
            }
            unique.insert(word.to_string());
        }

        Ok(StopWordFilter { stop_words: unique })
    }

    /// Build from space separated text.
    pub fn from_text(text: &str) -> Result<Self> {
        StopWordFilter::new(split_words(text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl TokenFilter for StopWordFilter {
    fn filter<'a>(&self, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
        tokens.into_iter()
            .filter(|token| !self.contains(token.text))
            .collect()
    }

    fn name(&self) -> &str {
        "stop_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};

    #[test]
    fn from_text_deduplicates() {
        let filter = StopWordFilter::from_text("in the  in").unwrap();
        assert_eq!(filter.len(), 2);
        assert!(filter.contains("in"));
        assert!(filter.contains("the"));
    }

    #[test]
    fn container_skips_empty_strings() {
        let filter = StopWordFilter::new(vec!["", "and", ""]).unwrap();
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn invalid_stop_word_rejected() {
        assert!(StopWordFilter::new(["ok", "b\u{2}ad"]).is_err());
    }

    #[test]
    fn filter_drops_stop_tokens() {
        let filter = StopWordFilter::from_text("in the").unwrap();
        let tokens = filter.filter(SpaceTokenizer.tokenize("cat in the city"));
        let words: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(words, vec!["cat", "city"]);
    }
}
