use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{is_valid_word, SpaceTokenizer, Tokenizer};
use crate::core::error::{Error, Result};

/// Text analysis pipeline: split, validate, drop stop words
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub stop_words: StopWordFilter,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>, stop_words: StopWordFilter) -> Self {
        Analyzer { tokenizer, stop_words }
    }

    /// Space separated words with the given stop words removed
    pub fn with_stop_words(stop_words: StopWordFilter) -> Self {
        Analyzer::new(Box::new(SpaceTokenizer), stop_words)
    }

    /// Split `text` without validation or stop word removal.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.tokenizer.tokenize(text)
    }

    /// Split and validate every word, then drop stop words. Fails on the
    /// first word containing a control character.
    pub fn analyze<'a>(&self, text: &'a str) -> Result<Vec<Token<'a>>> {
        let tokens = self.tokenizer.tokenize(text);

        if let Some(bad) = tokens.iter().find(|token| !is_valid_word(token.text)) {
            return Err(Error::invalid_argument(format!(
                "Word {:?} at position {} is invalid",
                bad.text, bad.position
            )));
        }

        Ok(self.stop_words.filter(tokens))
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}
