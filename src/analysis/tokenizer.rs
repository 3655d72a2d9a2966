use crate::analysis::token::Token;

pub trait Tokenizer: Send + Sync {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;

    fn name(&self) -> &str;
}

/// Splits on ASCII space only; tabs and other control characters stay inside
/// the token so that validation can reject them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceTokenizer;

impl Tokenizer for SpaceTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        let mut position = 0u32;

        for word in split_words(text) {
            tokens.push(Token::new(word, position));
            position += 1;
        }

        tokens
    }

    fn name(&self) -> &str {
        "space"
    }
}

/// Split `text` into words separated by one or more spaces.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// A word is valid unless it contains a control character (codes 0..32).
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < b' ')
}
