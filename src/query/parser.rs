use tracing::warn;
use crate::analysis::analyzer::Analyzer;
use crate::analysis::tokenizer::is_valid_word;
use crate::core::error::{Error, Result};
use crate::query::ast::{Query, QueryWord};

/// Query parser for converting raw query text into plus and minus words
pub struct QueryParser<'a> {
    pub analyzer: &'a Analyzer,
    pub minus_prefix: char,
}

impl<'a> QueryParser<'a> {
    pub fn new(analyzer: &'a Analyzer) -> Self {
        QueryParser {
            analyzer,
            minus_prefix: '-',
        }
    }

    /// Parse a query string.
    /// Examples:
    /// - "fluffy cat" -> plus words {cat, fluffy}
    /// - "cat -dog" -> plus {cat}, minus {dog}
    /// - "-" or "--dog" -> error
    pub fn parse<'q>(&self, input: &'q str) -> Result<Query<'q>> {
        let mut query = Query::new();

        for token in self.analyzer.tokenize(input) {
            let word = self.parse_word(token.text).inspect_err(|err| {
                warn!(position = token.position, error = %err, "rejected query");
            })?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                query.minus_words.insert(word.text);
            } else {
                query.plus_words.insert(word.text);
            }
        }

        Ok(query)
    }

    fn parse_word<'q>(&self, token: &'q str) -> Result<QueryWord<'q>> {
        if token.is_empty() {
            return Err(Error::invalid_argument("Query word is empty"));
        }

        let (text, is_minus) = match token.strip_prefix(self.minus_prefix) {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if text.is_empty() {
            return Err(Error::invalid_argument(format!(
                "Query word {:?} has nothing after the minus",
                token
            )));
        }
        if text.starts_with(self.minus_prefix) {
            return Err(Error::invalid_argument(format!(
                "Query word {:?} has a double minus",
                token
            )));
        }
        if !is_valid_word(text) {
            return Err(Error::invalid_argument(format!(
                "Query word {:?} contains control characters",
                token
            )));
        }

        Ok(QueryWord {
            text,
            is_minus,
            is_stop: self.analyzer.is_stop_word(text),
        })
    }
}
