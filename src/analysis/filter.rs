use crate::analysis::token::Token;

pub trait TokenFilter: Send + Sync {
    fn filter<'a>(&self, tokens: Vec<Token<'a>>) -> Vec<Token<'a>>;

    fn name(&self) -> &str;
}
