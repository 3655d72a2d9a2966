/// Token borrowed from the text it was split out of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,     // The token text
    pub position: u32,     // Word index in the source text
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, position: u32) -> Self {
        Token { text, position }
    }
}
