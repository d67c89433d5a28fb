use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// A token's text together with its position in the sequence it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, position: usize) -> Self {
        Self { text, position }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Borrow a token sequence as positioned tokens.
pub fn tokens<S: AsRef<str>>(sequence: &[S]) -> Vec<Token<'_>> {
    sequence
        .iter()
        .enumerate()
        .map(|(position, text)| Token::new(text.as_ref(), position))
        .collect()
}
