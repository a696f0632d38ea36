use super::token::*;
use super::{Column, LineNumber};

/// ## Token stream cursor
///
/// The parser only ever looks ahead and consumes from the front.

#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> TokenStream {
        TokenStream {
            tokens,
            position: 0,
        }
    }

    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.position + offset)
    }

    pub fn more_tokens(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Consumes the head token if it is of `kind`.
    pub fn match_and_remove(&mut self, kind: TokenKind) -> Option<Token> {
        match self.tokens.get(self.position) {
            Some(token) if token.kind == kind => {
                self.position += 1;
                Some(token.clone())
            }
            _ => None,
        }
    }

    /// Consumes the head token whatever its kind.
    pub fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    /// Line of the head token, or of the last token at the end.
    pub fn line(&self) -> LineNumber {
        self.peek(0)
            .or_else(|| self.tokens.last())
            .map(|t| t.line)
            .unwrap_or(1)
    }

    pub fn column(&self) -> Column {
        match self.peek(0) {
            Some(token) => token.columns(),
            None => match self.tokens.last() {
                Some(token) => token.columns().end..token.columns().end,
                None => 0..0,
            },
        }
    }
}
