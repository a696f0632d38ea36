use super::{Column, LineNumber};
use std::collections::HashMap;

thread_local!(
    static KEYWORDS: HashMap<&'static str, TokenKind> = TokenKind::KEYWORDS
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect();
    static ONE_CHAR_SYMBOLS: HashMap<char, TokenKind> = TokenKind::ONE_CHAR_SYMBOLS
        .iter()
        .filter_map(|kind| kind.as_str().chars().next().map(|ch| (ch, *kind)))
        .collect();
    static TWO_CHAR_SYMBOLS: HashMap<&'static str, TokenKind> = TokenKind::TWO_CHAR_SYMBOLS
        .iter()
        .map(|kind| (kind.as_str(), *kind))
        .collect();
);

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: LineNumber,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: LineNumber, column: usize) -> Token {
        Token {
            kind,
            text: None,
            line,
            column,
        }
    }

    pub fn with_text<S: Into<String>>(
        kind: TokenKind,
        line: LineNumber,
        column: usize,
        text: S,
    ) -> Token {
        Token {
            kind,
            text: Some(text.into()),
            line,
            column,
        }
    }

    pub fn text(&self) -> &str {
        match &self.text {
            Some(s) => s.as_str(),
            None => self.kind.as_str(),
        }
    }

    /// Columns the token occupies on its line.
    pub fn columns(&self) -> Column {
        let width = match self.kind {
            TokenKind::StringLiteral => self.text().chars().count() + 2,
            TokenKind::Label => self.text().chars().count() + 1,
            _ => self.text().chars().count(),
        };
        self.column..self.column + width
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{:?}({})", self.kind, text),
            None => write!(f, "{:?}", self.kind),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Number,
    StringLiteral,
    Label,
    EndOfLine,
    Print,
    Read,
    Input,
    Data,
    Gosub,
    For,
    To,
    Step,
    Next,
    Return,
    If,
    Then,
    While,
    End,
    LessEqual,
    GreaterEqual,
    NotEqual,
    Less,
    Greater,
    Equal,
    LParen,
    RParen,
    Plus,
    Minus,
    Multiply,
    Divide,
    Comma,
}

impl TokenKind {
    const KEYWORDS: [TokenKind; 14] = [
        TokenKind::Print,
        TokenKind::Read,
        TokenKind::Input,
        TokenKind::Data,
        TokenKind::Gosub,
        TokenKind::For,
        TokenKind::To,
        TokenKind::Step,
        TokenKind::Next,
        TokenKind::Return,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::While,
        TokenKind::End,
    ];

    const ONE_CHAR_SYMBOLS: [TokenKind; 10] = [
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::Equal,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::Comma,
    ];

    const TWO_CHAR_SYMBOLS: [TokenKind; 3] = [
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::NotEqual,
    ];

    /// Keyword lookup ignores case.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let word = word.to_ascii_lowercase();
        KEYWORDS.with(|k| k.get(word.as_str()).copied())
    }

    pub fn one_char_symbol(ch: char) -> Option<TokenKind> {
        ONE_CHAR_SYMBOLS.with(|s| s.get(&ch).copied())
    }

    pub fn two_char_symbol(s: &str) -> Option<TokenKind> {
        TWO_CHAR_SYMBOLS.with(|t| t.get(s).copied())
    }

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Word | Number | StringLiteral | Label => "",
            EndOfLine => "\n",
            Print => "print",
            Read => "read",
            Input => "input",
            Data => "data",
            Gosub => "gosub",
            For => "for",
            To => "to",
            Step => "step",
            Next => "next",
            Return => "return",
            If => "if",
            Then => "then",
            While => "while",
            End => "end",
            LessEqual => "<=",
            GreaterEqual => ">=",
            NotEqual => "<>",
            Less => "<",
            Greater => ">",
            Equal => "=",
            LParen => "(",
            RParen => ")",
            Plus => "+",
            Minus => "-",
            Multiply => "*",
            Divide => "/",
            Comma => ",",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword() {
        assert_eq!(TokenKind::keyword("GoSub"), Some(TokenKind::Gosub));
        assert_eq!(TokenKind::keyword("PICKLES"), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(TokenKind::one_char_symbol('/'), Some(TokenKind::Divide));
        assert_eq!(TokenKind::one_char_symbol('^'), None);
        assert_eq!(TokenKind::two_char_symbol("<>"), Some(TokenKind::NotEqual));
        assert_eq!(TokenKind::two_char_symbol("=<"), None);
    }

    #[test]
    fn test_display() {
        let t = Token::with_text(TokenKind::Word, 1, 0, "This");
        assert_eq!(t.to_string(), "Word(This)");
        assert_eq!(Token::new(TokenKind::EndOfLine, 1, 4).to_string(), "EndOfLine");
        assert_eq!(Token::new(TokenKind::NotEqual, 1, 4).columns(), 4..6);
    }
}
