use super::{token::*, LineNumber, Source};
use tracing::{debug, warn};

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer::new(s).lex()
}

fn is_basic_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

fn is_word_start(c: char) -> bool {
    is_basic_alphabetic(c) || c == '_' || c == '$' || c == '%'
}

fn is_word_char(c: char) -> bool {
    is_basic_alphabetic(c) || is_basic_digit(c) || c == '_'
}

fn is_type_suffix(c: char) -> bool {
    c == '$' || c == '%'
}

/// Every scanner starts with the cursor on the first character of its
/// token and leaves it on the last one.
struct BasicLexer {
    source: Source,
    line: LineNumber,
    column: usize,
    tokens: Vec<Token>,
    warnings: usize,
}

impl BasicLexer {
    fn new(s: &str) -> BasicLexer {
        BasicLexer {
            source: Source::new(s),
            line: 1,
            column: 0,
            tokens: vec![],
            warnings: 0,
        }
    }

    fn lex(mut self) -> Vec<Token> {
        while !self.source.at_end() {
            let ch = match self.source.peek(0) {
                Some(ch) => ch,
                None => break,
            };
            let token = if is_basic_whitespace(ch) {
                self.column += 1;
                None
            } else if ch == '\r' {
                None
            } else if ch == '\n' {
                let token = Token::new(TokenKind::EndOfLine, self.line, self.column);
                self.line += 1;
                self.column = 0;
                Some(token)
            } else if ch == '"' {
                Some(self.string())
            } else if is_word_start(ch) {
                Some(self.word(ch))
            } else if is_basic_digit(ch) || ch == '.' {
                Some(self.number(ch))
            } else if TokenKind::one_char_symbol(ch).is_some() {
                self.symbol(ch)
            } else {
                warn!(
                    "unrecognized character {:?} at line {}, column {}",
                    ch, self.line, self.column
                );
                self.warnings += 1;
                self.column += 1;
                None
            };
            if let Some(token) = token {
                self.tokens.push(token);
            }
            self.source.skip(1);
        }
        debug!(
            tokens = self.tokens.len(),
            warnings = self.warnings,
            "lexed {} lines",
            self.line
        );
        self.tokens
    }

    fn word(&mut self, first: char) -> Token {
        let (line, column) = (self.line, self.column);
        let mut s = String::new();
        s.push(first);
        let mut label = false;
        if !is_type_suffix(first) {
            while let Some(pk) = self.source.peek(1) {
                if is_type_suffix(pk) {
                    if let Some(ch) = self.source.advance() {
                        s.push(ch);
                    }
                    break;
                }
                if pk == ':' {
                    self.source.advance();
                    label = true;
                    break;
                }
                if !is_word_char(pk) {
                    break;
                }
                if let Some(ch) = self.source.advance() {
                    s.push(ch);
                }
            }
        }
        self.column += s.chars().count();
        if label {
            self.column += 1;
            return Token::with_text(TokenKind::Label, line, column, s);
        }
        match TokenKind::keyword(&s) {
            Some(kind) => Token::new(kind, line, column),
            None => Token::with_text(TokenKind::Word, line, column, s),
        }
    }

    fn number(&mut self, first: char) -> Token {
        let (line, column) = (self.line, self.column);
        let mut s = String::new();
        s.push(first);
        let mut decimal = first == '.';
        while let Some(pk) = self.source.peek(1) {
            if pk == '.' {
                if decimal {
                    break;
                }
                decimal = true;
            } else if !is_basic_digit(pk) {
                break;
            }
            if let Some(ch) = self.source.advance() {
                s.push(ch);
            }
        }
        self.column += s.chars().count();
        Token::with_text(TokenKind::Number, line, column, s)
    }

    fn string(&mut self) -> Token {
        let (line, column) = (self.line, self.column);
        let mut s = String::new();
        self.column += 1;
        loop {
            let ch = match self.source.advance() {
                Some('"') => {
                    self.column += 1;
                    break;
                }
                Some('\\') => {
                    self.column += 1;
                    self.source.advance()
                }
                ch => ch,
            };
            match ch {
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                        self.column = 0;
                    } else {
                        self.column += 1;
                    }
                    s.push(ch);
                }
                None => {
                    warn!(
                        "unterminated string literal at line {}, column {}",
                        line, column
                    );
                    self.warnings += 1;
                    break;
                }
            }
        }
        Token::with_text(TokenKind::StringLiteral, line, column, s)
    }

    fn symbol(&mut self, ch: char) -> Option<Token> {
        let (line, column) = (self.line, self.column);
        let pair = format!("{}{}", ch, self.source.peek_slice(1));
        if let Some(kind) = TokenKind::two_char_symbol(&pair) {
            self.source.advance();
            self.column += 2;
            return Some(Token::new(kind, line, column));
        }
        self.column += 1;
        TokenKind::one_char_symbol(ch).map(|kind| Token::new(kind, line, column))
    }
}
