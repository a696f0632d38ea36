use super::{ast::*, token::*, Error, Function, Ident, LineNumber, TokenStream};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

/// Unwraps a partial match or gives up on the enclosing rule.
macro_rules! some {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return Ok(None),
        }
    };
}

pub fn parse(tokens: Vec<Token>) -> Result<Vec<Statement>> {
    Parser::parse(tokens)
}

struct Parser {
    tokens: TokenStream,
}

impl Parser {
    fn parse(tokens: Vec<Token>) -> Result<Vec<Statement>> {
        let mut parse = Parser {
            tokens: TokenStream::new(tokens),
        };
        let mut r: Vec<Statement> = vec![];
        parse.accept_separators();
        while let Some(statement) = parse.statement()? {
            r.push(statement);
            parse.accept_separators();
        }
        if let Some(token) = parse.tokens.peek(0) {
            warn!(
                "ignoring unparsed input from {} at line {}, column {}",
                token, token.line, token.column
            );
        }
        debug!(statements = r.len(), "parsed program");
        Ok(r)
    }

    /// Eats a run of end-of-line tokens. True if there was at least one.
    fn accept_separators(&mut self) -> bool {
        let mut found = false;
        while self.tokens.match_and_remove(TokenKind::EndOfLine).is_some() {
            found = true;
        }
        found
    }

    fn error(&self, message: &str) -> Error {
        error!(SyntaxError, self.tokens.line(), ..&self.tokens.column(); message)
    }

    fn statement(&mut self) -> Result<Option<Statement>> {
        let line = self.tokens.line();
        if let Some(label) = self.tokens.match_and_remove(TokenKind::Label) {
            let statement = some!(self.statement()?);
            return Ok(Some(Statement::Label(
                line,
                label.text().into(),
                Box::new(statement),
            )));
        }
        let kind = match self.tokens.peek(0) {
            Some(token) => token.kind,
            None => return Ok(None),
        };
        Statement::for_kind(self, kind, line)
    }

    fn boolean(&mut self) -> Result<Option<Expression>> {
        let lhs = some!(self.expression()?);
        use TokenKind::*;
        let op: fn(Box<Expression>, Box<Expression>) -> Expression = match self.tokens.peek(0) {
            Some(token) => match token.kind {
                Less => Expression::Less,
                LessEqual => Expression::LessEqual,
                Greater => Expression::Greater,
                GreaterEqual => Expression::GreaterEqual,
                NotEqual => Expression::NotEqual,
                Equal => Expression::Equal,
                _ => return Ok(None),
            },
            None => return Ok(None),
        };
        self.tokens.advance();
        let rhs = some!(self.expression()?);
        Ok(Some(op(Box::new(lhs), Box::new(rhs))))
    }

    fn expression(&mut self) -> Result<Option<Expression>> {
        let mut lhs = some!(self.term()?);
        loop {
            let op: fn(Box<Expression>, Box<Expression>) -> Expression =
                if self.tokens.match_and_remove(TokenKind::Plus).is_some() {
                    Expression::Add
                } else if self.tokens.match_and_remove(TokenKind::Minus).is_some() {
                    Expression::Subtract
                } else {
                    return Ok(Some(lhs));
                };
            let rhs = some!(self.term()?);
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
    }

    fn term(&mut self) -> Result<Option<Expression>> {
        let mut lhs = some!(self.factor()?);
        loop {
            let op: fn(Box<Expression>, Box<Expression>) -> Expression =
                if self.tokens.match_and_remove(TokenKind::Multiply).is_some() {
                    Expression::Multiply
                } else if self.tokens.match_and_remove(TokenKind::Divide).is_some() {
                    Expression::Divide
                } else {
                    return Ok(Some(lhs));
                };
            let rhs = some!(self.factor()?);
            lhs = op(Box::new(lhs), Box::new(rhs));
        }
    }

    fn factor(&mut self) -> Result<Option<Expression>> {
        if let Some(function) = self.builtin() {
            return self.call(function);
        }
        if let Some(token) = self.tokens.match_and_remove(TokenKind::Number) {
            return Ok(Some(Expression::for_number(&token)?));
        }
        if let Some(token) = self.tokens.match_and_remove(TokenKind::StringLiteral) {
            return Ok(Some(Expression::String(token.text().into())));
        }
        if let Some(token) = self.tokens.match_and_remove(TokenKind::Word) {
            return Ok(Some(Expression::Var(Ident::from(token.text()))));
        }
        if self.tokens.match_and_remove(TokenKind::LParen).is_some() {
            let expr = some!(self.expression()?);
            if self.tokens.match_and_remove(TokenKind::RParen).is_none() {
                return Err(self.error("EXPECTED RIGHT PARENTHESIS"));
            }
            return Ok(Some(expr));
        }
        Err(self.error("EXPECTED EXPRESSION"))
    }

    /// A word naming a built-in, directly followed by `(`.
    fn builtin(&mut self) -> Option<Function> {
        let function = match (self.tokens.peek(0), self.tokens.peek(1)) {
            (Some(name), Some(paren))
                if name.kind == TokenKind::Word && paren.kind == TokenKind::LParen =>
            {
                Function::from_name(name.text())?
            }
            _ => return None,
        };
        self.tokens.advance();
        self.tokens.advance();
        Some(function)
    }

    fn call(&mut self, function: Function) -> Result<Option<Expression>> {
        let mut params: Vec<Expression> = vec![];
        if self.tokens.match_and_remove(TokenKind::RParen).is_none() {
            loop {
                params.push(some!(self.expression()?));
                if self.tokens.match_and_remove(TokenKind::Comma).is_some() {
                    continue;
                }
                if self.tokens.match_and_remove(TokenKind::RParen).is_some() {
                    break;
                }
                return Ok(None);
            }
        }
        let contract = function.params();
        if params.len() != contract.len()
            || !params
                .iter()
                .zip(contract.iter())
                .all(|(expr, param)| param.accepts(expr.kind()))
        {
            debug!("{} does not accept ({})", function, params.len());
            return Ok(None);
        }
        Ok(Some(Expression::Function(function, params)))
    }

    fn expression_list(&mut self) -> Result<Option<Vec<Expression>>> {
        let mut v: Vec<Expression> = vec![];
        loop {
            v.push(some!(self.expression()?));
            if self.tokens.match_and_remove(TokenKind::Comma).is_none() {
                return Ok(Some(v));
            }
        }
    }

    fn word(&mut self) -> Option<Ident> {
        self.tokens
            .match_and_remove(TokenKind::Word)
            .map(|token| Ident::from(token.text()))
    }
}

impl Expression {
    /// Integer first; anything with a decimal point or out of range is a float.
    fn for_number(token: &Token) -> Result<Expression> {
        let text = token.text();
        if let Ok(n) = text.parse::<i32>() {
            return Ok(Expression::Integer(n));
        }
        match text.parse::<f32>() {
            Ok(n) => Ok(Expression::Float(n)),
            Err(_) => Err(error!(SyntaxError, token.line, ..&token.columns(); "INVALID NUMBER")),
        }
    }
}

impl Statement {
    fn for_kind(
        parse: &mut Parser,
        kind: TokenKind,
        line: LineNumber,
    ) -> Result<Option<Statement>> {
        use TokenKind::*;
        if kind == Word {
            return Self::r#let(parse, line);
        }
        match kind {
            Print | Data | Read | Input | Gosub | Return | End | For | Next | If | While => {
                parse.tokens.advance();
            }
            _ => return Ok(None),
        }
        match kind {
            Print => Self::r#print(parse, line),
            Data => Self::r#data(parse, line),
            Read => Self::r#read(parse, line),
            Input => Self::r#input(parse, line),
            Gosub => Self::r#gosub(parse, line),
            Return => Self::r#return(parse, line),
            End => Ok(Some(Statement::End(line))),
            For => Self::r#for(parse, line),
            Next => Ok(Some(Statement::Next(line, parse.word()))),
            If => Self::r#if(parse, line),
            _ => Self::r#while(parse, line),
        }
    }

    fn r#let(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let ident = some!(parse.word());
        if parse.tokens.match_and_remove(TokenKind::Equal).is_none() {
            return Err(parse.error("EXPECTED ="));
        }
        let expr = some!(parse.expression()?);
        Ok(Some(Statement::Let(line, ident, expr)))
    }

    fn r#print(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let items = some!(parse.expression_list()?);
        Ok(Some(Statement::Print(line, items)))
    }

    fn r#data(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let mut v: Vec<Expression> = vec![];
        loop {
            if let Some(token) = parse.tokens.match_and_remove(TokenKind::StringLiteral) {
                v.push(Expression::String(token.text().into()));
            } else if let Some(token) = parse.tokens.match_and_remove(TokenKind::Number) {
                v.push(Expression::for_number(&token)?);
            } else {
                return Ok(None);
            }
            if parse.tokens.match_and_remove(TokenKind::Comma).is_none() {
                return Ok(Some(Statement::Data(line, v)));
            }
        }
    }

    fn r#read(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let mut v: Vec<Ident> = vec![];
        loop {
            v.push(some!(parse.word()));
            if parse.tokens.match_and_remove(TokenKind::Comma).is_none() {
                return Ok(Some(Statement::Read(line, v)));
            }
        }
    }

    /// Variables only, except that the first item may be a prompt.
    fn r#input(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let mut v: Vec<Expression> = vec![];
        if let Some(token) = parse.tokens.match_and_remove(TokenKind::StringLiteral) {
            v.push(Expression::String(token.text().into()));
            if parse.tokens.match_and_remove(TokenKind::Comma).is_none() {
                return Ok(Some(Statement::Input(line, v)));
            }
        }
        loop {
            v.push(Expression::Var(some!(parse.word())));
            if parse.tokens.match_and_remove(TokenKind::Comma).is_none() {
                return Ok(Some(Statement::Input(line, v)));
            }
        }
    }

    fn r#gosub(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        match parse.tokens.match_and_remove(TokenKind::Word) {
            Some(token) => Ok(Some(Statement::Gosub(line, token.text().into()))),
            None => Ok(None),
        }
    }

    /// RETURN must end its line.
    fn r#return(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        if parse.accept_separators() || !parse.tokens.more_tokens() {
            return Ok(Some(Statement::Return(line)));
        }
        Ok(None)
    }

    fn r#for(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let ident = some!(parse.word());
        if parse.tokens.match_and_remove(TokenKind::Equal).is_none() {
            return Err(parse.error("EXPECTED ="));
        }
        let init = some!(parse.expression()?);
        if parse.tokens.match_and_remove(TokenKind::To).is_none() {
            return Ok(None);
        }
        let end = some!(parse.expression()?);
        let step = if parse.tokens.match_and_remove(TokenKind::Step).is_some() {
            some!(parse.expression()?)
        } else {
            Expression::Integer(1)
        };
        Ok(Some(Statement::For(line, ident, init, end, step)))
    }

    fn r#if(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let condition = some!(parse.boolean()?);
        if parse.tokens.match_and_remove(TokenKind::Then).is_none() {
            return Ok(None);
        }
        match parse.tokens.match_and_remove(TokenKind::Word) {
            Some(label) => Ok(Some(Statement::If(line, condition, label.text().into()))),
            None => Ok(None),
        }
    }

    fn r#while(parse: &mut Parser, line: LineNumber) -> Result<Option<Statement>> {
        let condition = some!(parse.boolean()?);
        match parse.tokens.match_and_remove(TokenKind::Word) {
            Some(label) => Ok(Some(Statement::While(line, condition, label.text().into()))),
            None => Ok(None),
        }
    }
}
