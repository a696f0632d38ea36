/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the BASIC language.

The source text flows through a [`Source`] cursor into the lexer, which
produces [`Token`]s. The parser walks a [`TokenStream`] by recursive descent
and returns the statements of the program as an [`ast`].

*/

#[macro_use]
mod error;
mod function;
mod ident;
mod lex;
mod parse;
mod source;
mod stream;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use function::{Function, Param};
pub use ident::{Ident, Kind};
pub use lex::lex;
pub use parse::parse;
pub use source::Source;
pub use stream::TokenStream;
pub use token::{Token, TokenKind};

pub mod ast;

/// Source lines count from 1.
pub type LineNumber = usize;
pub type Column = std::ops::Range<usize>;

/// Lex and parse a whole program.
pub fn compile(source: &str) -> Result<Vec<ast::Statement>, Error> {
    parse(lex(source))
}

#[cfg(test)]
mod tests;
