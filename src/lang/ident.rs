// Used in both the parser and the machine

use std::rc::Rc;

/// Static type of a variable, built-in result, or expression.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Kind {
    Integer,
    Float,
    String,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Kind::Integer => write!(f, "INTEGER"),
            Kind::Float => write!(f, "FLOAT"),
            Kind::String => write!(f, "STRING"),
        }
    }
}

/// A variable name. The trailing character picks the type:
/// `$` is a string, `%` is a float, anything else is an integer.
/// The stored name keeps its suffix.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Integer(Rc<str>),
    Float(Rc<str>),
    String(Rc<str>),
}

impl Ident {
    pub fn name(&self) -> &Rc<str> {
        match self {
            Ident::Integer(s) | Ident::Float(s) | Ident::String(s) => s,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Ident::Integer(_) => Kind::Integer,
            Ident::Float(_) => Kind::Float,
            Ident::String(_) => Kind::String,
        }
    }
}

impl From<&str> for Ident {
    fn from(s: &str) -> Ident {
        match s.chars().last() {
            Some('$') => Ident::String(s.into()),
            Some('%') => Ident::Float(s.into()),
            _ => Ident::Integer(s.into()),
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
