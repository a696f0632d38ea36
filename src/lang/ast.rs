use super::{Function, Ident, Kind, LineNumber};
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    Data(LineNumber, Vec<Expression>),
    End(LineNumber),
    For(LineNumber, Ident, Expression, Expression, Expression),
    Gosub(LineNumber, Rc<str>),
    If(LineNumber, Expression, Rc<str>),
    Input(LineNumber, Vec<Expression>),
    Label(LineNumber, Rc<str>, Box<Statement>),
    Let(LineNumber, Ident, Expression),
    Next(LineNumber, Option<Ident>),
    Print(LineNumber, Vec<Expression>),
    Read(LineNumber, Vec<Ident>),
    Return(LineNumber),
    While(LineNumber, Expression, Rc<str>),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Integer(i32),
    Float(f32),
    String(Rc<str>),
    Var(Ident),
    Function(Function, Vec<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
}

impl Statement {
    pub fn line(&self) -> LineNumber {
        use Statement::*;
        match self {
            Data(line, ..)
            | End(line)
            | For(line, ..)
            | Gosub(line, ..)
            | If(line, ..)
            | Input(line, ..)
            | Label(line, ..)
            | Let(line, ..)
            | Next(line, ..)
            | Print(line, ..)
            | Read(line, ..)
            | Return(line)
            | While(line, ..) => *line,
        }
    }
}

impl Expression {
    /// The type an expression is expected to produce. Math takes the type
    /// of its left operand; comparisons only appear in IF and WHILE.
    pub fn kind(&self) -> Kind {
        use Expression::*;
        match self {
            Integer(_) => Kind::Integer,
            Float(_) => Kind::Float,
            String(_) => Kind::String,
            Var(ident) => ident.kind(),
            Function(func, _) => func.returns(),
            Multiply(lhs, _) | Divide(lhs, _) | Add(lhs, _) | Subtract(lhs, _) => lhs.kind(),
            Equal(..) | NotEqual(..) | Less(..) | LessEqual(..) | Greater(..)
            | GreaterEqual(..) => Kind::Integer,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Data(_, v) => write!(f, "DATA {}", join(v)),
            End(_) => write!(f, "END"),
            For(_, ident, init, end, step) => {
                write!(f, "FOR {} = {} TO {} STEP {}", ident, init, end, step)
            }
            Gosub(_, label) => write!(f, "GOSUB {}", label),
            If(_, cond, label) => write!(f, "IF {} THEN {}", cond, label),
            Input(_, v) => write!(f, "INPUT {}", join(v)),
            Label(_, label, stmt) => write!(f, "{}: {}", label, stmt),
            Let(_, ident, expr) => write!(f, "{} = {}", ident, expr),
            Next(_, None) => write!(f, "NEXT"),
            Next(_, Some(ident)) => write!(f, "NEXT {}", ident),
            Print(_, v) => write!(f, "PRINT {}", join(v)),
            Read(_, v) => write!(f, "READ {}", join(v)),
            Return(_) => write!(f, "RETURN"),
            While(_, cond, label) => write!(f, "WHILE {} {}", cond, label),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Expression::*;
        match self {
            Integer(n) => write!(f, "{}", n),
            Float(n) => write!(f, "{:?}", n),
            String(s) => write!(f, "{:?}", s),
            Var(ident) => write!(f, "{}", ident),
            Function(func, params) => write!(f, "{}({})", func, join(params)),
            Multiply(l, r) => write!(f, "({} * {})", l, r),
            Divide(l, r) => write!(f, "({} / {})", l, r),
            Add(l, r) => write!(f, "({} + {})", l, r),
            Subtract(l, r) => write!(f, "({} - {})", l, r),
            Equal(l, r) => write!(f, "{} = {}", l, r),
            NotEqual(l, r) => write!(f, "{} <> {}", l, r),
            Less(l, r) => write!(f, "{} < {}", l, r),
            LessEqual(l, r) => write!(f, "{} <= {}", l, r),
            Greater(l, r) => write!(f, "{} > {}", l, r),
            GreaterEqual(l, r) => write!(f, "{} >= {}", l, r),
        }
    }
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
