use super::Kind;

/// ## Built-in functions
///
/// Calls are resolved to a `Function` once, while parsing. Each one has a
/// fixed parameter shape and result type.

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Function {
    Random,
    Val,
    ValFloat,
    Left,
    Right,
    Mid,
    Num,
}

/// What a parameter slot will accept.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Param {
    Of(Kind),
    Numeric,
}

impl Param {
    pub fn accepts(&self, kind: Kind) -> bool {
        match self {
            Param::Of(k) => *k == kind,
            Param::Numeric => kind == Kind::Integer || kind == Kind::Float,
        }
    }
}

const STRING: Param = Param::Of(Kind::String);
const INTEGER: Param = Param::Of(Kind::Integer);

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        use Function::*;
        match name.to_ascii_lowercase().as_str() {
            "random" => Some(Random),
            "val" => Some(Val),
            "val%" => Some(ValFloat),
            "left$" => Some(Left),
            "right$" => Some(Right),
            "mid$" => Some(Mid),
            "num$" => Some(Num),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        use Function::*;
        match self {
            Random => "random",
            Val => "val",
            ValFloat => "val%",
            Left => "left$",
            Right => "right$",
            Mid => "mid$",
            Num => "num$",
        }
    }

    pub fn params(&self) -> &'static [Param] {
        use Function::*;
        match self {
            Random => &[],
            Val | ValFloat => &[STRING],
            Left | Right => &[STRING, INTEGER],
            Mid => &[STRING, INTEGER, INTEGER],
            Num => &[Param::Numeric],
        }
    }

    pub fn returns(&self) -> Kind {
        use Function::*;
        match self {
            Random | Val => Kind::Integer,
            ValFloat => Kind::Float,
            Left | Right | Mid | Num => Kind::String,
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(Function::from_name("MID$"), Some(Function::Mid));
        assert_eq!(Function::from_name("mid"), None);
        assert_eq!(Function::Mid.params().len(), 3);
        assert_eq!(Function::ValFloat.returns(), Kind::Float);
        assert!(Function::Num.params()[0].accepts(Kind::Float));
        assert!(!Function::Left.params()[1].accepts(Kind::Float));
    }
}
