use crate::error;
use crate::lang::{Error, Kind};
use std::convert::TryFrom;
use std::rc::Rc;

/// ## Runtime values

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i32),
    Float(f32),
    String(Rc<str>),
}

impl Val {
    pub fn kind(&self) -> Kind {
        match self {
            Val::Integer(_) => Kind::Integer,
            Val::Float(_) => Kind::Float,
            Val::String(_) => Kind::String,
        }
    }
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            _ => Err(error!(TypeMismatch; "EXPECTED INTEGER")),
        }
    }
}

impl TryFrom<Val> for f32 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Float(n) => Ok(n),
            _ => Err(error!(TypeMismatch; "EXPECTED FLOAT")),
        }
    }
}

impl TryFrom<Val> for Rc<str> {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::String(s) => Ok(s),
            _ => Err(error!(TypeMismatch; "EXPECTED STRING")),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Float(n) => {
                let magnitude = n.abs();
                if !n.is_finite() {
                    write!(f, "{}", n)
                } else if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
                    // 1.0E20, 1.5E-7
                    let text = format!("{:e}", n);
                    match text.split_once('e') {
                        Some((mantissa, exp)) if mantissa.contains('.') => {
                            write!(f, "{}E{}", mantissa, exp)
                        }
                        Some((mantissa, exp)) => write!(f, "{}.0E{}", mantissa, exp),
                        None => write!(f, "{}", text),
                    }
                } else if n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Val::String(s) => write!(f, "{}", s),
        }
    }
}
