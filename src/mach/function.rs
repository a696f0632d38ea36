use super::Val;
use crate::error;
use crate::lang::{Error, Function};
use rand::Rng;
use std::convert::TryFrom;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

impl Function {
    /// Arguments arrive already evaluated in the order and types of
    /// `params()`.
    pub fn call<R: Rng>(self, args: Vec<Val>, rng: &mut R) -> Result<Val> {
        let mut args = args.into_iter();
        let mut next = || match args.next() {
            Some(val) => Ok(val),
            None => Err(error!(InternalError; "MISSING ARGUMENT")),
        };
        match self {
            Function::Random => Ok(Val::Integer(rng.gen())),
            Function::Val => Function::val(&Rc::<str>::try_from(next()?)?),
            Function::ValFloat => Function::val_float(&Rc::<str>::try_from(next()?)?),
            Function::Left => {
                let s = Rc::<str>::try_from(next()?)?;
                Function::left(&s, i32::try_from(next()?)?)
            }
            Function::Right => {
                let s = Rc::<str>::try_from(next()?)?;
                Function::right(&s, i32::try_from(next()?)?)
            }
            Function::Mid => {
                let s = Rc::<str>::try_from(next()?)?;
                let start = i32::try_from(next()?)?;
                Function::mid(&s, start, i32::try_from(next()?)?)
            }
            Function::Num => Function::num(next()?),
        }
    }

    fn left(s: &str, n: i32) -> Result<Val> {
        let n = Function::index(s, n)?;
        Ok(Val::String(s.chars().take(n).collect::<String>().into()))
    }

    fn right(s: &str, n: i32) -> Result<Val> {
        let n = Function::index(s, n)?;
        let skip = s.chars().count() - n;
        Ok(Val::String(s.chars().skip(skip).collect::<String>().into()))
    }

    /// Characters `start` up to but not including `end`.
    fn mid(s: &str, start: i32, end: i32) -> Result<Val> {
        let start = Function::index(s, start)?;
        let end = Function::index(s, end)?;
        if end < start {
            return Err(error!(IllegalFunctionCall; "MID$ END BEFORE START"));
        }
        Ok(Val::String(
            s.chars().skip(start).take(end - start).collect::<String>().into(),
        ))
    }

    fn num(val: Val) -> Result<Val> {
        match val {
            Val::Integer(_) | Val::Float(_) => Ok(Val::String(val.to_string().into())),
            Val::String(_) => Err(error!(TypeMismatch)),
        }
    }

    fn val(s: &str) -> Result<Val> {
        match s.parse::<i32>() {
            Ok(n) => Ok(Val::Integer(n)),
            Err(_) => Err(error!(IllegalFunctionCall; format!("VAL OF {:?}", s))),
        }
    }

    fn val_float(s: &str) -> Result<Val> {
        match s.parse::<f32>() {
            Ok(n) => Ok(Val::Float(n)),
            Err(_) => Err(error!(IllegalFunctionCall; format!("VAL% OF {:?}", s))),
        }
    }

    /// A character position within `s`, end inclusive.
    fn index(s: &str, n: i32) -> Result<usize> {
        match usize::try_from(n) {
            Ok(n) if n <= s.chars().count() => Ok(n),
            _ => Err(error!(IllegalFunctionCall; format!("{} OUT OF RANGE", n))),
        }
    }
}
