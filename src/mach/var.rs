use super::Val;
use crate::error;
use crate::lang::{Error, Ident};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// One map per type. The name's suffix picks the map, so `A`, `A%` and
/// `A$` never collide. Nothing exists until it is first stored.

#[derive(Debug, Default)]
pub struct Var {
    integers: HashMap<Rc<str>, i32>,
    floats: HashMap<Rc<str>, f32>,
    strings: HashMap<Rc<str>, Rc<str>>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn len(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, ident: &Ident) -> bool {
        match ident {
            Ident::Integer(name) => self.integers.contains_key(name),
            Ident::Float(name) => self.floats.contains_key(name),
            Ident::String(name) => self.strings.contains_key(name),
        }
    }

    pub fn fetch(&self, ident: &Ident) -> Result<Val> {
        let val = match ident {
            Ident::Integer(name) => self.integers.get(name).map(|n| Val::Integer(*n)),
            Ident::Float(name) => self.floats.get(name).map(|n| Val::Float(*n)),
            Ident::String(name) => self.strings.get(name).map(|s| Val::String(s.clone())),
        };
        match val {
            Some(val) => Ok(val),
            None => Err(error!(UndefinedVariable; ident.name().to_string())),
        }
    }

    pub fn store(&mut self, ident: &Ident, value: Val) -> Result<()> {
        if !self.contains(ident) && self.len() > u16::max_value() as usize {
            return Err(error!(OutOfMemory));
        }
        match (ident, value) {
            (Ident::Integer(name), Val::Integer(n)) => {
                self.integers.insert(name.clone(), n);
            }
            (Ident::Float(name), Val::Float(n)) => {
                self.floats.insert(name.clone(), n);
            }
            (Ident::String(name), Val::String(s)) => {
                self.strings.insert(name.clone(), s);
            }
            (ident, value) => {
                return Err(error!(TypeMismatch;
                    format!("{} IS {}, NOT {}", ident, ident.kind(), value.kind())));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_buckets_are_separate() {
        let mut var = Var::new();
        var.store(&Ident::from("a"), Val::Integer(1)).unwrap();
        var.store(&Ident::from("a%"), Val::Float(2.5)).unwrap();
        var.store(&Ident::from("a$"), Val::String("three".into()))
            .unwrap();
        assert_eq!(var.fetch(&Ident::from("a")), Ok(Val::Integer(1)));
        assert_eq!(var.fetch(&Ident::from("a%")), Ok(Val::Float(2.5)));
        assert_eq!(var.len(), 3);
        assert!(!var.contains(&Ident::from("b")));
    }

    #[test]
    fn test_unassigned_and_mismatch() {
        let mut var = Var::new();
        for name in &["x", "x%", "x$"] {
            let e = var.fetch(&Ident::from(*name)).unwrap_err();
            assert_eq!(e.code(), ErrorCode::UndefinedVariable);
        }
        let e = var
            .store(&Ident::from("x"), Val::String("no".into()))
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch);
    }
}
