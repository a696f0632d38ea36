use super::Val;
use crate::error;
use crate::lang::Error;
use std::cmp::Ordering;

type Result<T> = std::result::Result<T, Error>;

/// ## Arithmetic on values
///
/// Both operands must be the same type; nothing is converted.
/// Integer math is checked. Float math follows IEEE single precision.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Float(l), Float(r)) => Ok(Float(l + r)),
            (String(l), String(r)) => Ok(String((l.to_string() + &r).into())),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Float(l), Float(r)) => Ok(Float(l - r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Float(l), Float(r)) => Ok(Float(l * r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// Integer division truncates toward zero.
    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => {
                    if r == 0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Err(error!(Overflow))
                    }
                }
            },
            (Float(l), Float(r)) => Ok(Float(l / r)),
            _ => Err(error!(TypeMismatch)),
        }
    }

    /// `None` when either float operand is NaN.
    pub fn compare(lhs: Val, rhs: Val) -> Result<Option<Ordering>> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Some(l.cmp(&r))),
            (Float(l), Float(r)) => Ok(l.partial_cmp(&r)),
            _ => Err(error!(TypeMismatch; "COMPARISON NEEDS TWO INTEGERS OR TWO FLOATS")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_integer_math() {
        use Val::*;
        assert_eq!(Operation::divide(Integer(3), Integer(7)), Ok(Integer(0)));
        assert_eq!(Operation::divide(Integer(-7), Integer(2)), Ok(Integer(-3)));
        assert_eq!(Operation::sum(Integer(3), Integer(10)), Ok(Integer(13)));
        assert_eq!(
            Operation::divide(Integer(1), Integer(0)).unwrap_err().code(),
            ErrorCode::DivisionByZero
        );
        assert_eq!(
            Operation::multiply(Integer(i32::max_value()), Integer(2))
                .unwrap_err()
                .code(),
            ErrorCode::Overflow
        );
        assert_eq!(
            Operation::divide(Integer(i32::min_value()), Integer(-1))
                .unwrap_err()
                .code(),
            ErrorCode::Overflow
        );
    }

    #[test]
    fn test_no_mixing() {
        use Val::*;
        assert_eq!(Operation::divide(Float(1.0), Float(4.0)), Ok(Float(0.25)));
        assert_eq!(
            Operation::sum(Integer(1), Float(1.0)).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(
            Operation::subtract(String("a".into()), String("b".into()))
                .unwrap_err()
                .code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(
            Operation::sum(String("a".into()), String("b".into())),
            Ok(String("ab".into()))
        );
        assert_eq!(
            Operation::compare(Integer(1), Float(1.0)).unwrap_err().code(),
            ErrorCode::TypeMismatch
        );
        assert_eq!(Operation::compare(Float(1.0), Float(2.0)), Ok(Some(Ordering::Less)));
    }
}
