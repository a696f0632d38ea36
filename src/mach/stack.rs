use crate::lang::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    underflow: ErrorCode,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    /// Popping an empty stack raises `underflow`.
    pub fn new(overflow_message: &'static str, underflow: ErrorCode) -> Stack<T> {
        Stack {
            overflow_message,
            underflow,
            vec: vec![],
        }
    }
    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.max_len() {
            Err(Error::new(ErrorCode::OutOfMemory).message(self.overflow_message))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        Error::new(self.underflow)
    }
    pub fn drain<R>(&mut self, range: R) -> std::vec::Drain<'_, T>
    where
        R: std::ops::RangeBounds<usize>,
    {
        debug_assert!(range.end_bound() == std::ops::Bound::Unbounded);
        self.vec.drain(range)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        self.overflow_check()
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_code() {
        let mut s: Stack<usize> = Stack::new("TOO MANY GOSUB", ErrorCode::ReturnWithoutGosub);
        assert_eq!(s.pop().unwrap_err().code(), ErrorCode::ReturnWithoutGosub);
        s.push(3).unwrap();
        s.push(4).unwrap();
        assert_eq!(s.last(), Some(&4));
        assert_eq!(s.drain(1..).collect::<Vec<_>>(), vec![4]);
        assert_eq!(s.pop(), Ok(3));
        assert!(s.is_empty());
    }

    #[test]
    fn test_overflow() {
        let mut s: Stack<u8> = Stack::new("TOO MANY GOSUB", ErrorCode::ReturnWithoutGosub);
        let mut result = Ok(());
        for _ in 0..=u16::max_value() as usize + 1 {
            result = s.push(0);
            if result.is_err() {
                break;
            }
        }
        let e = result.unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfMemory);
        assert_eq!(e.to_string(), "OUT OF MEMORY; TOO MANY GOSUB");
    }
}
