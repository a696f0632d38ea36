use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: Option<LineNumber>,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
    ($err:ident, $line:expr, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .in_column($col)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> Option<LineNumber> {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    /// Attaches a line unless one was already recorded closer to the fault.
    pub fn in_line_number(self, line: LineNumber) -> Error {
        if self.line_number.is_some() {
            return self;
        }
        Error {
            line_number: Some(line),
            ..self
        }
    }

    pub fn in_column(self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            column: column.clone(),
            ..self
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            message: message.into(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    OutOfData = 4,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLabel = 8,
    DivisionByZero = 11,
    TypeMismatch = 13,
    UndefinedVariable = 24,
    BadInput = 25,
    ForWithoutNext = 26,
    Break = 28,
    InternalError = 51,
    DeviceIoError = 57,
    AdvancedFeature = 73,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self.code {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            OutOfData => "OUT OF DATA",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            Overflow => "OVERFLOW",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLabel => "UNDEFINED LABEL",
            DivisionByZero => "DIVISION BY ZERO",
            TypeMismatch => "TYPE MISMATCH",
            UndefinedVariable => "UNDEFINED VARIABLE",
            BadInput => "BAD INPUT",
            ForWithoutNext => "FOR WITHOUT NEXT",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            DeviceIoError => "DEVICE I/O ERROR",
            AdvancedFeature => "ADVANCED FEATURE",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        write!(f, "{}", code_str)?;
        if !suffix.is_empty() {
            write!(f, " IN{}", suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::error;

    #[test]
    fn test_display() {
        assert_eq!(error!(TypeMismatch).to_string(), "TYPE MISMATCH");
        assert_eq!(
            error!(SyntaxError, 3, ..&(4..9); "EXPECTED EXPRESSION").to_string(),
            "SYNTAX ERROR IN 3 (4..9); EXPECTED EXPRESSION"
        );
        assert_eq!(
            error!(UndefinedVariable; "X$").to_string(),
            "UNDEFINED VARIABLE; X$"
        );
    }

    #[test]
    fn test_first_line_number_wins() {
        let e = error!(Overflow, 2).in_line_number(7);
        assert_eq!(e.line_number(), Some(2));
    }
}
