use crate::error;
use crate::lang::Error;
use std::collections::VecDeque;
use std::io::BufRead;

type Result<T> = std::result::Result<T, Error>;

/// Where INPUT gets its values from.
pub trait Input {
    /// The next whitespace-delimited token, `None` once input is exhausted.
    fn token(&mut self) -> Result<Option<String>>;

    fn string(&mut self) -> Result<String> {
        match self.token()? {
            Some(token) => Ok(token),
            None => Err(error!(BadInput; "END OF INPUT")),
        }
    }

    fn integer(&mut self) -> Result<i32> {
        let token = self.string()?;
        match token.parse() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(BadInput; format!("EXPECTED INTEGER, GOT {:?}", token))),
        }
    }

    fn float(&mut self) -> Result<f32> {
        let token = self.string()?;
        match token.parse() {
            Ok(n) => Ok(n),
            Err(_) => Err(error!(BadInput; format!("EXPECTED FLOAT, GOT {:?}", token))),
        }
    }
}

/// Where PRINT and INPUT prompts go.
pub trait Output {
    fn print(&mut self, text: &str) -> Result<()>;
}

impl Output for String {
    fn print(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Splits any buffered reader into tokens, a line at a time.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> TokenReader<R> {
        TokenReader {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Input for TokenReader<R> {
    fn token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return Ok(None),
                Ok(_) => self
                    .pending
                    .extend(line.split_whitespace().map(String::from)),
                Err(e) => return Err(error!(DeviceIoError; e.to_string())),
            }
        }
    }
}
