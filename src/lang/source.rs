/// ## Source cursor
///
/// Holds the program text and the position of the character under
/// examination. Peeking never moves the cursor; only `advance` and
/// `skip` do.

#[derive(Debug, Clone)]
pub struct Source {
    chars: Vec<char>,
    position: usize,
}

impl Source {
    pub fn new(text: &str) -> Source {
        Source {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    /// Character `offset` places past the cursor, `None` past the end.
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.position + offset).copied()
    }

    /// The `length` characters following the one under the cursor.
    pub fn peek_slice(&self, length: usize) -> String {
        let start = (self.position + 1).min(self.chars.len());
        let end = (self.position + 1 + length).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }

    /// Moves to the next character and returns it.
    pub fn advance(&mut self) -> Option<char> {
        self.skip(1);
        self.peek(0)
    }

    pub fn skip(&mut self, n: usize) {
        self.position = (self.position + n).min(self.chars.len());
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    pub fn remainder(&self) -> String {
        self.chars[self.position..].iter().collect()
    }
}
