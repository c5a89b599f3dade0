use super::normalize::is_word_byte;
use std::io::{self, Read};
use std::mem;

/// Size of each read issued against an input stream.
pub const READ_CHUNK: usize = 4096;

/// A maximal run of word bytes, in its original case, with the 1-based
/// position of its first byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: Vec<u8>,
    pub line: usize,
    pub column: usize,
}

/// Push-style word splitter. Feed it bytes in order; it hands back a token
/// whenever a separator closes one.
///
/// Columns count bytes since the last `\n`. A `\r` is an ordinary separator
/// here and does not start a new line.
#[derive(Debug)]
pub struct Tokenizer {
    max_len: usize,
    line: usize,
    column: usize,
    text: Vec<u8>,
    start: Option<(usize, usize)>,
}

impl Tokenizer {
    /// `max_len` bounds how many bytes a token keeps. Bytes past the bound are
    /// dropped but the token still runs until the next separator.
    pub fn new(max_len: usize) -> Self {
        debug_assert!(max_len > 0, "max_len must be positive");
        Self {
            max_len,
            line: 1,
            column: 1,
            text: Vec::new(),
            start: None,
        }
    }

    pub fn push(&mut self, byte: u8) -> Option<Token> {
        let mut closed = None;

        if is_word_byte(byte) {
            if self.start.is_none() {
                self.start = Some((self.line, self.column));
            }
            if self.text.len() < self.max_len {
                self.text.push(byte);
            }
        } else {
            closed = self.take_pending();
            if byte == b'\n' {
                self.line += 1;
                self.column = 0;
            }
        }

        self.column += 1;
        closed
    }

    /// Close the token still open at end of stream, if any.
    pub fn finish(&mut self) -> Option<Token> {
        self.take_pending()
    }

    fn take_pending(&mut self) -> Option<Token> {
        let (line, column) = self.start.take()?;
        Some(Token {
            text: mem::take(&mut self.text),
            line,
            column,
        })
    }
}

/// Iterator over the tokens of a reader, reading it in [`READ_CHUNK`] pieces.
///
/// A read error ends the stream. The token that was open when the error hit is
/// still yielded, followed by the error itself.
pub struct Tokens<R> {
    reader: R,
    tokenizer: Tokenizer,
    chunk: Vec<u8>,
    pos: usize,
    filled: usize,
    done: bool,
    error: Option<io::Error>,
}

impl<R: Read> Tokens<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            tokenizer: Tokenizer::new(max_len),
            chunk: vec![0; READ_CHUNK],
            pos: 0,
            filled: 0,
            done: false,
            error: None,
        }
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            while self.pos < self.filled {
                let byte = self.chunk[self.pos];
                self.pos += 1;
                if let Some(token) = self.tokenizer.push(byte) {
                    return Some(Ok(token));
                }
            }

            if self.done {
                return self.error.take().map(Err);
            }

            match self.reader.read(&mut self.chunk) {
                Ok(0) => {
                    self.done = true;
                    if let Some(token) = self.tokenizer.finish() {
                        return Some(Ok(token));
                    }
                }
                Ok(n) => {
                    self.pos = 0;
                    self.filled = n;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.done = true;
                    self.error = Some(e);
                    if let Some(token) = self.tokenizer.finish() {
                        return Some(Ok(token));
                    }
                }
            }
        }
    }
}

/// Tokenize an in-memory buffer.
pub fn tokenize(bytes: &[u8], max_len: usize) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(max_len);
    let mut tokens: Vec<Token> = bytes.iter().filter_map(|&b| tokenizer.push(b)).collect();
    tokens.extend(tokenizer.finish());
    tokens
}
