//! Whitespace-separated numeric tokens from a buffered reader

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

use super::{InputError, NumericSource};

/// Reads `f64` tokens separated by arbitrary whitespace, across lines
///
/// Tokens are parsed with [`str::parse::<f64>`], which accepts decimal and
/// exponent notation as well as `NaN`, `inf` and `Infinity` in any case.
/// Only one line is buffered at a time.
///
/// # Example
///
/// ```
/// use streamstats::input::{NumericSource, TokenReader};
///
/// let mut reader = TokenReader::new("  1.5\t-2e3\n\n NaN ".as_bytes());
///
/// assert_eq!(reader.read_f64().unwrap(), 1.5);
/// assert_eq!(reader.read_f64().unwrap(), -2000.0);
/// assert!(reader.read_f64().unwrap().is_nan());
/// assert!(!reader.has_more().unwrap());
/// ```
#[derive(Debug)]
pub struct TokenReader<R> {
    reader: R,
    /// Current line
    line: String,
    /// Byte offset of the next unread character in `line`
    pos: usize,
    /// Number of tokens handed out so far
    tokens: u64,
    eof: bool,
}

impl<R: BufRead> TokenReader<R> {
    /// Create a token reader over `reader`
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            tokens: 0,
            eof: false,
        }
    }

    /// Number of tokens read so far, including one that failed to parse
    pub fn tokens_read(&self) -> u64 {
        self.tokens
    }

    /// Unwrap the underlying reader, discarding the buffered line
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Skip whitespace, pulling new lines as needed
    ///
    /// Returns `false` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if !trimmed.is_empty() {
                return Ok(true);
            }
            if self.eof {
                return Ok(false);
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                self.eof = true;
                return Ok(false);
            }
        }
    }
}

impl TokenReader<StdinLock<'static>> {
    /// Tokens from the locked standard input
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl TokenReader<BufReader<File>> {
    /// Tokens from the file at `path`
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> NumericSource for TokenReader<R> {
    fn has_more(&mut self) -> Result<bool, InputError> {
        Ok(self.fill()?)
    }

    fn read_f64(&mut self) -> Result<f64, InputError> {
        if !self.fill()? {
            return Err(InputError::Exhausted);
        }

        let start = self.pos;
        let end = self.line[start..]
            .find(char::is_whitespace)
            .map_or(self.line.len(), |i| start + i);
        self.pos = end;

        let index = self.tokens;
        self.tokens += 1;

        let token = &self.line[start..end];
        token.parse::<f64>().map_err(|_| {
            log::trace!("rejected token {}: {:?}", index, token);
            InputError::Parse {
                token: token.to_string(),
                index,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &str) -> Result<Vec<f64>, InputError> {
        TokenReader::new(input.as_bytes()).values().collect()
    }

    #[test]
    fn test_tokens_across_lines() {
        let values = read_all("10.0 5.0 6.0\n3.0 7.0 32.0\n").unwrap();
        assert_eq!(values, vec![10.0, 5.0, 6.0, 3.0, 7.0, 32.0]);
    }

    #[test]
    fn test_blank_and_whitespace_only_input() {
        assert!(read_all("").unwrap().is_empty());
        assert!(read_all(" \n\t\r\n   \n").unwrap().is_empty());
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(read_all("1 2 3").unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(read_all("1\r\n2\r\n").unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_special_values() {
        let values = read_all("NaN Infinity -inf 1e-3 +4").unwrap();

        assert!(values[0].is_nan());
        assert_eq!(values[1], f64::INFINITY);
        assert_eq!(values[2], f64::NEG_INFINITY);
        assert_eq!(values[3], 0.001);
        assert_eq!(values[4], 4.0);
    }

    #[test]
    fn test_parse_error_reports_token_and_index() {
        let mut reader = TokenReader::new("1 2\n3 4x 5".as_bytes());

        for _ in 0..3 {
            reader.read_f64().unwrap();
        }
        match reader.read_f64() {
            Err(InputError::Parse { token, index }) => {
                assert_eq!(token, "4x");
                assert_eq!(index, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert_eq!(reader.tokens_read(), 4);
    }

    #[test]
    fn test_read_past_end() {
        let mut reader = TokenReader::new("7".as_bytes());

        assert!(reader.has_more().unwrap());
        assert_eq!(reader.read_f64().unwrap(), 7.0);
        assert!(!reader.has_more().unwrap());
        assert!(matches!(reader.read_f64(), Err(InputError::Exhausted)));
        assert!(!reader.has_more().unwrap());
    }

    #[test]
    fn test_has_more_is_idempotent() {
        let mut reader = TokenReader::new(Cursor::new("  8  "));

        assert!(reader.has_more().unwrap());
        assert!(reader.has_more().unwrap());
        assert_eq!(reader.read_f64().unwrap(), 8.0);
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut reader = TokenReader::new(&[0xff, 0xfe, b'\n'][..]);
        assert!(matches!(reader.has_more(), Err(InputError::Io(_))));
    }

    #[test]
    fn test_open_missing_file() {
        assert!(TokenReader::open("/nonexistent/streamstats/input.txt").is_err());
    }
}
