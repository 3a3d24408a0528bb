//! Old-style (OpenStep) property list parser.
//!
//! Grammar, as written by Xcode:
//!
//! ```text
//! value      = string | dictionary | array | data
//! dictionary = "{" (string "=" value ";")* "}"
//! array      = "(" (value ("," value)* ","?)? ")"
//! data       = "<" hex-digit* ">"
//! string     = quoted | [A-Za-z0-9_$+/:.-]+
//! ```
//!
//! `//` and `/* */` comments may appear anywhere whitespace may.

use crate::pbxproj::error::SyntaxError;
use crate::pbxproj::value::{Dictionary, Value};

/// Parse property list text. `name` labels the source in error reports.
pub fn parse(name: &str, input: &str) -> Result<Value, SyntaxError> {
    let mut parser = Parser::new(input);
    parser
        .parse_document()
        .map_err(|f| SyntaxError::new(f.message, name, input, f.offset, f.len))
}

/// Location-only failure; turned into a `SyntaxError` at the boundary.
#[derive(Debug)]
struct Failure {
    message: String,
    offset: usize,
    len: usize,
}

type ParseResult<T> = Result<T, Failure>;

/// Deepest dictionary/array nesting accepted. Xcode writes at most a
/// handful of levels.
const MAX_NESTING_DEPTH: u32 = 256;

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: u32,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Parser {
            src,
            pos: 0,
            depth: 0,
        }
    }

    fn parse_document(&mut self) -> ParseResult<Value> {
        // Skip a UTF-8 BOM if present
        if self.src.starts_with('\u{feff}') {
            self.pos = '\u{feff}'.len_utf8();
        }

        let value = self.parse_value()?;
        self.skip_trivia()?;
        if self.pos < self.src.len() {
            return Err(self.fail_here("unexpected content after root object"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> ParseResult<Value> {
        self.skip_trivia()?;
        match self.peek() {
            Some('{') => {
                self.enter_nesting()?;
                let dict = self.parse_dictionary()?;
                self.exit_nesting();
                Ok(Value::Dictionary(dict))
            }
            Some('(') => {
                self.enter_nesting()?;
                let items = self.parse_array()?;
                self.exit_nesting();
                Ok(Value::Array(items))
            }
            Some('<') => self.parse_data().map(Value::Data),
            Some('"') | Some('\'') => self.parse_quoted().map(Value::String),
            Some(c) if is_unquoted_char(c) => Ok(Value::String(self.parse_unquoted())),
            Some(c) => Err(self.fail_here(format!("unexpected character `{}`", c))),
            None => Err(self.fail_here("unexpected end of input")),
        }
    }

    fn parse_dictionary(&mut self) -> ParseResult<Dictionary> {
        self.expect('{')?;
        let mut dict = Dictionary::new();

        loop {
            self.skip_trivia()?;
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(dict);
                }
                None => return Err(self.fail_here("unterminated dictionary, expected `}`")),
                _ => {}
            }

            let key = self.parse_key()?;
            self.skip_trivia()?;
            self.expect('=')?;
            let value = self.parse_value()?;
            self.skip_trivia()?;
            self.expect(';')?;

            dict.insert(key, value);
        }
    }

    fn parse_key(&mut self) -> ParseResult<String> {
        match self.peek() {
            Some('"') | Some('\'') => self.parse_quoted(),
            Some(c) if is_unquoted_char(c) => Ok(self.parse_unquoted()),
            _ => Err(self.fail_here("expected dictionary key")),
        }
    }

    fn parse_array(&mut self) -> ParseResult<Vec<Value>> {
        self.expect('(')?;
        let mut items = Vec::new();

        loop {
            self.skip_trivia()?;
            if self.peek() == Some(')') {
                self.bump();
                return Ok(items);
            }

            items.push(self.parse_value()?);

            self.skip_trivia()?;
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(')') => {
                    self.bump();
                    return Ok(items);
                }
                None => return Err(self.fail_here("unterminated array, expected `)`")),
                Some(_) => return Err(self.fail_here("expected `,` or `)`")),
            }
        }
    }

    fn parse_data(&mut self) -> ParseResult<Vec<u8>> {
        let start = self.pos;
        self.expect('<')?;
        let mut digits = Vec::new();

        loop {
            match self.peek() {
                Some('>') => {
                    self.bump();
                    break;
                }
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some(c) if c.is_ascii_hexdigit() => {
                    // is_ascii_hexdigit guarantees a digit
                    digits.push(c.to_digit(16).unwrap_or_default() as u8);
                    self.bump();
                }
                Some(c) => {
                    return Err(self.fail_here(format!("invalid character `{}` in data", c)));
                }
                None => {
                    return Err(Failure {
                        message: "unterminated data, expected `>`".to_string(),
                        offset: start,
                        len: 1,
                    });
                }
            }
        }

        if digits.len() % 2 != 0 {
            return Err(Failure {
                message: "data has an odd number of hex digits".to_string(),
                offset: start,
                len: self.pos - start,
            });
        }

        Ok(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
    }

    fn parse_quoted(&mut self) -> ParseResult<String> {
        let start = self.pos;
        let quote = self.bump().unwrap_or('"');
        let mut out = String::new();

        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some(c) => out.push(c),
                None => {
                    return Err(Failure {
                        message: "unterminated string".to_string(),
                        offset: start,
                        len: 1,
                    });
                }
            }
        }
    }

    /// Decode the escape sequence following a backslash.
    fn parse_escape(&mut self) -> ParseResult<char> {
        let start = self.pos - 1;
        let Some(c) = self.bump() else {
            return Err(Failure {
                message: "unterminated escape sequence".to_string(),
                offset: start,
                len: 1,
            });
        };

        let decoded = match c {
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            'a' => '\u{07}',
            'b' => '\u{08}',
            'f' => '\u{0c}',
            'v' => '\u{0b}',
            'U' | 'u' => {
                let code = self.take_digits(4, 16);
                if code.1 != 4 {
                    return Err(Failure {
                        message: "expected four hex digits after `\\U`".to_string(),
                        offset: start,
                        len: self.pos - start,
                    });
                }
                char::from_u32(code.0).ok_or_else(|| Failure {
                    message: format!("invalid unicode escape `\\U{:04x}`", code.0),
                    offset: start,
                    len: self.pos - start,
                })?
            }
            '0'..='7' => {
                self.pos -= 1;
                let (code, _) = self.take_digits(3, 8);
                char::from_u32(code).ok_or_else(|| Failure {
                    message: "invalid octal escape".to_string(),
                    offset: start,
                    len: self.pos - start,
                })?
            }
            other => other,
        };
        Ok(decoded)
    }

    /// Consume up to `max` digits in `radix`; returns (value, digit count).
    fn take_digits(&mut self, max: usize, radix: u32) -> (u32, usize) {
        let mut value = 0u32;
        let mut count = 0;
        while count < max {
            match self.peek().and_then(|c| c.to_digit(radix)) {
                Some(d) => {
                    value = value * radix + d;
                    count += 1;
                    self.bump();
                }
                None => break,
            }
        }
        (value, count)
    }

    fn parse_unquoted(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !is_unquoted_char(c) {
                break;
            }
            self.bump();
        }
        self.src[start..self.pos].to_string()
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            let rest = &self.src[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();

            if trimmed.starts_with("//") {
                match trimmed.find('\n') {
                    Some(i) => self.pos += i + 1,
                    None => self.pos = self.src.len(),
                }
            } else if let Some(body) = trimmed.strip_prefix("/*") {
                match body.find("*/") {
                    Some(i) => self.pos += 2 + i + 2,
                    None => {
                        return Err(Failure {
                            message: "unterminated comment".to_string(),
                            offset: self.pos,
                            len: 2,
                        });
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(self.fail_here(format!(
                "nesting depth exceeded (maximum {} levels)",
                MAX_NESTING_DEPTH
            )));
        }
        Ok(())
    }

    fn exit_nesting(&mut self) {
        self.depth -= 1;
    }

    fn expect(&mut self, expected: char) -> ParseResult<()> {
        if self.peek() == Some(expected) {
            self.bump();
            Ok(())
        } else {
            Err(self.fail_here(format!("expected `{}`", expected)))
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn fail_here(&self, message: impl Into<String>) -> Failure {
        Failure {
            message: message.into(),
            offset: self.pos,
            len: self.peek().map(char::len_utf8).unwrap_or(0),
        }
    }
}

fn is_unquoted_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '+' | '/' | ':' | '.' | '-')
}
