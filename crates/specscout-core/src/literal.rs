//! Restricted literal parser for embedded configuration objects
//!
//! Spec sites assign their configuration to a global inside a script tag. The
//! assigned value is an object literal, not arbitrary code, so instead of a
//! script sandbox we parse a deliberately small grammar: objects, arrays,
//! strings (single- or double-quoted), numbers, booleans and null. Identifier
//! keys and trailing commas are accepted since hand-written configs use both.
//! Anything outside that grammar is a parse error, never executed.

use crate::error::{Error, Result};
use serde_json::{Map, Number, Value};

/// Parse a single literal value from the start of `input`
///
/// Trailing text after the value (a closing `;`, the rest of the script) is
/// ignored.
pub fn parse_literal(input: &str) -> Result<Value> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        pos: 0,
    };
    parser.skip_whitespace();
    parser.value()
}

struct Parser<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'{') => self.object(),
            Some(b'[') => self.array(),
            Some(b'"') | Some(b'\'') => self.string().map(Value::String),
            Some(c) if c == b'-' || c.is_ascii_digit() => self.number(),
            Some(_) => self.keyword(),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn object(&mut self) -> Result<Value> {
        self.expect(b'{')?;
        let mut map = Map::new();

        loop {
            self.skip_whitespace();
            if self.consume(b'}') {
                break;
            }

            let key = self.key()?;
            self.skip_whitespace();
            self.expect(b':')?;
            self.skip_whitespace();
            let value = self.value()?;
            map.insert(key, value);

            self.skip_whitespace();
            if self.consume(b',') {
                continue;
            }
            self.expect(b'}')?;
            break;
        }

        Ok(Value::Object(map))
    }

    fn array(&mut self) -> Result<Value> {
        self.expect(b'[')?;
        let mut items = Vec::new();

        loop {
            self.skip_whitespace();
            if self.consume(b']') {
                break;
            }

            items.push(self.value()?);

            self.skip_whitespace();
            if self.consume(b',') {
                continue;
            }
            self.expect(b']')?;
            break;
        }

        Ok(Value::Array(items))
    }

    /// An object key: quoted string or bare identifier
    fn key(&mut self) -> Result<String> {
        match self.peek() {
            Some(b'"') | Some(b'\'') => self.string(),
            Some(c) if c == b'_' || c == b'$' || c.is_ascii_alphabetic() => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == b'_' || c == b'$' || c.is_ascii_alphanumeric() {
                        self.pos += 1;
                    } else {
                        break;
                    }
                }
                Ok(String::from_utf8_lossy(&self.bytes[start..self.pos]).into_owned())
            }
            _ => Err(self.error("expected object key")),
        }
    }

    fn string(&mut self) -> Result<String> {
        let quote = self
            .peek()
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;

        let mut out = String::new();
        loop {
            match self.next_byte()? {
                c if c == quote => break,
                b'\\' => out.push(self.escape(quote)?),
                c => {
                    // Re-assemble multi-byte UTF-8 sequences
                    if c < 0x80 {
                        out.push(c as char);
                    } else {
                        let start = self.pos - 1;
                        while self.peek().is_some_and(|b| b & 0xC0 == 0x80) {
                            self.pos += 1;
                        }
                        out.push_str(&String::from_utf8_lossy(&self.bytes[start..self.pos]));
                    }
                }
            }
        }
        Ok(out)
    }

    fn escape(&mut self, quote: u8) -> Result<char> {
        let c = self.next_byte()?;
        Ok(match c {
            b'n' => '\n',
            b't' => '\t',
            b'r' => '\r',
            b'\\' => '\\',
            b'/' => '/',
            b'u' => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = (self.next_byte()? as char)
                        .to_digit(16)
                        .ok_or_else(|| self.error("invalid unicode escape"))?;
                    code = code * 16 + digit;
                }
                char::from_u32(code).ok_or_else(|| self.error("invalid unicode escape"))?
            }
            c if c == quote => quote as char,
            c => c as char,
        })
    }

    fn number(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, b'.' | b'e' | b'E' | b'+' | b'-'))
        {
            self.pos += 1;
        }

        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| self.error("invalid number"))?;

        if let Ok(int) = text.parse::<i64>() {
            return Ok(Value::Number(Number::from(int)));
        }
        let float: f64 = text
            .parse()
            .map_err(|_| self.error("invalid number"))?;
        Number::from_f64(float)
            .map(Value::Number)
            .ok_or_else(|| self.error("invalid number"))
    }

    fn keyword(&mut self) -> Result<Value> {
        for (word, value) in [
            ("true", Value::Bool(true)),
            ("false", Value::Bool(false)),
            ("null", Value::Null),
        ] {
            if self.bytes[self.pos..].starts_with(word.as_bytes()) {
                self.pos += word.len();
                return Ok(value);
            }
        }
        Err(self.error("expected a literal value"))
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Result<u8> {
        let c = self
            .peek()
            .ok_or_else(|| self.error("unexpected end of input"))?;
        self.pos += 1;
        Ok(c)
    }

    fn consume(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.consume(expected) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", expected as char)))
        }
    }

    fn error(&self, msg: impl std::fmt::Display) -> Error {
        Error::MalformedConfig(format!("{} at offset {}", msg, self.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_json_style_object() {
        let value = parse_literal(r#"{"title": "My Spec", "count": 3}"#).unwrap();
        assert_eq!(value, json!({"title": "My Spec", "count": 3}));
    }

    #[test]
    fn test_parse_js_style_object() {
        let value = parse_literal(
            r#"{
                specs: [{
                    title: 'Example',
                    source: { host: 'github', account: 'org', repo: 'docs' },
                }],
                nowatch: true,
            }"#,
        )
        .unwrap();
        assert_eq!(value["specs"][0]["source"]["host"], json!("github"));
        assert_eq!(value["nowatch"], json!(true));
    }

    #[test]
    fn test_trailing_script_text_ignored() {
        let value = parse_literal("{ a: 1 };\nconsole.log('x');").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_literal("-42").unwrap(), json!(-42));
        assert_eq!(parse_literal("3.25").unwrap(), json!(3.25));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            parse_literal(r#"'it\'s A test'"#).unwrap(),
            json!("it's A test")
        );
    }

    #[test]
    fn test_function_call_rejected() {
        // Anything beyond literals is a parse error, never evaluated
        assert!(parse_literal("require('child_process')").is_err());
        assert!(parse_literal("{ a: fetch('https://x') }").is_err());
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(parse_literal("{}").unwrap(), json!({}));
        assert_eq!(parse_literal("[]").unwrap(), json!([]));
    }
}
