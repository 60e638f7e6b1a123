//! Non-owning cursor over puzzle input

use std::str::FromStr;

use anyhow::{Context, anyhow, bail};

/// Cursor that hands out borrowed pieces of the text it was built from.
///
/// Every accessor advances the cursor past what it returns, so a line can be
/// taken apart left to right without allocating:
///
/// ```
/// use aoc_puzzles::utils::Scanner;
///
/// let mut line = Scanner::new("toggle 0,0 through 999,0");
/// assert_eq!(line.token(' '), Some("toggle"));
/// assert_eq!(line.number::<u16>().unwrap(), 0);
/// line.expect(",").unwrap();
/// assert_eq!(line.rest(), "0 through 999,0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scanner<'a> {
    remaining: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { remaining: text }
    }

    /// Next line without its `\n` or `\r\n` terminator, `None` at the end
    pub fn read_line(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }
        let (line, rest) = match self.remaining.find('\n') {
            Some(pos) => (&self.remaining[..pos], &self.remaining[pos + 1..]),
            None => (self.remaining, ""),
        };
        self.remaining = rest;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }

    /// Text up to the next `delimiter`, consuming the delimiter.
    ///
    /// Without a delimiter the remainder is returned; once exhausted, `None`.
    pub fn token(&mut self, delimiter: char) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }
        match self.remaining.split_once(delimiter) {
            Some((token, rest)) => {
                self.remaining = rest;
                Some(token)
            }
            None => Some(std::mem::take(&mut self.remaining)),
        }
    }

    pub fn skip_spaces(&mut self) {
        self.remaining = self.remaining.trim_start_matches(' ');
    }

    /// Consume `prefix`, failing if the cursor does not start with it
    pub fn expect(&mut self, prefix: &str) -> anyhow::Result<()> {
        match self.remaining.strip_prefix(prefix) {
            Some(rest) => {
                self.remaining = rest;
                Ok(())
            }
            None => Err(anyhow!("expected {:?}, found {:?}", prefix, self.preview())),
        }
    }

    /// Consume and parse a leading decimal number with an optional sign
    pub fn number<T>(&mut self) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let bytes = self.remaining.as_bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'-' | b'+')));
        let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            bail!("expected a number, found {:?}", self.preview());
        }

        let (number, rest) = self.remaining.split_at(sign + digits);
        let value = number
            .parse()
            .with_context(|| format!("invalid number {:?}", number))?;
        self.remaining = rest;
        Ok(value)
    }

    /// Everything not consumed yet, leaving the cursor empty
    pub fn rest(&mut self) -> &'a str {
        std::mem::take(&mut self.remaining)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    fn preview(&self) -> &'a str {
        let end = self
            .remaining
            .char_indices()
            .nth(16)
            .map_or(self.remaining.len(), |(i, _)| i);
        &self.remaining[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut scanner = Scanner::new("a\r\nbc\n\nd");
        assert_eq!(scanner.read_line(), Some("a"));
        assert_eq!(scanner.read_line(), Some("bc"));
        assert_eq!(scanner.read_line(), Some(""));
        assert_eq!(scanner.read_line(), Some("d"));
        assert_eq!(scanner.read_line(), None);
    }

    #[test]
    fn test_trailing_newline_yields_no_extra_line() {
        let mut scanner = Scanner::new("x\n");
        assert_eq!(scanner.read_line(), Some("x"));
        assert_eq!(scanner.read_line(), None);
    }

    #[test]
    fn test_token() {
        let mut scanner = Scanner::new("2x3x4");
        assert_eq!(scanner.token('x'), Some("2"));
        assert_eq!(scanner.token('x'), Some("3"));
        assert_eq!(scanner.token('x'), Some("4"));
        assert_eq!(scanner.token('x'), None);
    }

    #[test]
    fn test_number_with_sign() {
        let mut scanner = Scanner::new("-42 +7 x");
        assert_eq!(scanner.number::<i32>().unwrap(), -42);
        scanner.skip_spaces();
        assert_eq!(scanner.number::<i32>().unwrap(), 7);
        scanner.skip_spaces();
        assert!(scanner.number::<i32>().is_err());
        // failed parse leaves the cursor in place
        assert_eq!(scanner.rest(), "x");
        assert!(scanner.is_empty());
    }

    #[test]
    fn test_number_overflow() {
        let mut scanner = Scanner::new("70000");
        assert!(scanner.number::<u16>().is_err());
    }

    #[test]
    fn test_expect() {
        let mut scanner = Scanner::new("turn on 1,2");
        scanner.expect("turn ").unwrap();
        let err = scanner.expect("off").unwrap_err();
        assert!(err.to_string().contains("expected \"off\""));
        scanner.expect("on ").unwrap();
        assert_eq!(scanner.rest(), "1,2");
    }

    proptest! {
        /// A number followed by non-digit text reads back exactly, leaving the text
        #[test]
        fn prop_number_then_rest(n in any::<i64>(), suffix in "([ ,x][a-z0-9 ]*)?") {
            let text = format!("{}{}", n, suffix);
            let mut scanner = Scanner::new(&text);
            prop_assert_eq!(scanner.number::<i64>().unwrap(), n);
            prop_assert_eq!(scanner.rest(), suffix.as_str());
        }

        /// Unsigned targets reject a leading minus without consuming it
        #[test]
        fn prop_negative_into_unsigned_fails(n in 1..=u32::MAX) {
            let text = format!("-{}", n);
            let mut scanner = Scanner::new(&text);
            prop_assert!(scanner.number::<u32>().is_err());
            prop_assert_eq!(scanner.rest(), text.as_str());
        }
    }
}
