//! Cursor over the `!`-delimited fields of a hint block.
//!
//! Every read is bounds-checked; running off the end of the name inside a
//! field is reported as `HintError::UnexpectedEnd` rather than read past.

use crate::hints::{HintError, HintField};
use crate::utils::validation::MAX_REFERENCE_NAME_LEN;

/// Field separator inside a hint block
pub const DELIMITER: u8 = b'!';

/// Index cursor over an immutable read name
#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    name: &'a [u8],
    pos: usize,
}

impl<'a> FieldScanner<'a> {
    #[must_use]
    pub fn new(name: &'a [u8], pos: usize) -> Self {
        Self {
            name,
            pos: pos.min(name.len()),
        }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.name.get(self.pos).copied()
    }

    #[must_use]
    pub fn at_delimiter(&self) -> bool {
        self.peek() == Some(DELIMITER)
    }

    /// Consume `byte` if it is next, reporting whether it was
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the `!` that closes `field`
    ///
    /// # Errors
    ///
    /// Returns `HintError::ExpectedDelimiter` if another byte is next, or
    /// `HintError::UnexpectedEnd` at the end of the name.
    pub fn expect_delimiter(&mut self, field: HintField) -> Result<(), HintError> {
        match self.peek() {
            Some(DELIMITER) => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(HintError::ExpectedDelimiter {
                field,
                found: first_char(&self.name[self.pos..]),
                position: self.pos,
            }),
            None => Err(HintError::UnexpectedEnd { field }),
        }
    }

    /// Consume a single byte of `field`
    ///
    /// # Errors
    ///
    /// Returns `HintError::UnexpectedEnd` at the end of the name.
    pub fn next_byte(&mut self, field: HintField) -> Result<u8, HintError> {
        let byte = self.peek().ok_or(HintError::UnexpectedEnd { field })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Consume a reference name and the `!` that ends it.
    ///
    /// # Errors
    ///
    /// Returns `HintError::NameBufferOverflow` if the name is longer than
    /// `MAX_REFERENCE_NAME_LEN` bytes, or `HintError::UnexpectedEnd` if no
    /// `!` follows it.
    pub fn reference_name(&mut self) -> Result<&'a [u8], HintError> {
        let rest = &self.name[self.pos..];
        let len = rest.iter().position(|&b| b == DELIMITER);

        match len {
            Some(len) if len <= MAX_REFERENCE_NAME_LEN => {
                self.pos += len + 1;
                Ok(&rest[..len])
            }
            None if rest.len() <= MAX_REFERENCE_NAME_LEN => Err(HintError::UnexpectedEnd {
                field: HintField::ReferenceName,
            }),
            _ => Err(HintError::NameBufferOverflow {
                limit: MAX_REFERENCE_NAME_LEN,
            }),
        }
    }

    /// Consume an unsigned decimal field and the `!` that ends it.
    ///
    /// An empty field reads as 0.
    ///
    /// # Errors
    ///
    /// Returns a malformed-digit error naming `field` on a non-digit,
    /// `HintError::UnexpectedEnd` if the name ends first, or
    /// `HintError::NumericOverflow` if the value does not fit in a `u64`.
    pub fn delimited_number(&mut self, field: HintField) -> Result<u64, HintError> {
        let mut value = 0u64;
        loop {
            match self.peek() {
                Some(DELIMITER) => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some(byte) if byte.is_ascii_digit() => {
                    value = push_digit(value, byte, field)?;
                    self.pos += 1;
                }
                Some(_) => return Err(malformed_digit(field, &self.name[self.pos..], self.pos)),
                None => return Err(HintError::UnexpectedEnd { field }),
            }
        }
    }

    /// Consume a run of digits with no closing delimiter.
    ///
    /// Stops at the first non-digit or at the end of the name; an empty run
    /// reads as 0.
    ///
    /// # Errors
    ///
    /// Returns `HintError::NumericOverflow` if the value does not fit in a `u64`.
    pub fn trailing_number(&mut self, field: HintField) -> Result<u64, HintError> {
        let mut value = 0u64;
        while let Some(byte) = self.peek().filter(u8::is_ascii_digit) {
            value = push_digit(value, byte, field)?;
            self.pos += 1;
        }
        Ok(value)
    }
}

fn push_digit(value: u64, digit: u8, field: HintField) -> Result<u64, HintError> {
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        .ok_or(HintError::NumericOverflow { field })
}

fn malformed_digit(field: HintField, rest: &[u8], position: usize) -> HintError {
    let found = first_char(rest);
    match field {
        HintField::Length => HintError::MalformedLength { found, position },
        _ => HintError::MalformedOffset {
            field,
            found,
            position,
        },
    }
}

/// First character of `bytes`, decoding up to one UTF-8 sequence
fn first_char(bytes: &[u8]) -> char {
    (1..=bytes.len().min(4))
        .find_map(|len| std::str::from_utf8(&bytes[..len]).ok())
        .and_then(|s| s.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}
