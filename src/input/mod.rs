//! Line-oriented operator input.
//!
//! Each value is a single prompt/answer exchange. There is no retry: the
//! first bad answer is returned as an [`InputError`] carrying the caller's
//! label so the message says which field failed.

use std::io::{BufRead, Write};

use thiserror::Error;

/// Bit width an answer must fit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitWidth {
    U32,
    U64,
}

impl BitWidth {
    pub fn bits(self) -> u32 {
        match self {
            BitWidth::U32 => 32,
            BitWidth::U64 => 64,
        }
    }

    fn max(self) -> u64 {
        match self {
            BitWidth::U32 => u64::from(u32::MAX),
            BitWidth::U64 => u64::MAX,
        }
    }
}

/// A failed read, labelled with the field being read.
#[derive(Error, Debug)]
#[error("{label}")]
pub struct InputError {
    pub label: String,
    #[source]
    pub cause: InputCause,
}

/// Why an answer was rejected.
#[derive(Error, Debug)]
pub enum InputCause {
    #[error("failed to read input")]
    Read(#[from] std::io::Error),

    #[error("unexpected end of input")]
    Eof,

    #[error("'{text}' is not an unsigned decimal integer")]
    NotANumber { text: String },

    #[error("{text} does not fit in {bits} bits")]
    OutOfRange { text: String, bits: u32 },
}

impl InputError {
    fn new(label: &str, cause: InputCause) -> Self {
        Self {
            label: label.to_string(),
            cause,
        }
    }
}

/// Print `prompt`, read one line from `input`, and parse it as an unsigned
/// integer that fits in `width`.
pub fn read_unsigned_int<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    label: &str,
    width: BitWidth,
) -> Result<u64, InputError> {
    write!(out, "{prompt}").map_err(|e| InputError::new(label, e.into()))?;
    out.flush().map_err(|e| InputError::new(label, e.into()))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| InputError::new(label, e.into()))?;
    if read == 0 {
        return Err(InputError::new(label, InputCause::Eof));
    }

    let text = line.strip_suffix('\n').unwrap_or(&line);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let value = parse_unsigned(text, width).map_err(|cause| InputError::new(label, cause))?;
    tracing::debug!(label, value, "read operator input");
    Ok(value)
}

fn parse_unsigned(text: &str, width: BitWidth) -> Result<u64, InputCause> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputCause::NotANumber {
            text: text.to_string(),
        });
    }
    let out_of_range = || InputCause::OutOfRange {
        text: text.to_string(),
        bits: width.bits(),
    };
    // All-digit text only fails to parse on overflow.
    let value: u64 = text.parse().map_err(|_| out_of_range())?;
    if value > width.max() {
        return Err(out_of_range());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(text: &str, width: BitWidth) -> Result<u64, InputError> {
        let mut input = Cursor::new(text.as_bytes().to_vec());
        let mut out = Vec::new();
        read_unsigned_int(&mut input, &mut out, "Enter: ", "Bad value", width)
    }

    #[test]
    fn parses_plain_number() {
        assert_eq!(read("100\n", BitWidth::U32).unwrap(), 100);
    }

    #[test]
    fn accepts_crlf_and_missing_newline() {
        assert_eq!(read("42\r\n", BitWidth::U32).unwrap(), 42);
        assert_eq!(read("7", BitWidth::U64).unwrap(), 7);
    }

    #[test]
    fn prompt_is_written() {
        let mut input = Cursor::new(b"1\n".to_vec());
        let mut out = Vec::new();
        read_unsigned_int(&mut input, &mut out, "Enter the priority: ", "Bad priority", BitWidth::U32)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Enter the priority: ");
    }

    #[test]
    fn u32_bounds() {
        assert_eq!(read("4294967295\n", BitWidth::U32).unwrap(), u64::from(u32::MAX));
        let err = read("4294967296\n", BitWidth::U32).unwrap_err();
        assert!(matches!(err.cause, InputCause::OutOfRange { bits: 32, .. }));
    }

    #[test]
    fn u64_bounds() {
        assert_eq!(read("18446744073709551615\n", BitWidth::U64).unwrap(), u64::MAX);
        let err = read("18446744073709551616\n", BitWidth::U64).unwrap_err();
        assert!(matches!(err.cause, InputCause::OutOfRange { bits: 64, .. }));
    }

    #[test]
    fn rejects_non_numeric() {
        for bad in ["abc\n", "\n", "-1\n", "+5\n", " 5\n", "1.5\n"] {
            let err = read(bad, BitWidth::U64).unwrap_err();
            assert!(
                matches!(err.cause, InputCause::NotANumber { .. }),
                "expected NotANumber for {bad:?}, got {err}"
            );
        }
    }

    #[test]
    fn end_of_input_is_an_error() {
        let err = read("", BitWidth::U32).unwrap_err();
        assert!(matches!(err.cause, InputCause::Eof));
    }

    #[test]
    fn error_message_carries_label() {
        let err = read("abc\n", BitWidth::U32).unwrap_err();
        assert_eq!(err.label, "Bad value");
        assert_eq!(
            err.to_string(),
            "Bad value: 'abc' is not an unsigned decimal integer"
        );
    }
}
