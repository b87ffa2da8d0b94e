use std::fmt::{Display, Formatter};

/// A plain error without location, used for settings and for anything that is not tied to a
/// particular piece of input text.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseError(String);

impl From<String> for BaseError {
    fn from(string: String) -> BaseError {
        BaseError(string)
    }
}

impl From<&str> for BaseError {
    fn from(string: &str) -> BaseError {
        BaseError(string.to_string())
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for BaseError { }

/// The error type returned by [`parse`](crate::parse). Contains the description of the error and
/// its location within the input string. The lifetime is bound to the lifetime of the input string.
#[derive(Debug, PartialEq)]
pub struct ParseError<'str> {
    reason: String,
    slice: &'str str
}

impl<'str> ParseError<'str> {
    pub fn new(text: impl Into<String>, slice: &'str str) -> ParseError<'str> {
        ParseError{reason: text.into(), slice}
    }

    /// The part of the input responsible for the error.
    pub fn slice(&self) -> &'str str {
        self.slice
    }

    /// Shows the location of the parse error. For this purpose, the input string is reproduced in
    /// full. The part causing the error is highlighted using ANSI color sequences.
    ///
    /// `input` must be the same string that was passed to the parser.
    pub fn display(&self, input: &'str str) {
        if self.slice.is_empty() { return; }
        let start = unsafe { self.slice.as_ptr().offset_from(input.as_ptr()) } as usize;
        let length = self.slice.len();
        println!("{}\x1b[1;31m{}\x1b[0m{}", &input[0..start], &input[start..(start + length)], &input[(start+length)..]);
    }
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.reason, f)
    }
}

impl std::error::Error for ParseError<'_> { }
