//! Console input validation.
//!
//! Each `parse_*` function checks one line of input. The matching
//! `require_*` function keeps prompting until the parser accepts a line,
//! printing the parser's message after every rejected attempt. Bad input
//! never escapes to the caller; only a closed or failing console does.

use std::num::{IntErrorKind, ParseIntError};
use crate::types::PaymentMethod;
use thiserror::Error;
use ticket_booth_core::environment::Console;
use tracing::debug;

/// A line of input that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Empty line where a value is required
    #[error("Please enter a name. This cannot be blank.")]
    Blank,

    /// Not a base-10 integer
    #[error("Please enter an integer.")]
    NotInteger,

    /// Not one of the offered options
    #[error("Please choose {first} or {second}")]
    InvalidChoice {
        /// First offered option
        first: String,
        /// Second offered option
        second: String,
    },
}

/// The console can no longer supply input
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Input was exhausted before a valid answer arrived
    #[error("console input closed")]
    Closed,

    /// Reading or writing the console failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Accept any line except the empty string
///
/// # Errors
///
/// Returns [`InputError::Blank`] for an empty line.
pub fn parse_non_blank(line: &str) -> Result<String, InputError> {
    if line.is_empty() {
        Err(InputError::Blank)
    } else {
        Ok(line.to_string())
    }
}

/// Accept a base-10 integer, ignoring surrounding whitespace
///
/// Integers outside the `i64` range saturate to `i64::MAX` or `i64::MIN`.
///
/// # Errors
///
/// Returns [`InputError::NotInteger`] if the line does not parse.
pub fn parse_integer(line: &str) -> Result<i64, InputError> {
    line.trim().parse().or_else(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(InputError::NotInteger),
    })
}

/// Match `line` against two options, case-insensitively
///
/// An option matches when the line equals the whole option or its first
/// `min_prefix_len` characters. The first matching option wins.
///
/// # Errors
///
/// Returns [`InputError::InvalidChoice`] naming both options on a mismatch.
pub fn parse_choice<'a>(
    line: &str,
    min_prefix_len: usize,
    options: [&'a str; 2],
) -> Result<&'a str, InputError> {
    let response = line.to_lowercase();
    options
        .into_iter()
        .find(|option| response == *option || response == prefix(option, min_prefix_len))
        .ok_or_else(|| invalid_choice(options))
}

/// Characters needed to tell cash from credit
pub const PAYMENT_PREFIX_LEN: usize = 2;

/// Match `line` against the payment options
///
/// # Errors
///
/// Returns [`InputError::InvalidChoice`] if the line names no payment method.
pub fn parse_payment(line: &str) -> Result<PaymentMethod, InputError> {
    let choice = parse_choice(line, PAYMENT_PREFIX_LEN, PaymentMethod::OPTIONS)?;
    PaymentMethod::from_option(choice).ok_or_else(|| invalid_choice(PaymentMethod::OPTIONS))
}

fn invalid_choice(options: [&str; 2]) -> InputError {
    InputError::InvalidChoice {
        first: options[0].to_string(),
        second: options[1].to_string(),
    }
}

fn prefix(option: &str, len: usize) -> &str {
    option
        .char_indices()
        .nth(len)
        .map_or(option, |(end, _)| &option[..end])
}

fn require<C, T, F>(console: &mut C, prompt: &str, parse: F) -> Result<T, ConsoleError>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let Some(line) = console.read_line(prompt)? else {
            return Err(ConsoleError::Closed);
        };
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(error) => {
                debug!(%error, prompt, "input rejected");
                console.write_line(&error.to_string())?;
            },
        }
    }
}

/// Prompt until a non-empty line is entered
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails.
pub fn require_non_blank<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<String, ConsoleError> {
    require(console, prompt, parse_non_blank)
}

/// Prompt until an integer is entered
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails.
pub fn require_integer<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<i64, ConsoleError> {
    require(console, prompt, parse_integer)
}

/// Prompt until one of `options` (or its prefix) is entered
///
/// Returns the canonical option string.
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails.
pub fn require_choice<'a, C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    min_prefix_len: usize,
    options: [&'a str; 2],
) -> Result<&'a str, ConsoleError> {
    require(console, prompt, |line| parse_choice(line, min_prefix_len, options))
}

/// Prompt until a payment method is entered
///
/// # Errors
///
/// Returns [`ConsoleError`] if the console closes or fails.
pub fn require_payment<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<PaymentMethod, ConsoleError> {
    require(console, prompt, parse_payment)
}
