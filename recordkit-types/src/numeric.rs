//! Byte scanners for numeric text.
//!
//! Both scanners are deliberately shallow: they look at individual bytes and
//! never parse. An empty string passes both, so callers that need a value
//! must check for emptiness themselves.

/// Returns `true` if every byte of `s` is an ASCII digit.
///
/// Signs are rejected, so `"-5"` is not integer text.
#[must_use]
pub fn is_integer_text(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if every byte of `s` is an ASCII digit or a dot.
///
/// `"1.2.3"` passes; pair this with a real parse when a single value is
/// required.
#[must_use]
pub fn is_numeric_text(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}
