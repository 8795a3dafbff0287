//! Whitespace-delimited word scanning.
//!
//! Text is split on spaces, tabs, carriage returns, line feeds and NUL
//! characters. A word made only of ASCII digits is a number and must fit in
//! an `i64`; anything else is a string. Signs are not special: `-3` is a
//! string.

use crate::{error::EvalResult, util::num::digits_to_i64_checked};

/// Receives the events of a [`scan`].
///
/// Every method has an empty default, so a listener only implements the
/// events it cares about.
pub trait TokenListener {
    /// Called once before the first word.
    fn on_start(&mut self) {}

    /// Called once after the last word, unless scanning failed.
    fn on_finish(&mut self) {}

    /// Called for each word made only of decimal digits.
    fn on_number(&mut self, value: i64) {
        let _ = value;
    }

    /// Called for every other word.
    fn on_string(&mut self, value: &str) {
        let _ = value;
    }
}

/// A single scanned word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word<'a> {
    /// A digit-only word.
    Number(i64),
    /// Any other word.
    String(&'a str),
}

/// Returns `true` for the characters that separate words.
#[must_use]
pub const fn is_delimiter(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\r' | '\n' | '\0')
}

/// Lazy iterator over the words of a text. See [`words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text:   &'a str,
    offset: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = EvalResult<Word<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.offset..];
        let begin = self.offset + rest.find(|c: char| !is_delimiter(c))?;
        let end = self.text[begin..].find(is_delimiter)
                                    .map_or(self.text.len(), |len| begin + len);
        self.offset = end;

        let word = &self.text[begin..end];
        if word.bytes().all(|b| b.is_ascii_digit()) {
            Some(digits_to_i64_checked(word, begin).map(Word::Number))
        } else {
            Some(Ok(Word::String(word)))
        }
    }
}

/// Iterates over the words of `text` in order.
///
/// # Example
/// ```
/// use longcalc::util::words::{Word, words};
///
/// let found: Vec<_> = words("12 apples\tand -3").map(Result::unwrap).collect();
/// assert_eq!(found,
///            vec![Word::Number(12), Word::String("apples"), Word::String("and"), Word::String("-3")]);
/// ```
#[must_use]
pub const fn words(text: &str) -> Words<'_> {
    Words { text, offset: 0 }
}

/// Scans `text` once, reporting each word to `listener` in order.
///
/// `on_start` is always called first. `on_finish` is called last, but only if
/// every word was scanned successfully.
///
/// # Errors
/// Returns `RuntimeError::LiteralTooLarge`, positioned at the word's byte
/// offset, for a digit-only word that does not fit in an `i64`. Scanning
/// stops there.
///
/// # Example
/// ```
/// use longcalc::util::words::{TokenListener, scan};
///
/// #[derive(Default)]
/// struct Sum(i64);
///
/// impl TokenListener for Sum {
///     fn on_number(&mut self, value: i64) {
///         self.0 += value;
///     }
/// }
///
/// let mut sum = Sum::default();
/// scan("1 two 3\n4", &mut sum).unwrap();
/// assert_eq!(sum.0, 8);
/// ```
pub fn scan<L>(text: &str, listener: &mut L) -> EvalResult<()>
    where L: TokenListener + ?Sized
{
    listener.on_start();
    for word in words(text) {
        match word? {
            Word::Number(value) => listener.on_number(value),
            Word::String(value) => listener.on_string(value),
        }
    }
    listener.on_finish();
    Ok(())
}
