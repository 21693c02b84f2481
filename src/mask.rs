//! Mask application.
//!
//! This module provides the [`Masker`] engine that walks a template against
//! raw input and produces the formatted string.
//!
//! ## Overview
//!
//! The walk keeps two independent cursors: one over the template, which
//! advances every iteration and drives termination, and one over the raw
//! input, which advances only when a character is consumed. At each template
//! position:
//!
//! - a literal the input matches is emitted and the input consumed;
//! - a literal the input does not match is emitted without consuming
//!   (blank fill) or, with fill suppressed, halts the walk;
//! - a recognized symbol whose validator accepts the input character emits
//!   the converted character and consumes it;
//! - a recognized symbol whose validator rejects (or exhausted input) halts.
//!
//! On halt the accumulated output is returned as-is: a strict prefix of the
//! full rendering, never padded. This is the designed behavior for
//! partially-typed input, not an error.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use textmask::mask_text;
//!
//! assert_eq!(mask_text(Some("5551234567"), "(###) ###-####"), "(555) 123-4567");
//! ```
//!
//! ## Direct Masker Usage
//!
//! For repeated application with the same options, hold a [`Masker`]:
//!
//! ```rust
//! use textmask::{Masker, MaskOptions};
//!
//! let masker = Masker::new(MaskOptions::new());
//! assert_eq!(masker.mask(Some("20240115"), "##/##/####"), "20/24/0115");
//! assert_eq!(masker.mask(Some("abc123"), "AAA###"), "ABC123");
//! ```

use crate::{MaskOptions, MaskSymbol};

/// The mask application engine.
///
/// Holds a set of [`MaskOptions`] and applies templates to raw input.
/// Created via [`Masker::new`]; reusable across any number of calls, each of
/// which is a pure function of its arguments.
///
/// # Examples
///
/// ```rust
/// use textmask::{Masker, MaskOptions};
///
/// let masker = Masker::new(MaskOptions::new());
/// assert_eq!(masker.mask(Some("5551234567"), "(###) ###-####"), "(555) 123-4567");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Masker {
    options: MaskOptions,
}

impl Masker {
    /// Creates a masker with the given options.
    #[must_use]
    pub fn new(options: MaskOptions) -> Self {
        Masker { options }
    }

    /// Returns the options this masker applies.
    #[must_use]
    pub fn options(&self) -> &MaskOptions {
        &self.options
    }

    /// Applies `template` to `text`, returning the formatted string.
    ///
    /// `None` input normalizes to the empty string. An empty template or
    /// empty normalized input returns the normalized input unchanged. The
    /// output never exceeds the template's character count and is a valid
    /// prefix under the halt rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::{Masker, MaskOptions};
    ///
    /// let masker = Masker::new(MaskOptions::new());
    ///
    /// // Full input renders the whole template
    /// assert_eq!(masker.mask(Some("5551234567"), "(###) ###-####"), "(555) 123-4567");
    ///
    /// // Partial input halts at the first unfillable position
    /// assert_eq!(masker.mask(Some("555"), "(###) ###-####"), "(555) ");
    ///
    /// // Null input normalizes to empty
    /// assert_eq!(masker.mask(None, "(###) ###-####"), "");
    /// ```
    #[must_use]
    pub fn mask(&self, text: Option<&str>, template: &str) -> String {
        let text = text.unwrap_or("");
        if template.is_empty() || text.is_empty() {
            return text.to_string();
        }

        let mut input = text.chars();
        // The character under the input cursor; refilled only on consumption.
        let mut current = input.next();
        let mut output = String::with_capacity(template.len());

        for slot in template.chars() {
            match MaskSymbol::from_char(slot) {
                // Literal position
                None => {
                    if current == Some(slot) {
                        output.push(slot);
                        current = input.next();
                    } else if self.options.fill_blanks {
                        output.push(slot);
                    } else {
                        // With fill suppressed a literal goes through the
                        // same validation as a symbol, and a literal never
                        // validates.
                        return output;
                    }
                }
                // Symbol position
                Some(symbol) => match current {
                    Some(ch) if symbol.validates(ch) => {
                        output.push(symbol.convert(ch));
                        current = input.next();
                    }
                    _ => return output,
                },
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(text: &str, template: &str) -> String {
        Masker::new(MaskOptions::new()).mask(Some(text), template)
    }

    fn mask_suppressed(text: &str, template: &str) -> String {
        Masker::new(MaskOptions::suppress_blank_fill()).mask(Some(text), template)
    }

    #[test]
    fn test_full_phone_number() {
        assert_eq!(mask("5551234567", "(###) ###-####"), "(555) 123-4567");
    }

    #[test]
    fn test_partial_input_fills_literals() {
        assert_eq!(mask("555", "(###) ###-####"), "(555) ");
        assert_eq!(mask("5", "(###) ###-####"), "(5");
        assert_eq!(mask("5551", "(###) ###-####"), "(555) 1");
    }

    #[test]
    fn test_halt_on_invalid_character() {
        // 'x' fails the digit validator; everything before it survives
        assert_eq!(mask("55x1234567", "(###) ###-####"), "(55");
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(mask("abc123", "AAA###"), "ABC123");
        assert_eq!(mask("ABC", "aaa"), "abc");
        assert_eq!(mask("k7j2", "NNNN"), "K7J2");
        assert_eq!(mask("K7J2", "nnnn"), "k7j2");
    }

    #[test]
    fn test_delimiter_symbol_consumes_delimiters() {
        assert_eq!(mask("12-34", "##X##"), "12-34");
        assert_eq!(mask("12/34", "##X##"), "12/34");
        // 'z' is not a delimiter, so X halts
        assert_eq!(mask("12z34", "##X##"), "12");
    }

    #[test]
    fn test_input_may_carry_its_own_literals() {
        assert_eq!(mask("(555) 1234567", "(###) ###-####"), "(555) 123-4567");
        assert_eq!(mask("555-1234", "###-####"), "555-1234");
    }

    #[test]
    fn test_excess_input_is_ignored() {
        assert_eq!(mask("55512345679999", "(###) ###-####"), "(555) 123-4567");
    }

    #[test]
    fn test_empty_cases() {
        assert_eq!(mask("", "(###) ###-####"), "");
        assert_eq!(mask("5551234567", ""), "5551234567");
        assert_eq!(Masker::new(MaskOptions::new()).mask(None, "(###)"), "");
    }

    #[test]
    fn test_unrecognized_symbols_are_literals() {
        // 'Z' and '@' are not in the registry
        assert_eq!(mask("12", "Z@##"), "Z@12");
    }

    #[test]
    fn test_suppress_blank_fill_halts_at_unfilled_literal() {
        // Input does not supply '(' itself, so the walk halts immediately
        assert_eq!(mask_suppressed("555", "(###) ###-####"), "");
        // Input carrying the literal prefix proceeds and halts at ')'
        assert_eq!(mask_suppressed("(555", "(###) ###-####"), "(555");
        // With fill suppressed every literal must come from the input
        assert_eq!(mask_suppressed("(555) 1234567", "(###) ###-####"), "(555) 123");
        assert_eq!(mask_suppressed("(555) 123-4567", "(###) ###-####"), "(555) 123-4567");
    }

    #[test]
    fn test_output_is_prefix_of_full_rendering() {
        let template = "(###) ###-####";
        let full = mask("5551234567", template);
        for len in 0..10 {
            let partial = mask(&"5551234567"[..len], template);
            assert!(
                full.starts_with(&partial),
                "partial {:?} is not a prefix of {:?}",
                partial,
                full
            );
        }
    }

    #[test]
    fn test_template_cursor_always_advances() {
        // Each template position is visited at most once even when the
        // input cursor stalls across consecutive literals
        assert_eq!(mask("1", "#---#"), "1---");
    }
}
