//! Delimiter stripping — the inverse of masking.
//!
//! Masking reintroduces delimiter literals around the raw characters;
//! [`unmask_text`] removes every delimiter-set character in one pass,
//! recovering the unformatted content. The strip set is the same
//! [`MASK_DELIMITERS`](crate::MASK_DELIMITERS) constant the `X` symbol
//! validates against, so the two directions stay in agreement.
//!
//! ## Examples
//!
//! ```rust
//! use textmask::unmask_text;
//!
//! assert_eq!(unmask_text(Some("(555) 123-4567")), Some("5551234567".to_string()));
//! assert_eq!(unmask_text(None), None);
//! ```

use crate::delimiter::MASK_DELIMITERS;

/// Removes every delimiter character from `text`, preserving the relative
/// order of all other characters.
///
/// `None` passes through unchanged — unlike the mask applier, which
/// normalizes missing input to the empty string, the unmask direction keeps
/// the caller's "no value" distinct from "empty value".
///
/// # Examples
///
/// ```rust
/// use textmask::unmask_text;
///
/// assert_eq!(unmask_text(Some("12/34/5678")), Some("12345678".to_string()));
/// assert_eq!(unmask_text(Some("no delimiters? not quite")), Some("nodelimitersnotquite".to_string()));
/// assert_eq!(unmask_text(Some("")), Some("".to_string()));
/// assert_eq!(unmask_text(None), None);
/// ```
#[must_use]
pub fn unmask_text(text: Option<&str>) -> Option<String> {
    text.map(|t| t.chars().filter(|ch| !MASK_DELIMITERS.contains(ch)).collect())
}
