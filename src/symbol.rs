//! The mask symbol registry.
//!
//! A mask template mixes two kinds of characters: the six recognized mask
//! symbols defined here, and literals (everything else). Each symbol pairs a
//! validator (does this input character belong to the class?) with a
//! converter (how is an accepted character normalized?).
//!
//! The registry is closed: the symbol set is known at compile time, so it is
//! an enum with `match`-based lookup rather than a runtime table. A
//! character that is not a symbol is a literal — [`MaskSymbol::from_char`]
//! returns `None` for it, which is a valid outcome, never an error.
//!
//! | Symbol | Accepts | Converts |
//! |--------|---------|----------|
//! | `#` | ASCII digit | unchanged |
//! | `A` | ASCII letter | uppercase |
//! | `a` | ASCII letter | lowercase |
//! | `N` | ASCII letter or digit | uppercase |
//! | `n` | ASCII letter or digit | lowercase |
//! | `X` | delimiter set | unchanged |
//!
//! ## Examples
//!
//! ```rust
//! use textmask::MaskSymbol;
//!
//! let symbol = MaskSymbol::from_char('A').unwrap();
//! assert!(symbol.validates('q'));
//! assert_eq!(symbol.convert('q'), 'Q');
//!
//! // '(' is not a symbol, so a template treats it as a literal
//! assert!(MaskSymbol::from_char('(').is_none());
//! ```

use crate::delimiter::is_mask_delimiter;
use serde::{Deserialize, Serialize};

/// One of the six recognized mask placeholder symbols.
///
/// Each variant carries a validator and a converter for a single character
/// class. Template characters outside this set are literals.
///
/// # Examples
///
/// ```rust
/// use textmask::MaskSymbol;
///
/// assert_eq!(MaskSymbol::from_char('#'), Some(MaskSymbol::Digit));
/// assert_eq!(MaskSymbol::Digit.as_char(), '#');
/// assert!(MaskSymbol::Digit.validates('7'));
/// assert!(!MaskSymbol::Digit.validates('x'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskSymbol {
    /// `#` — an ASCII digit, passed through unchanged.
    Digit,
    /// `A` — an ASCII letter, converted to uppercase.
    UpperLetter,
    /// `a` — an ASCII letter, converted to lowercase.
    LowerLetter,
    /// `N` — an ASCII letter or digit, converted to uppercase.
    UpperAlnum,
    /// `n` — an ASCII letter or digit, converted to lowercase.
    LowerAlnum,
    /// `X` — a delimiter character, passed through unchanged.
    Delimiter,
}

impl MaskSymbol {
    /// All six symbols in registry order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskSymbol;
    ///
    /// let template_chars: String = MaskSymbol::ALL.iter().map(|s| s.as_char()).collect();
    /// assert_eq!(template_chars, "#AaNnX");
    /// ```
    pub const ALL: [MaskSymbol; 6] = [
        MaskSymbol::Digit,
        MaskSymbol::UpperLetter,
        MaskSymbol::LowerLetter,
        MaskSymbol::UpperAlnum,
        MaskSymbol::LowerAlnum,
        MaskSymbol::Delimiter,
    ];

    /// Looks up a template character in the registry.
    ///
    /// Returns `None` when the character is not a mask symbol — the caller
    /// treats it as a literal. Absence is a valid outcome, not a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskSymbol;
    ///
    /// assert_eq!(MaskSymbol::from_char('n'), Some(MaskSymbol::LowerAlnum));
    /// assert_eq!(MaskSymbol::from_char('-'), None);
    /// assert_eq!(MaskSymbol::from_char('Z'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<MaskSymbol> {
        match ch {
            '#' => Some(MaskSymbol::Digit),
            'A' => Some(MaskSymbol::UpperLetter),
            'a' => Some(MaskSymbol::LowerLetter),
            'N' => Some(MaskSymbol::UpperAlnum),
            'n' => Some(MaskSymbol::LowerAlnum),
            'X' => Some(MaskSymbol::Delimiter),
            _ => None,
        }
    }

    /// Returns the template character for this symbol.
    ///
    /// Inverse of [`MaskSymbol::from_char`].
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            MaskSymbol::Digit => '#',
            MaskSymbol::UpperLetter => 'A',
            MaskSymbol::LowerLetter => 'a',
            MaskSymbol::UpperAlnum => 'N',
            MaskSymbol::LowerAlnum => 'n',
            MaskSymbol::Delimiter => 'X',
        }
    }

    /// Returns `true` if `ch` belongs to this symbol's character class.
    ///
    /// Character classes are ASCII: `Digit` is `0-9`, the letter symbols
    /// accept `A-Z`/`a-z` regardless of case, the alphanumeric symbols
    /// accept letters and digits, and `Delimiter` tests the shared
    /// delimiter set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskSymbol;
    ///
    /// assert!(MaskSymbol::UpperLetter.validates('k'));
    /// assert!(MaskSymbol::LowerAlnum.validates('7'));
    /// assert!(MaskSymbol::Delimiter.validates('-'));
    /// assert!(!MaskSymbol::Digit.validates(' '));
    /// ```
    #[must_use]
    pub fn validates(&self, ch: char) -> bool {
        match self {
            MaskSymbol::Digit => ch.is_ascii_digit(),
            MaskSymbol::UpperLetter | MaskSymbol::LowerLetter => ch.is_ascii_alphabetic(),
            MaskSymbol::UpperAlnum | MaskSymbol::LowerAlnum => ch.is_ascii_alphanumeric(),
            MaskSymbol::Delimiter => is_mask_delimiter(ch),
        }
    }

    /// Normalizes an accepted character for output.
    ///
    /// `Digit` and `Delimiter` pass the character through; the letter-like
    /// symbols normalize case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskSymbol;
    ///
    /// assert_eq!(MaskSymbol::UpperLetter.convert('q'), 'Q');
    /// assert_eq!(MaskSymbol::LowerAlnum.convert('Q'), 'q');
    /// assert_eq!(MaskSymbol::Digit.convert('7'), '7');
    /// ```
    #[must_use]
    pub const fn convert(&self, ch: char) -> char {
        match self {
            MaskSymbol::Digit | MaskSymbol::Delimiter => ch,
            MaskSymbol::UpperLetter | MaskSymbol::UpperAlnum => ch.to_ascii_uppercase(),
            MaskSymbol::LowerLetter | MaskSymbol::LowerAlnum => ch.to_ascii_lowercase(),
        }
    }
}
