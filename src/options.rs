//! Configuration options for mask application.
//!
//! This module provides [`MaskOptions`], which controls the blank-fill
//! policy: whether literal template characters the input has not reached yet
//! are emitted eagerly, or whether the walk halts at the first one.
//!
//! ## Examples
//!
//! ```rust
//! use textmask::{mask_text_with_options, MaskOptions};
//!
//! // Default: literals are filled in eagerly
//! let options = MaskOptions::new();
//! assert_eq!(
//!     mask_text_with_options(Some("555"), "(###) ###-####", options),
//!     "(555) "
//! );
//!
//! // Suppressed: the walk halts at the first literal the input
//! // does not supply itself
//! let options = MaskOptions::suppress_blank_fill();
//! assert_eq!(
//!     mask_text_with_options(Some("(555"), "(###) ###-####", options),
//!     "(555"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Configuration options for mask application.
///
/// Controls the blank-fill policy. With `fill_blanks` on (the default),
/// literal template characters are emitted even when the raw input has not
/// supplied them, so `"555"` against `"(###) ###-####"` renders as
/// `"(555) "`. With it off, an unfilled literal halts the walk instead.
///
/// # Examples
///
/// ```rust
/// use textmask::MaskOptions;
///
/// // Default: fill blanks
/// let options = MaskOptions::new();
/// assert!(options.fill_blanks);
///
/// // Builder style
/// let options = MaskOptions::new().with_fill_blanks(false);
/// assert!(!options.fill_blanks);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskOptions {
    /// Emit literal template characters the input has not matched yet.
    #[serde(default = "default_fill_blanks")]
    pub fill_blanks: bool,
}

fn default_fill_blanks() -> bool {
    true
}

impl Default for MaskOptions {
    fn default() -> Self {
        MaskOptions { fill_blanks: true }
    }
}

impl MaskOptions {
    /// Creates default options (blank fill on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskOptions;
    ///
    /// let options = MaskOptions::new();
    /// assert!(options.fill_blanks);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options with blank fill suppressed.
    ///
    /// The mask walk then halts at the first literal position the raw
    /// input does not supply itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskOptions;
    ///
    /// let options = MaskOptions::suppress_blank_fill();
    /// assert!(!options.fill_blanks);
    /// ```
    #[must_use]
    pub fn suppress_blank_fill() -> Self {
        MaskOptions { fill_blanks: false }
    }

    /// Sets the blank-fill policy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textmask::MaskOptions;
    ///
    /// let options = MaskOptions::new().with_fill_blanks(false);
    /// assert_eq!(options, MaskOptions::suppress_blank_fill());
    /// ```
    #[must_use]
    pub fn with_fill_blanks(mut self, fill_blanks: bool) -> Self {
        self.fill_blanks = fill_blanks;
        self
    }
}
