//! Mask Template Format
//!
//! This module documents the mask template format as implemented by this
//! library.
//!
//! # Overview
//!
//! A mask template is an ordered sequence of characters. Each position is
//! either a recognized mask symbol — a typed placeholder for one input
//! character — or a literal, emitted verbatim. Applying a template to raw
//! input walks both left to right and produces the formatted string;
//! unmasking strips the delimiter characters back out.
//!
//! ## Design Philosophy
//!
//! - **Pure per call**: no state survives a call; the same arguments always
//!   produce the same output
//! - **Total**: every input shape is a defined case; malformed templates
//!   degrade to literal matching, never to an error
//! - **Prefix semantics**: partially-typed input yields a prefix of the full
//!   rendering, which is what an input field wants to display mid-typing
//!
//! # Mask Symbols
//!
//! | Symbol | Accepts | Converts | Example |
//! |--------|---------|----------|---------|
//! | `#` | ASCII digit `0-9` | unchanged | `###` + `123` → `123` |
//! | `A` | ASCII letter, either case | uppercase | `AA` + `ab` → `AB` |
//! | `a` | ASCII letter, either case | lowercase | `aa` + `AB` → `ab` |
//! | `N` | ASCII letter or digit | uppercase | `NNN` + `a1b` → `A1B` |
//! | `n` | ASCII letter or digit | lowercase | `nnn` + `A1B` → `a1b` |
//! | `X` | delimiter set member | unchanged | `#X#` + `1-2` → `1-2` |
//!
//! Character classes are ASCII. A non-ASCII letter fails the letter
//! validators the same way a digit does.
//!
//! # Literals
//!
//! Any template character outside the symbol set is a literal — including
//! delimiters, spaces, and arbitrary punctuation. A literal either matches
//! the current input character (which is then consumed) or is blank-filled:
//!
//! ```text
//! template: (###) ###-####
//! input:    5551234567
//! output:   (555) 123-4567     the "(", ") ", and "-" are blank-filled
//!
//! input:    (555) 123-4567
//! output:   (555) 123-4567     the same literals are matched and consumed
//! ```
//!
//! # Blank-Fill Policy
//!
//! By default, a literal the input has not supplied is emitted anyway
//! ("blank fill"), so typing `555` against `(###) ###-####` shows
//! `(555) ` — the field leads the user to the next expected digit.
//!
//! With blank fill suppressed
//! ([`MaskOptions::suppress_blank_fill`](crate::MaskOptions::suppress_blank_fill)),
//! an unfilled literal goes through the same validation as a symbol
//! position, and a literal never validates, so the walk halts there:
//!
//! ```text
//! template: (###) ###-####    (blank fill suppressed)
//! input:    555        →  ""        halts at "(": input does not supply it
//! input:    (555       →  "(555"    halts at ")": input exhausted
//! ```
//!
//! Suppressed mode therefore expects the raw input to carry the template's
//! literals itself, and is useful for re-validating already-formatted text.
//!
//! # Halt Rule
//!
//! The walk terminates in exactly two ways:
//!
//! - **Template exhausted** — the full rendering is returned
//! - **Validation failure** — a symbol position saw a character outside its
//!   class, or ran out of input, or (with fill suppressed) a literal went
//!   unfilled; the output accumulated so far is returned
//!
//! The result is always a prefix of the full rendering: never padded,
//! never truncated mid-conversion. Excess input beyond the template is
//! ignored.
//!
//! # Delimiter Set
//!
//! The fixed set used both by the `X` symbol and by unmasking:
//!
//! ```text
//! - ! $ % ^ & * ( ) _ + | ~ = ` { } [ ] : " ; ' < > ? , . / \ and space
//! ```
//!
//! Unmasking removes exactly these characters in one pass, preserving the
//! order of everything else. Masking with blank fill followed by unmasking
//! recovers the consumed raw characters for templates whose literals are
//! all delimiters.
//!
//! # Worked Examples
//!
//! ```text
//! US phone      (###) ###-####     5551234567       → (555) 123-4567
//! Date          ##/##/####         24122024         → 24/12/2024
//! Card number   #### #### #### #### 4111111111111111 → 4111 1111 1111 1111
//! Licence plate AAA-####           abc1234          → ABC-1234
//! Product code  NNN-NNN            ab1cd2           → AB1-CD2
//! ```
//!
//! # Edge Cases
//!
//! - Missing input (`None`) masks to the empty string
//! - Empty template returns the input unchanged; empty input returns empty
//! - Unmasking `None` returns `None` — "no value" survives the inverse
//!   direction unchanged
//! - Template characters that look like symbols but are not (`Z`, `@`, …)
//!   are literals
//!
//! # Limitations
//!
//! - **Fixed-length templates**: no optional or repeating positions
//! - **Single template per call**: no multi-template fallback (e.g. phone
//!   formats that change shape with length)
//! - **ASCII character classes**: locale-aware letter classes are out of
//!   scope
//! - **Stateless**: caret positioning and edit history belong to the
//!   calling input component

// This module contains only documentation; no implementation code
