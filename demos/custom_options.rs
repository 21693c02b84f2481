//! The blank-fill policy and when to suppress it.
//!
//! Run with: cargo run --example custom_options

use textmask::{mask_text_with_options, MaskOptions};

fn main() {
    let template = "(###) ###-####";

    // Default policy: literals the input hasn't reached are filled eagerly,
    // which is what a live input field wants
    println!("--- Blank fill on (default) ---\n");
    let options = MaskOptions::new();
    for input in ["5", "555", "5551234567"] {
        let masked = mask_text_with_options(Some(input), template, options.clone());
        println!("  {:>10} -> {:?}", input, masked);
    }

    // Suppressed policy: the walk halts at the first literal the input does
    // not supply itself, so it accepts already-formatted text and rejects
    // bare digits
    println!("\n--- Blank fill suppressed ---\n");
    let options = MaskOptions::suppress_blank_fill();
    for input in ["5551234567", "(555", "(555) 123-4567"] {
        let masked = mask_text_with_options(Some(input), template, options.clone());
        println!("  {:>16} -> {:?}", input, masked);
    }
}
