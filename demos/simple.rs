//! Basic masking and unmasking.
//!
//! Run with: cargo run --example simple

use textmask::{mask_text, unmask_text};

fn main() {
    let template = "(###) ###-####";

    // Simulate a user typing a phone number digit by digit
    let raw = "5551234567";
    println!("Template: {}\n", template);

    for end in 1..=raw.len() {
        let typed = &raw[..end];
        let masked = mask_text(Some(typed), template);
        println!("  {:>10} -> {}", typed, masked);
    }

    // Recover the raw digits from the formatted string
    let formatted = mask_text(Some(raw), template);
    let recovered = unmask_text(Some(&formatted));
    println!("\nFormatted: {}", formatted);
    println!("Recovered: {}", recovered.as_deref().unwrap_or(""));
    assert_eq!(recovered.as_deref(), Some(raw));
    println!("✓ Round-trip successful");
}
