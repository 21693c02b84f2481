//! Recovering raw content from formatted strings.
//!
//! Run with: cargo run --example unmasking

use textmask::{unmask_text, MASK_DELIMITERS};

fn main() {
    println!("Strip set: {} characters\n", MASK_DELIMITERS.len());

    let formatted = [
        "(555) 123-4567",
        "24/12/2024",
        "4111 1111 1111 1111",
        "ABC-1234",
        "A1-B2_C3.D4",
        "no delimiters here? only these",
    ];

    for text in formatted {
        let raw = unmask_text(Some(text));
        println!("  {:>32} -> {}", text, raw.as_deref().unwrap_or(""));
    }

    // "No value" passes through unchanged rather than collapsing to empty
    assert_eq!(unmask_text(None), None);
    println!("\n✓ None passes through as None");
}
