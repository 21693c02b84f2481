use textmask::{is_mask_delimiter, mask_text, mask_text_with_options, unmask_text, MaskOptions};

#[test]
fn test_literal_blank_fill() {
    // Literals ahead of the typed input are emitted eagerly by default
    let masked = mask_text(Some("555"), "(###) ###-####");
    println!("Blank-filled: {:?}", masked);
    assert_eq!(masked, "(555) ");
}

#[test]
fn test_literal_match_consumes_input() {
    // When the input supplies the literal itself, it is consumed, not doubled
    assert_eq!(mask_text(Some("(555"), "(###) ###-####"), "(555) ");
    assert_eq!(mask_text(Some("555-1234"), "###-####"), "555-1234");
}

#[test]
fn test_halt_on_validation_failure() {
    // A letter under a digit placeholder stops the walk
    assert_eq!(mask_text(Some("55x1234567"), "(###) ###-####"), "(55");
    // A digit under a letter placeholder does too
    assert_eq!(mask_text(Some("a1c"), "AAA"), "A");
}

#[test]
fn test_halt_output_is_never_padded() {
    // After a halt nothing further is emitted, trailing literals included
    assert_eq!(mask_text(Some("12"), "##-##-##"), "12-");
    assert_eq!(mask_text(Some("1234"), "##-##-##"), "12-34-");
}

#[test]
fn test_case_conversion() {
    assert_eq!(mask_text(Some("abc123"), "AAA###"), "ABC123");
    assert_eq!(mask_text(Some("ABC123"), "aaa###"), "abc123");
    assert_eq!(mask_text(Some("aBc"), "AaA"), "AbC");
}

#[test]
fn test_suppressed_fill_halts_at_unfilled_literal() {
    let options = MaskOptions::suppress_blank_fill();

    // The input never supplies '(', so the walk halts before emitting anything
    assert_eq!(
        mask_text_with_options(Some("555"), "(###) ###-####", options.clone()),
        ""
    );

    // The input carries the leading literal; the walk halts at the first
    // literal it runs out of input for
    assert_eq!(
        mask_text_with_options(Some("(555"), "(###) ###-####", options),
        "(555"
    );
}

#[test]
fn test_empty_template_returns_input() {
    assert_eq!(mask_text(Some("anything at all"), ""), "anything at all");
}

#[test]
fn test_empty_and_missing_input() {
    assert_eq!(mask_text(Some(""), "(###) ###-####"), "");
    assert_eq!(mask_text(None, "(###) ###-####"), "");
}

#[test]
fn test_unmask_round_trip() {
    let masked = mask_text(Some("5551234567"), "(###) ###-####");
    assert_eq!(unmask_text(Some(&masked)).as_deref(), Some("5551234567"));

    let masked = mask_text(Some("4111111111111111"), "#### #### #### ####");
    assert_eq!(unmask_text(Some(&masked)).as_deref(), Some("4111111111111111"));
}

#[test]
fn test_unmask_preserves_non_delimiters() {
    assert_eq!(unmask_text(Some("a-b-c")).as_deref(), Some("abc"));
    assert_eq!(unmask_text(Some("already raw")).as_deref(), Some("alreadyraw"));
    assert_eq!(unmask_text(Some("___")).as_deref(), Some(""));
}

#[test]
fn test_delimiter_classification() {
    assert!(is_mask_delimiter('-'));
    assert!(!is_mask_delimiter('5'));
    assert!(is_mask_delimiter(' '));
    assert!(is_mask_delimiter('\\'));
    assert!(!is_mask_delimiter('#'));
    assert!(!is_mask_delimiter('\t'));
}

#[test]
fn test_output_never_longer_than_template() {
    let cases = [
        ("5551234567", "(###) ###-####"),
        ("555", "(###) ###-####"),
        ("", "(###) ###-####"),
        ("abcdef", "AA-AA"),
        ("12345678901234567890", "##"),
    ];

    for (text, template) in cases {
        let masked = mask_text(Some(text), template);
        assert!(
            masked.chars().count() <= template.chars().count(),
            "{:?} against {:?} produced {:?}",
            text,
            template,
            masked
        );
    }
}
