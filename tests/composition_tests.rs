//! Structural properties of composed masks.

use acctfmt::{
    base_pattern, AccountingMask, BuiltinProvider, Decimals, SectionKind, Spacing,
    SymbolPlacement, NON_BREAKING_SPACE, ZERO_MARKER,
};

fn mask(locale: &str, parentheses: bool) -> AccountingMask {
    let provider = BuiltinProvider::with_accounting_parentheses(parentheses);
    AccountingMask::new(&provider, locale, None).unwrap()
}

#[test]
fn test_base_pattern_decimal_digits() {
    for n in 0..=30 {
        let pattern = base_pattern(Decimals::new(n).unwrap());
        match pattern.split_once('.') {
            Some((integer, fraction)) => {
                assert_eq!(integer, "#,##0");
                assert_eq!(fraction.len(), n as usize);
                assert!(fraction.chars().all(|c| c == '0'));
            }
            None => {
                assert_eq!(n, 0);
                assert_eq!(pattern, "#,##0");
            }
        }
    }
}

#[test]
fn test_section_count_bounds() {
    let spacings = [Spacing::None, Spacing::Space, Spacing::NonBreakingSpace];
    for locale in ["en_US", "es_ES", "da_DK", "nl_NL"] {
        for parentheses in [false, true] {
            for wrap in [false, true] {
                for trailing in [None, Some(spacings[0]), Some(spacings[2])] {
                    for plus in [false, true] {
                        let mut m = mask(locale, parentheses)
                            .wrap_negative_values(wrap)
                            .display_positive_sign(plus);
                        if let Some(spacing) = trailing {
                            m = m.trailing_sign(true, spacing);
                        }
                        let composed = m.compose();
                        let count = composed.split(';').count();
                        assert!((1..=3).contains(&count), "{}", composed);
                        assert_eq!(count, m.compose_mask().section_count());
                        assert_eq!(composed, m.compose());
                    }
                }
            }
        }
    }
}

#[test]
fn test_wrapped_negative_matches_positive() {
    for locale in ["en_US", "es_ES", "da_DK", "fr_CA"] {
        let composed = mask(locale, false).wrap_negative_values(true).compose_mask();
        let expected = format!("({})", composed.positive());
        assert_eq!(composed.negative(), Some(expected.as_str()));
    }
}

#[test]
fn test_trailing_sign_two_sections() {
    let composed = mask("en_GB", true)
        .trailing_sign(true, Spacing::Space)
        .compose_mask();
    assert_eq!(composed.section_count(), 2);
    assert_eq!(composed.negative(), Some("[$£-en-GB]#,##0.00 -"));
}

#[test]
fn test_trailing_and_positive_sign_three_sections() {
    let composed = mask("da_DK", false)
        .trailing_sign(true, Spacing::NonBreakingSpace)
        .display_positive_sign(true)
        .compose_mask();
    assert_eq!(composed.section_count(), 3);

    let zero = composed.zero().unwrap();
    assert!(zero.starts_with(ZERO_MARKER));
    assert!(zero.contains("[$kr.-da-DK]"));
}

#[test]
fn test_trailing_symbol_with_space() {
    let composed = mask("en_US", true)
        .set_currency_symbol("USD", SymbolPlacement::Trailing, Spacing::Space)
        .unwrap()
        .compose_mask();
    for (_, section) in composed.sections() {
        assert!(section.contains("#,##0.00 [$USD-en-US]"), "{}", section);
    }
}

#[test]
fn test_only_permitted_whitespace() {
    let composed = mask("da_DK", true)
        .trailing_sign(true, Spacing::Space)
        .display_positive_sign(true)
        .compose();
    assert!(composed
        .chars()
        .filter(|c| c.is_whitespace())
        .all(|c| c == ' ' || c == NON_BREAKING_SPACE));
}

#[test]
fn test_sections_report_kinds() {
    let composed = mask("en_US", true).display_positive_sign(true).compose_mask();
    let kinds: Vec<SectionKind> = composed.sections().map(|(kind, _)| kind).collect();
    assert_eq!(
        kinds,
        vec![SectionKind::Positive, SectionKind::Negative, SectionKind::Zero]
    );
}
