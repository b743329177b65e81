//! acctfmt - locale-aware accounting number format masks
//!
//! This crate composes Excel-compatible ECMA-376 number format codes for
//! currency values, such as `[$$-en-US]#,##0.00;([$$-en-US]#,##0.00)`, from a
//! locale, an optional currency and a set of explicit overrides.

pub mod accounting;
pub mod currency;
pub mod error;
pub mod locale;
pub mod mask;
pub mod options;
pub mod pattern;

mod cache;

pub use accounting::{AccountingMask, FormatSpec, NegativeStyle, ZERO_MARKER};
pub use currency::{CurrencySpec, CurrencyToken, SymbolPlacement};
pub use error::MaskError;
pub use locale::{BuiltinProvider, CachedProvider, CurrencyDefaults, CurrencyProvider, Locale};
pub use mask::{ComposedMask, SectionKind};
pub use options::{MaskOptions, SymbolOverride};
pub use pattern::{base_pattern, Decimals, Spacing, NON_BREAKING_SPACE};

/// Compose the default accounting mask for a locale using the built-in
/// locale data.
///
/// Results are cached, so repeated calls for the same locale and currency
/// are cheap.
///
/// # Examples
/// ```
/// use acctfmt::accounting_mask;
///
/// assert_eq!(accounting_mask("en_GB", None).unwrap(), "[$£-en-GB]#,##0.00");
/// assert_eq!(accounting_mask("es_ES", None).unwrap(), "#,##0.00\u{a0}[$€-es-ES]");
/// ```
pub fn accounting_mask(locale: &str, currency_code: Option<&str>) -> Result<String, MaskError> {
    cache::get_or_compose(Locale::new(locale), currency_code)
}

/// Compose an accounting mask with overrides using any currency provider.
pub fn accounting_mask_with<P: CurrencyProvider + ?Sized>(
    provider: &P,
    locale: &str,
    currency_code: Option<&str>,
    options: &MaskOptions,
) -> Result<String, MaskError> {
    let mask = AccountingMask::new(provider, locale, currency_code)?.apply(options)?;
    Ok(mask.compose())
}
