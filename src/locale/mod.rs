//! Locale identifiers and the currency data provider interface.

mod builtin;
mod cached;

pub use builtin::BuiltinProvider;
pub use cached::CachedProvider;

use std::fmt;

use crate::currency::SymbolPlacement;
use crate::error::MaskError;
use crate::pattern::{Decimals, Spacing};

/// A locale identifier such as `en_US`.
///
/// Accepts either `_` or `-` between subtags. The identifier is only used as
/// a lookup key and echoed into symbol tokens in its hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Create a locale from an identifier like `en_US` or `en-US`.
    pub fn new(tag: &str) -> Self {
        Locale {
            tag: tag.trim().replace('-', "_"),
        }
    }

    /// Returns the underscore form used for data lookups (`en_US`).
    pub fn key(&self) -> &str {
        &self.tag
    }

    /// Returns the hyphenated form written into symbol tokens (`en-US`).
    pub fn bcp47(&self) -> String {
        self.tag.replace('_', "-")
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::new("en_US")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bcp47())
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

/// Currency conventions the data provider reports for a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyDefaults {
    /// ISO 4217 code of the resolved currency
    pub code: String,
    /// Symbol as the locale writes it (e.g., "$", "kr.", "$CA")
    pub symbol: String,
    /// Where the symbol sits relative to the number
    pub placement: SymbolPlacement,
    /// Whitespace between symbol and number
    pub spacing: Spacing,
    /// Default number of fractional digits for the currency
    pub decimals: Decimals,
}

/// Source of locale and currency conventions.
pub trait CurrencyProvider {
    /// Resolve the currency for a locale.
    ///
    /// With `currency_code` set, that currency's symbol as written in the
    /// locale is returned; otherwise the locale's native currency.
    fn resolve_currency(
        &self,
        locale: &Locale,
        currency_code: Option<&str>,
    ) -> Result<CurrencyDefaults, MaskError>;

    /// Whether the locale's native accounting format wraps negative values
    /// in parentheses.
    fn native_accounting_uses_parentheses(&self, locale: &Locale) -> bool;
}

impl<P: CurrencyProvider + ?Sized> CurrencyProvider for &P {
    fn resolve_currency(
        &self,
        locale: &Locale,
        currency_code: Option<&str>,
    ) -> Result<CurrencyDefaults, MaskError> {
        (**self).resolve_currency(locale, currency_code)
    }

    fn native_accounting_uses_parentheses(&self, locale: &Locale) -> bool {
        (**self).native_accounting_uses_parentheses(locale)
    }
}
