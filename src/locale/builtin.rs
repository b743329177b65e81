//! Built-in locale and currency data.

use log::debug;

use super::{CurrencyDefaults, CurrencyProvider, Locale};
use crate::currency::SymbolPlacement;
use crate::error::MaskError;
use crate::pattern::{Decimals, Spacing};

use crate::currency::SymbolPlacement::{Leading, Trailing};
use crate::pattern::Spacing::{NonBreakingSpace as Nbsp, None as Tight};

/// Accounting conventions of a single locale.
#[derive(Debug, Clone, Copy)]
struct LocaleData {
    tag: &'static str,
    currency: &'static str,
    placement: SymbolPlacement,
    spacing: Spacing,
    /// Whether the locale's accounting pattern wraps negatives in parentheses
    parentheses: bool,
}

/// A currency and its locale-neutral symbol.
#[derive(Debug, Clone, Copy)]
struct CurrencyData {
    code: &'static str,
    symbol: &'static str,
    decimals: u8,
}

const fn locale(
    tag: &'static str,
    currency: &'static str,
    placement: SymbolPlacement,
    spacing: Spacing,
    parentheses: bool,
) -> LocaleData {
    LocaleData {
        tag,
        currency,
        placement,
        spacing,
        parentheses,
    }
}

const fn currency(code: &'static str, symbol: &'static str, decimals: u8) -> CurrencyData {
    CurrencyData {
        code,
        symbol,
        decimals,
    }
}

static LOCALES: &[LocaleData] = &[
    locale("en_US", "USD", Leading, Tight, true),
    locale("en_GB", "GBP", Leading, Tight, true),
    locale("en_IE", "EUR", Leading, Tight, true),
    locale("en_CA", "CAD", Leading, Tight, true),
    locale("en_AU", "AUD", Leading, Tight, true),
    locale("fr_CA", "CAD", Trailing, Nbsp, true),
    locale("fr_FR", "EUR", Trailing, Nbsp, true),
    locale("nl_NL", "EUR", Leading, Nbsp, true),
    locale("fy_NL", "EUR", Leading, Nbsp, true),
    locale("ja_JP", "JPY", Leading, Tight, true),
    locale("es_ES", "EUR", Trailing, Nbsp, false),
    locale("da_DK", "DKK", Trailing, Nbsp, false),
    locale("de_DE", "EUR", Trailing, Nbsp, false),
    locale("de_CH", "CHF", Leading, Nbsp, false),
    locale("it_IT", "EUR", Trailing, Nbsp, false),
    locale("sv_SE", "SEK", Trailing, Nbsp, false),
];

static CURRENCIES: &[CurrencyData] = &[
    currency("USD", "$", 2),
    currency("EUR", "€", 2),
    currency("GBP", "£", 2),
    currency("CAD", "CA$", 2),
    currency("AUD", "A$", 2),
    currency("JPY", "¥", 0),
    currency("CHF", "CHF", 2),
    currency("DKK", "DKK", 2),
    currency("SEK", "SEK", 2),
    currency("NOK", "NOK", 2),
];

/// Symbols a locale writes differently from the neutral symbol.
static LOCAL_SYMBOLS: &[(&str, &str, &str)] = &[
    ("fr_CA", "CAD", "$CA"),
    ("fr_CA", "USD", "$US"),
    ("en_AU", "AUD", "$"),
    ("da_DK", "DKK", "kr."),
    ("sv_SE", "SEK", "kr"),
];

/// Currency provider backed by a static table of common locales.
///
/// Locale and currency lookups are case-insensitive; errors report the code
/// as the caller passed it.
///
/// The capability flag models whether the underlying locale data follows the
/// legacy convention of parenthesized accounting negatives. When it is off
/// (the default) every locale renders negatives with a plain minus.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinProvider {
    accounting_parentheses: bool,
}

impl BuiltinProvider {
    /// Provider following the current convention (plain minus).
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider reporting the given parentheses capability.
    ///
    /// Even when enabled, only locales whose accounting pattern actually uses
    /// parentheses report them.
    pub fn with_accounting_parentheses(enabled: bool) -> Self {
        BuiltinProvider {
            accounting_parentheses: enabled,
        }
    }

    /// Returns the locale identifiers this provider knows about.
    pub fn locales() -> impl Iterator<Item = &'static str> {
        LOCALES.iter().map(|l| l.tag)
    }

    fn locale_data(locale: &Locale) -> Result<&'static LocaleData, MaskError> {
        LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(locale.key()))
            .ok_or_else(|| MaskError::UnknownLocale {
                locale: locale.key().to_string(),
            })
    }

    fn currency_data(code: &str) -> Option<&'static CurrencyData> {
        CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code))
    }

    fn local_symbol(tag: &str, code: &str) -> Option<&'static str> {
        LOCAL_SYMBOLS
            .iter()
            .find(|(t, c, _)| *t == tag && *c == code)
            .map(|(_, _, symbol)| *symbol)
    }
}

impl CurrencyProvider for BuiltinProvider {
    fn resolve_currency(
        &self,
        locale: &Locale,
        currency_code: Option<&str>,
    ) -> Result<CurrencyDefaults, MaskError> {
        let data = Self::locale_data(locale)?;
        let code = currency_code.map(str::trim).unwrap_or(data.currency);
        let currency = Self::currency_data(code).ok_or_else(|| MaskError::UnknownCurrency {
            code: code.to_string(),
            locale: locale.key().to_string(),
        })?;

        let symbol = Self::local_symbol(data.tag, currency.code).unwrap_or(currency.symbol);
        debug!(
            "resolved {} for {} to symbol '{}'",
            currency.code, data.tag, symbol
        );

        Ok(CurrencyDefaults {
            code: currency.code.to_string(),
            symbol: symbol.to_string(),
            placement: data.placement,
            spacing: data.spacing,
            decimals: Decimals::new(i32::from(currency.decimals))?,
        })
    }

    fn native_accounting_uses_parentheses(&self, locale: &Locale) -> bool {
        self.accounting_parentheses
            && Self::locale_data(locale)
                .map(|data| data.parentheses)
                .unwrap_or(false)
    }
}
