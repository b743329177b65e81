//! Currency symbol resolution and placement.

use std::fmt;

use log::debug;

use crate::error::MaskError;
use crate::locale::{CurrencyDefaults, CurrencyProvider, Locale};
use crate::pattern::Spacing;

/// Position of the currency symbol relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolPlacement {
    /// Symbol before the number (`$1.00`)
    Leading,
    /// Symbol after the number (`1,00 €`)
    Trailing,
}

/// The `[$<symbol>-<locale>]` marker embedded in a mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyToken {
    symbol: String,
    locale: Locale,
}

impl CurrencyToken {
    /// Create a token. The symbol must not be empty.
    pub fn new(symbol: &str, locale: Locale) -> Result<Self, MaskError> {
        if symbol.is_empty() {
            return Err(MaskError::EmptyCurrencySymbol);
        }
        Ok(CurrencyToken {
            symbol: symbol.to_string(),
            locale,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}

impl fmt::Display for CurrencyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[${}-{}]", self.symbol, self.locale.bcp47())
    }
}

/// A resolved currency symbol together with its placement and spacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencySpec {
    /// ISO code the symbol was resolved from, if it came from the provider
    code: Option<String>,
    token: CurrencyToken,
    placement: SymbolPlacement,
    spacing: Spacing,
}

impl CurrencySpec {
    /// Resolve the currency for a locale through the provider.
    ///
    /// Without a currency code the locale's native currency is used.
    pub fn resolve<P: CurrencyProvider + ?Sized>(
        provider: &P,
        locale: &Locale,
        currency_code: Option<&str>,
    ) -> Result<Self, MaskError> {
        let defaults = provider.resolve_currency(locale, currency_code)?;
        Self::from_defaults(locale, &defaults)
    }

    pub(crate) fn from_defaults(
        locale: &Locale,
        defaults: &CurrencyDefaults,
    ) -> Result<Self, MaskError> {
        debug!(
            "currency for {}: {} '{}' {:?}",
            locale, defaults.code, defaults.symbol, defaults.placement
        );

        Ok(CurrencySpec {
            code: Some(defaults.code.clone()),
            token: CurrencyToken::new(&defaults.symbol, locale.clone())?,
            placement: defaults.placement,
            spacing: defaults.spacing,
        })
    }

    /// Replace the symbol, placement and spacing.
    ///
    /// The provider-derived values are discarded entirely, including the
    /// currency code.
    pub fn set_currency_symbol(
        &mut self,
        symbol: &str,
        placement: SymbolPlacement,
        spacing: Spacing,
    ) -> Result<(), MaskError> {
        self.token = CurrencyToken::new(symbol, self.token.locale.clone())?;
        self.code = None;
        self.placement = placement;
        self.spacing = spacing;
        Ok(())
    }

    /// Render the `[$<symbol>-<locale>]` token.
    pub fn symbol_token(&self) -> String {
        self.token.to_string()
    }

    pub fn token(&self) -> &CurrencyToken {
        &self.token
    }

    /// ISO code of the resolved currency; `None` after a manual override.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn placement(&self) -> SymbolPlacement {
        self.placement
    }

    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Place the symbol token around `body` according to placement and spacing.
    pub(crate) fn wrap(&self, body: &str) -> String {
        self.wrap_spaced(body, self.spacing)
    }

    /// Place the symbol token around `body` with an explicit spacing.
    pub(crate) fn wrap_spaced(&self, body: &str, spacing: Spacing) -> String {
        let token = self.symbol_token();
        let spacing = spacing.as_str();
        match self.placement {
            SymbolPlacement::Leading => format!("{token}{spacing}{body}"),
            SymbolPlacement::Trailing => format!("{body}{spacing}{token}"),
        }
    }
}
