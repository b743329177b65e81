//! Accounting mask composition.
//!
//! An [`AccountingMask`] starts from the conventions a [`CurrencyProvider`]
//! reports for a locale, takes any number of overrides, and composes them
//! into a format code with up to three sections:
//!
//! ```
//! use acctfmt::{AccountingMask, BuiltinProvider};
//!
//! let provider = BuiltinProvider::new();
//! let mask = AccountingMask::new(&provider, "en_US", None)
//!     .unwrap()
//!     .wrap_negative_values(true);
//! assert_eq!(mask.compose(), "[$$-en-US]#,##0.00;([$$-en-US]#,##0.00)");
//! ```

use log::debug;

use crate::currency::{CurrencySpec, SymbolPlacement};
use crate::error::MaskError;
use crate::locale::{CurrencyProvider, Locale};
use crate::mask::ComposedMask;
use crate::options::MaskOptions;
use crate::pattern::{base_pattern, Decimals, Spacing};

/// Zero rendered as a dash padded to the width of two digits.
pub const ZERO_MARKER: &str = "\"-\"??";

/// How negative values are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    /// Follow the locale's native accounting convention
    #[default]
    LocaleDefault,
    /// Wrap the number and symbol in parentheses
    Parenthesized,
    /// Minus sign after the number, separated by the given spacing
    TrailingMinus(Spacing),
}

/// Fully resolved configuration of an accounting mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    pub currency: CurrencySpec,
    pub decimals: Decimals,
    pub negative: NegativeStyle,
    /// Show an explicit `+` on positive values and a dash for zero
    pub sign_display: bool,
    /// Provider capability captured at construction
    pub native_parentheses: bool,
}

impl FormatSpec {
    /// Compose the mask sections.
    pub fn compose(&self) -> ComposedMask {
        let number = base_pattern(self.decimals);
        let trailing_sign = match self.negative {
            NegativeStyle::TrailingMinus(separator) => Some(separator),
            _ => None,
        };

        // A trailing sign carries its spacing on both sides, so it also
        // separates the sign from a trailing symbol.
        let signed = |sign: char| match trailing_sign {
            Some(separator) => {
                let body = format!("{number}{}{sign}", separator.as_str());
                match self.currency.placement() {
                    SymbolPlacement::Trailing => self.currency.wrap_spaced(&body, separator),
                    SymbolPlacement::Leading => self.currency.wrap(&body),
                }
            }
            None => self.currency.wrap(&format!("{sign}{number}")),
        };

        let positive = if self.sign_display {
            signed('+')
        } else {
            self.currency.wrap(&number)
        };

        let parenthesized = match self.negative {
            NegativeStyle::Parenthesized => true,
            NegativeStyle::LocaleDefault => self.native_parentheses,
            NegativeStyle::TrailingMinus(_) => false,
        };

        // A single section already renders negatives with a leading minus,
        // unless the positive section carries its own sign.
        let negative = if parenthesized {
            Some(format!("({})", self.currency.wrap(&number)))
        } else if self.sign_display || trailing_sign.is_some() {
            Some(signed('-'))
        } else {
            None
        };

        // Zero is always the dash followed by the symbol, whatever the placement.
        let zero = self.sign_display.then(|| {
            let nbsp = self.currency.spacing() == Spacing::NonBreakingSpace
                || trailing_sign == Some(Spacing::NonBreakingSpace);
            let separator = if nbsp {
                Spacing::NonBreakingSpace
            } else {
                Spacing::Space
            };
            format!(
                "{ZERO_MARKER}{}{}",
                separator.as_str(),
                self.currency.symbol_token()
            )
        });

        ComposedMask::new(positive, negative, zero)
    }
}

/// Builder for a locale-aware accounting format code.
///
/// Setters take the builder by value and may be called in any order; the last
/// call for a given field wins. [`compose`](Self::compose) does not change the
/// builder and returns the same mask every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountingMask {
    spec: FormatSpec,
}

impl AccountingMask {
    /// Create a mask for a locale and, optionally, a currency other than the
    /// locale's own.
    pub fn new<P: CurrencyProvider + ?Sized>(
        provider: &P,
        locale: impl Into<Locale>,
        currency_code: Option<&str>,
    ) -> Result<Self, MaskError> {
        let locale = locale.into();
        let defaults = provider.resolve_currency(&locale, currency_code)?;
        let currency = CurrencySpec::from_defaults(&locale, &defaults)?;
        let native_parentheses = provider.native_accounting_uses_parentheses(&locale);

        Ok(AccountingMask {
            spec: FormatSpec {
                currency,
                decimals: defaults.decimals,
                negative: NegativeStyle::LocaleDefault,
                sign_display: false,
                native_parentheses,
            },
        })
    }

    /// Create a mask for `en_US` in its native currency.
    pub fn with_default_locale<P: CurrencyProvider + ?Sized>(provider: &P) -> Result<Self, MaskError> {
        Self::new(provider, Locale::default(), None)
    }

    /// Build a mask directly from a resolved configuration.
    pub fn from_spec(spec: FormatSpec) -> Self {
        AccountingMask { spec }
    }

    /// Set the number of fractional digits (0 to 30).
    pub fn set_decimals(mut self, decimals: i32) -> Result<Self, MaskError> {
        self.spec.decimals = Decimals::new(decimals)?;
        Ok(self)
    }

    /// Replace the locale's currency symbol, placement and spacing.
    pub fn set_currency_symbol(
        mut self,
        symbol: &str,
        placement: SymbolPlacement,
        spacing: Spacing,
    ) -> Result<Self, MaskError> {
        self.spec
            .currency
            .set_currency_symbol(symbol, placement, spacing)?;
        Ok(self)
    }

    /// Wrap negative values in parentheses.
    ///
    /// Passing `false` reverts parentheses to the locale default and leaves a
    /// trailing sign untouched.
    pub fn wrap_negative_values(mut self, wrap: bool) -> Self {
        if wrap {
            self.spec.negative = NegativeStyle::Parenthesized;
        } else if self.spec.negative == NegativeStyle::Parenthesized {
            self.spec.negative = NegativeStyle::LocaleDefault;
        }
        self
    }

    /// Place the sign after the number, separated by `spacing`.
    ///
    /// Passing `false` reverts a trailing sign to the locale default and
    /// leaves parentheses untouched.
    pub fn trailing_sign(mut self, enabled: bool, spacing: Spacing) -> Self {
        if enabled {
            self.spec.negative = NegativeStyle::TrailingMinus(spacing);
        } else if matches!(self.spec.negative, NegativeStyle::TrailingMinus(_)) {
            self.spec.negative = NegativeStyle::LocaleDefault;
        }
        self
    }

    /// Show an explicit `+` for positive values.
    pub fn display_positive_sign(mut self, display: bool) -> Self {
        self.spec.sign_display = display;
        self
    }

    /// Apply a set of overrides in a fixed order, stopping at the first error.
    pub fn apply(mut self, options: &MaskOptions) -> Result<Self, MaskError> {
        if let Some(decimals) = options.decimals {
            self = self.set_decimals(decimals)?;
        }
        if let Some(symbol) = &options.currency_symbol {
            self = self.set_currency_symbol(&symbol.symbol, symbol.placement, symbol.spacing)?;
        }
        if let Some(wrap) = options.wrap_negative {
            self = self.wrap_negative_values(wrap);
        }
        if let Some(spacing) = options.trailing_sign {
            self = self.trailing_sign(true, spacing);
        }
        if let Some(display) = options.display_positive_sign {
            self = self.display_positive_sign(display);
        }
        Ok(self)
    }

    pub fn spec(&self) -> &FormatSpec {
        &self.spec
    }

    /// Compose the mask into its sections.
    pub fn compose_mask(&self) -> ComposedMask {
        let mask = self.spec.compose();
        debug!(
            "composed {}-section accounting mask for {}",
            mask.section_count(),
            self.spec.currency.token().locale()
        );
        mask
    }

    /// Compose the mask into a format code string.
    pub fn compose(&self) -> String {
        self.compose_mask().to_string()
    }
}
