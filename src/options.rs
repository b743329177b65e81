//! Typed overrides applied on top of locale defaults.

use crate::currency::SymbolPlacement;
use crate::pattern::Spacing;

/// An explicit currency symbol with its placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolOverride {
    pub symbol: String,
    pub placement: SymbolPlacement,
    pub spacing: Spacing,
}

impl SymbolOverride {
    pub fn new(symbol: impl Into<String>, placement: SymbolPlacement, spacing: Spacing) -> Self {
        SymbolOverride {
            symbol: symbol.into(),
            placement,
            spacing,
        }
    }
}

/// Overrides for an accounting mask. Unset fields keep the locale defaults.
///
/// Fields are applied in declaration order by
/// [`AccountingMask::apply`](crate::AccountingMask::apply).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskOptions {
    /// Number of fractional digits
    pub decimals: Option<i32>,
    /// Replacement currency symbol, placement and spacing
    pub currency_symbol: Option<SymbolOverride>,
    /// Wrap negative values in parentheses (`true`) or defer to the locale
    pub wrap_negative: Option<bool>,
    /// Show the sign after the number, separated by the given spacing
    pub trailing_sign: Option<Spacing>,
    /// Show an explicit `+` for positive values
    pub display_positive_sign: Option<bool>,
}

impl MaskOptions {
    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        self == &MaskOptions::default()
    }
}
