//! Bare numeric patterns and spacing primitives.
//!
//! Format codes are locale-invariant: grouping is always written as `,` and
//! the decimal point as `.`, and the spreadsheet substitutes the reader's
//! separators at display time.

use crate::error::MaskError;

/// Non-breaking space, used by many locales between symbol and number.
pub const NON_BREAKING_SPACE: char = '\u{a0}';

/// Decimal separator as written in a format code.
pub const DECIMAL_SEPARATOR: char = '.';

/// Grouping separator as written in a format code.
pub const GROUPING_SEPARATOR: char = ',';

/// Maximum number of fractional digits a format code may carry.
pub const MAX_DECIMALS: u8 = 30;

/// Whitespace placed between two adjacent mask elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spacing {
    /// Elements are adjacent
    #[default]
    None,
    /// A regular space
    Space,
    /// A non-breaking space (U+00A0)
    NonBreakingSpace,
}

impl Spacing {
    /// Returns the text inserted for this spacing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Spacing::None => "",
            Spacing::Space => " ",
            Spacing::NonBreakingSpace => "\u{a0}",
        }
    }
}

/// Validated count of fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Decimals(u8);

impl Decimals {
    /// Two fractional digits, the default for most currencies.
    pub const TWO: Decimals = Decimals(2);

    /// Validate a caller-supplied decimal count.
    pub fn new(count: i32) -> Result<Self, MaskError> {
        u8::try_from(count)
            .ok()
            .filter(|n| *n <= MAX_DECIMALS)
            .map(Decimals)
            .ok_or(MaskError::InvalidDecimalCount { count })
    }

    /// Returns the number of fractional digits.
    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for Decimals {
    fn default() -> Self {
        Decimals::TWO
    }
}

impl TryFrom<i32> for Decimals {
    type Error = MaskError;

    fn try_from(count: i32) -> Result<Self, Self::Error> {
        Decimals::new(count)
    }
}

/// Build the bare numeric pattern for a decimal count.
///
/// Always grouped (`#,##0`); a decimal point is only written when there is at
/// least one fractional digit.
pub fn base_pattern(decimals: Decimals) -> String {
    let mut pattern = String::with_capacity(6 + decimals.get() as usize);
    pattern.push('#');
    pattern.push(GROUPING_SEPARATOR);
    pattern.push_str("##0");
    if decimals.get() > 0 {
        pattern.push(DECIMAL_SEPARATOR);
        pattern.extend(std::iter::repeat('0').take(decimals.get() as usize));
    }
    pattern
}
