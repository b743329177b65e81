//! Error types for resolving and configuring accounting masks.

use thiserror::Error;

/// Errors that can occur while building an accounting mask.
///
/// Composition itself never fails: every variant is raised while the
/// configuration is being resolved or set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaskError {
    #[error("unknown locale '{locale}'")]
    UnknownLocale { locale: String },

    #[error("unknown currency '{code}' for locale '{locale}'")]
    UnknownCurrency { code: String, locale: String },

    #[error(
        "invalid decimal count {count} (must be between 0 and {max})",
        max = crate::pattern::MAX_DECIMALS
    )]
    InvalidDecimalCount { count: i32 },

    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,
}
