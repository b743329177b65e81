//! Memoizing wrapper around a currency provider.

use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CurrencyDefaults, CurrencyProvider, Locale};
use crate::error::MaskError;

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => unreachable!(),
};

type CurrencyKey = (Locale, Option<String>);

/// Caches provider answers per (locale, currency) pair.
///
/// Provider results are referentially stable, so repeated mask construction
/// for the same locale only hits the inner provider once. Failed lookups are
/// not cached.
#[derive(Debug)]
pub struct CachedProvider<P> {
    inner: P,
    currencies: Mutex<LruCache<CurrencyKey, CurrencyDefaults>>,
    parentheses: Mutex<LruCache<Locale, bool>>,
}

impl<P: CurrencyProvider> CachedProvider<P> {
    /// Wrap a provider.
    pub fn new(inner: P) -> Self {
        CachedProvider {
            inner,
            currencies: Mutex::new(LruCache::new(CACHE_SIZE)),
            parentheses: Mutex::new(LruCache::new(CACHE_SIZE)),
        }
    }

    /// Returns the wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<P: CurrencyProvider> CurrencyProvider for CachedProvider<P> {
    fn resolve_currency(
        &self,
        locale: &Locale,
        currency_code: Option<&str>,
    ) -> Result<CurrencyDefaults, MaskError> {
        // Keyed on the code exactly as given; the inner provider decides
        // whether lookups are case-sensitive.
        let key = (locale.clone(), currency_code.map(str::to_string));

        if let Some(defaults) = lock(&self.currencies).get(&key) {
            trace!("currency cache hit for {:?}", key);
            return Ok(defaults.clone());
        }

        trace!("currency cache miss for {:?}", key);
        let defaults = self.inner.resolve_currency(locale, currency_code)?;
        lock(&self.currencies).put(key, defaults.clone());
        Ok(defaults)
    }

    fn native_accounting_uses_parentheses(&self, locale: &Locale) -> bool {
        if let Some(flag) = lock(&self.parentheses).get(locale) {
            return *flag;
        }

        let flag = self.inner.native_accounting_uses_parentheses(locale);
        lock(&self.parentheses).put(locale.clone(), flag);
        flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::SymbolPlacement;
    use crate::pattern::{Decimals, Spacing};
    use std::cell::Cell;

    struct CountingProvider {
        calls: Cell<usize>,
    }

    impl CurrencyProvider for CountingProvider {
        fn resolve_currency(
            &self,
            locale: &Locale,
            currency_code: Option<&str>,
        ) -> Result<CurrencyDefaults, MaskError> {
            self.calls.set(self.calls.get() + 1);
            if locale.key() != "en_US" {
                return Err(MaskError::UnknownLocale {
                    locale: locale.key().to_string(),
                });
            }
            if let Some(code) = currency_code.filter(|code| *code != "USD") {
                return Err(MaskError::UnknownCurrency {
                    code: code.to_string(),
                    locale: locale.key().to_string(),
                });
            }
            Ok(CurrencyDefaults {
                code: "USD".to_string(),
                symbol: "$".to_string(),
                placement: SymbolPlacement::Leading,
                spacing: Spacing::None,
                decimals: Decimals::TWO,
            })
        }

        fn native_accounting_uses_parentheses(&self, _locale: &Locale) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    #[test]
    fn test_resolve_is_memoized() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
        });
        let en_us = Locale::new("en_US");

        let first = cached.resolve_currency(&en_us, None).unwrap();
        let second = cached.resolve_currency(&en_us, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(cached.inner().calls.get(), 1);

        cached.resolve_currency(&en_us, Some("USD")).unwrap();
        cached.resolve_currency(&en_us, Some("USD")).unwrap();
        assert_eq!(cached.inner().calls.get(), 2);
    }

    #[test]
    fn test_case_sensitive_provider_independent_of_order() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
        });
        let en_us = Locale::new("en_US");

        assert!(cached.resolve_currency(&en_us, Some("USD")).is_ok());
        assert_eq!(
            cached.resolve_currency(&en_us, Some("usd")),
            Err(MaskError::UnknownCurrency {
                code: "usd".to_string(),
                locale: "en_US".to_string()
            })
        );
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
        });
        let unknown = Locale::new("xx_XX");

        assert!(cached.resolve_currency(&unknown, None).is_err());
        assert!(cached.resolve_currency(&unknown, None).is_err());
        assert_eq!(cached.inner().calls.get(), 2);
    }

    #[test]
    fn test_capability_is_memoized() {
        let cached = CachedProvider::new(CountingProvider {
            calls: Cell::new(0),
        });
        let en_us = Locale::new("en_US");

        assert!(cached.native_accounting_uses_parentheses(&en_us));
        assert!(cached.native_accounting_uses_parentheses(&en_us));
        assert_eq!(cached.inner().calls.get(), 1);
    }
}
