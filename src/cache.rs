//! Composed mask caching.

use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::accounting::AccountingMask;
use crate::error::MaskError;
use crate::locale::{BuiltinProvider, Locale};

type MaskKey = (Locale, Option<String>);

/// Global cache for default masks composed from the built-in locale data.
static CACHE: Mutex<Option<LruCache<MaskKey, String>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Get or compose the default mask for a locale and currency.
pub fn get_or_compose(locale: Locale, currency_code: Option<&str>) -> Result<String, MaskError> {
    // Built-in currency lookups ignore case, so the key may too.
    let key = (
        locale,
        currency_code.map(|code| code.trim().to_ascii_uppercase()),
    );

    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(mask) = cache.get(&key) {
        trace!("mask cache hit for {:?}", key);
        return Ok(mask.clone());
    }

    let mask = AccountingMask::new(&BuiltinProvider::new(), key.0.clone(), currency_code)?
        .compose();
    cache.put(key, mask.clone());
    Ok(mask)
}
