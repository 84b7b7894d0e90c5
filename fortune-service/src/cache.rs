//! Local fortune cache.
//!
//! [`CacheStore`] is the raw key/value layer; [`FortuneCache`] adds sign keys
//! and TTL expiry on top. Storage problems (missing directory, permissions,
//! corrupt files) are logged and treated as a miss or a no-op, never surfaced.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use fortune_core::{sign_by_key, FortuneRecord, ZodiacSign};

/// Prefix shared by every cache key.
pub const CACHE_NAMESPACE: &str = "fortune-checker";

/// A cached fortune with the time it was stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope {
    /// Epoch milliseconds at write time
    pub timestamp: i64,
    pub fortune: FortuneRecord,
}

/// Key/value storage for cache envelopes and the last used sign.
///
/// Implementations swallow their own failures.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> Option<CacheEnvelope>;
    fn set(&self, key: &str, envelope: &CacheEnvelope);
    fn remove(&self, key: &str);
    fn last_sign(&self) -> Option<String>;
    fn set_last_sign(&self, key: &str);
}

/// Cache key for a sign, e.g. `fortune-checker:aries`.
pub fn cache_key(sign: &ZodiacSign) -> String {
    format!("{}:{}", CACHE_NAMESPACE, sign.api_key())
}

/// File-backed store: one JSON file per key inside a directory.
pub struct FileCacheStore {
    base_dir: PathBuf,
}

impl FileCacheStore {
    const LAST_SIGN_FILE: &'static str = "last-sign";

    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Map a cache key onto a file name inside the base directory.
    fn entry_path(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.base_dir.join(format!("{file_name}.json"))
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::write(path, contents)
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Option<CacheEnvelope> {
        let path = self.entry_path(key);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read cache entry");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt cache entry");
                None
            }
        }
    }

    fn set(&self, key: &str, envelope: &CacheEnvelope) {
        let path = self.entry_path(key);
        let result = serde_json::to_string_pretty(envelope)
            .map_err(io::Error::other)
            .and_then(|json| self.write(&path, &json));

        if let Err(e) = result {
            warn!(path = %path.display(), error = %e, "failed to write cache entry");
        }
    }

    fn remove(&self, key: &str) {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "failed to remove cache entry"),
        }
    }

    fn last_sign(&self) -> Option<String> {
        let text = fs::read_to_string(self.base_dir.join(Self::LAST_SIGN_FILE)).ok()?;
        let key = text.trim();
        (!key.is_empty()).then(|| key.to_string())
    }

    fn set_last_sign(&self, key: &str) {
        let path = self.base_dir.join(Self::LAST_SIGN_FILE);
        if let Err(e) = self.write(&path, key) {
            warn!(path = %path.display(), error = %e, "failed to remember last sign");
        }
    }
}

/// In-process store, used when persistence is disabled.
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: Mutex<HashMap<String, CacheEnvelope>>,
    last_sign: Mutex<Option<String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Option<CacheEnvelope> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, envelope: &CacheEnvelope) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), envelope.clone());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }

    fn last_sign(&self) -> Option<String> {
        self.last_sign.lock().ok()?.clone()
    }

    fn set_last_sign(&self, key: &str) {
        if let Ok(mut last) = self.last_sign.lock() {
            *last = Some(key.to_string());
        }
    }
}

/// Sign-keyed fortune cache with TTL expiry.
pub struct FortuneCache {
    store: Box<dyn CacheStore>,
    ttl_ms: i64,
}

impl FortuneCache {
    pub fn new(store: Box<dyn CacheStore>, ttl_ms: u64) -> Self {
        Self {
            store,
            ttl_ms: i64::try_from(ttl_ms).unwrap_or(i64::MAX),
        }
    }

    /// Cached fortune for a sign, if still fresh at `now_ms`.
    ///
    /// Expired entries are removed on the way out.
    pub fn load(&self, sign: &ZodiacSign, now_ms: i64) -> Option<FortuneRecord> {
        let key = cache_key(sign);
        let envelope = self.store.get(&key)?;

        if now_ms.saturating_sub(envelope.timestamp) > self.ttl_ms {
            debug!(key = %key, "cache entry expired");
            self.store.remove(&key);
            return None;
        }

        debug!(key = %key, "cache hit");
        Some(envelope.fortune)
    }

    pub fn save(&self, sign: &ZodiacSign, fortune: &FortuneRecord, now_ms: i64) {
        let envelope = CacheEnvelope {
            timestamp: now_ms,
            fortune: fortune.clone(),
        };
        self.store.set(&cache_key(sign), &envelope);
    }

    pub fn clear(&self, sign: &ZodiacSign) {
        self.store.remove(&cache_key(sign));
    }

    /// The sign used most recently, if it still names a known sign.
    pub fn last_sign(&self) -> Option<&'static ZodiacSign> {
        self.store.last_sign().as_deref().and_then(sign_by_key)
    }

    pub fn remember_sign(&self, sign: &ZodiacSign) {
        self.store.set_last_sign(sign.english_key);
    }
}
