use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

use crate::client::ImageGenerator;
use crate::error::GenerationError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE};

// Hex sha256 of the prompt
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Cache entry with absolute expiry
#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub key: CacheKey,
    pub image_data: Arc<str>, // base64
    pub prompt: String,
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

pub fn compute_key(prompt: &str) -> CacheKey {
    let mut hasher = Sha256::new();
    hasher.update(prompt.as_bytes());
    CacheKey(format!("{:x}", hasher.finalize()))
}

// An absent entry is never fresh
pub fn is_fresh(entry: Option<&CacheEntry>, now: DateTime<Utc>) -> bool {
    entry.is_some_and(|e| e.is_fresh(now))
}

/// Prompt keyed image cache in front of an [`ImageGenerator`].
///
/// Lookup and insert are not performed atomically: two concurrent misses for
/// the same prompt both call the generator and the later insert wins. Stale
/// entries are never removed, only overwritten by the next miss for their key.
pub struct ImageCache {
    entries: DashMap<CacheKey, CacheEntry>,
    generator: Arc<dyn ImageGenerator>,
    ttl: Duration,
}

impl ImageCache {
    pub fn new(generator: Arc<dyn ImageGenerator>, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            generator,
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // Clones out so no shard guard outlives the call
    pub fn lookup(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.entries.get(key).map(|entry| entry.clone())
    }

    pub fn insert(&self, entry: CacheEntry) {
        self.entries.insert(entry.key.clone(), entry);
        CACHE_SIZE.set(self.entries.len() as f64);
    }

    /// Returns the cached base64 image for `prompt`, calling the generator on a
    /// miss or stale entry. Failures propagate and leave the cache untouched.
    pub async fn get_or_generate(&self, prompt: &str) -> Result<Arc<str>, GenerationError> {
        let key = compute_key(prompt);

        let stale = match self.lookup(&key) {
            Some(entry) if entry.is_fresh(Utc::now()) => {
                CACHE_HITS.inc();
                tracing::debug!(key = %key, "cache hit");
                return Ok(entry.image_data);
            }
            Some(_) => true,
            None => false,
        };

        CACHE_MISSES.inc();
        tracing::debug!(key = %key, stale, "cache miss, generating");

        let image_data: Arc<str> = self.generator.generate(prompt).await?.into();

        self.insert(CacheEntry {
            key,
            image_data: Arc::clone(&image_data),
            prompt: prompt.to_string(),
            expires_at: Utc::now()
                .checked_add_signed(self.ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        });

        Ok(image_data)
    }
}
