//! Request flow: cache lookup, fetch, normalize, cache write, or fallback.

use chrono::{DateTime, FixedOffset, Local};
use tracing::{debug, info, warn};

use fortune_core::{fallback_fortune, normalize_horoscope, FortuneError, FortuneRecord, ZodiacSign};

use crate::cache::{FileCacheStore, FortuneCache};
use crate::fetch::{HoroscopeSource, HttpHoroscopeSource};
use crate::options::ServiceOptions;
use crate::tracker::{RequestTracker, Ticket};
use crate::{Result, ServiceError};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local time zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// What started a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A birthdate was submitted or a sign was picked
    Submit,
    /// The user asked for new data; the cache is not read
    Refresh,
    /// A previous session's sign is being shown again
    Restore,
}

/// Where a delivered fortune came from.
#[derive(Debug, Clone, PartialEq)]
pub enum Origin {
    /// Fetched and normalized just now
    Fresh,
    /// Served from the local cache
    Cached,
    /// Generated because the request failed
    Fallback(FortuneError),
}

/// A fortune ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub sign: &'static ZodiacSign,
    pub fortune: FortuneRecord,
    pub origin: Origin,
}

/// Delivers fortunes for signs, one request at a time per caller action.
pub struct FortuneService {
    source: Box<dyn HoroscopeSource>,
    cache: FortuneCache,
    tracker: RequestTracker,
    clock: Box<dyn Clock>,
}

impl FortuneService {
    pub fn new(source: Box<dyn HoroscopeSource>, cache: FortuneCache, clock: Box<dyn Clock>) -> Self {
        Self {
            source,
            cache,
            tracker: RequestTracker::new(),
            clock,
        }
    }

    /// Service talking to the configured API with a file cache.
    pub fn from_options(options: &ServiceOptions) -> Result<Self> {
        let cache_dir = options.resolved_cache_dir().ok_or(ServiceError::NoCacheDir)?;
        let cache = FortuneCache::new(Box::new(FileCacheStore::new(cache_dir)), options.cache_ttl_ms);

        Ok(Self::new(
            Box::new(HttpHoroscopeSource::new(options)),
            cache,
            Box::new(SystemClock),
        ))
    }

    pub fn cache(&self) -> &FortuneCache {
        &self.cache
    }

    /// Produce a fortune for `sign`.
    ///
    /// Always yields displayable content unless a newer request started
    /// while this one was in flight, in which case `None` is returned and
    /// the result must not be rendered.
    pub async fn deliver(&self, sign: &'static ZodiacSign, trigger: Trigger) -> Option<Delivery> {
        let ticket = self.tracker.begin();
        let now = self.clock.now();
        debug!(sign = sign.english_key, ?trigger, generation = ticket.generation(), "request started");

        if trigger != Trigger::Restore {
            self.cache.remember_sign(sign);
        }

        if trigger != Trigger::Refresh {
            if let Some(fortune) = self.cache.load(sign, now.timestamp_millis()) {
                return self.finish(ticket, Delivery { sign, fortune, origin: Origin::Cached });
            }
        }

        let delivery = match self.fetch_fortune(sign, &now).await {
            Ok(fortune) => {
                // A superseded request must not overwrite what a newer one cached.
                if self.tracker.is_current(ticket) {
                    self.cache.save(sign, &fortune, self.clock.now().timestamp_millis());
                }
                info!(sign = sign.english_key, "fetched fresh horoscope");
                Delivery { sign, fortune, origin: Origin::Fresh }
            }
            Err(error) => {
                warn!(
                    sign = sign.english_key,
                    network = error.is_network(),
                    %error,
                    "horoscope request failed, using fallback"
                );
                Delivery {
                    sign,
                    fortune: fallback_fortune(Some(sign), &now),
                    origin: Origin::Fallback(error),
                }
            }
        };

        self.finish(ticket, delivery)
    }

    /// Show the sign from the previous session, if one was remembered.
    pub async fn restore(&self) -> Option<Delivery> {
        let sign = self.cache.last_sign()?;
        self.deliver(sign, Trigger::Restore).await
    }

    async fn fetch_fortune(
        &self,
        sign: &ZodiacSign,
        now: &DateTime<FixedOffset>,
    ) -> std::result::Result<FortuneRecord, FortuneError> {
        let payload = self.source.fetch(sign).await?;
        normalize_horoscope(&payload, sign, now)
    }

    fn finish(&self, ticket: Ticket, delivery: Delivery) -> Option<Delivery> {
        if !self.tracker.is_current(ticket) {
            debug!(generation = ticket.generation(), "request superseded, dropping result");
            return None;
        }
        Some(delivery)
    }
}
