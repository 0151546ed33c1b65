//! Channel token resolution.
//!
//! A token is either a channel name (without the leading `#`) or a channel id.
//! Resolution scans the listing in order and takes the first entry whose
//! name or id equals the token. Listings are cached for a short TTL so
//! repeated lookups avoid a `conversations.list` round trip per call.

use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

use super::platform::ChatPlatform;
use crate::core::models::ChannelEntry;
use crate::errors::SlackError;

struct CachedListing {
    channels: Vec<ChannelEntry>,
    fetched_at: Instant,
}

pub struct ChannelResolver {
    ttl: Duration,
    cache: RwLock<Option<CachedListing>>,
}

/// First listing entry matching `token` by name or id.
#[must_use]
pub fn find_channel<'a>(channels: &'a [ChannelEntry], token: &str) -> Option<&'a ChannelEntry> {
    channels.iter().find(|c| c.name == token || c.id == token)
}

impl ChannelResolver {
    /// A zero `ttl` disables caching; every resolution lists channels again.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            cache: RwLock::new(None),
        }
    }

    /// Resolve `token` to a channel id, or `Ok(None)` when no visible channel
    /// matches.
    ///
    /// A cached listing is trusted for hits only. A miss against the cache
    /// refetches once, so channels created since the last listing resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if listing channels fails.
    pub async fn resolve(
        &self,
        platform: &dyn ChatPlatform,
        token: &str,
    ) -> Result<Option<String>, SlackError> {
        if let Some(id) = self.lookup_cached(token).await {
            debug!(token, channel_id = %id, "Resolved channel from cache");
            return Ok(Some(id));
        }

        let channels = self.refresh(platform).await?;
        Ok(find_channel(&channels, token).map(|c| c.id.clone()))
    }

    /// The full channel listing, served from cache while it is fresh.
    ///
    /// # Errors
    ///
    /// Returns an error if listing channels fails.
    pub async fn channels(&self, platform: &dyn ChatPlatform) -> Result<Vec<ChannelEntry>, SlackError> {
        {
            let cache = self.cache.read().await;
            if let Some(listing) = cache.as_ref().filter(|l| self.is_fresh(l)) {
                return Ok(listing.channels.clone());
            }
        }
        self.refresh(platform).await
    }

    /// Drop the cached listing.
    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    async fn lookup_cached(&self, token: &str) -> Option<String> {
        let cache = self.cache.read().await;
        let listing = cache.as_ref().filter(|l| self.is_fresh(l))?;
        find_channel(&listing.channels, token).map(|c| c.id.clone())
    }

    async fn refresh(&self, platform: &dyn ChatPlatform) -> Result<Vec<ChannelEntry>, SlackError> {
        let channels = platform.list_channels().await?;
        if !self.ttl.is_zero() {
            *self.cache.write().await = Some(CachedListing {
                channels: channels.clone(),
                fetched_at: Instant::now(),
            });
        }
        Ok(channels)
    }

    fn is_fresh(&self, listing: &CachedListing) -> bool {
        listing.fetched_at.elapsed() < self.ttl
    }
}
