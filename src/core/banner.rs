// src/core/banner.rs
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A transient message that disappears once its deadline passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    // None when the deadline lies past what `Instant` can represent
    expires_at: Option<Instant>,
}

impl Banner {
    pub fn new(kind: BannerKind, text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: now.checked_add(ttl),
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

/// Holds at most one success and one error banner.
///
/// Posting a banner of a kind replaces the previous one of that kind along
/// with its deadline. Success wins over error when both are visible.
#[derive(Debug, Clone)]
pub struct Banners {
    ttl: Duration,
    success: Option<Banner>,
    error: Option<Banner>,
}

impl Banners {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, success: None, error: None }
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.success = Some(Banner::new(BannerKind::Success, text, now, self.ttl));
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.error = Some(Banner::new(BannerKind::Error, text, now, self.ttl));
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The banner to display at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&Banner> {
        [&self.success, &self.error]
            .into_iter()
            .flatten()
            .find(|banner| banner.is_visible(now))
    }
}
