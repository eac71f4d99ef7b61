//! Testimonials carousel and the `/api/testimonials` payload.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Auto-rotation period.
pub const DEFAULT_INTERVAL_MS: i64 = 5_000;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// One testimonial as served by `/api/testimonials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub content: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: u8,
}

fn default_rating() -> u8 {
    MAX_RATING
}

impl Testimonial {
    /// `★` per rating point, `☆` for the rest, out of five.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(MAX_RATING) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_RATING as usize - filled))
    }

    /// `"<role> at <company>"`, or just the role when no company is set.
    pub fn byline(&self) -> String {
        let role = self.role.as_deref().unwrap_or("");
        match self.company.as_deref() {
            Some(c) if !c.is_empty() => format!("{role} at {c}"),
            _ => role.to_string(),
        }
    }
}

/// Rotating selection over `count` slides.
///
/// With one slide or none the carousel is inert: no rotation and no
/// manual paging.
#[derive(Debug, Clone)]
pub struct Carousel {
    count: usize,
    current: usize,
    interval: Duration,
    last_rotation: DateTime<Utc>,
}

impl Carousel {
    pub fn new(count: usize, now: DateTime<Utc>) -> Self {
        Self::with_interval(count, Duration::milliseconds(DEFAULT_INTERVAL_MS), now)
    }

    pub fn with_interval(count: usize, interval: Duration, now: DateTime<Utc>) -> Self {
        Self { count, current: 0, interval, last_rotation: now }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_active(&self) -> bool {
        self.count > 1
    }

    /// Replace the slide set (e.g. after the API load). An empty set keeps
    /// the existing slides.
    pub fn reload(&mut self, count: usize, now: DateTime<Utc>) {
        if count == 0 {
            return;
        }
        self.count = count;
        self.current = 0;
        self.last_rotation = now;
    }

    pub fn next(&mut self) {
        if self.is_active() {
            self.current = (self.current + 1) % self.count;
        }
    }

    pub fn prev(&mut self) {
        if self.is_active() {
            self.current = (self.current + self.count - 1) % self.count;
        }
    }

    /// Advance once if a full interval has passed since the last rotation.
    /// Returns whether the slide changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_active() || now - self.last_rotation < self.interval {
            return false;
        }
        self.next();
        self.last_rotation = now;
        true
    }

    /// Whether slide `i` carries the active marker.
    pub fn is_current(&self, i: usize) -> bool {
        i == self.current && i < self.count
    }
}
