//! Visibility-driven effects: stat counters, progress bars and lazy images.
//!
//! Each effect fires at most once, the first time its element becomes
//! visible. The host's visibility notifier calls `on_visible`; animation
//! frames are driven by the host's frame clock.

/// Frame period of the counter animation.
pub const FRAME_MS: u64 = 16;
/// Total counter animation time.
pub const COUNTER_DURATION_MS: u64 = 2_000;
/// Delay between resetting a progress bar to 0% and growing it.
pub const PROGRESS_SETTLE_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Counters
// ---------------------------------------------------------------------------

/// Numeric value of a stat label, built from its digits only
/// (`"120+"` → 120, `"1,500"` → 1500). Zero or no digits yields `None`.
pub fn parse_stat(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok().filter(|n| *n > 0)
}

/// Linear count-up from 0 to `target` over a fixed number of frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAnimation {
    target: u64,
    frames: u64,
    elapsed: u64,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u64) -> Self {
        Self { target, frames: (duration_ms / FRAME_MS).max(1), elapsed: 0 }
    }

    /// Advance one frame and return the value to display.
    pub fn frame(&mut self) -> u64 {
        if self.is_done() {
            return self.target;
        }
        self.elapsed += 1;
        if self.is_done() {
            self.target
        } else {
            // widen so large stat values cannot overflow mid-animation
            (u128::from(self.target) * u128::from(self.elapsed) / u128::from(self.frames)) as u64
        }
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.frames
    }

    pub fn target(&self) -> u64 {
        self.target
    }
}

/// A stat label that counts up once when first seen.
#[derive(Debug, Clone)]
pub struct StatCounter {
    text: String,
    animation: Option<CounterAnimation>,
    animated: bool,
}

impl StatCounter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), animation: None, animated: false }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Start counting if the label holds a number and has not counted yet.
    pub fn on_visible(&mut self) -> bool {
        if self.animated {
            return false;
        }
        let Some(target) = parse_stat(&self.text) else {
            return false;
        };
        self.animated = true;
        self.text = "0".to_string();
        self.animation = Some(CounterAnimation::new(target, COUNTER_DURATION_MS));
        true
    }

    /// Advance one frame. Returns `false` once the count has finished.
    pub fn tick(&mut self) -> bool {
        let Some(anim) = self.animation.as_mut() else {
            return false;
        };
        self.text = anim.frame().to_string();
        if anim.is_done() {
            self.animation = None;
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Progress bars
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    value: Option<f64>,
    width_pct: Option<f64>,
    animated: bool,
}

impl ProgressBar {
    /// `value` is the bar's `data-value` percentage, if any.
    pub fn new(value: Option<f64>) -> Self {
        Self { value, width_pct: None, animated: false }
    }

    /// Rendered width; `None` means the stylesheet default.
    pub fn width_pct(&self) -> Option<f64> {
        self.width_pct
    }

    /// Reset to 0% on first sight. The host calls [`settle`](Self::settle)
    /// [`PROGRESS_SETTLE_MS`] later so the growth is animated.
    pub fn on_visible(&mut self) -> bool {
        if self.animated || self.value.is_none() {
            return false;
        }
        self.animated = true;
        self.width_pct = Some(0.0);
        true
    }

    pub fn settle(&mut self) {
        if self.animated {
            self.width_pct = self.value;
        }
    }
}

// ---------------------------------------------------------------------------
// Lazy images
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub src: Option<String>,
    pub data_src: Option<String>,
    pub loaded: bool,
    observed: bool,
}

impl LazyImage {
    pub fn new(data_src: impl Into<String>) -> Self {
        Self { src: None, data_src: Some(data_src.into()), loaded: false, observed: true }
    }

    pub fn is_observed(&self) -> bool {
        self.observed
    }

    /// Swap the deferred source in and stop observing.
    pub fn on_visible(&mut self) {
        if let Some(src) = self.data_src.take() {
            self.src = Some(src);
            self.loaded = true;
        }
        self.observed = false;
    }
}
