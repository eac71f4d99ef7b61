//! Blog slider: horizontally scrolling track with prev/next buttons and
//! one dot per slide. Every slide is exactly one track width wide.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogSlider {
    slides: usize,
}

impl BlogSlider {
    pub fn new(slides: usize) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides
    }

    pub fn is_empty(&self) -> bool {
        self.slides == 0
    }

    /// Slide index under the current scroll offset.
    pub fn current(&self, scroll_left: f64, width: f64) -> usize {
        if width <= 0.0 || self.slides == 0 {
            return 0;
        }
        let idx = (scroll_left / width).round().max(0.0) as usize;
        idx.min(self.slides - 1)
    }

    /// Scroll offset for slide `index`, clamped into `[0, slides-1]`.
    pub fn go_to(&self, index: isize, width: f64) -> f64 {
        let max = self.slides.saturating_sub(1) as isize;
        let clamped = index.clamp(0, max);
        clamped as f64 * width
    }

    pub fn prev(&self, scroll_left: f64, width: f64) -> f64 {
        self.go_to(self.current(scroll_left, width) as isize - 1, width)
    }

    pub fn next(&self, scroll_left: f64, width: f64) -> f64 {
        self.go_to(self.current(scroll_left, width) as isize + 1, width)
    }

    /// Offset that keeps the current slide aligned after a resize from
    /// `old_width` to `new_width`.
    pub fn realign(&self, scroll_left: f64, old_width: f64, new_width: f64) -> f64 {
        self.go_to(self.current(scroll_left, old_width) as isize, new_width)
    }

    /// Accessible label of dot `i`.
    pub fn dot_label(i: usize) -> String {
        format!("Go to slide {}", i + 1)
    }
}
