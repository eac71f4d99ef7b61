//! Image lightbox for the hobbies gallery.
//!
//! Opening the lightbox locks page scrolling and moves focus to its close
//! button (see [`Lightbox::focus`]); closing unlocks scrolling and leaves
//! focus to the page. Arrow keys page through the gallery with wrap-around
//! while it is open.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Where keyboard focus belongs while the lightbox is in a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxFocus {
    CloseButton,
    /// Closed: the lightbox does not hold focus.
    Page,
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    current: usize,
    open: bool,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images, current: 0, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Page scrolling is locked exactly while the lightbox is open.
    pub fn scroll_locked(&self) -> bool {
        self.open
    }

    pub fn focus(&self) -> LightboxFocus {
        if self.open {
            LightboxFocus::CloseButton
        } else {
            LightboxFocus::Page
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Image on display, `None` when closed or the gallery is empty.
    pub fn current(&self) -> Option<&GalleryImage> {
        if self.open {
            self.images.get(self.current)
        } else {
            None
        }
    }

    /// Caption text: the alt text of the current image.
    pub fn caption(&self) -> &str {
        self.current().map(|i| i.alt.as_str()).unwrap_or("")
    }

    /// Open on image `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        self.open = true;
        tracing::debug!(index, "lightbox opened");
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.open((self.current + 1) % self.images.len());
    }

    pub fn prev(&mut self) {
        if self.images.is_empty() {
            return;
        }
        let n = self.images.len();
        self.open((self.current + n - 1) % n);
    }

    /// Keyboard handling; ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) {
        if !self.open {
            return;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.prev(),
            LightboxKey::ArrowRight => self.next(),
        }
    }

    /// Click on the dimmed backdrop (outside the image) closes.
    pub fn backdrop_click(&mut self) {
        self.close();
    }
}
