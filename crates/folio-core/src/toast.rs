//! Toast notifications: transient, dismissable status messages.

use chrono::{DateTime, Duration, Utc};

/// Default lifetime of a toast before it is removed automatically.
pub const DEFAULT_DURATION_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Toast {
    /// `shown_at + duration`, saturating at the end of representable time.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at
            .checked_add_signed(self.duration)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// The stack of toasts currently on screen, oldest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    duration: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Duration::milliseconds(DEFAULT_DURATION_MS))
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self { toasts: Vec::new(), next_id: 0, duration }
    }

    /// Show a toast stamped with the current time. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.show_at(message, kind, Utc::now())
    }

    pub fn show_at(
        &mut self,
        message: impl Into<String>,
        kind: ToastKind,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        tracing::debug!(id, %kind, message = %message, "toast shown");
        self.toasts.push(Toast { id, message, kind, shown_at: now, duration: self.duration });
        id
    }

    /// Manual close. Returns `false` if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        before != self.toasts.len()
    }

    /// Drop every toast whose lifetime has elapsed. Returns how many went.
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| !t.is_expired(now));
        before - self.toasts.len()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
