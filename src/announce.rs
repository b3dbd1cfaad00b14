use std::time::{Duration, Instant};

/// A transient screen reader message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub expires_at: Instant,
}

/// Live region for slide change announcements.
///
/// Every announcement removes itself once its own lifetime has passed.
/// Nothing is merged: announcements made in quick succession coexist
/// until each one expires.
#[derive(Debug)]
pub struct Announcer {
    ttl: Duration,
    live: Vec<Announcement>,
}

impl Announcer {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, live: Vec::new() }
    }

    pub fn announce(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        tracing::info!(target: "a11y", "{}", text);
        self.live.push(Announcement {
            text,
            expires_at: now + self.ttl,
        });
    }

    /// Drops every announcement whose lifetime is over.
    pub fn prune(&mut self, now: Instant) {
        let before = self.live.len();
        self.live.retain(|a| a.expires_at > now);
        let removed = before - self.live.len();
        if removed > 0 {
            tracing::trace!(target: "a11y", removed, "announcements expired");
        }
    }

    pub fn live(&self) -> &[Announcement] {
        &self.live
    }

    pub fn latest(&self) -> Option<&Announcement> {
        self.live.last()
    }
}
