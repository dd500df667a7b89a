//! Transient notices shown under the scene title.
//!
//! Server event messages, selection warnings and request failures all land here
//! instead of blocking dialogs. Event messages expire; errors stay until replaced.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    pub expires_at: Option<Instant>,
    /// The triggering interaction can simply be repeated.
    pub retryable: bool,
}

impl Notice {
    pub fn event(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Info,
            expires_at: Some(now + ttl),
            retryable: false,
        }
    }

    pub fn warning(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Warning,
            expires_at: Some(now + ttl),
            retryable: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: NoticeLevel::Error,
            expires_at: None,
            retryable: true,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Bounded queue of visible notices, oldest first.
#[derive(Clone, Debug)]
pub struct NoticeLog {
    entries: VecDeque<Notice>,
    capacity: usize,
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::new(8)
    }
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if notice.level == NoticeLevel::Error {
            // one failure banner at a time
            self.entries.retain(|n| n.level != NoticeLevel::Error);
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Drop expired notices; returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|n| !n.is_expired(now));
        before - self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
