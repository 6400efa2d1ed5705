//! Snackbar notifications
//!
//! Brief messages posted by views. At most `MAX_SNACK` are visible; posting
//! past that dismisses the oldest. Each one hides itself after
//! `AUTO_HIDE`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const MAX_SNACK: usize = 3;
pub const AUTO_HIDE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnackVariant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone)]
pub struct Snackbar {
    pub id: u64,
    pub message: String,
    pub variant: SnackVariant,
    pub posted_at: Instant,
}

/// Visible snackbars, oldest first
#[derive(Debug, Clone)]
pub struct Snackbars {
    max: usize,
    visible: VecDeque<Snackbar>,
    next_id: u64,
}

impl Default for Snackbars {
    fn default() -> Self {
        Self::new(MAX_SNACK)
    }
}

impl Snackbars {
    pub fn new(max: usize) -> Self {
        Self {
            max: max.max(1),
            visible: VecDeque::new(),
            next_id: 0,
        }
    }

    /// Post a message at `now`, returning its id
    pub fn enqueue_at(&mut self, message: impl Into<String>, variant: SnackVariant, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.visible.push_back(Snackbar {
            id,
            message: message.into(),
            variant,
            posted_at: now,
        });

        while self.len() > self.max {
            if let Some(dropped) = self.visible.pop_front() {
                tracing::debug!(id = dropped.id, "snackbar dismissed to make room");
            }
        }

        id
    }

    pub fn enqueue(&mut self, message: impl Into<String>, variant: SnackVariant) -> u64 {
        self.enqueue_at(message, variant, Instant::now())
    }

    /// Drop snackbars older than `AUTO_HIDE`
    pub fn tick(&mut self, now: Instant) {
        self.visible
            .retain(|s| now.saturating_duration_since(s.posted_at) < AUTO_HIDE);
    }

    pub fn visible(&self) -> impl DoubleEndedIterator<Item = &Snackbar> {
        self.visible.iter()
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_dismisses_oldest() {
        let now = Instant::now();
        let mut snacks = Snackbars::default();
        for i in 0..5 {
            snacks.enqueue_at(format!("msg {}", i), SnackVariant::Info, now);
        }

        assert_eq!(snacks.len(), MAX_SNACK);
        let messages: Vec<&str> = snacks.visible().map(|s| s.message.as_str()).collect();
        assert_eq!(messages, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_auto_hide() {
        let start = Instant::now();
        let mut snacks = Snackbars::default();
        snacks.enqueue_at("first", SnackVariant::Success, start);
        snacks.enqueue_at("second", SnackVariant::Success, start + Duration::from_secs(3));

        snacks.tick(start + Duration::from_secs(4));
        assert_eq!(snacks.len(), 2);

        snacks.tick(start + AUTO_HIDE);
        let messages: Vec<&str> = snacks.visible().map(|s| s.message.as_str()).collect();
        assert_eq!(messages, vec!["second"]);

        snacks.tick(start + Duration::from_secs(9));
        assert!(snacks.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut snacks = Snackbars::default();
        let a = snacks.enqueue("a", SnackVariant::Default);
        let b = snacks.enqueue("b", SnackVariant::Warning);
        assert_ne!(a, b);

        let ids: Vec<u64> = snacks.visible().map(|s| s.id).collect();
        assert_eq!(ids, vec![a, b]);
    }
}
