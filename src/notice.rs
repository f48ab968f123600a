//! Transient feedback messages
//!
//! At most one notice is live at a time. Posting a new notice replaces the old
//! one together with its timer, so a stale timer can never clear a newer
//! message. Time is passed in by the caller to keep this testable without
//! sleeping.

use std::time::{Duration, Instant};
use strum::Display;

/// How long a notice stays visible unless configured otherwise.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(3);

/// Identifies one posted notice and its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum NoticeKind {
    #[strum(serialize = "info")]
    Info,
    #[strum(serialize = "warning")]
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub token: TimerToken,
    pub expires_at: Instant,
}

/// Holder for the single live notice.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_token: u64,
    duration: Duration,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NoticeBoard {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            next_token: 0,
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message` until `now + duration`, superseding any live notice.
    pub fn post(
        &mut self,
        message: impl Into<String>,
        kind: NoticeKind,
        now: Instant,
    ) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        self.current = Some(Notice {
            message: message.into(),
            kind,
            token,
            expires_at: now + self.duration,
        });
        token
    }

    /// Clear the notice if `token` still belongs to it. Returns whether it did.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        match &self.current {
            Some(notice) if notice.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the notice once its timer has run out.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| now >= n.expires_at) {
            self.current = None;
        }
    }

    pub fn active(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_expire() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        board.post("hello", NoticeKind::Info, start);
        assert!(board.is_active());

        board.expire(start + Duration::from_millis(2999));
        assert!(board.is_active());

        board.expire(start + DEFAULT_NOTICE_DURATION);
        assert!(!board.is_active());
    }

    #[test]
    fn test_new_notice_supersedes_old_timer() {
        let start = Instant::now();
        let mut board = NoticeBoard::default();
        let first = board.post("first", NoticeKind::Info, start);
        let later = start + Duration::from_secs(2);
        let second = board.post("second", NoticeKind::Warning, later);
        assert_ne!(first, second);

        // the first timer would have fired here
        board.expire(start + Duration::from_secs(3));
        assert_eq!(board.active().map(|n| n.message.as_str()), Some("second"));

        // cancelling with the stale token does nothing
        assert!(!board.cancel(first));
        assert!(board.is_active());

        board.expire(start + Duration::from_secs(5));
        assert!(!board.is_active());
    }

    #[test]
    fn test_cancel_current() {
        let now = Instant::now();
        let mut board = NoticeBoard::new(Duration::from_millis(500));
        let token = board.post("bye", NoticeKind::Info, now);
        assert!(board.cancel(token));
        assert!(board.active().is_none());
        assert!(!board.cancel(token));
    }

    #[test]
    fn test_expire_without_notice() {
        let mut board = NoticeBoard::default();
        board.expire(Instant::now());
        assert!(!board.is_active());
    }
}
