//! Transient acknowledgment shown after a copy

use std::time::{Duration, Instant};

pub const COPIED_TEXT: &str = "Copied!";
pub const COPY_FAILED_TEXT: &str = "Failed to copy!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckKind {
    Copied,
    CopyFailed,
}

impl AckKind {
    pub fn text(&self) -> &'static str {
        match self {
            AckKind::Copied => COPIED_TEXT,
            AckKind::CopyFailed => COPY_FAILED_TEXT,
        }
    }
}

/// An acknowledgment with a revert deadline
///
/// Showing a new acknowledgment replaces the pending one together with its
/// deadline, so an earlier copy can never clear a later one.
#[derive(Debug, Clone)]
pub struct Acknowledgment {
    duration: Duration,
    pending: Option<(AckKind, Instant)>,
}

impl Acknowledgment {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            pending: None,
        }
    }

    pub fn show(&mut self, kind: AckKind, now: Instant) {
        self.pending = Some((kind, now + self.duration));
    }

    /// The acknowledgment visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<AckKind> {
        match self.pending {
            Some((kind, deadline)) if now < deadline => Some(kind),
            _ => None,
        }
    }

    /// Drop the acknowledgment once its deadline passed; returns true if it was dropped
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.pending {
            Some((_, deadline)) if now >= deadline => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
