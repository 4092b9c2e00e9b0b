//! Frame-based spinner animation.

use crate::config::SpinnerConfig;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct Spinner {
    frames: Vec<String>,
    interval: Duration,
    index: usize,
    last_advance: Option<Instant>,
}

impl Spinner {
    pub fn new(config: &SpinnerConfig) -> Self {
        let frames = if config.frames.is_empty() {
            vec!["*".to_string()]
        } else {
            config.frames.clone()
        };
        Self {
            frames,
            interval: Duration::from_millis(config.tick_ms.max(1)),
            index: 0,
            last_advance: None,
        }
    }

    pub fn frame(&self) -> &str {
        &self.frames[self.index]
    }

    /// Step to the next frame if a full interval has passed since the last
    /// step. Returns whether the frame changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.last_advance {
            Some(last) if now.duration_since(last) < self.interval => false,
            Some(_) => {
                self.index = (self.index + 1) % self.frames.len();
                self.last_advance = Some(now);
                true
            }
            None => {
                self.last_advance = Some(now);
                false
            }
        }
    }

    /// Rewind to the first frame, ready for the next busy period.
    pub fn reset(&mut self) {
        self.index = 0;
        self.last_advance = None;
    }
}
