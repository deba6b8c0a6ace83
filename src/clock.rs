use instant::Instant;
use std::time::Duration;

/// Monotonic session time fed to [`SoundHand::update`](crate::SoundHand::update).
///
/// Backed by `instant` so the same driver code runs natively and in the browser.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    start: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
