//! Elapsed-time service used to report how long a game took.
//!
//! Time is counted in whole seconds, the way a once-per-second ticking HUD timer would show it.

use web_time::Instant;

pub trait Clock {
    /// Starts counting from zero, discarding any previous reading.
    fn start(&mut self);

    /// Freezes the count and returns it. Calling it again, or on a clock that never started, is harmless and returns
    /// the frozen value.
    fn stop(&mut self) -> u32;

    fn elapsed_secs(&self) -> u32;

    fn is_running(&self) -> bool;
}

/// Real-time clock backed by [`web_time::Instant`], so it also works on wasm targets.
#[derive(Clone, Debug, Default)]
pub struct WallClock {
    started_at: Option<Instant>,
    stopped_at: Option<u32>,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for WallClock {
    fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.stopped_at = None;
    }

    fn stop(&mut self) -> u32 {
        let elapsed = self.elapsed_secs();
        self.stopped_at = Some(elapsed);
        elapsed
    }

    fn elapsed_secs(&self) -> u32 {
        match (self.stopped_at, self.started_at) {
            (Some(frozen), _) => frozen,
            (None, Some(started_at)) => started_at
                .elapsed()
                .as_secs()
                .try_into()
                .unwrap_or(u32::MAX),
            (None, None) => 0,
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some() && self.stopped_at.is_none()
    }
}

/// Clock that only moves when told to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    secs: u32,
    running: bool,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// One timer tick. Ignored while stopped.
    pub fn tick(&mut self) {
        self.advance(1);
    }

    pub fn advance(&mut self, secs: u32) {
        if self.running {
            self.secs = self.secs.saturating_add(secs);
        }
    }
}

impl Clock for ManualClock {
    fn start(&mut self) {
        self.secs = 0;
        self.running = true;
    }

    fn stop(&mut self) -> u32 {
        self.running = false;
        self.secs
    }

    fn elapsed_secs(&self) -> u32 {
        self.secs
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
