use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ticket for one pending resolution. Tied to the game it was issued in, so a late callback from an earlier game is
/// recognised and dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolutionHandle {
    generation: u32,
    attempt: u32,
}

impl ResolutionHandle {
    pub(crate) const fn new(generation: u32, attempt: u32) -> Self {
        Self {
            generation,
            attempt,
        }
    }

    pub const fn generation(self) -> u32 {
        self.generation
    }

    pub const fn attempt(self) -> u32 {
        self.attempt
    }
}

/// Delayed-callback service. The host is expected to call
/// [`GameController::resolve`](crate::GameController::resolve) with the handle once `delay` has passed, unless it was
/// cancelled first.
pub trait Scheduler {
    fn schedule(&mut self, handle: ResolutionHandle, delay: Duration);

    /// Returns whether `handle` was still waiting.
    fn cancel(&mut self, handle: ResolutionHandle) -> bool;
}

/// Virtual-time delay queue. Nothing fires on its own; time moves through [`TimerQueue::advance`].
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    entries: SmallVec<[(Duration, ResolutionHandle); 1]>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward and returns the handles that came due, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<ResolutionHandle> {
        self.now = self.now.saturating_add(by);
        let now = self.now;

        let mut due: Vec<_> = self
            .entries
            .iter()
            .copied()
            .filter(|&(deadline, _)| deadline <= now)
            .collect();
        self.entries.retain(|&mut (deadline, _)| deadline > now);
        due.sort_by_key(|&(deadline, _)| deadline);

        due.into_iter().map(|(_, handle)| handle).collect()
    }

    /// Time left until the earliest pending handle is due.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|&(deadline, _)| deadline.saturating_sub(self.now))
            .min()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl Scheduler for TimerQueue {
    fn schedule(&mut self, handle: ResolutionHandle, delay: Duration) {
        log::trace!("scheduling {:?} in {:?}", handle, delay);
        self.entries.push((self.now.saturating_add(delay), handle));
    }

    fn cancel(&mut self, handle: ResolutionHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&mut (_, pending)| pending != handle);
        before != self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn handles_fire_once_due() {
        let mut queue = TimerQueue::new();
        let handle = ResolutionHandle::new(1, 1);
        queue.schedule(handle, 500 * MS);

        assert_eq!(queue.next_due_in(), Some(500 * MS));
        assert!(queue.advance(499 * MS).is_empty());
        assert_eq!(queue.next_due_in(), Some(MS));
        assert_eq!(queue.advance(MS), vec![handle]);
        assert!(queue.is_idle());
        assert!(queue.advance(10 * MS).is_empty());
    }

    #[test]
    fn due_handles_come_out_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let late = ResolutionHandle::new(1, 2);
        let early = ResolutionHandle::new(1, 1);
        queue.schedule(late, 300 * MS);
        queue.schedule(early, 100 * MS);

        assert_eq!(queue.pending(), 2);
        assert_eq!(queue.advance(300 * MS), vec![early, late]);
    }

    #[test]
    fn cancelled_handles_never_fire() {
        let mut queue = TimerQueue::new();
        let handle = ResolutionHandle::new(2, 1);
        queue.schedule(handle, 500 * MS);

        assert!(queue.cancel(handle));
        assert!(!queue.cancel(handle));
        assert!(queue.advance(Duration::from_secs(60)).is_empty());
    }
}
