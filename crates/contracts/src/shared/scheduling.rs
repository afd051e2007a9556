//! Coalescing guards for bursty browser events.

/// Coalesces bursts of events into at most one callback per animation frame.
#[derive(Debug, Default)]
pub struct FrameGuard {
    scheduled: bool,
}

impl FrameGuard {
    /// Returns `true` if the caller should request a frame now.
    pub fn try_schedule(&mut self) -> bool {
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    /// Called from the frame callback before doing the work.
    pub fn frame_ran(&mut self) {
        self.scheduled = false;
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Identifies one scheduled debounced call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Last-write-wins debounce: only the most recently scheduled call runs,
/// and it runs once.
#[derive(Debug, Default)]
pub struct Debounce {
    latest: u64,
    armed: bool,
}

impl Debounce {
    /// Supersedes any pending call.
    pub fn schedule(&mut self) -> DebounceTicket {
        self.latest += 1;
        self.armed = true;
        DebounceTicket(self.latest)
    }

    /// Called when a timer expires. `true` means the work should run now.
    pub fn fire(&mut self, ticket: DebounceTicket) -> bool {
        if !self.armed || ticket.0 != self.latest {
            return false;
        }
        self.armed = false;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_guard_coalesces() {
        let mut guard = FrameGuard::default();
        assert!(guard.try_schedule());
        assert!(!guard.try_schedule());
        assert!(!guard.try_schedule());
        guard.frame_ran();
        assert!(!guard.is_scheduled());
        assert!(guard.try_schedule());
    }

    #[test]
    fn debounce_runs_only_the_latest_call() {
        let mut debounce = Debounce::default();
        let first = debounce.schedule();
        let second = debounce.schedule();
        let ran: Vec<_> = [first, second]
            .into_iter()
            .filter(|t| debounce.fire(*t))
            .collect();
        assert_eq!(ran, vec![second]);
        assert!(!debounce.is_pending());
    }

    #[test]
    fn debounce_fires_once_per_schedule() {
        let mut debounce = Debounce::default();
        let ticket = debounce.schedule();
        assert!(debounce.is_pending());
        assert!(debounce.fire(ticket));
        assert!(!debounce.fire(ticket));
        let next = debounce.schedule();
        assert!(!debounce.fire(ticket));
        assert!(debounce.fire(next));
    }
}
