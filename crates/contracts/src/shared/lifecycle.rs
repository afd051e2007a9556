//! Preloader gate: the splash screen stays up for a minimum duration and the
//! rest of the page stays inert until it is released.
//!
//! ```text
//! Loading --(min duration elapsed AND document loaded)--> Revealing --(fade delay)--> Removed
//! ```

use super::config::PreloaderConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum GatePhase {
    #[default]
    Loading,
    Revealing,
    Removed,
}

impl GatePhase {
    /// Interactive behaviour is attached from `Revealing` onwards.
    pub fn is_released(&self) -> bool {
        *self >= GatePhase::Revealing
    }

    pub fn shows_preloader(&self) -> bool {
        *self != GatePhase::Removed
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LifecycleGate {
    started_at_ms: f64,
    min_display_ms: u32,
    remove_delay_ms: u32,
    phase: GatePhase,
}

impl LifecycleGate {
    pub fn new(started_at_ms: f64, config: &PreloaderConfig) -> Self {
        Self {
            started_at_ms,
            min_display_ms: config.min_display_ms,
            remove_delay_ms: config.remove_delay_ms,
            phase: GatePhase::Loading,
        }
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn started_at_ms(&self) -> f64 {
        self.started_at_ms
    }

    /// Moves the start mark, only while still loading.
    pub fn restart_at(&mut self, now_ms: f64) {
        if self.phase == GatePhase::Loading {
            self.started_at_ms = now_ms;
        }
    }

    /// Delay still owed when the document finishes loading at `now_ms`.
    pub fn remaining_after(&self, now_ms: f64) -> u32 {
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        let remaining = f64::from(self.min_display_ms) - elapsed;
        if remaining <= 0.0 {
            0
        } else {
            remaining.ceil() as u32
        }
    }

    pub fn remove_delay_ms(&self) -> u32 {
        self.remove_delay_ms
    }

    /// Returns `true` only on the `Loading -> Revealing` transition.
    pub fn release(&mut self) -> bool {
        if self.phase == GatePhase::Loading {
            self.phase = GatePhase::Revealing;
            true
        } else {
            false
        }
    }

    /// Returns `true` only on the `Revealing -> Removed` transition.
    pub fn remove(&mut self) -> bool {
        if self.phase == GatePhase::Revealing {
            self.phase = GatePhase::Removed;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> LifecycleGate {
        LifecycleGate::new(1_000.0, &PreloaderConfig::default())
    }

    #[test]
    fn fast_load_waits_for_the_floor() {
        // load at T=500ms after start
        assert_eq!(gate().remaining_after(1_500.0), 2_500);
    }

    #[test]
    fn slow_load_adds_no_delay() {
        // load at T=4000ms after start
        assert_eq!(gate().remaining_after(5_000.0), 0);
        assert_eq!(gate().remaining_after(4_000.0), 0);
    }

    #[test]
    fn clock_going_backwards_is_clamped() {
        assert_eq!(gate().remaining_after(0.0), 3_000);
    }

    #[test]
    fn phases_only_move_forward() {
        let mut gate = gate();
        assert!(!gate.phase().is_released());
        assert!(!gate.remove());
        assert!(gate.release());
        assert!(!gate.release());
        assert_eq!(gate.phase(), GatePhase::Revealing);
        assert!(gate.phase().is_released());
        assert!(gate.phase().shows_preloader());
        assert!(gate.remove());
        assert_eq!(gate.phase(), GatePhase::Removed);
        assert!(!gate.phase().shows_preloader());
    }

    #[test]
    fn restart_only_while_loading() {
        let mut gate = gate();
        gate.restart_at(1_200.0);
        assert_eq!(gate.started_at_ms(), 1_200.0);
        gate.release();
        gate.restart_at(9_000.0);
        assert_eq!(gate.started_at_ms(), 1_200.0);
    }
}
