//! Animation driver: {stopped, running} with generation-guarded ticks
//!
//! The host schedules frames itself (`requestAnimationFrame`) and hands the
//! token from `start()` back on every frame. `stop()` bumps the generation,
//! so a frame that was already scheduled arrives with a stale token and is
//! rejected instead of running against torn-down state.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
}

/// Proof that a tick belongs to the current run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken {
    generation: u32,
}

impl TickToken {
    /// Rebuild a token from the raw value handed to the host
    pub fn from_raw(generation: u32) -> Self {
        Self { generation }
    }

    pub fn raw(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
pub struct AnimationDriver {
    state: DriverState,
    generation: u32,
    ticks: u64,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver {
    pub fn new() -> Self {
        Self { state: DriverState::Stopped, generation: 0, ticks: 0 }
    }

    /// stopped -> running. Already running: returns the live token.
    pub fn start(&mut self) -> TickToken {
        if self.state == DriverState::Stopped {
            self.generation = self.generation.wrapping_add(1);
            self.state = DriverState::Running;
        }
        TickToken { generation: self.generation }
    }

    /// running -> stopped, invalidating every issued token.
    /// Idempotent; returns whether a transition happened.
    pub fn stop(&mut self) -> bool {
        if self.state == DriverState::Stopped {
            return false;
        }
        self.state = DriverState::Stopped;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    /// Admit a tick. Counts it when accepted.
    pub fn accept(&mut self, token: TickToken) -> bool {
        if self.state != DriverState::Running || token.generation != self.generation {
            return false;
        }
        self.ticks += 1;
        true
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Ticks accepted over the driver's lifetime
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_stopped_and_rejects_ticks() {
        let mut driver = AnimationDriver::new();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(!driver.accept(TickToken::from_raw(0)));
        assert_eq!(driver.ticks(), 0);
    }

    #[test]
    fn running_accepts_current_token() {
        let mut driver = AnimationDriver::new();
        let token = driver.start();
        assert!(driver.is_running());
        assert!(driver.accept(token));
        assert!(driver.accept(token));
        assert_eq!(driver.ticks(), 2);
    }

    #[test]
    fn start_while_running_keeps_token() {
        let mut driver = AnimationDriver::new();
        let a = driver.start();
        let b = driver.start();
        assert_eq!(a, b);
    }

    #[test]
    fn stop_invalidates_pending_tick() {
        let mut driver = AnimationDriver::new();
        let token = driver.start();
        assert!(driver.stop());
        assert!(!driver.accept(token));
        assert_eq!(driver.ticks(), 0);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut driver = AnimationDriver::new();
        assert!(!driver.stop());
        driver.start();
        assert!(driver.stop());
        assert!(!driver.stop());
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn old_token_rejected_after_restart() {
        let mut driver = AnimationDriver::new();
        let old = driver.start();
        driver.stop();
        let new = driver.start();
        assert_ne!(old, new);
        assert!(!driver.accept(old));
        assert!(driver.accept(new));
    }
}
