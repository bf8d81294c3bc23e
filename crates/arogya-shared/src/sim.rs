//! Virtual-time stand-ins for the apps' timed processes.
//!
//! Nothing here touches the wall clock. Each process is a value advanced
//! by an external tick source, so tests fast-forward time by calling
//! [`FaceScan::tick`] or [`Delay::elapse`] directly and an embedder maps
//! ticks onto real timers at the UI boundary.

use rand::Rng;

/// Milliseconds of virtual time.
pub type Millis = u64;

/// Lifecycle of a simulated face scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    /// Progress is climbing towards 100.
    Scanning,
    /// Progress reached 100; holding briefly before the success signal.
    Holding,
    /// Success signalled; terminal.
    Complete,
    /// Cancelled before the success signal; terminal, no partial success.
    Cancelled,
}

/// What a single tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanEvent {
    /// New progress percentage.
    Progress(u8),
    /// The scan finished. Fires exactly once per scan.
    Completed { success: bool },
    /// Nothing observable changed (holding, or already terminal).
    Idle,
}

/// Simulated biometric scan: 0 to 100 percent in 2 % increments every
/// 50 ms, then a ~1 s hold before the single success signal. No camera
/// or matcher is involved; every uncancelled scan succeeds.
#[derive(Clone, Debug)]
pub struct FaceScan {
    progress: u8,
    state: ScanState,
    hold_remaining: Millis,
}

impl FaceScan {
    pub const TICK_MS: Millis = 50;
    pub const PROGRESS_PER_TICK: u8 = 2;
    pub const COMPLETION_HOLD_MS: Millis = 1000;

    pub fn start() -> Self {
        Self {
            progress: 0,
            state: ScanState::Scanning,
            hold_remaining: Self::COMPLETION_HOLD_MS,
        }
    }

    /// Advance by one 50 ms tick.
    pub fn tick(&mut self) -> ScanEvent {
        match self.state {
            ScanState::Scanning => {
                self.progress = (self.progress + Self::PROGRESS_PER_TICK).min(100);
                if self.progress == 100 {
                    self.state = ScanState::Holding;
                }
                ScanEvent::Progress(self.progress)
            }
            ScanState::Holding => {
                self.hold_remaining = self.hold_remaining.saturating_sub(Self::TICK_MS);
                if self.hold_remaining == 0 {
                    self.state = ScanState::Complete;
                    ScanEvent::Completed { success: true }
                } else {
                    ScanEvent::Idle
                }
            }
            ScanState::Complete | ScanState::Cancelled => ScanEvent::Idle,
        }
    }

    /// Tear the scan down. A no-op once the success signal has fired.
    pub fn cancel(&mut self) {
        if self.state != ScanState::Complete {
            self.state = ScanState::Cancelled;
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == ScanState::Complete
    }
}

/// A fixed countdown of virtual milliseconds. Used for the chatbot's
/// simulated thinking pause; it cannot be cancelled and only affects
/// when the reply appears, never which reply.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Delay {
    remaining: Millis,
}

impl Delay {
    /// Bounds of the chatbot's randomized thinking pause.
    pub const THINKING_MIN_MS: Millis = 1000;
    pub const THINKING_MAX_MS: Millis = 3000;

    pub fn new(duration: Millis) -> Self {
        Self {
            remaining: duration,
        }
    }

    /// A thinking pause sampled uniformly from 1-3 seconds.
    pub fn thinking<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(Self::THINKING_MIN_MS..=Self::THINKING_MAX_MS))
    }

    /// Consume `ms` of virtual time; true once the delay has elapsed.
    pub fn elapse(&mut self, ms: Millis) -> bool {
        self.remaining = self.remaining.saturating_sub(ms);
        self.remaining == 0
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining(&self) -> Millis {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Drive a scan to completion, returning (progress trace, success count).
    fn run_to_completion(scan: &mut FaceScan) -> (Vec<u8>, usize) {
        let mut trace = Vec::new();
        let mut successes = 0;
        for _ in 0..200 {
            match scan.tick() {
                ScanEvent::Progress(p) => trace.push(p),
                ScanEvent::Completed { success: true } => successes += 1,
                ScanEvent::Completed { success: false } => unreachable!(),
                ScanEvent::Idle => {}
            }
            if scan.state() == ScanState::Complete {
                break;
            }
        }
        (trace, successes)
    }

    #[test]
    fn progress_is_monotonic_and_reaches_exactly_100() {
        let mut scan = FaceScan::start();
        let (trace, successes) = run_to_completion(&mut scan);
        assert!(trace.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(trace.last(), Some(&100));
        assert_eq!(successes, 1);
        assert!(scan.is_complete());
    }

    #[test]
    fn completion_fires_once_after_the_hold() {
        let mut scan = FaceScan::start();
        // 50 ticks of progress to hit 100
        for _ in 0..50 {
            scan.tick();
        }
        assert_eq!(scan.progress(), 100);
        assert_eq!(scan.state(), ScanState::Holding);
        // 20 hold ticks cover the 1 s delay; the last one signals
        let mut events = Vec::new();
        for _ in 0..20 {
            events.push(scan.tick());
        }
        assert_eq!(
            events.iter().filter(|e| matches!(e, ScanEvent::Completed { success: true })).count(),
            1
        );
        assert_eq!(scan.tick(), ScanEvent::Idle);
    }

    #[test]
    fn cancel_before_100_never_signals_success() {
        let mut scan = FaceScan::start();
        for _ in 0..10 {
            scan.tick();
        }
        scan.cancel();
        assert_eq!(scan.state(), ScanState::Cancelled);
        for _ in 0..100 {
            assert_eq!(scan.tick(), ScanEvent::Idle);
        }
        assert!(!scan.is_complete());
    }

    #[test]
    fn cancel_during_hold_still_suppresses_success() {
        let mut scan = FaceScan::start();
        for _ in 0..55 {
            scan.tick();
        }
        assert_eq!(scan.state(), ScanState::Holding);
        scan.cancel();
        for _ in 0..100 {
            assert_eq!(scan.tick(), ScanEvent::Idle);
        }
    }

    #[test]
    fn thinking_delay_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let delay = Delay::thinking(&mut rng);
            assert!(delay.remaining() >= Delay::THINKING_MIN_MS);
            assert!(delay.remaining() <= Delay::THINKING_MAX_MS);
        }
    }

    #[test]
    fn delay_elapses_exactly_once_consumed() {
        let mut delay = Delay::new(1500);
        assert!(!delay.elapse(1000));
        assert!(delay.elapse(500));
        assert!(delay.is_elapsed());
    }

    proptest! {
        #[test]
        fn any_cancel_point_before_completion_suppresses_success(cancel_at in 0usize..69) {
            let mut scan = FaceScan::start();
            for _ in 0..cancel_at {
                scan.tick();
            }
            scan.cancel();
            let mut saw_success = false;
            for _ in 0..100 {
                if matches!(scan.tick(), ScanEvent::Completed { success: true }) {
                    saw_success = true;
                }
            }
            prop_assert!(!saw_success);
        }
    }
}
