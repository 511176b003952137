//! Throttled rotation loop.
//!
//! The host fires a frame callback as often as it likes; the loop advances
//! the rotation at most once per `frame_interval_ms`. The host re-arms its
//! callback after every tick that did not report [`TickOutcome::Stopped`].

use crate::config::GlobeConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    /// Nothing scheduled. Ticks are ignored.
    #[default]
    Idle,
    /// A frame callback is pending.
    Running,
}

/// Result of feeding one scheduler timestamp to the loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Rotation advanced; the frame must be redrawn.
    Advanced,
    /// Too early since the last advance; nothing changed.
    Throttled,
    /// Loop is idle; the host must not re-arm.
    Stopped,
}

impl TickOutcome {
    pub fn should_redraw(&self) -> bool {
        matches!(self, TickOutcome::Advanced)
    }

    pub fn should_continue(&self) -> bool {
        !matches!(self, TickOutcome::Stopped)
    }
}

#[derive(Clone, Debug)]
pub struct AnimationLoop {
    config: &'static GlobeConfig,
    state: LoopState,
    rotation: f64,
    last_tick: Option<f64>,
}

impl AnimationLoop {
    pub fn new(config: &'static GlobeConfig) -> Self {
        Self {
            config,
            state: LoopState::Idle,
            rotation: 0.0,
            last_tick: None,
        }
    }

    /// Reset to rotation 0 and enter `Running`.
    pub fn start(&mut self) {
        self.rotation = 0.0;
        self.last_tick = None;
        self.state = LoopState::Running;
    }

    /// Feed a monotonic timestamp in milliseconds.
    ///
    /// The first tick after `start` always advances.
    pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
        if self.state == LoopState::Idle {
            return TickOutcome::Stopped;
        }

        let due = match self.last_tick {
            None => true,
            Some(last) => timestamp_ms - last >= self.config.frame_interval_ms(),
        };
        if !due {
            return TickOutcome::Throttled;
        }

        self.rotation += self.config.rotation_speed();
        self.last_tick = Some(timestamp_ms);
        TickOutcome::Advanced
    }

    /// Enter `Idle`. Rotation is frozen from here on.
    pub fn stop(&mut self) {
        self.state = LoopState::Idle;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GLOBE_CONFIG;

    fn running() -> AnimationLoop {
        let mut anim = AnimationLoop::new(&GLOBE_CONFIG);
        anim.start();
        anim
    }

    #[test]
    fn new_loop_is_idle() {
        let mut anim = AnimationLoop::new(&GLOBE_CONFIG);
        assert_eq!(anim.state(), LoopState::Idle);
        assert_eq!(anim.tick(1000.0), TickOutcome::Stopped);
        assert_eq!(anim.rotation(), 0.0);
    }

    #[test]
    fn first_tick_advances() {
        let mut anim = running();
        assert_eq!(anim.tick(16.0), TickOutcome::Advanced);
        assert!((anim.rotation() - GLOBE_CONFIG.rotation_speed()).abs() < 1e-15);
    }

    #[test]
    fn ticks_10ms_apart_are_throttled() {
        let mut anim = running();
        assert_eq!(anim.tick(1000.0), TickOutcome::Advanced);
        let after_first = anim.rotation();
        assert_eq!(anim.tick(1010.0), TickOutcome::Throttled);
        assert_eq!(anim.rotation(), after_first);
    }

    #[test]
    fn tick_exactly_one_interval_later_advances() {
        let mut anim = running();
        anim.tick(0.0);
        let interval = GLOBE_CONFIG.frame_interval_ms();
        assert_eq!(anim.tick(interval), TickOutcome::Advanced);
    }

    #[test]
    fn throttled_ticks_do_not_move_the_gate() {
        let mut anim = running();
        anim.tick(0.0);
        for t in [20.0, 40.0, 60.0, 80.0] {
            assert_eq!(anim.tick(t), TickOutcome::Throttled);
        }
        assert_eq!(anim.tick(84.0), TickOutcome::Advanced);
    }

    #[test]
    fn stop_freezes_rotation() {
        let mut anim = running();
        anim.tick(0.0);
        anim.stop();
        let frozen = anim.rotation();
        assert_eq!(anim.tick(500.0), TickOutcome::Stopped);
        assert_eq!(anim.rotation(), frozen);
        assert!(!anim.is_running());
    }

    #[test]
    fn restart_resets_rotation() {
        let mut anim = running();
        anim.tick(0.0);
        anim.tick(100.0);
        anim.start();
        assert_eq!(anim.rotation(), 0.0);
        assert_eq!(anim.tick(100.0), TickOutcome::Advanced);
    }

    #[test]
    fn outcome_flags() {
        assert!(TickOutcome::Advanced.should_redraw());
        assert!(!TickOutcome::Throttled.should_redraw());
        assert!(TickOutcome::Throttled.should_continue());
        assert!(!TickOutcome::Stopped.should_continue());
    }
}
