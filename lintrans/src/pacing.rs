// Copyright 2025 the Lintrans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Paces ticks at a target rate and measures the time between them.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    max_delta: Option<Duration>,
    last: Option<Instant>,
}

impl FramePacer {
    /// Pace at `target_fps` frames per second.
    ///
    /// A rate of zero is treated as one frame per second.
    pub fn new(target_fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / target_fps.max(1),
            max_delta: None,
            last: None,
        }
    }

    /// Cap the steps reported by [`FramePacer::tick`] at `max_delta`.
    ///
    /// There is no cap unless one is set here.
    #[must_use]
    pub fn with_max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = Some(max_delta);
        self
    }

    /// Time between frames.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Record a tick at `now` and return the seconds since the previous one.
    ///
    /// The first tick returns `0.0`, and so does a `now` earlier than the
    /// previous tick. Gaps are reported in full unless a cap was set with
    /// [`FramePacer::with_max_delta`].
    pub fn tick(&mut self, now: Instant) -> f64 {
        let elapsed = self
            .last
            .replace(now)
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        match self.max_delta {
            Some(max_delta) => elapsed.min(max_delta),
            None => elapsed,
        }
        .as_secs_f64()
    }

    /// When the next frame is due, or `None` before the first tick.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.last.map(|last| last + self.period)
    }

    /// Forget the previous tick, so the next one starts from zero.
    pub fn restart(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Integrator};
    use approx::assert_abs_diff_eq;

    #[test]
    fn sixty_fps_period() {
        let p = FramePacer::new(60);
        assert_eq!(p.period(), Duration::from_nanos(16_666_666));
        assert_eq!(FramePacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn first_tick_is_zero() {
        let mut p = FramePacer::new(60);
        assert!(p.next_deadline().is_none());
        assert_eq!(p.tick(Instant::now()), 0.0);
    }

    #[test]
    fn measures_elapsed_time() {
        let mut p = FramePacer::new(60);
        let t0 = Instant::now();
        p.tick(t0);
        assert_eq!(p.next_deadline(), Some(t0 + p.period()));
        let dt = p.tick(t0 + Duration::from_millis(20));
        assert_abs_diff_eq!(dt, 0.02, epsilon = 1e-9);
    }

    #[test]
    fn long_gaps_are_reported_in_full() {
        let mut p = FramePacer::new(60);
        let t0 = Instant::now();
        p.tick(t0);
        assert_eq!(p.tick(t0 + Duration::from_secs(1)), 1.0);
        assert_eq!(p.tick(t0 + Duration::from_secs(31)), 30.0);
    }

    #[test]
    fn held_key_covers_a_stalled_frame() {
        let mut p = FramePacer::new(60);
        let mut integrator = Integrator::default();
        let t0 = Instant::now();
        integrator.step(Action::MoveRight.into(), p.tick(t0));
        integrator.step(Action::MoveRight.into(), p.tick(t0 + Duration::from_secs(1)));
        assert_abs_diff_eq!(integrator.state().translation.x, 200.0, epsilon = 1e-9);
    }

    #[test]
    fn clamps_long_gaps_when_capped() {
        let mut p = FramePacer::new(60).with_max_delta(Duration::from_millis(100));
        let t0 = Instant::now();
        p.tick(t0);
        assert_abs_diff_eq!(p.tick(t0 + Duration::from_secs(5)), 0.1, epsilon = 1e-9);
    }

    #[test]
    fn time_going_backwards_is_zero() {
        let mut p = FramePacer::new(60);
        let t0 = Instant::now() + Duration::from_secs(1);
        p.tick(t0);
        assert_eq!(p.tick(t0 - Duration::from_millis(10)), 0.0);
    }

    #[test]
    fn restart_forgets_last_tick() {
        let mut p = FramePacer::new(30);
        let t0 = Instant::now();
        p.tick(t0);
        p.restart();
        assert_eq!(p.tick(t0 + Duration::from_millis(50)), 0.0);
    }
}
