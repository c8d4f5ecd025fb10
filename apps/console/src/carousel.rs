//! Auto-scrolling carousel, modeled as an explicit state machine.
//!
//! The rendered list is laid out twice back-to-back (two "loops") inside a
//! horizontally scrolling track; once the offset passes the width of one
//! loop plus the gap between the copies, subtracting that modulus lands the
//! track on an identical frame, which is what makes the scroll look
//! infinite.
//!
//! The clock is injected through [`Carousel::frame`], so tests drive the
//! machine with fabricated instants and never sleep.

use std::time::{Duration, Instant};

/// Pixels of gap between the two rendered copies of the list.
pub const LOOP_GAP: f64 = 20.0;

/// Default scroll speed in pixels per second.
pub const DEFAULT_SPEED: f64 = 40.0;

/// A frame delta above this is treated as this (tab backgrounding would
/// otherwise produce one huge jump).
const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No content yet.
    Idle,
    /// List changed; waiting for a fresh measurement.
    Measuring,
    /// Scrolling.
    Running,
    /// Pointer or touch held over the track; offset frozen.
    Paused,
    /// List is empty; animation cancelled.
    Stopped,
}

pub struct Carousel {
    phase: Phase,
    offset: f64,
    modulus: f64,
    speed: f64,
    last_frame: Option<Instant>,
}

impl Carousel {
    pub fn new() -> Self {
        Self::with_speed(DEFAULT_SPEED)
    }

    pub fn with_speed(speed: f64) -> Self {
        Self {
            phase: Phase::Idle,
            offset: 0.0,
            modulus: 0.0,
            speed,
            last_frame: None,
        }
    }

    /// The list changed; measurements are stale until [`measure`] is called.
    ///
    /// [`measure`]: Carousel::measure
    pub fn invalidate(&mut self) {
        self.phase = Phase::Measuring;
        self.last_frame = None;
    }

    /// Measure one loop from the rendered item widths and (re)start.
    ///
    /// The modulus is the sum of item widths, the gaps between items, and
    /// the gap between the two loop copies. The offset starts over from
    /// zero. An empty list cancels the animation.
    pub fn measure(&mut self, item_widths: &[f64], item_gap: f64) {
        if item_widths.is_empty() {
            self.phase = Phase::Stopped;
            self.offset = 0.0;
            self.modulus = 0.0;
            self.last_frame = None;
            return;
        }

        self.modulus = Self::loop_width(item_widths, item_gap) + LOOP_GAP;
        self.offset = 0.0;
        self.last_frame = None;
        self.phase = Phase::Running;
    }

    /// Re-measure after a viewport resize.
    ///
    /// Unlike [`measure`], the current offset is kept, not rescaled; only
    /// the wrap point moves.
    ///
    /// [`measure`]: Carousel::measure
    pub fn remeasure(&mut self, item_widths: &[f64], item_gap: f64) {
        if item_widths.is_empty() {
            self.measure(item_widths, item_gap);
            return;
        }
        self.modulus = Self::loop_width(item_widths, item_gap) + LOOP_GAP;
    }

    /// Advance one animation frame.
    ///
    /// While paused the timestamp stays fresh but the offset is frozen, so
    /// resuming does not produce a jump covering the paused interval.
    pub fn frame(&mut self, now: Instant) {
        match self.phase {
            Phase::Running => {
                let Some(last) = self.last_frame else {
                    self.last_frame = Some(now);
                    return;
                };

                let dt = (now - last).min(MAX_FRAME_DELTA);
                self.last_frame = Some(now);

                if self.modulus <= 0.0 {
                    return;
                }

                self.offset += self.speed * dt.as_secs_f64();
                if self.offset >= self.modulus {
                    // Wrap seamlessly without snapping back to zero.
                    self.offset -= self.modulus;
                }
            }
            Phase::Paused => {
                self.last_frame = Some(now);
            }
            Phase::Idle | Phase::Measuring | Phase::Stopped => {}
        }
    }

    /// Pointer or touch pressed over the track.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Pointer or touch released.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn modulus(&self) -> f64 {
        self.modulus
    }

    /// CSS-style translation for the track.
    pub fn translate_x(&self) -> f64 {
        -self.offset
    }

    fn loop_width(item_widths: &[f64], item_gap: f64) -> f64 {
        let items: f64 = item_widths.iter().sum();
        let gaps = item_gap * (item_widths.len().saturating_sub(1)) as f64;
        items + gaps
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_carousel() -> (Carousel, Instant) {
        let mut carousel = Carousel::with_speed(100.0);
        // Two 90px items, 20px apart: loop = 200, modulus = 220.
        carousel.measure(&[90.0, 90.0], 20.0);
        let t0 = Instant::now();
        carousel.frame(t0); // primes last_frame, no movement
        (carousel, t0)
    }

    #[test]
    fn test_starts_idle_and_measure_starts_running() {
        let mut carousel = Carousel::new();
        assert_eq!(carousel.phase(), Phase::Idle);
        carousel.measure(&[100.0], 20.0);
        assert_eq!(carousel.phase(), Phase::Running);
        assert_eq!(carousel.modulus(), 100.0 + LOOP_GAP);
    }

    #[test]
    fn test_modulus_includes_item_gaps_and_loop_gap() {
        let mut carousel = Carousel::new();
        carousel.measure(&[50.0, 60.0, 70.0], 10.0);
        // 180 of items + 2 gaps of 10 + 20 between loops.
        assert_eq!(carousel.modulus(), 220.0);
    }

    #[test]
    fn test_offset_advances_at_speed() {
        let (mut carousel, t0) = running_carousel();
        carousel.frame(t0 + Duration::from_millis(50));
        assert!((carousel.offset() - 5.0).abs() < 1e-9); // 100 px/s * 0.05 s
        assert_eq!(carousel.translate_x(), -carousel.offset());
    }

    #[test]
    fn test_frame_delta_is_capped_at_100ms() {
        let (mut carousel, t0) = running_carousel();
        // 10 simulated seconds in the background advance only 100ms worth.
        carousel.frame(t0 + Duration::from_secs(10));
        assert!((carousel.offset() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_subtracts_modulus_instead_of_resetting() {
        let mut carousel = Carousel::with_speed(1000.0);
        carousel.measure(&[40.0, 40.0], 20.0); // modulus = 120
        let t0 = Instant::now();
        carousel.frame(t0);

        let mut now = t0;
        // 100ms per frame at 1000 px/s: 100px per frame.
        now += Duration::from_millis(100);
        carousel.frame(now);
        assert!((carousel.offset() - 100.0).abs() < 1e-9);

        now += Duration::from_millis(100);
        carousel.frame(now);
        // 200 >= 120, wraps to 80 - continuity, not a reset to zero.
        assert!((carousel.offset() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_pause_freezes_offset_but_keeps_timestamp_fresh() {
        let (mut carousel, t0) = running_carousel();
        carousel.frame(t0 + Duration::from_millis(50));
        let before_pause = carousel.offset();

        carousel.pause();
        assert_eq!(carousel.phase(), Phase::Paused);
        carousel.frame(t0 + Duration::from_millis(5000));
        assert_eq!(carousel.offset(), before_pause);

        carousel.resume();
        carousel.frame(t0 + Duration::from_millis(5050));
        // Only the 50ms since the last (paused) frame counts.
        assert!((carousel.offset() - (before_pause + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let mut carousel = Carousel::new();
        carousel.resume();
        assert_eq!(carousel.phase(), Phase::Idle);
    }

    #[test]
    fn test_remeasure_keeps_offset() {
        let (mut carousel, t0) = running_carousel();
        carousel.frame(t0 + Duration::from_millis(100));
        let offset = carousel.offset();

        carousel.remeasure(&[90.0, 90.0, 90.0], 20.0);
        assert_eq!(carousel.offset(), offset);
        assert_eq!(carousel.modulus(), 290.0 + LOOP_GAP);
        assert_eq!(carousel.phase(), Phase::Running);
    }

    #[test]
    fn test_empty_list_stops_animation() {
        let (mut carousel, t0) = running_carousel();
        carousel.measure(&[], 20.0);
        assert_eq!(carousel.phase(), Phase::Stopped);
        assert_eq!(carousel.offset(), 0.0);

        // Frames while stopped do nothing.
        carousel.frame(t0 + Duration::from_secs(1));
        assert_eq!(carousel.offset(), 0.0);
    }

    #[test]
    fn test_invalidate_parks_in_measuring_until_measured() {
        let (mut carousel, t0) = running_carousel();
        carousel.invalidate();
        assert_eq!(carousel.phase(), Phase::Measuring);

        carousel.frame(t0 + Duration::from_secs(1));
        assert_eq!(carousel.offset(), 0.0, "no movement while measuring");

        carousel.measure(&[90.0], 20.0);
        assert_eq!(carousel.phase(), Phase::Running);
    }
}
