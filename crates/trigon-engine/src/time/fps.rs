use std::time::{Duration, Instant};

/// Interval-based frames-per-second counter.
///
/// Feed it the timestamp of every presented frame; once per interval it
/// returns the measured rate (`frames / elapsed`) and starts a new
/// measurement window. Timestamps are passed in rather than sampled here so
/// the counter shares the frame clock's notion of "now" and stays testable.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval: Duration,
    window_start: Option<Instant>,
    frames: u32,
}

impl FpsCounter {
    /// Creates a counter reporting once per second.
    pub fn new() -> Self {
        Self::with_interval(Duration::from_secs(1))
    }

    /// Creates a counter with a custom reporting interval.
    pub fn with_interval(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero());
        Self {
            interval,
            window_start: None,
            frames: 0,
        }
    }

    /// Counts one frame at `now`.
    ///
    /// Returns `Some(fps)` when a full interval has elapsed since the current
    /// measurement window opened, `None` otherwise. The first tick only opens
    /// the window.
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 1;
            return None;
        };

        self.frames += 1;

        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.interval {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64();
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_interval_elapses() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        assert_eq!(fps.tick(t0), None);
        assert_eq!(fps.tick(t0 + Duration::from_millis(300)), None);
        assert_eq!(fps.tick(t0 + Duration::from_millis(900)), None);
    }

    #[test]
    fn reports_frames_over_elapsed() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        fps.tick(t0);
        fps.tick(t0 + Duration::from_millis(500));
        // Third frame lands exactly on the interval boundary: 3 frames / 1 s.
        let report = fps.tick(t0 + Duration::from_secs(1));
        assert_eq!(report, Some(3.0));
    }

    #[test]
    fn window_resets_after_report() {
        let mut fps = FpsCounter::new();
        let t0 = Instant::now();
        fps.tick(t0);
        fps.tick(t0 + Duration::from_secs(1));

        // A new window opened at t0+1s; the next frame must not report.
        assert_eq!(fps.tick(t0 + Duration::from_millis(1500)), None);
        // Two frames over the second window's full interval.
        let report = fps.tick(t0 + Duration::from_secs(2));
        assert_eq!(report, Some(2.0));
    }

    #[test]
    fn custom_interval_is_honored() {
        let mut fps = FpsCounter::with_interval(Duration::from_millis(100));
        let t0 = Instant::now();
        fps.tick(t0);
        assert!(fps.tick(t0 + Duration::from_millis(100)).is_some());
    }
}
