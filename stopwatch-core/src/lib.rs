//! Pure timing logic library with no platform dependencies.
//! All operations take the current time as an explicit `now_ms` argument,
//! so the engine is testable on host without touching a real clock.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EngineState {
    Stopped,
    Running,
    Paused,
}

/// A snapshot of elapsed time captured while the engine was running.
/// Ordinals are 1-based, assigned at capture, and only reused after a reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapRecord {
    pub ordinal: u32,
    pub elapsed_ms: u64,
}

pub struct TimerEngine {
    pub state: EngineState,
    accumulated_ms: u64,
    run_start_ms: Option<u64>,
    laps: Vec<LapRecord>,
}

impl TimerEngine {
    pub fn new() -> Self {
        Self {
            state: EngineState::Stopped,
            accumulated_ms: 0,
            run_start_ms: None,
            laps: Vec::new(),
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.state == EngineState::Running {
            return;
        }
        self.run_start_ms = Some(now_ms);
        self.state = EngineState::Running;
    }

    pub fn pause(&mut self, now_ms: u64) {
        if self.state != EngineState::Running {
            return;
        }
        let start = self.run_start_ms.take().unwrap_or(now_ms);
        self.accumulated_ms += now_ms.saturating_sub(start);
        self.state = EngineState::Paused;
    }

    /// Valid in any state. Clears accumulated time and laps together with
    /// the transition to Stopped.
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
        self.run_start_ms = None;
        self.laps.clear();
        self.state = EngineState::Stopped;
    }

    /// Total elapsed time, excluding paused intervals. Pure query, safe to
    /// call at any frequency.
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match (self.state, self.run_start_ms) {
            (EngineState::Running, Some(start)) => {
                self.accumulated_ms + now_ms.saturating_sub(start)
            }
            _ => self.accumulated_ms,
        }
    }

    /// Captures the current elapsed time as a new lap, newest first.
    /// Returns `None` without recording anything unless the engine is
    /// running with nonzero elapsed time.
    pub fn record_lap(&mut self, now_ms: u64) -> Option<&LapRecord> {
        if self.state != EngineState::Running {
            return None;
        }
        let elapsed = self.elapsed_ms(now_ms);
        if elapsed == 0 {
            return None;
        }
        let record = LapRecord {
            ordinal: self.laps.len() as u32 + 1,
            elapsed_ms: elapsed,
        };
        self.laps.insert(0, record);
        Some(&self.laps[0])
    }

    /// Recorded laps, most recent first.
    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Format milliseconds as "MM:SS.CC" (centiseconds, truncated).
/// The minute field grows past two digits rather than wrapping.
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", m, s, cs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwatch_basic() {
        let mut sw = TimerEngine::new();
        assert_eq!(sw.state, EngineState::Stopped);
        assert_eq!(sw.elapsed_ms(0), 0);

        sw.start(1000);
        assert_eq!(sw.state, EngineState::Running);
        assert_eq!(sw.elapsed_ms(1500), 500);
        assert_eq!(sw.elapsed_ms(2000), 1000);

        sw.pause(2000);
        assert_eq!(sw.state, EngineState::Paused);
        assert_eq!(sw.elapsed_ms(5000), 1000); // Stays at 1000 when paused

        sw.start(5000);
        assert_eq!(sw.elapsed_ms(5500), 1500);

        sw.reset();
        assert_eq!(sw.state, EngineState::Stopped);
        assert_eq!(sw.elapsed_ms(10000), 0);
    }

    #[test]
    fn test_start_while_running_is_noop() {
        let mut sw = TimerEngine::new();
        sw.start(1000);
        sw.start(4000); // must not restart the segment
        assert_eq!(sw.elapsed_ms(5000), 4000);
    }

    #[test]
    fn test_pause_accumulates_across_cycles() {
        let mut sw = TimerEngine::new();
        sw.start(0);
        sw.pause(300);
        sw.start(1000);
        sw.pause(1200);
        sw.start(5000);
        sw.pause(5500);
        // 300 + 200 + 500, independent of the gaps in between
        assert_eq!(sw.elapsed_ms(9999), 1000);
    }

    #[test]
    fn test_pause_when_not_running_is_noop() {
        let mut sw = TimerEngine::new();
        sw.pause(1000);
        assert_eq!(sw.state, EngineState::Stopped);

        sw.start(1000);
        sw.pause(2000);
        sw.pause(3000);
        assert_eq!(sw.elapsed_ms(3000), 1000);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut sw = TimerEngine::new();
        sw.start(0);
        sw.record_lap(500);
        sw.reset();
        assert_eq!(sw.state, EngineState::Stopped);
        assert_eq!(sw.elapsed_ms(1000), 0);
        assert!(sw.laps().is_empty());

        sw.start(0);
        sw.pause(700);
        sw.reset();
        assert_eq!(sw.state, EngineState::Stopped);
        assert_eq!(sw.elapsed_ms(700), 0);
    }

    #[test]
    fn test_lap_requires_running_and_nonzero() {
        let mut sw = TimerEngine::new();
        assert_eq!(sw.record_lap(1000), None);
        assert!(sw.laps().is_empty());

        sw.start(1000);
        assert_eq!(sw.record_lap(1000), None); // zero elapsed

        sw.pause(2000);
        assert_eq!(sw.record_lap(3000), None);
        assert!(sw.laps().is_empty());
    }

    #[test]
    fn test_laps_most_recent_first() {
        let mut sw = TimerEngine::new();
        sw.start(0);
        sw.record_lap(500);
        sw.record_lap(1000);
        assert_eq!(
            sw.laps(),
            &[
                LapRecord { ordinal: 2, elapsed_ms: 1000 },
                LapRecord { ordinal: 1, elapsed_ms: 500 },
            ]
        );
    }

    #[test]
    fn test_lap_ordinals_restart_after_reset() {
        let mut sw = TimerEngine::new();
        sw.start(0);
        sw.record_lap(100);
        sw.record_lap(200);
        sw.record_lap(300);
        assert_eq!(sw.laps()[0].ordinal, 3);

        sw.reset();
        sw.start(0);
        let lap = sw.record_lap(50).copied();
        assert_eq!(lap, Some(LapRecord { ordinal: 1, elapsed_ms: 50 }));
    }

    #[test]
    fn test_lap_then_pause_resume() {
        let mut sw = TimerEngine::new();
        sw.start(0);
        let lap = sw.record_lap(1500).copied();
        assert_eq!(lap, Some(LapRecord { ordinal: 1, elapsed_ms: 1500 }));

        sw.pause(1500);
        assert_eq!(sw.elapsed_ms(1500), 1500);

        sw.start(1500);
        sw.pause(2000);
        assert_eq!(sw.elapsed_ms(2000), 2000);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "00:00.00");
        assert_eq!(format_duration(599), "00:00.59");
        assert_eq!(format_duration(61_005), "01:01.00");
        assert_eq!(format_duration(12_340), "00:12.34");
    }

    #[test]
    fn test_format_duration_minutes_unbounded() {
        assert_eq!(format_duration(6_000_000), "100:00.00");
        assert_eq!(format_duration(5_999_990), "99:59.99");
    }
}
