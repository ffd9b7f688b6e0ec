use std::time::Instant;

/// Shortest delta handed to the app, in seconds. Guards against zero-dt math
/// when redraws arrive back to back.
const DT_FLOOR: f32 = 1.0e-4;

/// Longest delta handed to the app, in seconds. A stall (debugger, minimized
/// window) resumes as one long-but-bounded frame instead of a huge jump.
const DT_CEIL: f32 = 0.25;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to `[DT_FLOOR, DT_CEIL]`.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Produces one [`FrameTime`] per redraw.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the baseline so the next tick reports the floor delta. Called
    /// when the event loop resumes after a suspension.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let raw = match self.previous.take() {
            Some(prev) => now.saturating_duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.previous = Some(now);

        let snapshot = FrameTime {
            dt: raw.clamp(DT_FLOOR, DT_CEIL),
            now,
            frame_index: self.frames,
        };
        self.frames = self.frames.wrapping_add(1);
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_reports_floor_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().dt, DT_FLOOR);
    }

    #[test]
    fn reset_drops_accumulated_time() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        assert_eq!(clock.tick().dt, DT_FLOOR);
    }

    #[test]
    fn ticks_number_frames_consecutively() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!((a.frame_index, b.frame_index), (0, a.frame_index + 1));
    }
}
