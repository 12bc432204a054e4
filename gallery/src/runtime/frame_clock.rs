use std::collections::VecDeque;
use std::time::{Duration, Instant};

const MAX_INTERVALS: usize = 90;

/// Paces draw ticks at a target fps the way an animation-frame callback
/// does: at most one frame per tick, and frames missed while the host was busy
/// are dropped rather than replayed.
#[derive(Debug)]
pub struct FrameClock {
    fps: f32,
    frame_count: u64,
    last_frame: Instant,
    last_render_at: Option<Instant>,
    frame_intervals: VecDeque<Duration>,
}

impl FrameClock {
    pub fn new(fps: f32) -> Self {
        Self::with_start(fps, Instant::now())
    }

    pub fn with_start(fps: f32, now: Instant) -> Self {
        Self {
            fps: fps.max(1.0),
            frame_count: 0,
            last_frame: now,
            last_render_at: None,
            frame_intervals: VecDeque::new(),
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: f32) {
        self.fps = fps.max(1.0);
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fps)
    }

    pub fn next_deadline(&self) -> Instant {
        self.last_frame + self.frame_duration()
    }

    /// Restart pacing from `now`, e.g. after a pause, so the first frame
    /// after resuming is a full interval away.
    pub fn restart(&mut self, now: Instant) {
        self.last_frame = now;
        self.last_render_at = None;
    }

    /// True when a frame is due at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        let frame_duration = self.frame_duration();
        let elapsed = now.saturating_duration_since(self.last_frame);

        if elapsed < frame_duration {
            return false;
        }

        // Keep the phase when on time; re-anchor when more than one frame late.
        self.last_frame = if elapsed < frame_duration * 2 {
            self.last_frame + frame_duration
        } else {
            now
        };
        self.frame_count += 1;
        self.record_render(now);
        true
    }

    pub fn average_fps(&self) -> f32 {
        if self.frame_intervals.is_empty() {
            return 0.0;
        }

        let sum: Duration = self.frame_intervals.iter().copied().sum();
        let avg = sum / self.frame_intervals.len() as u32;

        if avg.is_zero() {
            return 0.0;
        }

        1.0 / avg.as_secs_f32()
    }

    fn record_render(&mut self, now: Instant) {
        let Some(last_render_at) = self.last_render_at.replace(now) else {
            return;
        };

        self.frame_intervals
            .push_back(now.saturating_duration_since(last_render_at));
        if self.frame_intervals.len() > MAX_INTERVALS {
            self.frame_intervals.pop_front();
        }
    }
}
