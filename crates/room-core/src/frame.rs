use instant::Instant;

/// Samples a monotonic clock once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt.as_secs_f32()
    }
}
