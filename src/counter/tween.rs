use std::time::Duration;

/// Ease-out quadratic ("Power2"): fast at start, decelerates to the target.
pub fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Timed transition of one slot's vertical offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotTween {
    pub from: f32,
    pub to: f32,
    elapsed: Duration,
    duration: Duration,
}

impl SlotTween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// Normalized progress in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_quad(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` and return the new value.
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.value()
    }
}
