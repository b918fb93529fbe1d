use std::time::Duration;

/// Count-up animation for the statistics panel.
///
/// Values ease out cubically from zero to their target over a fixed number
/// of frames.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    targets: Vec<u64>,
    steps: u32,
    step: u32,
    duration: Duration,
}

impl CounterAnimation {
    pub const DEFAULT_STEPS: u32 = 60;
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    pub fn new(targets: Vec<u64>) -> Self {
        Self::with_steps(targets, Self::DEFAULT_STEPS, Self::DEFAULT_DURATION)
    }

    pub fn with_steps(targets: Vec<u64>, steps: u32, duration: Duration) -> Self {
        Self {
            targets,
            steps: steps.max(1),
            step: 0,
            duration,
        }
    }

    /// Delay between frames.
    pub fn frame_interval(&self) -> Duration {
        self.duration / self.steps
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }

    /// Values for the current frame.
    pub fn values(&self) -> Vec<u64> {
        let eased = ease_out_cubic(f64::from(self.step) / f64::from(self.steps));
        self.targets
            .iter()
            .map(|&target| (target as f64 * eased).round() as u64)
            .collect()
    }

    /// Advance one frame and return its values. Stays on the last frame once finished.
    pub fn tick(&mut self) -> Vec<u64> {
        if !self.is_finished() {
            self.step += 1;
        }
        self.values()
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}
