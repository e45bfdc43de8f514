use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Page Stepping", inline)]
#[serde(default)]
/// Pacing of the page-by-page walk toward a requested page.
pub struct SequencerOptions {
    /// Delay between steps while far from the target (milliseconds).
    #[schemars(title = "Fast Step (ms)", range(min = 0, max = 1000))]
    pub fast_step_ms: u64,
    /// Delay between steps once close to the target (milliseconds).
    #[schemars(title = "Slow Step (ms)", range(min = 0, max = 2000))]
    pub slow_step_ms: u64,
    /// Distances strictly greater than this use the fast delay.
    #[schemars(title = "Fast Step Distance", range(min = 0, max = 32))]
    pub fast_step_distance: usize,
}

impl SequencerOptions {
    /// Delay to wait after a step taken at `distance` pages from the target.
    pub fn delay_for(&self, distance: usize) -> Duration {
        if distance > self.fast_step_distance {
            Duration::from_millis(self.fast_step_ms)
        } else {
            Duration::from_millis(self.slow_step_ms)
        }
    }
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            fast_step_ms: 50,
            slow_step_ms: 150,
            fast_step_distance: 2,
        }
    }
}
