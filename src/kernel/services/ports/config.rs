use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Longest pending text the input surface accepts.
    pub max_input_len: usize,
    /// Debounce window for formula output; 0 flushes on the next tick.
    pub output_delay_ms: u64,
    pub commit_on_space: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_input_len: 30,
            output_delay_ms: 0,
            commit_on_space: true,
        }
    }
}

impl EditorConfig {
    pub fn output_delay(&self) -> Duration {
        Duration::from_millis(self.output_delay_ms)
    }
}
