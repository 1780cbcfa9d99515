use crate::domain::link::DEFAULT_HOST;
use std::time::Duration;

/// Simulated latency of the generation step, matching the demo pages.
pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_millis(1500);

/// Settings shared by every demo wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Domain the mock links are issued under.
    pub host: String,
    pub generation_delay: Duration,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            generation_delay: DEFAULT_GENERATION_DELAY,
        }
    }
}

impl DemoConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_delay_ms(mut self, millis: u64) -> Self {
        self.generation_delay = Duration::from_millis(millis);
        self
    }
}
