use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_interval")]
    pub polling_interval: Duration,

    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            polling_interval: default_interval(),
            buffer_size: default_buffer_size(),
        }
    }
}

fn default_interval() -> Duration {
    Duration::from_secs(1)
}

fn default_buffer_size() -> usize {
    300
}
