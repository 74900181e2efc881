pub mod client;
pub mod config;
pub mod error;
pub mod stats;

pub use client::source::FrameSource;
pub use client::types::{MemoryStats, Node, ResourceMetric, Resources, StatsFrame, Task};
pub use config::Config;
pub use error::{Result, StatsError};
pub use stats::capacity::{resolve, resolve_all, CapacitySource, ResolvedCapacity};
pub use stats::poller::StatsPoller;
pub use stats::rolling_buffer::RollingBuffer;
pub use stats::tracker::{Sample, StatsTracker};
