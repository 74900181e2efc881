use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ResourceMetric {
    #[strum(serialize = "cpu")]
    Cpu,
    #[strum(serialize = "memory")]
    Memory,
}

// cpu is in MHz, memory in MiB.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resources {
    pub cpu: Option<u64>,
    pub memory: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    pub reserved: Option<Resources>,
    pub resources: Option<Resources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    pub reserved: Option<Resources>,
    pub resources: Option<Resources>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsFrame {
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,

    #[serde(rename = "CPUTicksConsumed", default)]
    pub cpu_ticks_consumed: Option<f64>,

    #[serde(rename = "Memory", default)]
    pub memory: Option<MemoryStats>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    #[serde(rename = "Used")]
    pub used: u64,
}

impl StatsFrame {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
