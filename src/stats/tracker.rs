use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::client::types::StatsFrame;
use crate::error::{Result, StatsError};
use crate::stats::capacity::{resolve_all, CapacitySource};
use crate::stats::rolling_buffer::RollingBuffer;

const BYTES_PER_MIB: f64 = 1_048_576.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub used: Option<u64>,
    pub percent: Option<f64>,
}

impl Sample {
    fn gap(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            used: None,
            percent: None,
        }
    }
}

// A zero numerator and a zero (unknown) denominator both report 0, never
// None: idle usage and missing capacity are indistinguishable in the
// output. Only pause() produces None fields.
fn percent(numerator: f64, denominator: f64) -> f64 {
    if numerator == 0.0 || denominator == 0.0 {
        return 0.0;
    }
    numerator / denominator
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    reserved_cpu: u64,
    reserved_memory: u64,
    cpu: RollingBuffer<Sample>,
    memory: RollingBuffer<Sample>,
}

impl StatsTracker {
    pub fn new(entity: &dyn CapacitySource, buffer_capacity: usize) -> Result<Self> {
        let capacity = resolve_all(entity);

        debug!(
            reserved_cpu_mhz = capacity.cpu,
            reserved_memory_mib = capacity.memory,
            buffer_capacity,
            "tracking resource usage"
        );

        Ok(Self {
            reserved_cpu: capacity.cpu,
            reserved_memory: capacity.memory,
            cpu: RollingBuffer::new(buffer_capacity)?,
            memory: RollingBuffer::new(buffer_capacity)?,
        })
    }

    pub fn append(&mut self, frame: &StatsFrame) -> Result<()> {
        let millis = frame.timestamp.div_euclid(1_000_000);
        let timestamp = DateTime::from_timestamp_millis(millis).ok_or_else(|| {
            StatsError::MalformedFrame(format!("timestamp {} is out of range", frame.timestamp))
        })?;

        // CPU ticks are tolerated when absent or NaN; a missing memory
        // payload rejects the whole frame before either buffer is touched.
        let memory_used = frame
            .memory
            .as_ref()
            .ok_or_else(|| StatsError::MalformedFrame("missing memory usage".to_string()))?
            .used;

        let cpu_used = frame
            .cpu_ticks_consumed
            .map_or(0, |ticks| ticks.floor() as u64);

        self.cpu.push(Sample {
            timestamp,
            used: Some(cpu_used),
            percent: Some(percent(cpu_used as f64, self.reserved_cpu as f64)),
        });

        self.memory.push(Sample {
            timestamp,
            used: Some(memory_used),
            percent: Some(percent(
                memory_used as f64 / BYTES_PER_MIB,
                self.reserved_memory as f64,
            )),
        });

        Ok(())
    }

    pub fn pause(&mut self) {
        let now = Utc::now();
        self.memory.push(Sample::gap(now));
        self.cpu.push(Sample::gap(now));
    }

    pub fn cpu_series(&self) -> Vec<Sample> {
        self.cpu.to_vec()
    }

    pub fn memory_series(&self) -> Vec<Sample> {
        self.memory.to_vec()
    }

    pub fn reserved_cpu(&self) -> u64 {
        self.reserved_cpu
    }

    pub fn reserved_memory(&self) -> u64 {
        self.reserved_memory
    }
}
