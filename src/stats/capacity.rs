use tracing::debug;

use crate::client::types::{Node, ResourceMetric, Resources, Task};

pub trait CapacitySource {
    fn reserved(&self, metric: ResourceMetric) -> Option<u64>;

    fn total(&self, metric: ResourceMetric) -> Option<u64>;
}

fn field(resources: &Option<Resources>, metric: ResourceMetric) -> Option<u64> {
    let resources = resources.as_ref()?;
    match metric {
        ResourceMetric::Cpu => resources.cpu,
        ResourceMetric::Memory => resources.memory,
    }
}

impl CapacitySource for Node {
    fn reserved(&self, metric: ResourceMetric) -> Option<u64> {
        field(&self.reserved, metric)
    }

    fn total(&self, metric: ResourceMetric) -> Option<u64> {
        field(&self.resources, metric)
    }
}

impl CapacitySource for Task {
    fn reserved(&self, metric: ResourceMetric) -> Option<u64> {
        field(&self.reserved, metric)
    }

    fn total(&self, metric: ResourceMetric) -> Option<u64> {
        field(&self.resources, metric)
    }
}

// cpu in MHz, memory in MiB. Zero means no source had a value; derived
// utilization for that metric reads as zero rather than dividing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCapacity {
    pub cpu: u64,
    pub memory: u64,
}

pub fn resolve(entity: &dyn CapacitySource, metric: ResourceMetric) -> u64 {
    let capacity = entity
        .reserved(metric)
        .or_else(|| entity.total(metric))
        .unwrap_or(0);

    if capacity == 0 {
        debug!(metric = %metric, "no capacity configured, utilization will read as zero");
    }

    capacity
}

pub fn resolve_all(entity: &dyn CapacitySource) -> ResolvedCapacity {
    ResolvedCapacity {
        cpu: resolve(entity, ResourceMetric::Cpu),
        memory: resolve(entity, ResourceMetric::Memory),
    }
}
