//! Per-vehicle altitude trail.

use swarm_core::constants::HISTORY_CAPACITY;
use swarm_core::events::AltitudeSample;
use swarm_core::ring::RingBuffer;

/// Strict FIFO of the most recent `HISTORY_CAPACITY` altitude samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryBuffer {
    samples: RingBuffer<AltitudeSample, HISTORY_CAPACITY>,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sample, evicting the oldest when full.
    pub fn append(&mut self, sample: AltitudeSample) {
        self.samples.push(sample);
    }

    /// Samples oldest first. Does not mutate the buffer.
    pub fn snapshot(&self) -> Vec<AltitudeSample> {
        self.samples.to_vec()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&AltitudeSample> {
        self.samples.latest()
    }
}
