pub mod stats;

pub use stats::InterArrivalStats;

/// Nanosecond timing sequence gathered by the read loop.
///
/// Entry 0 is the latency from response headers to the first full chunk;
/// every later entry is the gap since the previous full chunk. Only the
/// read loop appends; everything after it reads.
#[derive(Debug, Clone, Default)]
pub struct Timings {
    samples: Vec<i64>,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, nanos: i64) {
        self.samples.push(nanos);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.samples
    }

    /// Reduce to min/avg/max, or `None` when nothing was recorded.
    pub fn stats(&self) -> Option<InterArrivalStats> {
        InterArrivalStats::from_samples(&self.samples)
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.samples
    }
}
