//! Timing probe for a single HTTP GET: time-to-first-byte, inter-chunk
//! arrival latency, and total transfer time.

pub mod body;
pub mod client;
pub mod error;
pub mod metrics;
pub mod report;
pub mod sampler;

pub use error::SampleError;
pub use sampler::{measure, SummaryReport, Target};
