use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use reqwest::Client;
use serde::Serialize;
use tokio::io::AsyncRead;
use tokio_stream::StreamExt;
use tokio_util::io::StreamReader;

use crate::body::{read_chunk, StreamEnd, CHUNK_SIZE};
use crate::error::SampleError;
use crate::metrics::{InterArrivalStats, Timings};
use crate::report;

// ─── Configuration ───────────────────────────────────────────────

/// Print a progress line on every Nth inter-chunk read.
pub const PROGRESS_EVERY: u64 = 10;

// ─── Public types ────────────────────────────────────────────────

/// What to probe. Built once at startup and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Target {
    pub name: String,
    pub url: String,
}

impl Target {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Result of one completed measurement.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Display name of the probed target
    pub target: String,
    /// HTTP status of the response (non-2xx bodies are measured too)
    pub status: u16,
    /// Every byte read, including the final partial chunk
    pub bytes_transferred: u64,
    /// Wall time from just before the request to the end of the summary
    pub elapsed: Duration,
    /// Time from just before the request to the first full chunk (ns)
    pub first_byte_latency_ns: Option<i64>,
    /// Time from response headers to the first full chunk (ns)
    pub response_latency_ns: Option<i64>,
    /// `None` when no full chunk was read
    pub stats: Option<InterArrivalStats>,
    /// The raw timing sequence the stats were reduced from (ns)
    pub timings: Vec<i64>,
    pub end: StreamEnd,
}

/// Monotonic reference points taken around the request.
#[derive(Debug, Clone, Copy)]
pub struct Marks {
    /// Start of the whole measurement
    pub start: Instant,
    /// Taken right before the GET was sent
    pub before_request: Instant,
    /// Taken right after response headers arrived
    pub request_end: Instant,
}

/// Everything the read loop gathered.
#[derive(Debug, Clone)]
pub struct Drain {
    pub bytes: u64,
    pub timings: Timings,
    pub first_byte_latency_ns: Option<i64>,
    pub response_latency_ns: Option<i64>,
    pub end: StreamEnd,
}

// ─── Public entry point ──────────────────────────────────────────

/// Issue one GET against `target` and time how its body arrives.
///
/// A transport failure before headers is printed and returned as
/// [`SampleError::Request`]; nothing is retried. Once headers are in,
/// the body is read in [`CHUNK_SIZE`] pieces until EOF or a mid-stream
/// error, and the result is always a [`SummaryReport`].
pub async fn measure(client: &Client, target: &Target) -> Result<SummaryReport, SampleError> {
    let start = Instant::now();
    report::started(Local::now());

    let before_request = Instant::now();

    let response = match client.get(&target.url).send().await {
        Ok(r) => r,
        Err(source) => {
            let err = SampleError::Request {
                target: target.name.clone(),
                source,
            };
            tracing::warn!(target_name = %target.name, error = %err, "request failed");
            report::request_failed(&err);
            return Err(err);
        }
    };
    let request_end = Instant::now();

    let status = response.status();
    tracing::debug!(target_name = %target.name, %status, "response headers received");

    // The body is owned here; dropping the reader releases the connection
    // on every exit from the loop.
    let stream = response.bytes_stream().map(|r| r.map_err(io::Error::other));
    let mut body = Box::pin(StreamReader::new(stream));

    let marks = Marks {
        start,
        before_request,
        request_end,
    };
    let drained = drain(&mut body, &target.name, marks).await;
    drop(body);

    let stats = drained.timings.stats();
    let summary = SummaryReport {
        target: target.name.clone(),
        status: status.as_u16(),
        bytes_transferred: drained.bytes,
        elapsed: start.elapsed(),
        first_byte_latency_ns: drained.first_byte_latency_ns,
        response_latency_ns: drained.response_latency_ns,
        stats,
        timings: drained.timings.into_vec(),
        end: drained.end,
    };
    report::summary(&summary);

    Ok(summary)
}

// ─── Read loop ───────────────────────────────────────────────────

/// Read `body` to the end in fixed-size chunks, timing every full chunk.
///
/// Only a short read or an error ends the loop; there is no iteration cap.
pub async fn drain<R>(body: &mut R, name: &str, marks: Marks) -> Drain
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut timings = Timings::new();
    let mut bytes: u64 = 0;
    let mut first_byte_latency_ns = None;
    let mut response_latency_ns = None;
    let mut last_read = marks.before_request;

    let mut i: u64 = 0;
    let end = loop {
        let read = read_chunk(&mut *body, &mut buf).await;
        bytes += read.bytes as u64;

        if let Some(end) = read.end {
            tracing::debug!(iteration = i, bytes, %end, "read loop finished");
            report::stream_ended(name, &end);
            break end;
        }

        let now = Instant::now();
        if i == 0 {
            let first_byte = nanos_between(last_read, now);
            let latency = nanos_between(marks.request_end, now);
            timings.push(latency);
            first_byte_latency_ns = Some(first_byte);
            response_latency_ns = Some(latency);
            report::first_bytes(name, bytes, first_byte, latency);
        } else {
            let latency = nanos_between(last_read, now);
            timings.push(latency);
            tracing::trace!(iteration = i, bytes, latency_ns = latency, "chunk read");
            if i % PROGRESS_EVERY == 0 {
                report::progress(bytes, nanos_between(marks.start, now), latency);
            }
        }

        last_read = Instant::now();
        i += 1;
    };

    Drain {
        bytes,
        timings,
        first_byte_latency_ns,
        response_latency_ns,
        end,
    }
}

fn nanos_between(earlier: Instant, later: Instant) -> i64 {
    i64::try_from(later.saturating_duration_since(earlier).as_nanos()).unwrap_or(i64::MAX)
}
