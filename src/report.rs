//! Human-readable console output. Nothing here feeds back into the
//! measurement; swap it out freely.

use chrono::{DateTime, Local};

use crate::body::StreamEnd;
use crate::error::SampleError;
use crate::sampler::{SummaryReport, Target};

pub fn banner() {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   ⏱   HTTP GET LATENCY PROBE                     ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();
}

pub fn target(target: &Target) {
    println!("🎯 {} → {}", target.name, target.url);
}

pub fn started(at: DateTime<Local>) {
    println!("Started at {at}");
}

pub fn finished(at: DateTime<Local>) {
    println!("Finished at {at}");
}

pub fn request_failed(err: &SampleError) {
    eprintln!("❌ {err}");
}

// ─── Read loop ───────────────────────────────────────────────────

pub fn first_bytes(name: &str, bytes: u64, first_byte_ns: i64, response_ns: i64) {
    println!("{name}: request start to first {bytes} bytes in [{first_byte_ns}]");
    println!("{name}: response latency to first {bytes} bytes from request end: [{response_ns}]");
}

pub fn progress(bytes: u64, since_start_ns: i64, latency_ns: i64) {
    println!("[{bytes:>16}] bytes in [{since_start_ns:>16}] w/ latency [{latency_ns:>16}]");
}

pub fn stream_ended(name: &str, end: &StreamEnd) {
    match end {
        StreamEnd::Eof => println!("{name}: {end} received, exiting"),
        StreamEnd::Error(_) => println!("⚠️  {name}: {end}, exiting"),
    }
}

// ─── Summary ─────────────────────────────────────────────────────

pub fn summary(report: &SummaryReport) {
    println!();
    match &report.stats {
        Some(s) => println!(
            "min: {} | avg: {} | max: {}  ({} samples, ns)",
            s.min, s.avg, s.max, s.count
        ),
        None => println!("no full chunks read, statistics skipped"),
    }
    println!(
        "{} {} [{:.2}s]",
        report.target,
        report.bytes_transferred,
        report.elapsed.as_secs_f64()
    );
    println!("It only took me: {:?}", report.elapsed);
}
