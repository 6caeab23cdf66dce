use std::fmt;

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt};

// ─── Configuration ───────────────────────────────────────────────

/// Bytes requested per body read (one Ethernet MTU of payload).
pub const CHUNK_SIZE: usize = 1500;

// ─── Public types ────────────────────────────────────────────────

/// Why the read loop stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum StreamEnd {
    /// The server finished the body.
    Eof,
    /// The transport failed mid-body.
    Error(String),
}

impl fmt::Display for StreamEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eof => f.write_str("EOF"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}

/// Outcome of one bounded read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkRead {
    /// Bytes copied this call, including a trailing partial read.
    pub bytes: usize,
    /// `None` when `buf` was filled completely.
    pub end: Option<StreamEnd>,
}

// ─── Read primitive ──────────────────────────────────────────────

/// Reads until `buf` is full, the reader hits EOF, or it errors.
///
/// The contents of `buf` are scratch and get overwritten on every call.
/// Bytes copied before an error are still reported.
pub async fn read_chunk<R>(reader: &mut R, buf: &mut [u8]) -> ChunkRead
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]).await {
            Ok(0) => {
                return ChunkRead {
                    bytes: filled,
                    end: Some(StreamEnd::Eof),
                }
            }
            Ok(n) => filled += n,
            Err(e) => {
                return ChunkRead {
                    bytes: filled,
                    end: Some(StreamEnd::Error(e.to_string())),
                }
            }
        }
    }

    ChunkRead {
        bytes: filled,
        end: None,
    }
}
