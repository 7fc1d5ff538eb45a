//! Chunked delivery of the rendered report
//!
//! This module provides:
//! - Line-preserving chunking under a size limit
//! - Sinks: chat webhook and stdout
//! - Best-effort dispatcher sending chunks in order

mod chunker;
mod sink;

pub use chunker::split_chunks;
pub use sink::{Sink, StdoutSink, WebhookSink};

use tracing::{debug, error};

/// Delivery counts for one dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    pub sent: usize,
    pub failed: usize,
}

impl DispatchSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Splits text into bounded chunks and hands each one to a sink
pub struct ChunkedDispatcher<S: Sink> {
    sink: S,
    max_chars: usize,
}

impl<S: Sink> ChunkedDispatcher<S> {
    pub fn new(sink: S, max_chars: usize) -> Self {
        Self { sink, max_chars }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Send every chunk of `text`; a failed chunk does not stop the rest
    pub async fn dispatch(&self, text: &str) -> DispatchSummary {
        let chunks = split_chunks(text, self.max_chars);
        let total = chunks.len();
        let mut summary = DispatchSummary::default();

        debug!("dispatching {} characters in {} chunk(s)", text.chars().count(), total);

        for (index, chunk) in chunks.iter().enumerate() {
            match self.sink.send(chunk).await {
                Ok(()) => {
                    summary.sent += 1;
                    debug!("chunk {}/{} delivered", index + 1, total);
                }
                Err(e) => {
                    summary.failed += 1;
                    error!("chunk {}/{} failed: {}", index + 1, total, e);
                }
            }
        }

        summary
    }
}
