//! Process-wide diagnostic log buffer.
//!
//! The chat surface exposes recent diagnostics to the user on demand, so
//! every [`clog!`](crate::clog) call is kept in a fixed-capacity rolling
//! buffer alongside the normal `tracing` output. The buffer is append-only
//! with oldest-entry eviction and is never persisted.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, OnceLock};

use chrono::Local;

/// Maximum number of entries retained in the rolling buffer.
pub const LOG_BUFFER_CAPACITY: usize = 100;

/// A single captured diagnostic line.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Local wall-clock time the entry was recorded.
    pub timestamp: String,
    /// Space-joined JSON serialization of the logged values.
    pub data: String,
}

/// Fixed-capacity rolling buffer of diagnostic entries.
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one entry, evicting the oldest when over capacity.
    ///
    /// Append and eviction happen in one step so the length invariant holds
    /// at every point other code can observe the buffer.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the retained entries, oldest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

fn global_buffer() -> MutexGuard<'static, LogBuffer> {
    static BUFFER: OnceLock<Mutex<LogBuffer>> = OnceLock::new();
    let buffer = BUFFER.get_or_init(|| Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    match buffer.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Record one diagnostic line made of already-serialized parts.
///
/// Prefer the [`clog!`](crate::clog) macro, which serializes its arguments.
pub fn record(parts: &[String]) {
    if parts.is_empty() {
        return;
    }
    let data = parts.join(" ");
    tracing::debug!(target: "causerie::clog", "{data}");
    global_buffer().push(LogEntry {
        timestamp: Local::now().format("%H:%M:%S").to_string(),
        data,
    });
}

/// Snapshot of the process-wide buffer, oldest entry first.
pub fn last_logs() -> Vec<LogEntry> {
    global_buffer().snapshot()
}

/// Serialize values into the rolling diagnostic buffer.
///
/// Mirrors a console-log call: each argument is JSON-serialized and the
/// results are joined with single spaces.
#[macro_export]
macro_rules! clog {
    ($($arg:expr),+ $(,)?) => {
        $crate::utils::logging::record(&[
            $(::serde_json::to_string(&$arg).unwrap_or_else(|_| String::from("null"))),+
        ])
    };
}

/// Install the default tracing subscriber for interactive runs.
///
/// Filtering follows `RUST_LOG`; repeat calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
