//! Output regions
//!
//! A list render only ever replaces the whole content of one named region.
//! [`OutputSink`] abstracts where that content ends up.

use dashmap::DashMap;

/// Destination for rendered region content.
pub trait OutputSink: Send + Sync {
    /// Replaces the entire content of `region`.
    fn replace(&self, region: &str, content: String);
}

impl<F> OutputSink for F
where
    F: Fn(&str, String) + Send + Sync,
{
    fn replace(&self, region: &str, content: String) {
        self(region, content)
    }
}

/// Keeps the latest content of every region in memory.
///
/// # Example
///
/// ```
/// use salas_lib::sink::{MemorySink, OutputSink};
///
/// let sink = MemorySink::new();
/// sink.replace("salas-lista", "<p>Cargando salas...</p>".to_string());
/// assert_eq!(sink.writes("salas-lista"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    regions: DashMap<String, Region>,
}

#[derive(Debug, Default)]
struct Region {
    content: String,
    writes: usize,
}

impl MemorySink {
    /// Creates a sink with no regions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current content of `region`, if it was ever written.
    pub fn content(&self, region: &str) -> Option<String> {
        self.regions.get(region).map(|r| r.content.clone())
    }

    /// Returns how many times `region` has been replaced.
    pub fn writes(&self, region: &str) -> usize {
        self.regions.get(region).map(|r| r.writes).unwrap_or(0)
    }

    /// Names of every region written so far.
    pub fn regions(&self) -> Vec<String> {
        self.regions.iter().map(|e| e.key().clone()).collect()
    }
}

impl OutputSink for MemorySink {
    fn replace(&self, region: &str, content: String) {
        let mut entry = self.regions.entry(region.to_string()).or_default();
        entry.content = content;
        entry.writes += 1;
    }
}
