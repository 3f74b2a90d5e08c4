use std::path::PathBuf;
use std::sync::Arc;

/// Read/write buffer size for streaming entry contents.
pub const COPY_BUFFER_SIZE: usize = 8192;

#[derive(Clone, Default)]
pub struct ExtractOptions {
    /// Fixed denominator for percentage reporting, counted before the
    /// extraction starts. `None` degrades every progress event to 100.
    pub expected_total_entries: Option<usize>,
    pub on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

impl ExtractOptions {
    pub fn expected_total_entries(mut self, total: usize) -> Self {
        self.expected_total_entries = Some(total);
        self
    }

    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }
}

/// Progress snapshot emitted after each processed entry.
#[derive(Clone, Debug)]
pub struct Progress {
    pub entries_processed: usize,
    pub total_entries: Option<usize>,
    pub current_entry: Option<PathBuf>,
}

impl Progress {
    /// Percentage of entries processed, floored to an integer.
    ///
    /// An unknown or zero total reports 100 so that a run whose size probe
    /// failed still converges instead of dividing by zero.
    pub fn percent(&self) -> u8 {
        match self.total_entries {
            Some(total) if total > 0 => ((100 * self.entries_processed) / total).min(100) as u8,
            _ => 100,
        }
    }
}
