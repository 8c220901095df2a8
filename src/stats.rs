use serde::Serialize;

/// Counters accumulated by one backup walk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraversalStats {
    /// Files copied (or, on a dry run, files that would be copied).
    pub copied: u64,
    /// Files skipped plus pruned directories. Pruned contents are not counted.
    pub skipped: u64,
    /// Non-fatal errors.
    pub errors: u64,
    /// Bytes copied.
    pub size_copied: u64,
}

impl TraversalStats {
    pub fn add_copied(&mut self, bytes: u64) {
        self.copied += 1;
        self.size_copied += bytes;
    }

    pub fn add_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn add_error(&mut self) {
        self.errors += 1;
    }
}
