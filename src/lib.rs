pub mod backup;
pub mod classifier;
pub mod errors;
pub mod ignore;
pub mod logger;
pub mod pattern;
pub mod reporting;
pub mod rules;
pub mod stats;
pub mod utils;

pub use backup::{run_backup, BackupConfig, MigrationBackup};
pub use classifier::{Classifier, EntryKind, FsEntry};
pub use errors::BackupError;
pub use ignore::GitignorePatterns;
pub use reporting::RunSummary;
pub use rules::RuleSet;
pub use stats::TraversalStats;
