use crate::classifier::{Classifier, EntryKind, FsEntry};
use crate::errors::BackupError;
use crate::ignore::GitignorePatterns;
use crate::reporting::{print_summary, write_backup_info, RunSummary};
use crate::rules::RuleSet;
use crate::stats::TraversalStats;
use crate::utils::{absolutize, copy_file_with_metadata};
use chrono::Local;
use std::fs::{self, DirEntry};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};

pub const DEFAULT_MAX_DEPTH: usize = 10;

#[derive(Debug, Clone)]
pub struct BackupConfig {
    pub source_dir: PathBuf,
    pub backup_dir: PathBuf,
    /// Classify and report without writing anything to the destination.
    pub dry_run: bool,
    /// Deepest directory level (root = 0) whose entries are visited.
    pub max_depth: usize,
    /// Write `backup_info.json` at the destination root.
    pub write_info: bool,
}

impl Default for BackupConfig {
    fn default() -> Self {
        BackupConfig {
            source_dir: PathBuf::from("."),
            backup_dir: PathBuf::from("./migration-backup"),
            dry_run: false,
            max_depth: DEFAULT_MAX_DEPTH,
            write_info: true,
        }
    }
}

/// Depth-first selective copy of one source tree into a destination root.
pub struct MigrationBackup {
    config: BackupConfig,
    classifier: Classifier,
    stats: TraversalStats,
}

impl MigrationBackup {
    pub fn new(config: BackupConfig, rules: RuleSet) -> Result<Self, BackupError> {
        let source_dir = absolutize(&config.source_dir)?;
        let backup_dir = absolutize(&config.backup_dir)?;
        Ok(MigrationBackup {
            config: BackupConfig {
                source_dir,
                backup_dir,
                ..config
            },
            classifier: Classifier::new(rules),
            stats: TraversalStats::default(),
        })
    }

    pub fn source_dir(&self) -> &Path {
        &self.config.source_dir
    }

    pub fn backup_dir(&self) -> &Path {
        &self.config.backup_dir
    }

    pub fn stats(&self) -> TraversalStats {
        self.stats
    }

    /// Runs the whole backup. Only setup failures are returned as errors;
    /// per-entry failures end up in the summary's error count.
    pub fn run(&mut self) -> Result<RunSummary, BackupError> {
        info!(
            "Starting migration prep backup from {} to {}",
            self.config.source_dir.display(),
            self.config.backup_dir.display()
        );

        let source_dir = self.config.source_dir.clone();
        if !source_dir.exists() {
            return Err(BackupError::SourceNotFound(source_dir));
        }
        if !source_dir.is_dir() {
            return Err(BackupError::SourceNotDirectory(source_dir));
        }
        self.config.source_dir = fs::canonicalize(&source_dir)?;

        if self.config.dry_run {
            info!("DRY RUN MODE - No files will be copied");
        } else {
            fs::create_dir_all(&self.config.backup_dir).map_err(|e| {
                BackupError::DestinationInit {
                    path: self.config.backup_dir.clone(),
                    message: e.to_string(),
                }
            })?;
        }
        if let Ok(resolved) = fs::canonicalize(&self.config.backup_dir) {
            self.config.backup_dir = resolved;
        }
        if self.config.backup_dir == self.config.source_dir {
            return Err(BackupError::SameSourceAndDestination(
                self.config.backup_dir.clone(),
            ));
        }

        self.stats = TraversalStats::default();
        let started_at = Local::now();
        let source_root = self.config.source_dir.clone();
        let backup_root = self.config.backup_dir.clone();
        self.backup_directory(&source_root, &backup_root, 0);
        let finished_at = Local::now();

        let summary = RunSummary::new(
            &self.config.source_dir,
            &self.config.backup_dir,
            self.config.dry_run,
            self.stats,
            started_at,
            finished_at,
        );

        if !self.config.dry_run && self.config.write_info {
            match write_backup_info(&summary, &self.config.backup_dir) {
                Ok(path) => debug!("Wrote backup info to {}", path.display()),
                Err(e) => error!("Could not create backup info file: {}", e),
            }
        }

        print_summary(&summary);
        Ok(summary)
    }

    /// Visits one directory level. `level` is 0 for the source root.
    pub fn backup_directory(&mut self, src_dir: &Path, dst_dir: &Path, level: usize) {
        if level > self.config.max_depth {
            warn!("Maximum recursion depth reached for {}", src_dir.display());
            return;
        }

        let entries = match fs::read_dir(src_dir) {
            Ok(entries) => entries,
            Err(e) => {
                error!("Error scanning directory {}: {}", src_dir.display(), e);
                self.stats.add_error();
                return;
            }
        };

        let gitignore = match GitignorePatterns::load(src_dir) {
            Ok(patterns) => patterns,
            Err(e) => {
                warn!("Could not read .gitignore from {}: {}", src_dir.display(), e);
                self.stats.add_error();
                GitignorePatterns::default()
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    error!("Error reading entry under {}: {}", src_dir.display(), e);
                    self.stats.add_error();
                    continue;
                }
            };

            if let Err(e) = self.process_entry(&entry, dst_dir, &gitignore, level) {
                let path = entry.path();
                if e.kind() == ErrorKind::PermissionDenied {
                    warn!("Permission denied: {}", path.display());
                } else {
                    error!("Error processing {}: {}", path.display(), e);
                }
                self.stats.add_error();
            }
        }
    }

    fn process_entry(
        &mut self,
        entry: &DirEntry,
        dst_dir: &Path,
        gitignore: &GitignorePatterns,
        level: usize,
    ) -> Result<(), io::Error> {
        let path = entry.path();
        let file_type = entry.file_type()?;
        let target_path = dst_dir.join(entry.file_name());

        if file_type.is_symlink() {
            return match fs::metadata(&path) {
                Ok(meta) if meta.is_file() => {
                    let file = FsEntry::new(path, &self.config.source_dir, EntryKind::Symlink);
                    self.handle_file(&file, &target_path, gitignore)
                }
                Ok(meta) if meta.is_dir() => {
                    debug!("Not following directory symlink: {}", path.display());
                    Ok(())
                }
                Ok(_) => {
                    debug!("Ignoring symlink to special file: {}", path.display());
                    Ok(())
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("Ignoring broken symlink: {}", path.display());
                    Ok(())
                }
                Err(e) => Err(e),
            };
        }

        if file_type.is_file() {
            let file = FsEntry::new(path, &self.config.source_dir, EntryKind::File);
            return self.handle_file(&file, &target_path, gitignore);
        }

        if file_type.is_dir() {
            let dir = FsEntry::new(path, &self.config.source_dir, EntryKind::Directory);
            if dir.path == self.config.backup_dir {
                info!("Skipping backup destination: {}", dir.path.display());
                self.stats.add_skipped();
            } else if self.classifier.should_skip_directory(&dir) {
                info!("Skipping directory: {}", dir.path.display());
                self.stats.add_skipped();
            } else {
                self.backup_directory(&dir.path, &target_path, level + 1);
            }
            return Ok(());
        }

        debug!("Ignoring special file: {}", path.display());
        Ok(())
    }

    fn handle_file(
        &mut self,
        file: &FsEntry,
        target_path: &Path,
        gitignore: &GitignorePatterns,
    ) -> Result<(), io::Error> {
        if self.classifier.should_skip_file(file, gitignore) {
            trace!("Skipping file: {}", file.relative_path);
            self.stats.add_skipped();
            return Ok(());
        }

        if self.config.dry_run {
            let size = fs::metadata(&file.path)?.len();
            info!("Would copy {} -> {}", file.path.display(), target_path.display());
            self.stats.add_copied(size);
            return Ok(());
        }

        match copy_file_with_metadata(&file.path, target_path) {
            Ok(bytes) => {
                debug!("Copied {} ({} bytes)", file.relative_path, bytes);
                self.stats.add_copied(bytes);
            }
            Err(e) => {
                error!(
                    "Failed to copy {} to {}: {}",
                    file.path.display(),
                    target_path.display(),
                    e
                );
                self.stats.add_error();
            }
        }
        Ok(())
    }
}

/// Runs a backup with the default rule set.
pub fn run_backup(config: BackupConfig) -> Result<RunSummary, BackupError> {
    let mut backup = MigrationBackup::new(config, RuleSet::default())?;
    backup.run()
}
