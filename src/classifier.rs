use crate::ignore::GitignorePatterns;
use crate::pattern::any_match;
use crate::rules::RuleSet;
use crate::utils::relative_path_string;
use std::path::{Path, PathBuf};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

/// One directory entry as seen during a single classification.
#[derive(Debug, Clone)]
pub struct FsEntry {
    pub name: String,
    pub path: PathBuf,
    pub relative_path: String,
    pub kind: EntryKind,
}

impl FsEntry {
    pub fn new(path: PathBuf, source_root: &Path, kind: EntryKind) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let relative_path = relative_path_string(&path, source_root);
        FsEntry {
            name,
            path,
            relative_path,
            kind,
        }
    }
}

/// Keep/skip decisions over a [`RuleSet`]. Both checks are pure.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: RuleSet,
}

impl Classifier {
    pub fn new(rules: RuleSet) -> Self {
        Classifier { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Keep-patterns win over gitignore, which wins over skip-patterns.
    pub fn should_skip_file(&self, file: &FsEntry, gitignore: &GitignorePatterns) -> bool {
        if any_match(&file.name, self.rules.keep_patterns()) {
            trace!("Keeping important file: {}", file.relative_path);
            return false;
        }

        if gitignore.matches(&file.name, &file.relative_path) {
            trace!("Gitignored: {}", file.relative_path);
            return true;
        }

        any_match(&file.name, self.rules.skip_patterns())
    }

    /// Skipping a directory prunes its whole subtree.
    pub fn should_skip_directory(&self, dir: &FsEntry) -> bool {
        let keep = self
            .rules
            .keep_dotfiles()
            .iter()
            .any(|k| dir.relative_path.starts_with(k.as_str()) || dir.name == *k);
        if keep {
            trace!("Keeping dotfile directory: {}", dir.relative_path);
            return false;
        }

        if self.rules.is_skip_dir(&dir.name) {
            return true;
        }

        any_match(&dir.name, self.rules.skip_patterns())
    }
}
