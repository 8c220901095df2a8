use crate::errors::BackupError;
use crate::pattern::GlobPattern;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, trace};

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Patterns from one directory's `.gitignore`.
///
/// The set applies only to the direct children of the directory it was
/// loaded from. Negation (`!`) and trailing-slash markers carry no special
/// meaning; every non-blank, non-comment line is a plain glob.
#[derive(Debug, Clone, Default)]
pub struct GitignorePatterns {
    patterns: Vec<GlobPattern>,
}

impl GitignorePatterns {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: Vec<String> = Vec::new();
        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if !seen.iter().any(|s| s == line) {
                seen.push(line.to_string());
            }
        }

        GitignorePatterns {
            patterns: seen.iter().map(|p| GlobPattern::new(p)).collect(),
        }
    }

    pub fn parse(content: &str) -> Self {
        GitignorePatterns::new(content.lines())
    }

    /// Reads `<directory>/.gitignore`. A missing file yields an empty set.
    pub fn load(directory: &Path) -> Result<Self, BackupError> {
        let gitignore_file = directory.join(GITIGNORE_FILE);
        match fs::read_to_string(&gitignore_file) {
            Ok(content) => {
                let patterns = GitignorePatterns::parse(&content);
                debug!(
                    "Loaded {} gitignore patterns from {}",
                    patterns.len(),
                    gitignore_file.display()
                );
                Ok(patterns)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(GitignorePatterns::default()),
            Err(e) => Err(BackupError::IoError(format!(
                "{}: {}",
                gitignore_file.display(),
                e
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True when any pattern matches the bare name or the source-relative path.
    pub fn matches(&self, name: &str, relative_path: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            let hit = pattern.matches(relative_path) || pattern.matches(name);
            if hit {
                trace!("Gitignore pattern '{}' matched {}", pattern.as_str(), relative_path);
            }
            hit
        })
    }
}
