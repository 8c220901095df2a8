use migprep::classifier::{Classifier, EntryKind, FsEntry};
use migprep::ignore::GitignorePatterns;
use migprep::rules::{RuleSet, KEEP_PATTERNS, SKIP_DIRS};
use std::path::Path;

const ROOT: &str = "/home/user";

fn file(relative: &str) -> FsEntry {
    FsEntry::new(Path::new(ROOT).join(relative), Path::new(ROOT), EntryKind::File)
}

fn dir(relative: &str) -> FsEntry {
    FsEntry::new(Path::new(ROOT).join(relative), Path::new(ROOT), EntryKind::Directory)
}

fn no_gitignore() -> GitignorePatterns {
    GitignorePatterns::default()
}

#[test]
fn test_entry_name_and_relative_path() {
    let entry = file(".config/nvim/init.lua");
    assert_eq!(entry.name, "init.lua");
    assert_eq!(entry.relative_path, ".config/nvim/init.lua");
    assert_eq!(entry.kind, EntryKind::File);
}

#[test]
fn test_keep_pattern_beats_skip_pattern() {
    let classifier = Classifier::default();

    // `config.*` keeps it although `*.lock` would skip it.
    assert!(!classifier.should_skip_file(&file("config.lock"), &no_gitignore()));
    // `*.txt` keeps it although `*.log`-style rules do not apply.
    assert!(!classifier.should_skip_file(&file("requirements.txt"), &no_gitignore()));
}

#[test]
fn test_keep_pattern_beats_gitignore() {
    let classifier = Classifier::default();
    let gitignore = GitignorePatterns::new(["*.md", "*.txt", ".env*"]);

    assert!(!classifier.should_skip_file(&file("README.md"), &gitignore));
    assert!(!classifier.should_skip_file(&file("notes.txt"), &gitignore));
    assert!(!classifier.should_skip_file(&file(".env.local"), &gitignore));
}

#[test]
fn test_every_keep_pattern_name_survives_catch_all_gitignore() {
    let classifier = Classifier::default();
    let gitignore = GitignorePatterns::new(["*"]);

    for name in [
        ".bashrc",
        ".bash_profile",
        ".zsh_history",
        "app.conf",
        "Cargo.toml",
        "Dockerfile.dev",
        "LICENSE-MIT",
        "vite.config.ts",
    ] {
        assert!(
            !classifier.should_skip_file(&file(name), &gitignore),
            "{} should be kept",
            name
        );
    }
    assert!(classifier.should_skip_file(&file("main.rs"), &gitignore));
}

#[test]
fn test_gitignore_matches_name_and_relative_path() {
    let classifier = Classifier::default();
    let gitignore = GitignorePatterns::new(["secrets.dat", "project/*.db"]);

    assert!(classifier.should_skip_file(&file("secrets.dat"), &gitignore));
    assert!(classifier.should_skip_file(&file("project/local.db"), &gitignore));
    assert!(!classifier.should_skip_file(&file("other/local.db"), &gitignore));
}

#[test]
fn test_skip_patterns_apply_to_files() {
    let classifier = Classifier::default();

    for name in ["app.log", "module.pyc", ".DS_Store", "bundle.min.js", "yarn.lock", "notes.txt~"] {
        assert!(
            classifier.should_skip_file(&file(name), &no_gitignore()),
            "{} should be skipped",
            name
        );
    }
    for name in ["main.rs", ".env.production", "photo.jpg"] {
        assert!(
            !classifier.should_skip_file(&file(name), &no_gitignore()),
            "{} should be kept",
            name
        );
    }
}

#[test]
fn test_every_skip_dir_is_pruned() {
    let classifier = Classifier::default();

    for name in SKIP_DIRS.iter().filter(|n| !n.contains('/') && **n != ".mix") {
        assert!(
            classifier.should_skip_directory(&dir(&format!("project/{}", name))),
            "{} should be pruned",
            name
        );
    }
}

#[test]
fn test_skip_patterns_apply_to_directories() {
    let classifier = Classifier::default();

    assert!(classifier.should_skip_directory(&dir("downloads/archive.zip")));
    assert!(classifier.should_skip_directory(&dir("work/scratch.tmp")));
    assert!(!classifier.should_skip_directory(&dir("work/src")));
}

#[test]
fn test_keep_dotfile_beats_skip_rules() {
    let classifier = Classifier::default();

    assert!(!classifier.should_skip_directory(&dir(".ssh")));
    assert!(!classifier.should_skip_directory(&dir(".gnupg")));
    // `.mix` is both a keep-dotfile and a skip-dir.
    assert!(!classifier.should_skip_directory(&dir(".mix")));
    // `build` is a skip-dir, but the path starts with `.config`.
    assert!(!classifier.should_skip_directory(&dir(".config/build")));
    assert!(!classifier.should_skip_directory(&dir(".local/share/node_modules")));
}

#[test]
fn test_keep_dotfile_prefix_applies_only_from_source_root() {
    let classifier = Classifier::default();

    // Name equality still keeps a nested `.ssh`.
    assert!(!classifier.should_skip_directory(&dir("projects/.ssh")));
    // A nested `build` under a non-kept parent is pruned.
    assert!(classifier.should_skip_directory(&dir("projects/.config-old/build")));
}

#[test]
fn test_env_directory_is_pruned_but_env_file_is_kept() {
    let classifier = Classifier::default();

    assert!(classifier.should_skip_directory(&dir("project/.env")));
    assert!(!classifier.should_skip_file(&file("project/.env"), &no_gitignore()));
}

#[test]
fn test_classification_is_repeatable() {
    let classifier = Classifier::default();
    let gitignore = GitignorePatterns::new(["*.dat"]);
    let entry = file("data/cache.dat");

    let first = classifier.should_skip_file(&entry, &gitignore);
    let second = classifier.should_skip_file(&entry, &gitignore);
    assert_eq!(first, second);
    assert!(first);
}

#[test]
fn test_custom_rule_set() {
    let rules = RuleSet::new(&["*.keep"], &[".vault"], &["junk"], &["*.bin"]);
    let classifier = Classifier::new(rules);

    assert!(!classifier.should_skip_file(&file("a.keep"), &GitignorePatterns::new(["*"])));
    assert!(classifier.should_skip_file(&file("a.bin"), &no_gitignore()));
    assert!(!classifier.should_skip_file(&file("a.log"), &no_gitignore()));
    assert!(classifier.should_skip_directory(&dir("junk")));
    assert!(!classifier.should_skip_directory(&dir(".vault/junk")));
    assert!(!classifier.should_skip_directory(&dir("node_modules")));
}

#[test]
fn test_default_rule_set_exposes_tables() {
    let rules = RuleSet::default();

    assert_eq!(rules.keep_patterns().len(), KEEP_PATTERNS.len());
    assert!(rules.is_skip_dir("node_modules"));
    assert!(!rules.is_skip_dir("src"));
    assert!(rules.keep_dotfiles().iter().any(|k| k == ".ssh"));
}
