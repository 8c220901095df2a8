use crate::pattern::GlobPattern;
use std::collections::HashSet;
use tracing::debug;

/// File names that are always kept, even when a skip or gitignore rule matches.
pub const KEEP_PATTERNS: &[&str] = &[
    // Shell and tool configuration
    ".*rc",
    ".*profile",
    ".*_profile",
    ".*_history",
    ".env*",
    ".environment",
    "environment.*",
    "*.conf",
    "*.config",
    "config.*",
    "configuration.*",
    ".gitconfig",
    ".gitignore_global",
    ".ssh/config",
    // Build manifests
    "requirements.txt",
    "Pipfile",
    "pyproject.toml",
    "package.json",
    "Cargo.toml",
    "mix.exs",
    "build.zig",
    "Makefile",
    "CMakeLists.txt",
    "Dockerfile*",
    "flake.nix",
    "shell.nix",
    "default.nix",
    // Documentation
    "*.md",
    "*.rst",
    "*.txt",
    "LICENSE*",
    "README*",
    // Frontend tooling
    "tsconfig.json",
    "webpack.config.js",
    "vite.config.*",
];

/// Dot-directories and dotfiles kept by exact name or by relative-path prefix.
pub const KEEP_DOTFILES: &[&str] = &[
    ".ssh",
    ".gnupg",
    ".gitconfig",
    ".vimrc",
    ".nvim",
    ".bashrc",
    ".zshrc",
    ".profile",
    ".bash_profile",
    ".tmux.conf",
    ".screenrc",
    ".inputrc",
    ".config",
    ".local/share",
    ".mozilla",
    ".thunderbird",
    ".aws",
    ".docker",
    ".kube",
    ".terraform.d",
    ".cargo/config.toml",
    ".rustup/settings.toml",
    ".npmrc",
    ".yarnrc",
    ".pip",
    ".poetry",
    ".mix",
    ".hex",
    ".iex.exs",
    ".emacs.d",
    ".doom.d",
    ".spacemacs.d",
];

/// Directory names whose whole subtree is pruned.
pub const SKIP_DIRS: &[&str] = &[
    // Python
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".venv",
    "venv",
    "env",
    ".env",
    "virtualenv",
    ".ropeproject",
    // Node.js
    "node_modules",
    ".npm",
    ".yarn",
    // Build output
    "dist",
    "build",
    "target",
    "cmake-build-debug",
    "cmake-build-release",
    "zig-cache",
    "zig-out",
    "_build",
    "deps",
    "_deps",
    // Version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    // JVM
    ".gradle",
    ".m2",
    ".ivy2",
    // Rust
    ".cargo/registry",
    ".cargo/git",
    // Haskell, R, Elixir
    ".stack-work",
    ".Rproj.user",
    ".elixir_ls",
    ".mix",
    // Coverage
    "coverage",
    ".coverage",
    ".nyc_output",
    // Scratch
    "logs",
    "*.log",
    "tmp",
    "temp",
    ".tmp",
    ".temp",
];

/// Compiled artifacts, archives, OS cruft and lock files.
pub const SKIP_PATTERNS: &[&str] = &[
    // Compiled objects
    "*.pyc",
    "*.pyo",
    "*.pyd",
    "*.so",
    "*.dll",
    "*.dylib",
    "*.o",
    "*.obj",
    "*.class",
    "*.jar",
    "*.war",
    "*.beam",
    "*.plt",
    // Installers and archives
    "*.exe",
    "*.app",
    "*.dmg",
    "*.pkg",
    "*.deb",
    "*.rpm",
    "*.zip",
    "*.tar.gz",
    "*.tar.bz2",
    "*.7z",
    "*.rar",
    // Editor and OS cruft
    "*.swp",
    "*.swo",
    "*~",
    ".DS_Store",
    "Thumbs.db",
    "*.tmp",
    "*.temp",
    "*.cache",
    "*.log",
    "core",
    "core.*",
    "*.core",
    // Lock files
    "*.lock",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    // Minified bundles
    "*.min.js",
    "*.min.css",
    "*.map",
    "*.min.js.map",
    "*.min.css.map",
];

/// The static classification tables, compiled once per run.
#[derive(Debug, Clone)]
pub struct RuleSet {
    keep_patterns: Vec<GlobPattern>,
    keep_dotfiles: Vec<String>,
    skip_dirs: HashSet<String>,
    skip_patterns: Vec<GlobPattern>,
}

impl RuleSet {
    pub fn new(
        keep_patterns: &[&str],
        keep_dotfiles: &[&str],
        skip_dirs: &[&str],
        skip_patterns: &[&str],
    ) -> Self {
        debug!(
            "Building rule set: {} keep patterns, {} keep dotfiles, {} skip dirs, {} skip patterns",
            keep_patterns.len(),
            keep_dotfiles.len(),
            skip_dirs.len(),
            skip_patterns.len()
        );

        RuleSet {
            keep_patterns: keep_patterns.iter().map(|p| GlobPattern::new(p)).collect(),
            keep_dotfiles: keep_dotfiles.iter().map(|s| s.to_string()).collect(),
            skip_dirs: skip_dirs.iter().map(|s| s.to_string()).collect(),
            skip_patterns: skip_patterns.iter().map(|p| GlobPattern::new(p)).collect(),
        }
    }

    pub fn keep_patterns(&self) -> &[GlobPattern] {
        &self.keep_patterns
    }

    pub fn keep_dotfiles(&self) -> &[String] {
        &self.keep_dotfiles
    }

    pub fn is_skip_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }

    pub fn skip_patterns(&self) -> &[GlobPattern] {
        &self.skip_patterns
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::new(KEEP_PATTERNS, KEEP_DOTFILES, SKIP_DIRS, SKIP_PATTERNS)
    }
}
