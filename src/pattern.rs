//! Shell-style glob matching for bare names and source-relative paths.
//!
//! Matching is anchored at both ends and case-sensitive. `*` and `?` cross
//! `/` and do not treat a leading dot specially, so `*rc` matches `.zshrc`
//! and `*.log` matches `logs/app.log`.

use glob::{MatchOptions, Pattern};
use tracing::trace;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
enum Matcher {
    Glob(Pattern),
    Literal,
}

/// A compiled glob. Syntax `glob` still rejects after translation falls back
/// to literal string equality.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    matcher: Matcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Self {
        let matcher = match Pattern::new(&to_glob_syntax(pattern)) {
            Ok(compiled) => Matcher::Glob(compiled),
            Err(e) => {
                trace!("Treating pattern '{}' as literal: {}", pattern, e);
                Matcher::Literal
            }
        };

        GlobPattern {
            source: pattern.to_string(),
            matcher,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, name_or_path: &str) -> bool {
        match &self.matcher {
            Matcher::Glob(compiled) => compiled.matches_with(name_or_path, MATCH_OPTIONS),
            Matcher::Literal => self.source == name_or_path,
        }
    }
}

/// Rewrites shell-glob constructs that `glob` rejects: runs of `*` collapse
/// to one `*`, and a `[` with no closing `]` becomes a literal `[`.
fn to_glob_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut translated = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                translated.push('*');
                while i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                }
            }
            '[' => {
                let mut j = i + 1;
                if j < chars.len() && chars[j] == '!' {
                    j += 1;
                }
                if j < chars.len() && chars[j] == ']' {
                    j += 1;
                }
                while j < chars.len() && chars[j] != ']' {
                    j += 1;
                }
                if j >= chars.len() {
                    translated.push_str("[[]");
                } else {
                    translated.extend(&chars[i..=j]);
                    i = j;
                }
            }
            c => translated.push(c),
        }
        i += 1;
    }
    translated
}

/// Matches `name_or_path` against a single glob pattern.
pub fn matches(name_or_path: &str, pattern: &str) -> bool {
    GlobPattern::new(pattern).matches(name_or_path)
}

/// True when any of `patterns` matches `value`.
pub fn any_match<'a, I>(value: &str, patterns: I) -> bool
where
    I: IntoIterator<Item = &'a GlobPattern>,
{
    patterns.into_iter().any(|pattern| pattern.matches(value))
}
