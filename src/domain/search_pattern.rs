use crate::shared::error::FsError;
use crate::shared::Result;

/// Maximum length of a single search pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// Whether enumeration descends into subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOption {
    #[default]
    TopDirectoryOnly,
    AllDirectories,
}

impl SearchOption {
    pub fn from_recursive(recursive: bool) -> Self {
        if recursive {
            SearchOption::AllDirectories
        } else {
            SearchOption::TopDirectoryOnly
        }
    }

    pub fn is_recursive(&self) -> bool {
        matches!(self, SearchOption::AllDirectories)
    }
}

/// Which entries an enumeration returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Files,
    Directories,
    All,
}

impl EntryKind {
    pub fn accepts(&self, is_directory: bool) -> bool {
        match self {
            EntryKind::Files => !is_directory,
            EntryKind::Directories => is_directory,
            EntryKind::All => true,
        }
    }
}

/// A file-name pattern used when enumerating directories.
///
/// `*` matches zero or more characters, `?` matches exactly one.
/// The pattern is matched against the entry name only, never the full path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPattern {
    original: String,
    matcher: PatternMatcher,
}

/// Pattern matcher types for efficient matching
#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternMatcher {
    /// "*" or "*.*"
    Any,
    /// No wildcards: "name.txt"
    Exact(String),
    /// "*suffix"
    Suffix(String),
    /// "prefix*"
    Prefix(String),
    /// Anything else, matched character by character
    Glob(Vec<char>),
}

impl SearchPattern {
    /// Parses and validates a search pattern.
    ///
    /// # Errors
    /// - Empty pattern or longer than 255 characters
    /// - Pattern containing a path separator or `..`
    pub fn new(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;
        Ok(Self {
            original: pattern.to_string(),
            matcher: compile_pattern(&normalize_case(pattern)),
        })
    }

    /// Pattern matching every name.
    pub fn any() -> Self {
        Self {
            original: "*".to_string(),
            matcher: PatternMatcher::Any,
        }
    }

    /// Parses `pattern` when present, otherwise matches everything.
    pub fn from_option(pattern: Option<&str>) -> Result<Self> {
        match pattern {
            Some(p) => Self::new(p),
            None => Ok(Self::any()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Checks whether an entry name matches this pattern.
    pub fn matches(&self, name: &str) -> bool {
        let name = normalize_case(name);
        match &self.matcher {
            PatternMatcher::Any => true,
            PatternMatcher::Exact(s) => name == *s,
            PatternMatcher::Suffix(suffix) => name.ends_with(suffix.as_str()),
            PatternMatcher::Prefix(prefix) => name.starts_with(prefix.as_str()),
            PatternMatcher::Glob(pattern) => {
                let name: Vec<char> = name.chars().collect();
                glob_match(pattern, &name)
            }
        }
    }
}

impl Default for SearchPattern {
    fn default() -> Self {
        Self::any()
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |reason: &str| FsError::InvalidSearchPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    if pattern.is_empty() {
        return Err(invalid("pattern cannot be empty"));
    }
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(invalid("pattern is longer than 255 characters"));
    }
    if pattern.contains('/') || pattern.contains('\\') {
        return Err(invalid("pattern must not contain a path separator"));
    }
    if pattern.contains("..") {
        return Err(invalid("pattern must not contain '..'"));
    }
    if pattern.contains('\0') {
        return Err(invalid("pattern must not contain NUL"));
    }
    Ok(())
}

#[cfg(windows)]
fn normalize_case(s: &str) -> String {
    s.to_ascii_lowercase()
}

#[cfg(not(windows))]
fn normalize_case(s: &str) -> String {
    s.to_string()
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    if pattern == "*" || pattern == "*.*" {
        return PatternMatcher::Any;
    }
    if pattern.contains('?') {
        return PatternMatcher::Glob(pattern.chars().collect());
    }

    match pattern.matches('*').count() {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 => {
            if let Some(stripped) = pattern.strip_prefix('*') {
                PatternMatcher::Suffix(stripped.to_string())
            } else if let Some(stripped) = pattern.strip_suffix('*') {
                PatternMatcher::Prefix(stripped.to_string())
            } else {
                PatternMatcher::Glob(pattern.chars().collect())
            }
        }
        _ => PatternMatcher::Glob(pattern.chars().collect()),
    }
}

/// Wildcard match with single-star backtracking.
fn glob_match(pattern: &[char], name: &[char]) -> bool {
    let (mut p, mut n) = (0, 0);
    let mut star: Option<usize> = None;
    let mut star_n = 0;

    while n < name.len() {
        if p < pattern.len() && (pattern[p] == '?' || pattern[p] == name[n]) {
            p += 1;
            n += 1;
        } else if p < pattern.len() && pattern[p] == '*' {
            star = Some(p);
            star_n = n;
            p += 1;
        } else if let Some(s) = star {
            p = s + 1;
            star_n += 1;
            n = star_n;
        } else {
            return false;
        }
    }

    while p < pattern.len() && pattern[p] == '*' {
        p += 1;
    }
    p == pattern.len()
}
