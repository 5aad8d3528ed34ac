//! Glob pattern compilation.
//!
//! A [`PatternSet`] turns a list of shell-style glob patterns into a single
//! compiled predicate over forward-slash relative paths. All patterns are
//! combined into one alternation and compiled once, so matching a path is a
//! single regex search regardless of how many patterns the set holds.

use regex::Regex;

/// A list of glob patterns compiled into one matching predicate.
///
/// An empty pattern list matches nothing. Callers that want "no patterns"
/// to mean "no restriction" must handle that case themselves (the `init`
/// workflow does this by defaulting the include list to `**/*`).
#[derive(Debug, Clone)]
pub struct PatternSet {
    regex: Option<Regex>,
}

impl PatternSet {
    /// Compiles `patterns` into a single predicate.
    ///
    /// Every input string is a valid pattern: glob metacharacters (`**/`,
    /// `**`, `*`, `?`, trailing `/`, leading `/`) are translated and all
    /// other characters match literally, so there is no error case.
    #[must_use]
    pub fn compile(patterns: &[String]) -> Self {
        if patterns.is_empty() {
            return Self { regex: None };
        }

        let fragments: Vec<String> = patterns
            .iter()
            .map(|pattern| translate(pattern))
            .map(|frag| format!("(?:{frag}$)"))
            .collect();

        Self {
            regex: Regex::new(&fragments.join("|")).ok(),
        }
    }

    /// Returns true if `path` matches any pattern in the set.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(path))
    }

    /// Returns true if the set was compiled from an empty pattern list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }
}

/// Translates one glob pattern into a regex fragment.
///
/// The substitutions run in a fixed order: each step must not re-match text
/// produced by an earlier one (expanding `*` before `**/` would corrupt the
/// recursive glob).
fn translate(pattern: &str) -> String {
    let mut reg = regex::escape(pattern);

    // `**/` matches zero or more whole path segments.
    reg = reg.replace(r"\*\*/", "(?:.*/)?");
    // Remaining `**` matches across segment boundaries.
    reg = reg.replace(r"\*\*", ".*");
    // `*` stays within one segment.
    reg = reg.replace(r"\*", "[^/]*");
    reg = reg.replace(r"\?", ".");

    // A trailing slash names a directory and everything beneath it.
    if pattern.ends_with('/') {
        reg.push_str(".*");
    }

    if pattern.starts_with('/') {
        // Root-relative: anchor at the start of the path.
        reg = format!("^{}", &reg[1..]);
    } else {
        // Unanchored patterns match at any depth, like gitignore entries.
        reg = format!("(?:^|.*/){reg}");
    }

    reg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> PatternSet {
        let owned: Vec<String> = patterns.iter().map(|s| (*s).to_string()).collect();
        PatternSet::compile(&owned)
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let ps = set(&[]);
        assert!(ps.is_empty());
        assert!(!ps.matches("anything"));
        assert!(!ps.matches(""));
    }

    #[test]
    fn test_literal_pattern() {
        let ps = set(&["package.json"]);
        assert!(ps.matches("package.json"));
        assert!(ps.matches("sub/package.json"));
        assert!(!ps.matches("package.json.bak"));
        assert!(!ps.matches("mypackage.json"));
    }

    #[test]
    fn test_single_segment_glob() {
        let ps = set(&["*.ts"]);
        assert!(ps.matches("index.ts"));
        assert!(ps.matches("src/index.ts"));
        // `*` must not cross a slash
        let ps = set(&["src/*.ts"]);
        assert!(ps.matches("src/index.ts"));
        assert!(!ps.matches("src/deep/index.ts"));
    }

    #[test]
    fn test_recursive_glob() {
        let ps = set(&["src/**/*.ts"]);
        // `**/` may match zero segments
        assert!(ps.matches("src/index.ts"));
        assert!(ps.matches("src/a/b/index.ts"));
        assert!(!ps.matches("lib/index.ts"));
    }

    #[test]
    fn test_double_star_without_slash() {
        let ps = set(&["src/**"]);
        assert!(ps.matches("src/index.ts"));
        assert!(ps.matches("src/a/b/c"));
    }

    #[test]
    fn test_question_mark() {
        let ps = set(&["file?.txt"]);
        assert!(ps.matches("file1.txt"));
        assert!(ps.matches("fileX.txt"));
        assert!(!ps.matches("file12.txt"));
        assert!(!ps.matches("file.txt"));
    }

    #[test]
    fn test_directory_pattern_any_depth() {
        let ps = set(&["node_modules/"]);
        assert!(ps.matches("node_modules/foo.js"));
        assert!(ps.matches("vendor/node_modules/bar.js"));
        assert!(!ps.matches("README.md"));
    }

    #[test]
    fn test_anchored_pattern() {
        let ps = set(&["/dist/"]);
        assert!(ps.matches("dist/bundle.js"));
        assert!(!ps.matches("packages/dist/bundle.js"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let ps = set(&["a+b(c).txt"]);
        assert!(ps.matches("a+b(c).txt"));
        assert!(!ps.matches("aab(c)Xtxt"));
    }

    #[test]
    fn test_multiple_patterns_one_predicate() {
        let ps = set(&["**/*.test.ts", "node_modules/"]);
        assert!(ps.matches("src/index.test.ts"));
        assert!(ps.matches("index.test.ts"));
        assert!(ps.matches("node_modules/foo.js"));
        assert!(!ps.matches("src/index.ts"));
    }
}
