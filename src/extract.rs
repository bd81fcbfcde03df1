//! Numeric token extraction from marker lines.

use regex::Regex;

// Non-greedy so that "(a) (b)" yields two groups.
const PAREN_GROUP_RE: &str = r"[(](.*?)[)]";

/// Finds the contents of parenthesized groups in a line.
#[derive(Debug, Clone)]
pub struct ParenExtractor {
    re: Regex,
}

impl ParenExtractor {
    pub fn new() -> Self {
        // Constant pattern, always valid.
        let re = Regex::new(PAREN_GROUP_RE).unwrap();
        Self { re }
    }

    /// Contents of the last `(...)` group, if any.
    pub fn last_group<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.re
            .captures_iter(line)
            .last()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for ParenExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Text after the last ':' (the whole line when there is none).
pub fn after_last_colon(line: &str) -> &str {
    match line.rfind(':') {
        Some(idx) => &line[idx + 1..],
        None => line,
    }
}

/// Parse a token the way the log writers emit them: padded decimal text.
pub fn parse_number(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn last_paren_group_wins() {
        let ex = ParenExtractor::new();
        let line = "TIME in foo (rank 3) run copy in (0.125000)";
        assert_eq!(ex.last_group(line), Some("0.125000"));
        assert_eq!(ex.last_group("no groups here"), None);
        assert_eq!(ex.last_group("empty ()"), Some(""));
    }

    #[test]
    fn last_colon_wins() {
        assert_eq!(after_last_colon("[CCPL <da_demo>] total time: 12:  3.5\n"), "  3.5\n");
        assert_eq!(after_last_colon("4.0"), "4.0");
        assert_eq!(after_last_colon("trailing:"), "");
    }

    #[test]
    fn numbers_tolerate_padding() {
        assert_eq!(parse_number(" 3.5\n"), Some(3.5));
        assert_eq!(parse_number("-1"), Some(-1.0));
        assert_eq!(parse_number("1e-3"), Some(0.001));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
    }
}
