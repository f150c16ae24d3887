//! Shell-style name patterns.
//!
//! Patterns follow `fnmatch` rules: `*` matches any run of characters, `?`
//! a single character, `[seq]` one character from the set and `[!seq]` one
//! character outside it. Matching is anchored at both ends and
//! case-sensitive. A `[` without a closing `]` is a literal.

use regex::Regex;

use crate::error::ConfigurationError;

#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] when a character class
    /// cannot be compiled, e.g. a reversed range like `[z-a]`.
    ///
    /// # Example
    ///
    /// ```
    /// use json_tb_bench::glob::Pattern;
    ///
    /// let p = Pattern::new("*tb_boards*").unwrap();
    /// assert!(p.matches("tb_boards"));
    /// assert!(p.matches("lib_tb_boards_vunit"));
    /// assert!(!p.matches("tb_suite"));
    /// ```
    pub fn new(pattern: &str) -> Result<Self, ConfigurationError> {
        let regex = Regex::new(&translate(pattern)).map_err(|e| {
            ConfigurationError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: e.to_string(),
            }
        })?;
        Ok(Pattern {
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the names in `names` that match, in their original order.
    pub fn filter<'a, I>(&self, names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().filter(|n| self.matches(n)).collect()
    }
}

/// Translates a shell pattern into an anchored regular expression.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let n = chars.len();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < n {
        let c = chars[i];
        i += 1;
        match c {
            '*' => {
                while i < n && chars[i] == '*' {
                    i += 1;
                }
                out.push_str(".*");
            }
            '?' => out.push('.'),
            '[' => {
                let mut j = i;
                if j < n && chars[j] == '!' {
                    j += 1;
                }
                if j < n && chars[j] == ']' {
                    j += 1;
                }
                while j < n && chars[j] != ']' {
                    j += 1;
                }
                if j >= n {
                    out.push_str(r"\[");
                    continue;
                }
                let mut body = &chars[i..j];
                out.push('[');
                if body.first() == Some(&'!') {
                    out.push('^');
                    body = &body[1..];
                }
                for &b in body {
                    if matches!(b, '\\' | '[' | ']' | '&' | '~' | '^') {
                        out.push('\\');
                    }
                    out.push(b);
                }
                out.push(']');
                i = j + 1;
            }
            _ => out.push_str(&regex::escape(c.encode_utf8(&mut [0u8; 4]))),
        }
    }

    out.push('$');
    out
}
