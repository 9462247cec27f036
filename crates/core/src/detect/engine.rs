// Dredge is an open source secret scanner for web archives.
// Copyright (C) 2024 Dredge ApS
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The minimal regex interface the detector needs, so that the engine is a
//! compile-time choice. The default engine is the `regex` crate, which
//! guarantees linear-time matching on adversarial inputs (very large HTML
//! documents, extremely long tokens). The `fancy-regex` feature swaps in a
//! backtracking engine for rule corpora that use backreferences or
//! look-around; none of the built-in rules do.

use crate::Error;

pub trait MatchEngine: Send + Sync + Sized + 'static {
    fn compile(pattern: &str) -> Result<Self, Error>;

    /// Whether `s` contains any match.
    fn is_match(&self, s: &str) -> bool;

    /// Half-open byte ranges of all non-overlapping matches.
    fn find_indices(&self, s: &str) -> Vec<(usize, usize)>;

    /// Texts of all capture groups of the first match, with the full match
    /// at index 0 and non-participating groups as empty strings. Empty if
    /// there is no match.
    fn find_submatches(&self, s: &str) -> Vec<String>;
}

#[cfg(not(feature = "fancy-regex"))]
pub type DefaultEngine = RegexEngine;

#[cfg(feature = "fancy-regex")]
pub type DefaultEngine = FancyEngine;

pub struct RegexEngine {
    regex: regex::Regex,
}

impl MatchEngine for RegexEngine {
    fn compile(pattern: &str) -> Result<Self, Error> {
        let regex = regex::Regex::new(pattern).map_err(|err| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        Ok(Self { regex })
    }

    fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s)
    }

    fn find_indices(&self, s: &str) -> Vec<(usize, usize)> {
        self.regex.find_iter(s).map(|m| (m.start(), m.end())).collect()
    }

    fn find_submatches(&self, s: &str) -> Vec<String> {
        match self.regex.captures(s) {
            Some(captures) => captures
                .iter()
                .map(|group| group.map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(feature = "fancy-regex")]
pub struct FancyEngine {
    regex: fancy_regex::Regex,
}

#[cfg(feature = "fancy-regex")]
impl MatchEngine for FancyEngine {
    fn compile(pattern: &str) -> Result<Self, Error> {
        let regex = fancy_regex::Regex::new(pattern).map_err(|err| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;

        Ok(Self { regex })
    }

    fn is_match(&self, s: &str) -> bool {
        self.regex.is_match(s).unwrap_or_else(|err| {
            tracing::warn!("regex runtime error: {err}");
            false
        })
    }

    fn find_indices(&self, s: &str) -> Vec<(usize, usize)> {
        self.regex
            .find_iter(s)
            .filter_map(|m| match m {
                Ok(m) => Some((m.start(), m.end())),
                Err(err) => {
                    tracing::warn!("regex runtime error: {err}");
                    None
                }
            })
            .collect()
    }

    fn find_submatches(&self, s: &str) -> Vec<String> {
        match self.regex.captures(s) {
            Ok(Some(captures)) => (0..captures.len())
                .map(|i| {
                    captures
                        .get(i)
                        .map(|m| m.as_str().to_string())
                        .unwrap_or_default()
                })
                .collect(),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("regex runtime error: {err}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_rejects_invalid_pattern() {
        assert!(DefaultEngine::compile("(unclosed").is_err());
    }

    #[test]
    fn find_indices_returns_all_matches() {
        let engine = DefaultEngine::compile("ab").unwrap();
        assert_eq!(engine.find_indices("ab ab ab"), vec![(0, 2), (3, 5), (6, 8)]);
    }

    #[test]
    fn submatches_include_full_match() {
        let engine = DefaultEngine::compile("a(b)(c)?").unwrap();

        assert_eq!(engine.find_submatches("ab"), vec!["ab", "b", ""]);
        assert_eq!(engine.find_submatches("abc"), vec!["abc", "b", "c"]);
        assert!(engine.find_submatches("xy").is_empty());
    }
}
