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

//! Enclosure verification. A secret that shows up glued into a longer token
//! (`abcghp_…def`) is most likely a false positive; a real credential is
//! delimited by quotes, whitespace or punctuation on both sides.

use std::sync::LazyLock;

/// Code points that cannot be part of a secret: the Unicode control, format,
/// mark, separator and enclosing/terminating punctuation categories. Dashes
/// (Pd) and symbols (S*) are deliberately not delimiters, since they appear
/// inside real tokens.
static DELIMITER: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"[\p{Cc}\p{Cf}\p{Co}\p{Mc}\p{Me}\p{Mn}\p{Pc}\p{Pe}\p{Pf}\p{Pi}\p{Po}\p{Ps}\p{Zl}\p{Zp}\p{Zs}]",
    )
    .unwrap()
});

fn is_delimiter(c: char) -> bool {
    DELIMITER.is_match(c.encode_utf8(&mut [0; 4]))
}

/// True if `secret` (after trimming surrounding delimiter code points)
/// occurs in `line` with a delimiter immediately before AND after it. Start
/// and end of line count as delimiters.
pub fn is_enclosed(line: &str, secret: &str) -> bool {
    let secret = secret.trim_matches(is_delimiter);
    if secret.is_empty() {
        return false;
    }

    let mut from = 0;

    while let Some(pos) = line[from..].find(secret) {
        let at = from + pos;
        let end = at + secret.len();

        let before_ok = line[..at].chars().next_back().map_or(true, is_delimiter);
        let after_ok = line[end..].chars().next().map_or(true, is_delimiter);

        if before_ok && after_ok {
            return true;
        }

        // advance past the rejected occurrence
        from = at + secret.chars().next().map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters() {
        for c in [' ', '\t', '"', '\'', '(', ')', ',', ';', ':', '.', '_'] {
            assert!(is_delimiter(c), "{c:?} should delimit");
        }

        for c in ['a', 'Z', '0', '-', '+', '=', '$', '<', '|'] {
            assert!(!is_delimiter(c), "{c:?} should not delimit");
        }
    }

    #[test]
    fn enclosed_by_quotes_and_whitespace() {
        assert!(is_enclosed(r#"token = "ghp_abc123""#, "ghp_abc123"));
        assert!(is_enclosed("token: ghp_abc123", "ghp_abc123"));
        assert!(is_enclosed("ghp_abc123", "ghp_abc123"));
    }

    #[test]
    fn line_bounds_count_as_delimiters() {
        assert!(is_enclosed("ghp_abc123 trailing", "ghp_abc123"));
        assert!(is_enclosed("leading ghp_abc123", "ghp_abc123"));
    }

    #[test]
    fn glued_occurrences_are_rejected() {
        assert!(!is_enclosed("abcghp_abc123def", "ghp_abc123"));
        assert!(!is_enclosed("xghp_abc123", "ghp_abc123"));
        assert!(!is_enclosed("ghp_abc123x", "ghp_abc123"));
    }

    #[test]
    fn scan_advances_past_rejected_occurrences() {
        // first occurrence is glued, second is properly enclosed
        assert!(is_enclosed("xxghp_abc123xx ghp_abc123", "ghp_abc123"));
    }

    #[test]
    fn secret_is_trimmed_before_the_scan() {
        assert!(is_enclosed("token: ghp_abc123", "ghp_abc123 "));
        assert!(is_enclosed("token: ghp_abc123", "\"ghp_abc123\""));
    }

    #[test]
    fn all_delimiter_secret_is_never_enclosed() {
        assert!(!is_enclosed("a line", "  \"\"  "));
    }
}
