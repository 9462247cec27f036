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

use std::sync::LazyLock;

use dashmap::DashMap;

/// Results are memoized across all scans. The map is append-only.
static IS_TEXT_CACHE: LazyLock<DashMap<String, bool>> = LazyLock::new(DashMap::new);

/// MIME types whose payload is textual even though they do not live under
/// `text/`. Each entry maps a type to its parent in the taxonomy; a type is
/// textual iff walking the chain reaches `text/plain`.
static PARENTS: &[(&str, &str)] = &[
    ("application/json", "text/plain"),
    ("application/xml", "text/plain"),
    ("application/javascript", "text/plain"),
    ("application/x-javascript", "application/javascript"),
    ("application/ecmascript", "application/javascript"),
    ("application/x-ndjson", "application/json"),
    ("application/jsonlines", "application/x-ndjson"),
    ("application/x-www-form-urlencoded", "text/plain"),
    ("application/x-httpd-php", "text/plain"),
    ("application/x-sh", "text/plain"),
    ("application/x-perl", "text/plain"),
    ("application/sql", "text/plain"),
    ("application/graphql", "text/plain"),
    ("application/yaml", "text/plain"),
    ("application/x-yaml", "application/yaml"),
    ("application/toml", "text/plain"),
    ("message/rfc822", "text/plain"),
];

/// Returns true if the given MIME type descends from `text/plain`.
pub fn is_text(mime: &str) -> bool {
    let essence = essence(mime);

    if let Some(cached) = IS_TEXT_CACHE.get(&essence) {
        return *cached;
    }

    let result = is_text_uncached(&essence);

    IS_TEXT_CACHE.insert(essence, result);
    result
}

/// Strip any `;`-parameter suffix, lowercase and trim.
fn essence(mime: &str) -> String {
    mime.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

fn is_text_uncached(essence: &str) -> bool {
    if essence.starts_with("text/") {
        return true;
    }

    let mut current = essence.to_string();

    loop {
        if current == "text/plain" {
            return true;
        }

        match parent(&current) {
            Some(parent) => current = parent.to_string(),
            None => return false,
        }
    }
}

fn parent(mime: &str) -> Option<&'static str> {
    if let Some((_, parent)) = PARENTS.iter().find(|(m, _)| *m == mime) {
        return Some(parent);
    }

    // Structured-syntax suffixes (RFC 6839).
    if mime.ends_with("+xml") && mime != "application/xml" {
        return Some("application/xml");
    }
    if mime.ends_with("+json") && mime != "application/json" {
        return Some("application/json");
    }

    None
}
