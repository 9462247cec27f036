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

//! Finding output. Workers emit concurrently, so every sink serializes on an
//! internal lock and writes whole lines.

use std::io::{self, Write};
use std::sync::Mutex;

use serde::Serialize;

use crate::detect::Finding;

pub trait FindingSink: Send + Sync {
    fn emit(&self, uri: &str, finding: &Finding, raw: &str) -> io::Result<()>;
}

/// One plain-text line per finding.
pub struct TextSink<W: Write + Send> {
    out: Mutex<W>,
}

impl TextSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> FindingSink for TextSink<W> {
    fn emit(&self, uri: &str, finding: &Finding, _raw: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap();

        writeln!(
            out,
            "{}:{}:{}: {} [{}]",
            uri,
            finding.location.start_line,
            finding.location.start_column,
            finding.secret,
            finding.rule_id,
        )
    }
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    secret: &'a str,
    rule: &'a str,
    uri: &'a str,
    line: usize,
    column: usize,
    context: &'a str,
}

/// One JSON object per line per finding.
pub struct JsonSink<W: Write + Send> {
    out: Mutex<W>,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> FindingSink for JsonSink<W> {
    fn emit(&self, uri: &str, finding: &Finding, raw: &str) -> io::Result<()> {
        let record = JsonFinding {
            secret: &finding.secret,
            rule: &finding.rule_id,
            uri,
            line: finding.location.start_line,
            column: finding.location.start_column,
            context: finding.location.line(raw),
        };

        let mut out = self.out.lock().unwrap();

        serde_json::to_writer(&mut *out, &record).map_err(io::Error::other)?;
        out.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::Locator;
    use std::sync::Arc;

    fn finding(raw: &str, start: usize, end: usize) -> Finding {
        Finding {
            rule_id: "github-pat".to_string(),
            description: "GitHub Personal Access Token".to_string(),
            secret: raw[start..end].to_string(),
            matched: raw[start..end].to_string(),
            location: Locator::new(raw).find(start, end),
        }
    }

    /// Test double writing into a shared buffer.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn text_line_contains_provenance() {
        let raw = "token: hunter2\n";
        let buf = SharedBuf::default();
        let sink = TextSink::new(buf.clone());

        sink.emit("https://example.com/", &finding(raw, 7, 14), raw)
            .unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(out, "https://example.com/:0:7: hunter2 [github-pat]\n");
    }

    #[test]
    fn json_is_one_parseable_object_per_line() {
        let raw = "first\ntoken: hunter2\n";
        let buf = SharedBuf::default();
        let sink = JsonSink::new(buf.clone());

        sink.emit("https://example.com/", &finding(raw, 13, 20), raw)
            .unwrap();

        let out = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(out.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();

        assert_eq!(value["secret"], "hunter2");
        assert_eq!(value["rule"], "github-pat");
        assert_eq!(value["uri"], "https://example.com/");
        assert_eq!(value["line"], 1);
        assert_eq!(value["column"], 7);
        assert_eq!(value["context"], "token: hunter2");
    }
}
