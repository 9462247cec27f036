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

//! Streaming pull-parser for WARC (ISO 28500) archives.
//!
//! The parser never buffers more than a single record header. Record content
//! is exposed to the visitor as a bounded [`Read`] that is only valid for the
//! duration of the visit; whatever the visitor leaves unread is drained
//! before the traversal advances to the next record.

use std::collections::HashMap;
use std::io::{self, BufRead, BufReader, Read};
use std::ops::ControlFlow;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[from] io::Error),

    #[error("unknown record version [version={0}]")]
    MalformedVersion(String),

    #[error("record header line exceeds buffer size")]
    OversizedHeader,

    #[error("read record header")]
    MalformedHeader(#[source] io::Error),

    #[error("could not parse content length [value={0}]")]
    MalformedLength(String),

    #[error("non-empty record boundary [boundary={0}]")]
    MalformedBoundary(String),

    #[error("parse HTTP header")]
    Http(#[source] io::Error),

    #[error("record visitor")]
    Visitor(#[source] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

// Sized so that a typical response body fits into a single refill.
const BUFFER_SIZE: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    WarcInfo,
    Request,
    Response,
    Metadata,
    Resource,
    Revisit,
    Conversion,
    Continuation,
    Unknown,
}

impl RecordType {
    fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "warcinfo" => Self::WarcInfo,
            "request" => Self::Request,
            "response" => Self::Response,
            "metadata" => Self::Metadata,
            "resource" => Self::Resource,
            "revisit" => Self::Revisit,
            "conversion" => Self::Conversion,
            "continuation" => Self::Continuation,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WarcInfo => "warcinfo",
            Self::Request => "request",
            Self::Response => "response",
            Self::Metadata => "metadata",
            Self::Resource => "resource",
            Self::Revisit => "revisit",
            Self::Conversion => "conversion",
            Self::Continuation => "continuation",
            Self::Unknown => "unknown",
        }
    }
}

/// A single WARC record.
///
/// The record implements [`Read`] for its content block. The content is
/// bounded by the declared `content-length` and, for `application/http`
/// records, includes the embedded HTTP header that was peeled off to
/// determine [`Record::http_content_type`].
pub struct Record<'a, R: Read> {
    pub warc_type: RecordType,
    pub target_uri: String,
    pub identified_payload_type: Option<String>,
    pub http_content_type: Option<String>,
    content: io::Chain<io::Cursor<Vec<u8>>, io::Take<&'a mut BufReader<R>>>,
}

impl<R: Read> Read for Record<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.content.read(buf)
    }
}

/// Traverse all records in the stream, calling `visit` for each one.
///
/// Returning `ControlFlow::Break(())` from the visitor stops the traversal
/// without an error. Visitor errors are propagated as [`Error::Visitor`].
pub fn traverse<R, F>(reader: R, mut visit: F) -> Result<()>
where
    R: Read,
    F: FnMut(&mut Record<'_, R>) -> io::Result<ControlFlow<()>>,
{
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, reader);

    loop {
        let Some(header) = read_warc_header(&mut reader)? else {
            return Ok(());
        };

        let length = header
            .get("content-length")
            .map(String::as_str)
            .unwrap_or("");
        let length = length
            .parse::<u64>()
            .map_err(|_| Error::MalformedLength(length.to_string()))?;

        let mut bounded = (&mut reader).take(length);
        let mut peeled = Vec::new();
        let mut http_content_type = None;

        if header
            .get("content-type")
            .is_some_and(|v| v.starts_with("application/http"))
        {
            http_content_type = read_http_header(&mut bounded, &mut peeled).map_err(Error::Http)?;
        }

        let mut record = Record {
            warc_type: header
                .get("warc-type")
                .map(|t| RecordType::parse(t))
                .unwrap_or(RecordType::Unknown),
            target_uri: header.get("warc-target-uri").cloned().unwrap_or_default(),
            identified_payload_type: header.get("warc-identified-payload-type").cloned(),
            http_content_type,
            content: io::Cursor::new(peeled).chain(bounded),
        };

        match visit(&mut record).map_err(Error::Visitor)? {
            ControlFlow::Break(()) => return Ok(()),
            ControlFlow::Continue(()) => {}
        }

        // The visitor is not required to consume the content.
        io::copy(&mut record.content, &mut io::sink())?;

        for _ in 0..2 {
            if let Some(boundary) = read_line(&mut reader)? {
                if !boundary.is_empty() {
                    return Err(Error::MalformedBoundary(boundary));
                }
            }
        }
    }
}

/// Read the version line and header block of the next record. Returns `None`
/// on a clean end of stream.
fn read_warc_header(
    reader: &mut BufReader<impl Read>,
) -> Result<Option<HashMap<String, String>>> {
    let Some(version) = read_line(reader)? else {
        return Ok(None);
    };

    if !version.starts_with("WARC/") {
        return Err(Error::MalformedVersion(version));
    }

    let mut header = HashMap::new();

    loop {
        let line = read_line(reader)
            .map_err(|err| match err {
                Error::Io(io) => Error::MalformedHeader(io),
                other => other,
            })?
            .ok_or_else(|| {
                Error::MalformedHeader(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "stream ended inside record header",
                ))
            })?;

        if line.is_empty() {
            break;
        }

        if let Some((key, value)) = line.split_once(':') {
            header.insert(key.trim().to_ascii_lowercase(), value.trim().to_string());
        }
    }

    Ok(Some(header))
}

/// Read the embedded HTTP header from the bounded content reader, copying
/// every consumed byte into `scratch` so that the full content block can be
/// re-assembled for the visitor. Returns the HTTP `content-type`, if any.
fn read_http_header<R: BufRead>(
    content: &mut R,
    scratch: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    let mut content_type = None;
    let mut status_line = true;

    loop {
        let start = scratch.len();
        if content.read_until(b'\n', scratch)? == 0 {
            break;
        }

        let line = trim_line_ending(&scratch[start..]);

        if status_line {
            status_line = false;
            continue;
        }

        if line.is_empty() {
            break;
        }

        if let Some(colon) = line.iter().position(|&b| b == b':') {
            let key = String::from_utf8_lossy(&line[..colon]);
            if key.trim().eq_ignore_ascii_case("content-type") {
                let value = String::from_utf8_lossy(&line[colon + 1..]);
                content_type = Some(value.trim().to_string());
            }
        }
    }

    Ok(content_type)
}

/// Read a single line, tolerating both CRLF and bare LF endings. Returns
/// `None` at end of stream and [`Error::OversizedHeader`] for lines that do
/// not fit the buffer.
fn read_line(reader: &mut BufReader<impl Read>) -> Result<Option<String>> {
    let mut line = Vec::new();
    let n = (&mut *reader)
        .take(BUFFER_SIZE as u64 + 1)
        .read_until(b'\n', &mut line)?;

    if n == 0 {
        return Ok(None);
    }

    if line.len() > BUFFER_SIZE {
        return Err(Error::OversizedHeader);
    }

    Ok(Some(
        String::from_utf8_lossy(trim_line_ending(&line)).into_owned(),
    ))
}

fn trim_line_ending(mut line: &[u8]) -> &[u8] {
    if line.last() == Some(&b'\n') {
        line = &line[..line.len() - 1];
    }
    if line.last() == Some(&b'\r') {
        line = &line[..line.len() - 1];
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn response_record(uri: &str, payload_type: Option<&str>, body: &str) -> Vec<u8> {
        let http = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n\r\n{body}"
        );

        let mut record = String::new();
        record.push_str("WARC/1.0\r\n");
        record.push_str("WARC-Type: response\r\n");
        record.push_str(&format!("WARC-Target-URI: {uri}\r\n"));
        if let Some(payload_type) = payload_type {
            record.push_str(&format!("WARC-Identified-Payload-Type: {payload_type}\r\n"));
        }
        record.push_str("Content-Type: application/http; msgtype=response\r\n");
        record.push_str(&format!("Content-Length: {}\r\n", http.len()));
        record.push_str("\r\n");
        record.push_str(&http);
        record.push_str("\r\n\r\n");

        record.into_bytes()
    }

    fn request_record(uri: &str, body: &str) -> Vec<u8> {
        let mut record = String::new();
        record.push_str("WARC/1.0\r\n");
        record.push_str("WARC-Type: request\r\n");
        record.push_str(&format!("WARC-Target-URI: {uri}\r\n"));
        record.push_str(&format!("Content-Length: {}\r\n", body.len()));
        record.push_str("\r\n");
        record.push_str(body);
        record.push_str("\r\n\r\n");

        record.into_bytes()
    }

    #[test]
    fn it_works() {
        let mut raw = response_record(
            "http://0575ls.cn/news-52300.htm",
            Some("text/html"),
            "<html>hello</html>",
        );
        raw.extend(request_record("http://0575ls.cn/news-52300.htm", "GET /"));

        let mut visited = Vec::new();

        traverse(&raw[..], |record| {
            let mut content = String::new();
            record.read_to_string(&mut content)?;

            visited.push((
                record.warc_type,
                record.target_uri.clone(),
                record.identified_payload_type.clone(),
                record.http_content_type.clone(),
                content,
            ));

            Ok(ControlFlow::Continue(()))
        })
        .unwrap();

        assert_eq!(visited.len(), 2);

        let (warc_type, uri, payload_type, http_content_type, content) = &visited[0];
        assert_eq!(*warc_type, RecordType::Response);
        assert_eq!(uri, "http://0575ls.cn/news-52300.htm");
        assert_eq!(payload_type.as_deref(), Some("text/html"));
        assert_eq!(http_content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert!(content.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(content.ends_with("<html>hello</html>"));

        let (warc_type, _, payload_type, http_content_type, content) = &visited[1];
        assert_eq!(*warc_type, RecordType::Request);
        assert_eq!(*payload_type, None);
        assert_eq!(*http_content_type, None);
        assert_eq!(content, "GET /");
    }

    #[test]
    fn unread_content_is_drained() {
        let mut raw = response_record("https://a.com", None, "first body");
        raw.extend(response_record("https://b.com", None, "second body"));

        let mut uris = Vec::new();

        traverse(&raw[..], |record| {
            uris.push(record.target_uri.clone());
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();

        assert_eq!(uris, vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn break_stops_traversal() {
        let mut raw = response_record("https://a.com", None, "first body");
        raw.extend(response_record("https://b.com", None, "second body"));

        let mut visits = 0;

        traverse(&raw[..], |_record| {
            visits += 1;
            Ok(ControlFlow::Break(()))
        })
        .unwrap();

        assert_eq!(visits, 1);
    }

    #[test]
    fn visitor_error_propagates() {
        let raw = response_record("https://a.com", None, "body");

        let res = traverse(&raw[..], |_record| {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(matches!(res, Err(Error::Visitor(_))));
    }

    #[test]
    fn rejects_malformed_version() {
        let raw = b"WORC/1.0\r\nContent-Length: 0\r\n\r\n\r\n\r\n";

        let res = traverse(&raw[..], |_record| Ok(ControlFlow::Continue(())));

        assert!(matches!(res, Err(Error::MalformedVersion(_))));
    }

    #[test]
    fn rejects_malformed_length() {
        let raw = b"WARC/1.0\r\nWARC-Type: response\r\nContent-Length: sixteen\r\n\r\n";

        let res = traverse(&raw[..], |_record| Ok(ControlFlow::Continue(())));

        assert!(matches!(res, Err(Error::MalformedLength(_))));
    }

    #[test]
    fn rejects_missing_length() {
        let raw = b"WARC/1.0\r\nWARC-Type: response\r\n\r\n";

        let res = traverse(&raw[..], |_record| Ok(ControlFlow::Continue(())));

        assert!(matches!(res, Err(Error::MalformedLength(_))));
    }

    #[test]
    fn rejects_oversized_header() {
        let mut raw = Vec::new();
        raw.extend_from_slice(b"WARC/1.0\r\n");
        raw.extend_from_slice(b"WARC-Type: ");
        raw.extend(std::iter::repeat(b'x').take(BUFFER_SIZE + 1));
        raw.extend_from_slice(b"\r\n\r\n");

        let res = traverse(&raw[..], |_record| Ok(ControlFlow::Continue(())));

        assert!(matches!(res, Err(Error::OversizedHeader)));
    }

    #[test]
    fn rejects_malformed_boundary() {
        let mut raw = Vec::new();
        raw.extend_from_slice(b"WARC/1.0\r\n");
        raw.extend_from_slice(b"WARC-Type: response\r\n");
        raw.extend_from_slice(b"Content-Length: 4\r\n");
        raw.extend_from_slice(b"\r\n");
        raw.extend_from_slice(b"body");
        raw.extend_from_slice(b"not a boundary\r\n\r\n");

        let res = traverse(&raw[..], |_record| Ok(ControlFlow::Continue(())));

        assert!(matches!(res, Err(Error::MalformedBoundary(_))));
    }

    #[test]
    fn content_may_contain_fake_records() {
        // content-length has to win over anything that looks like markup
        let body = "WARC/1.0\r\nContent-Length: 9999\r\n\r\n";
        let raw = request_record("https://a.com", body);

        let mut contents = Vec::new();

        traverse(&raw[..], |record| {
            let mut content = String::new();
            record.read_to_string(&mut content)?;
            contents.push(content);
            Ok(ControlFlow::Continue(()))
        })
        .unwrap();

        assert_eq!(contents, vec![body.to_string()]);
    }

    proptest! {
        #[test]
        fn traversal_conservation(bodies in proptest::collection::vec("[ -~]{0,200}", 0..8)) {
            let mut raw = Vec::new();
            for (i, body) in bodies.iter().enumerate() {
                raw.extend(request_record(&format!("https://example.com/{i}"), body));
            }

            let mut seen = Vec::new();

            traverse(&raw[..], |record| {
                let mut content = String::new();
                record.read_to_string(&mut content)?;
                seen.push(content);
                Ok(ControlFlow::Continue(()))
            }).unwrap();

            prop_assert_eq!(seen, bodies);
        }
    }
}
