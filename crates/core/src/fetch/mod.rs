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

//! Opening the byte stream behind an input identifier.

pub mod decompress;
pub mod retry_strategy;

use std::fs::File;
use std::io::{self, Read};
use std::thread::sleep;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::config::ScanConfig;
use crate::Error;

/// Open the (transparently decompressed) stream behind the configured
/// identifier: an HTTP(S) or S3 URL, a file URL, a bare filesystem path, or
/// `-` for stdin. Transient errors are retried per the configured strategy;
/// permanent ones (unsupported schema, non-local file host) are not.
pub fn open(config: &ScanConfig) -> Result<Box<dyn Read + Send>, Error> {
    if config.identifier == "-" {
        return Ok(decompress::reader(io::stdin())?);
    }

    let mut delays = config.retry.delays();

    loop {
        match open_raw(&config.identifier, config.timeout) {
            Ok(stream) => return Ok(decompress::reader(stream)?),
            Err(err) if is_permanent(&err) => return Err(err),
            Err(err) => match delays.next() {
                Some(delay) => {
                    debug!("fetch failed: {err:?}");
                    debug!("retrying in {} ms", delay.as_millis());

                    sleep(delay);
                }
                None => return Err(err),
            },
        }
    }
}

fn open_raw(identifier: &str, timeout: Duration) -> Result<Box<dyn Read + Send>, Error> {
    match Url::parse(identifier) {
        Ok(url) => match url.scheme() {
            "http" | "https" => open_http(url, timeout),
            "s3" => open_s3(&url, timeout),
            "file" => open_file(&url),
            other => Err(Error::UnsupportedSchema(other.to_string())),
        },
        // not a URL at all: treat it as a filesystem path
        Err(_) => Ok(Box::new(File::open(identifier)?)),
    }
}

fn open_http(url: Url, timeout: Duration) -> Result<Box<dyn Read + Send>, Error> {
    let client = reqwest::blocking::ClientBuilder::new()
        .tcp_keepalive(None)
        .connect_timeout(timeout)
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send()?;

    let status = response.status().as_u16();
    if status != 200 {
        return Err(Error::HttpStatus(status));
    }

    Ok(Box::new(response))
}

fn open_s3(url: &Url, timeout: Duration) -> Result<Box<dyn Read + Send>, Error> {
    let region = std::env::var("AWS_REGION")
        .ok()
        .and_then(|region| region.parse().ok())
        .unwrap_or(s3::Region::UsEast1);

    let credentials = s3::creds::Credentials::default()
        .or_else(|_| s3::creds::Credentials::anonymous())?;

    let bucket = s3::Bucket::new(url.host_str().unwrap_or_default(), region, credentials)?
        .with_request_timeout(timeout)?;

    let response = bucket.get_object_blocking(url.path().trim_start_matches('/'))?;

    Ok(Box::new(io::Cursor::new(response.bytes().to_vec())))
}

fn open_file(url: &Url) -> Result<Box<dyn Read + Send>, Error> {
    let path = url.to_file_path().map_err(|_| Error::NonLocalFileHost)?;

    Ok(Box::new(File::open(path)?))
}

fn is_permanent(err: &Error) -> bool {
    matches!(
        err,
        Error::UnsupportedSchema(_) | Error::NonLocalFileHost | Error::InvalidPattern { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryStrategy;
    use std::io::Write;

    fn config(identifier: &str, retry: RetryStrategy) -> ScanConfig {
        ScanConfig {
            identifier: identifier.to_string(),
            retry,
            ..ScanConfig::default()
        }
    }

    #[test]
    fn unsupported_schema_is_rejected() {
        let res = open(&config("ftp://example.com/archive.warc.gz", RetryStrategy::Never));

        assert!(matches!(res, Err(Error::UnsupportedSchema(_))));
    }

    #[test]
    fn unsupported_schema_short_circuits_retry() {
        // would loop forever if permanent errors were retried
        let res = open(&config("ftp://example.com/archive.warc.gz", RetryStrategy::Always));

        assert!(matches!(res, Err(Error::UnsupportedSchema(_))));
    }

    #[test]
    fn non_local_file_host_is_rejected() {
        let res = open(&config("file://fileserver/archive.warc", RetryStrategy::Never));

        assert!(matches!(res, Err(Error::NonLocalFileHost)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = open(&config("/does/not/exist.warc", RetryStrategy::Never));

        assert!(matches!(res, Err(Error::Io(_))));
    }

    #[test]
    fn bare_paths_and_file_urls_are_read_and_decompressed() {
        let path = std::env::temp_dir().join(format!(
            "dredge-fetch-test-{}.warc.gz",
            std::process::id()
        ));

        let mut encoder =
            flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(b"WARC/1.0\r\n").unwrap();
        std::fs::write(&path, encoder.finish().unwrap()).unwrap();

        for identifier in [
            path.display().to_string(),
            format!("file://{}", path.display()),
        ] {
            let mut stream = open(&config(&identifier, RetryStrategy::Never)).unwrap();

            let mut content = Vec::new();
            stream.read_to_end(&mut content).unwrap();

            assert_eq!(content, b"WARC/1.0\r\n");
        }

        std::fs::remove_file(&path).unwrap();
    }
}
