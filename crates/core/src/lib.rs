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

//! Main library for Dredge.

use thiserror::Error;

pub mod config;
pub mod detect;
pub mod entrypoint;
pub mod fetch;
pub mod mime;
pub mod report;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("schema '{0}' not supported")]
    UnsupportedSchema(String),

    #[error("file URL specifies non-local host")]
    NonLocalFileHost,

    #[error("unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("HTTP fetch")]
    Http(#[from] reqwest::Error),

    #[error("S3 fetch")]
    S3(#[from] s3::error::S3Error),

    #[error("S3 credentials")]
    S3Credentials(#[from] s3::creds::error::CredentialsError),

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;
