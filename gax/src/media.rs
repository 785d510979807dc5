// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::Result;
use crate::error::Error;
use bytes::Bytes;
use reqwest::multipart::Part;
use std::path::{Path, PathBuf};

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// The media sent with an upload request.
///
/// The payload is either held in memory, or read from a file when the request
/// is built. The MIME type defaults to `application/octet-stream`.
///
/// # Example
/// ```
/// # use gax::media::Media;
/// let media = Media::from("hello world").with_mime_type("text/plain");
/// assert_eq!(media.mime_type(), "text/plain");
/// ```
#[derive(Clone, Debug)]
pub struct Media {
    source: Source,
    mime_type: String,
}

#[derive(Clone, Debug)]
enum Source {
    Bytes(Bytes),
    File(PathBuf),
}

impl Media {
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            source: Source::Bytes(data.into()),
            mime_type: mime_type.into(),
        }
    }

    /// Uploads the contents of a file. The file is read when the request is
    /// built.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            source: Source::File(path.as_ref().to_path_buf()),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the multipart part carrying this payload.
    ///
    /// Files are streamed from disk while the request is sent. A file that
    /// cannot be opened makes the request malformed, the request is not sent.
    pub(crate) async fn into_part(self) -> Result<Part> {
        let part = match self.source {
            Source::Bytes(b) => {
                let length = b.len() as u64;
                Part::stream_with_length(b, length)
            }
            Source::File(path) => {
                let file = tokio::fs::File::open(&path)
                    .await
                    .map_err(Error::malformed_request)?;
                let length = file
                    .metadata()
                    .await
                    .map_err(Error::malformed_request)?
                    .len();
                Part::stream_with_length(file, length)
            }
        };
        part.mime_str(&self.mime_type).map_err(Error::malformed_request)
    }
}

impl From<Bytes> for Media {
    fn from(bytes: Bytes) -> Self {
        Media::new(bytes, DEFAULT_MIME_TYPE)
    }
}

impl From<Vec<u8>> for Media {
    fn from(bytes: Vec<u8>) -> Self {
        Media::new(bytes, DEFAULT_MIME_TYPE)
    }
}

impl From<&'static [u8]> for Media {
    fn from(slice: &'static [u8]) -> Self {
        Media::new(Bytes::from_static(slice), DEFAULT_MIME_TYPE)
    }
}

impl From<&'static str> for Media {
    fn from(slice: &'static str) -> Self {
        Media::new(Bytes::from_static(slice.as_bytes()), DEFAULT_MIME_TYPE)
    }
}

impl From<String> for Media {
    fn from(s: String) -> Self {
        Media::new(s.into_bytes(), DEFAULT_MIME_TYPE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn from_memory() {
        let media = Media::from(vec![1_u8, 2, 3]);
        assert_eq!(media.mime_type(), DEFAULT_MIME_TYPE);

        let media = Media::new("abc", "text/plain");
        assert_eq!(media.mime_type(), "text/plain");
    }

    #[tokio::test]
    async fn from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"raster contents")?;
        let media = Media::from_path(file.path()).with_mime_type("image/tiff");
        assert_eq!(media.mime_type(), "image/tiff");
        let _part = media.into_part().await?;
        Ok(())
    }

    #[tokio::test]
    async fn missing_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let media = Media::from_path(dir.path().join("does-not-exist"));
        let err = media.into_part().await.unwrap_err();
        assert!(err.is_malformed_request(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_mime_type() -> TestResult {
        let media = Media::new("abc", "not a mime type");
        let err = media.into_part().await.unwrap_err();
        assert!(err.is_malformed_request(), "{err:?}");
        Ok(())
    }
}
