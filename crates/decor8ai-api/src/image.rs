use std::{
    fmt,
    path::{Path, PathBuf},
};

use reqwest::multipart::Part;
use tracing::debug;

use crate::{error::SourceFetchError, Api, Error, Result};

/// File name attached to every uploaded image.
pub const IMAGE_FILE_NAME: &str = "input_image.jpg";
/// MIME type attached to every uploaded image.
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Where the bytes of an uploaded image come from.
///
/// Strings convert by prefix: anything starting with `http` is downloaded, anything else
/// is read from the local filesystem.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A file on the local filesystem, streamed into the request body.
    FilePath(PathBuf),
    /// An image downloaded with a single GET before the upload.
    RemoteUrl(String),
    /// Image bytes already in memory.
    BinaryData(Vec<u8>),
}

impl ImageSource {
    pub fn path<P: Into<PathBuf>>(path: P) -> Self {
        Self::FilePath(path.into())
    }

    pub fn url<S: Into<String>>(url: S) -> Self {
        Self::RemoteUrl(url.into())
    }

    pub fn bytes<B: Into<Vec<u8>>>(data: B) -> Self {
        Self::BinaryData(data.into())
    }

    /// Resolves the source into the `input_image` multipart part.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceFetch`] if the file cannot be opened or the download fails.
    pub(crate) async fn into_part(self, api: &Api) -> Result<Part> {
        let part = match self {
            ImageSource::FilePath(path) => {
                debug!(path = %path.display(), "streaming input image from file");
                let (file, len) = open(&path).await.map_err(|source| Error::SourceFetch {
                    location: path.display().to_string(),
                    source,
                })?;
                Part::stream_with_length(file, len)
            }
            ImageSource::RemoteUrl(url) => {
                debug!(%url, "downloading input image");
                let data = download(api, &url)
                    .await
                    .map_err(|source| Error::SourceFetch {
                        location: url.clone(),
                        source,
                    })?;
                Part::bytes(data)
            }
            ImageSource::BinaryData(data) => Part::bytes(data),
        };
        Ok(part.file_name(IMAGE_FILE_NAME).mime_str(IMAGE_MIME_TYPE)?)
    }
}

async fn open(path: &Path) -> std::result::Result<(tokio::fs::File, u64), SourceFetchError> {
    let file = tokio::fs::File::open(path).await?;
    let metadata = file.metadata().await?;
    if !metadata.is_file() {
        return Err(SourceFetchError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    Ok((file, metadata.len()))
}

async fn download(api: &Api, url: &str) -> std::result::Result<Vec<u8>, SourceFetchError> {
    let response = api.download(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceFetchError::Status(status));
    }
    Ok(response.bytes().await?.to_vec())
}

impl fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::FilePath(path) => f.debug_tuple("FilePath").field(path).finish(),
            ImageSource::RemoteUrl(url) => f.debug_tuple("RemoteUrl").field(url).finish(),
            ImageSource::BinaryData(data) => {
                write!(f, "BinaryData({} bytes)", data.len())
            }
        }
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        if value.starts_with("http") {
            Self::RemoteUrl(value.to_string())
        } else {
            Self::FilePath(PathBuf::from(value))
        }
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        if value.starts_with("http") {
            Self::RemoteUrl(value)
        } else {
            Self::FilePath(PathBuf::from(value))
        }
    }
}

impl From<url::Url> for ImageSource {
    fn from(value: url::Url) -> Self {
        Self::RemoteUrl(value.into())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(value: PathBuf) -> Self {
        Self::FilePath(value)
    }
}

impl From<&Path> for ImageSource {
    fn from(value: &Path) -> Self {
        Self::FilePath(value.to_path_buf())
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(value: Vec<u8>) -> Self {
        Self::BinaryData(value)
    }
}

impl From<&[u8]> for ImageSource {
    fn from(value: &[u8]) -> Self {
        Self::BinaryData(value.to_vec())
    }
}

impl From<bytes::Bytes> for ImageSource {
    fn from(value: bytes::Bytes) -> Self {
        Self::BinaryData(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_starting_with_http_are_urls() {
        assert_eq!(
            ImageSource::from("https://example.com/room.jpg"),
            ImageSource::RemoteUrl("https://example.com/room.jpg".to_string())
        );
        assert_eq!(
            ImageSource::from("http://example.com/room.jpg".to_string()),
            ImageSource::RemoteUrl("http://example.com/room.jpg".to_string())
        );
    }

    #[test]
    fn other_strings_are_paths() {
        assert_eq!(
            ImageSource::from("images/room.jpg"),
            ImageSource::FilePath(PathBuf::from("images/room.jpg"))
        );
        assert_eq!(
            ImageSource::from("ftp://example.com/room.jpg"),
            ImageSource::FilePath(PathBuf::from("ftp://example.com/room.jpg"))
        );
    }

    #[test]
    fn byte_conversions() {
        let expected = ImageSource::BinaryData(vec![1, 2, 3]);
        assert_eq!(ImageSource::from(vec![1u8, 2, 3]), expected);
        assert_eq!(ImageSource::from(&[1u8, 2, 3][..]), expected);
        assert_eq!(
            ImageSource::from(bytes::Bytes::from_static(&[1, 2, 3])),
            expected
        );
    }

    #[test]
    fn debug_does_not_dump_bytes() {
        let source = ImageSource::bytes(vec![0u8; 4096]);
        assert_eq!(format!("{source:?}"), "BinaryData(4096 bytes)");
    }

    #[tokio::test]
    async fn missing_file_is_source_fetch_error() {
        let api = Api::new(crate::ClientConfig::new("key").unwrap()).unwrap();
        let err = ImageSource::path("/definitely/not/here.jpg")
            .into_part(&api)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::SourceFetch {
                source: SourceFetchError::Io(_),
                ..
            }
        ));
    }
}
