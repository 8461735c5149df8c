use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use decor8ai_api::ApiResponse;
use tracing::{debug, info};

pub const UPSCALED_FILE_NAME: &str = "upscaled.jpg";

/// Writes every base64 image carried by `response` into `dir`, returning the written paths.
///
/// Generated images are named after their UUID. Images delivered only as URLs are skipped.
pub fn save_images(dir: &Path, response: &ApiResponse) -> anyhow::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut written = Vec::new();
    for (index, image) in response.info.images.iter().enumerate() {
        let Some(data) = image.decode_data() else {
            debug!(uuid = %image.uuid, "image has no inline data, skipping");
            continue;
        };
        let data = data.with_context(|| format!("Image {index} is not valid base64"))?;
        let name = if image.uuid.is_empty() {
            format!("image-{index}.jpg")
        } else {
            format!("{}.jpg", image.uuid)
        };
        written.push(write(dir.join(name), &data)?);
    }

    if let Some(data) = response.upscaled_image() {
        let data = data.context("Upscaled image is not valid base64")?;
        written.push(write(dir.join(UPSCALED_FILE_NAME), &data)?);
    }

    Ok(written)
}

fn write(path: PathBuf, data: &[u8]) -> anyhow::Result<PathBuf> {
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = data.len(), "saved image");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn writes_inline_and_upscaled_images() {
        let response: ApiResponse = serde_json::from_value(json!({
            "error": "",
            "message": "ok",
            "info": {
                "images": [
                    {"uuid": "abc", "data": "aGVsbG8="},
                    {"uuid": "def", "url": "https://x/def.jpg"},
                    {"data": "d29ybGQ="}
                ],
                "upscaled_image": "dXA="
            }
        }))
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");

        let written = save_images(&out, &response).unwrap();

        assert_eq!(
            written,
            vec![
                out.join("abc.jpg"),
                out.join("image-2.jpg"),
                out.join(UPSCALED_FILE_NAME)
            ]
        );
        assert_eq!(fs::read(out.join("abc.jpg")).unwrap(), b"hello");
        assert_eq!(fs::read(out.join("image-2.jpg")).unwrap(), b"world");
        assert_eq!(fs::read(out.join(UPSCALED_FILE_NAME)).unwrap(), b"up");
    }

    #[test]
    fn invalid_base64_is_reported() {
        let response: ApiResponse = serde_json::from_value(json!({
            "info": {"images": [{"uuid": "abc", "data": "not base64!"}]}
        }))
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        assert!(save_images(dir.path(), &response).is_err());
    }
}
