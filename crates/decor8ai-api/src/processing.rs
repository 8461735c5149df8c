use serde::Serialize;

use crate::{
    request::{omit, require},
    Api, ApiResponse, ImageSource, Operation, Result, UploadRequest, Validate,
};

/// Scale factor used by [`Api::upscale_image`] when none is given.
pub const DEFAULT_UPSCALE_FACTOR: u32 = 2;

/// Struct representing a request to clear objects out of a room photo.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RemoveObjectsFromRoomRequest {
    /// URL of the room photo.
    pub input_image_url: String,
    /// Black and white mask marking the areas to clear. Without one, all furniture is
    /// removed.
    #[serde(skip_serializing_if = "omit")]
    pub mask_image_url: Option<String>,
}

impl Validate for RemoveObjectsFromRoomRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)
    }
}

/// Struct representing an upscale request. The image may be at most 4MB.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct UpscaleImageRequest {
    #[serde(skip)]
    /// The image to upscale, read or downloaded before the upload.
    pub input_image: ImageSource,
    /// Resolution multiplier (1-8).
    pub scale_factor: u32,
}

impl Validate for UpscaleImageRequest {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl UploadRequest for UpscaleImageRequest {
    fn into_image(self) -> ImageSource {
        self.input_image
    }
}

impl Api {
    /// Removes furniture and other objects from a room photo.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the room photo.
    /// * `mask_image_url` - Optional mask limiting what is removed.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the URL is empty.
    pub async fn remove_objects_from_room<U>(
        &self,
        input_image_url: U,
        mask_image_url: Option<String>,
    ) -> Result<ApiResponse>
    where
        U: Into<String>,
    {
        let request = RemoveObjectsFromRoomRequest {
            input_image_url: input_image_url.into(),
            mask_image_url,
        };
        self.post_json(Operation::RemoveObjectsFromRoom, &request)
            .await
    }

    /// Upscales an image. The result comes back base64 encoded, see
    /// [`ApiResponse::upscaled_image`].
    ///
    /// # Arguments
    ///
    /// * `input_image` - A file path, URL, or image bytes. See [`ImageSource`].
    /// * `scale_factor` - Resolution multiplier, [`DEFAULT_UPSCALE_FACTOR`] if `None`.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::SourceFetch`] if the image cannot be read or downloaded.
    pub async fn upscale_image<I>(
        &self,
        input_image: I,
        scale_factor: Option<u32>,
    ) -> Result<ApiResponse>
    where
        I: Into<ImageSource>,
    {
        let request = UpscaleImageRequest {
            input_image: input_image.into(),
            scale_factor: scale_factor.unwrap_or(DEFAULT_UPSCALE_FACTOR),
        };
        self.post_multipart(Operation::UpscaleImage, request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn mask_is_optional() {
        let request = RemoveObjectsFromRoomRequest {
            input_image_url: "https://x/room.png".to_string(),
            mask_image_url: Some(String::new()),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"input_image_url": "https://x/room.png"})
        );
    }

    #[test]
    fn upscale_fields() {
        let request = UpscaleImageRequest {
            input_image: ImageSource::bytes(vec![0u8; 8]),
            scale_factor: 4,
        };
        assert_eq!(
            crate::request::form_fields(&request).unwrap(),
            vec![("scale_factor".to_string(), "4".to_string())]
        );
    }
}
