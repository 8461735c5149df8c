use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

/// A struct that represents the response from every Decor8 AI API endpoint.
#[serde_as]
#[skip_serializing_none]
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Error code. The service sends an empty string on success.
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable detail about the result.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload of the response.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub info: ResponseInfo,
}

impl ApiResponse {
    /// Returns the API error code, treating an empty `error` field as no error.
    pub fn api_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|error| !error.is_empty())
    }

    /// Decodes the base64 image returned by the `upscale_image` endpoint.
    ///
    /// # Errors
    ///
    /// If the payload is not valid base64, an error will be returned.
    pub fn upscaled_image(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.info
            .upscaled_image
            .as_deref()
            .map(|data| base64::engine::general_purpose::STANDARD.decode(data))
    }
}

/// The `info` object of a response.
#[serde_as]
#[skip_serializing_none]
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    /// The generated images.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub images: Vec<ImageInfo>,
    /// Masking data that can be passed back into a later request.
    pub mask_info: Option<String>,
    /// Captions for the generated images.
    pub captions: Option<Vec<String>>,
    /// Base64 encoded result of an upscale request.
    pub upscaled_image: Option<String>,
    /// Any fields this client does not know about, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A single generated image.
#[skip_serializing_none]
#[derive(Default, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageInfo {
    #[serde(default)]
    pub uuid: String,
    /// Where the generated image can be downloaded.
    pub url: Option<String>,
    /// Base64 encoded image, returned by the upload-based endpoints instead of a URL.
    pub data: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub captions: Option<Vec<String>>,
}

impl ImageInfo {
    /// Decodes the inline base64 image data, if the image carries any.
    pub fn decode_data(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.data
            .as_deref()
            .map(|data| base64::engine::general_purpose::STANDARD.decode(data))
    }
}
