//! Client for the [Decor8 AI](https://decor8.ai) interior design API.
//!
//! Every endpoint is a method on [`Api`]. Most take JSON payloads built from a request
//! struct; the legacy upload endpoints accept an [`ImageSource`] that is read from disk,
//! downloaded, or taken from memory before being uploaded.
//!
//! ```no_run
//! use decor8ai_api::{Api, ClientConfig, GenerateDesignsForRoomRequest};
//!
//! # async fn run() -> Result<(), decor8ai_api::Error> {
//! let api = Api::new(ClientConfig::new("my-api-key")?)?;
//! let mut request = GenerateDesignsForRoomRequest::new(
//!     "https://example.com/room.jpg",
//!     "livingroom",
//!     "modern",
//! );
//! request.with_num_images(2);
//! let response = api.generate_designs_for_room(&request).await?;
//! for image in response.info.images {
//!     println!("{}: {:?}", image.uuid, image.url);
//! }
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    multipart::Form,
    RequestBuilder,
};
use serde::Serialize;
use tracing::{debug, warn};

pub mod catalog;
mod config;
mod error;
mod image;
mod operation;
mod request;
mod response;

pub use config::*;
pub use error::*;
pub use image::*;
pub use operation::*;
pub use request::{UploadRequest, Validate};
pub use response::*;

mod design;
pub use design::*;

mod surfaces;
pub use surfaces::*;

mod remodel;
pub use remodel::*;

mod exterior;
pub use exterior::*;

mod processing;
pub use processing::*;

/// Struct representing a connection to the Decor8 AI API.
///
/// Cloning is cheap; clones share the connection pool. The API key and base URL are fixed
/// at construction.
#[derive(Clone, Debug)]
pub struct Api {
    client: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
    timeout: Option<Duration>,
}

impl Api {
    /// Returns a new `Api` instance for the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The API key, base URL and timeout to use.
    ///
    /// # Errors
    ///
    /// If the API key cannot be used as a header value or the HTTP client fails to build, a
    /// configuration error will be returned.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(Error::ClientBuild)?;
        Self::new_with_client(client, config)
    }

    /// Returns a new `Api` instance with the given `reqwest::Client` and configuration.
    ///
    /// # Arguments
    ///
    /// * `client` - An instance of `reqwest::Client`.
    /// * `config` - The API key, base URL and timeout to use.
    ///
    /// # Errors
    ///
    /// If the API key cannot be used as a header value, a configuration error will be
    /// returned.
    pub fn new_with_client(client: reqwest::Client, config: ClientConfig) -> Result<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.api_key()))
            .map_err(|_| {
                Error::Configuration("API key contains characters not allowed in a header".into())
            })?;
        authorization.set_sensitive(true);
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            authorization,
            timeout: config.timeout(),
        })
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the full URL of an operation's endpoint.
    pub fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.base_url, operation.path())
    }

    fn with_timeout(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        }
    }

    /// Downloads an image. No credentials are attached since the image host is not the API.
    pub(crate) fn download(&self, url: &str) -> RequestBuilder {
        self.with_timeout(self.client.get(url))
    }

    fn post(&self, operation: Operation) -> RequestBuilder {
        self.with_timeout(
            self.client
                .post(self.endpoint(operation))
                .header(AUTHORIZATION, self.authorization.clone()),
        )
    }

    /// Sends a JSON request to the given operation's endpoint.
    pub(crate) async fn post_json<R>(&self, operation: Operation, request: &R) -> Result<ApiResponse>
    where
        R: Serialize + Validate + ?Sized,
    {
        request.validate()?;
        debug!(%operation, "sending JSON request");
        let response = self.post(operation).json(request).send().await?;
        read_response(operation, response).await
    }

    /// Sends a multipart request with the request's image as `input_image` and its other
    /// fields as text parts.
    pub(crate) async fn post_multipart<R>(&self, operation: Operation, upload: R) -> Result<ApiResponse>
    where
        R: UploadRequest,
    {
        upload.validate()?;
        let fields = request::form_fields(&upload)?;
        let image = upload.into_image().into_part(self).await?;
        let form = fields
            .into_iter()
            .fold(Form::new().part("input_image", image), |form, (name, value)| {
                form.text(name, value)
            });
        debug!(%operation, boundary = form.boundary(), "sending multipart request");
        let response = self.post(operation).multipart(form).send().await?;
        read_response(operation, response).await
    }
}

async fn read_response(operation: Operation, response: reqwest::Response) -> Result<ApiResponse> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        if let Ok(parsed) = serde_json::from_slice::<ApiResponse>(&body) {
            if let Some(error) = parsed.api_error().map(str::to_owned) {
                warn!(%operation, %status, %error, "API returned an error");
                return Err(Error::Api {
                    status,
                    error,
                    message: parsed.message,
                });
            }
        }
        warn!(%operation, %status, "request failed");
        return Err(Error::Status {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let parsed: ApiResponse = serde_json::from_slice(&body)?;
    if let Some(error) = parsed.api_error().map(str::to_owned) {
        warn!(%operation, %error, "API returned an error");
        return Err(Error::Api {
            status,
            error,
            message: parsed.message,
        });
    }
    debug!(%operation, images = parsed.info.images.len(), "request succeeded");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_path_to_base_url() {
        let config = ClientConfig::new("key")
            .unwrap()
            .with_base_url("http://localhost:9000/decor8/")
            .unwrap();
        let api = Api::new(config).unwrap();
        assert_eq!(
            api.endpoint(Operation::UpscaleImage),
            "http://localhost:9000/decor8/upscale_image"
        );
    }

    #[test]
    fn api_key_is_not_printed() {
        let api = Api::new(ClientConfig::new("super-secret").unwrap()).unwrap();
        assert!(!format!("{api:?}").contains("super-secret"));
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let err = Api::new(ClientConfig::new("bad\nkey").unwrap()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}
