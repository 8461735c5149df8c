use serde::Serialize;

use crate::{
    request::require, Api, ApiResponse, ImageSource, Operation, Result, UploadRequest, Validate,
};

/// Struct representing a wall priming request for a photo reachable by URL.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PrimeWallsForRoomRequest {
    /// URL of the empty room photo.
    pub input_image_url: String,
}

impl Validate for PrimeWallsForRoomRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)
    }
}

/// Legacy wall priming request that uploads the room photo. It has no fields besides the
/// image itself.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PrimeTheRoomWallsRequest {
    #[serde(skip)]
    pub input_image: ImageSource,
}

impl Validate for PrimeTheRoomWallsRequest {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl UploadRequest for PrimeTheRoomWallsRequest {
    fn into_image(self) -> ImageSource {
        self.input_image
    }
}

/// Struct representing a wall repaint request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChangeWallColorRequest {
    /// URL of the room photo.
    pub input_image_url: String,
    /// Hex color such as `#FF5733`.
    pub wall_color_hex_code: String,
}

impl Validate for ChangeWallColorRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("wall_color_hex_code", &self.wall_color_hex_code)
    }
}

/// Struct representing a kitchen cabinet repaint request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ChangeKitchenCabinetsColorRequest {
    /// URL of the kitchen photo.
    pub input_image_url: String,
    /// Hex color such as `#2E4A62`.
    pub cabinet_color_hex_code: String,
}

impl Validate for ChangeKitchenCabinetsColorRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("cabinet_color_hex_code", &self.cabinet_color_hex_code)
    }
}

impl Api {
    /// Primes the walls of an empty room photo so it can be staged afterwards.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the empty room photo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the URL is empty, otherwise a transport or
    /// API error if the request fails.
    pub async fn prime_walls_for_room<S>(&self, input_image_url: S) -> Result<ApiResponse>
    where
        S: Into<String>,
    {
        let request = PrimeWallsForRoomRequest {
            input_image_url: input_image_url.into(),
        };
        self.post_json(Operation::PrimeWallsForRoom, &request).await
    }

    /// Primes room walls by uploading the photo.
    ///
    /// # Arguments
    ///
    /// * `input_image` - A file path, URL, or image bytes. See [`ImageSource`].
    ///
    /// # Errors
    ///
    /// Fails with [`crate::Error::SourceFetch`] if the image cannot be read or downloaded.
    pub async fn prime_the_room_walls<I>(&self, input_image: I) -> Result<ApiResponse>
    where
        I: Into<ImageSource>,
    {
        let request = PrimeTheRoomWallsRequest {
            input_image: input_image.into(),
        };
        self.post_multipart(Operation::PrimeTheRoomWalls, request)
            .await
    }

    /// Repaints the walls of a room photo.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the room photo.
    /// * `wall_color_hex_code` - The new wall color, e.g. `#FF5733`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if either argument is empty.
    pub async fn change_wall_color<U, C>(
        &self,
        input_image_url: U,
        wall_color_hex_code: C,
    ) -> Result<ApiResponse>
    where
        U: Into<String>,
        C: Into<String>,
    {
        let request = ChangeWallColorRequest {
            input_image_url: input_image_url.into(),
            wall_color_hex_code: wall_color_hex_code.into(),
        };
        self.post_json(Operation::ChangeWallColor, &request).await
    }

    /// Repaints the cabinets in a kitchen photo.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the kitchen photo.
    /// * `cabinet_color_hex_code` - The new cabinet color, e.g. `#2E4A62`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if either argument is empty.
    pub async fn change_kitchen_cabinets_color<U, C>(
        &self,
        input_image_url: U,
        cabinet_color_hex_code: C,
    ) -> Result<ApiResponse>
    where
        U: Into<String>,
        C: Into<String>,
    {
        let request = ChangeKitchenCabinetsColorRequest {
            input_image_url: input_image_url.into(),
            cabinet_color_hex_code: cabinet_color_hex_code.into(),
        };
        self.post_json(Operation::ChangeKitchenCabinetsColor, &request)
            .await
    }
}
