use std::str::FromStr;

use serde::Serialize;

use crate::{
    request::{omit_single, require},
    catalog, Api, ApiResponse, Operation, Result, UnknownValue, Validate,
};

/// Sky shown behind the house after replacement.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkyType {
    Day,
    Dusk,
    Night,
}

impl SkyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkyType::Day => "day",
            SkyType::Dusk => "dusk",
            SkyType::Night => "night",
        }
    }
}

impl FromStr for SkyType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "day" => Ok(SkyType::Day),
            "dusk" => Ok(SkyType::Dusk),
            "night" => Ok(SkyType::Night),
            _ => Err(UnknownValue {
                field: "sky_type",
                value: s.to_string(),
                expected: catalog::SKY_TYPES,
            }),
        }
    }
}

impl From<SkyType> for String {
    fn from(value: SkyType) -> Self {
        value.as_str().to_string()
    }
}

/// Struct representing a sky replacement request for an exterior photo.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ReplaceSkyBehindHouseRequest {
    /// URL of the exterior photo.
    pub input_image_url: String,
    /// `day`, `dusk` or `night`.
    pub sky_type: String,
}

impl Validate for ReplaceSkyBehindHouseRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("sky_type", &self.sky_type)
    }
}

/// Struct representing a landscaping request for a yard photo.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateLandscapingDesignsRequest {
    /// URL of the yard photo.
    pub input_image_url: String,
    /// `Front Yard`, `Backyard` or `Side Yard`.
    pub yard_type: String,
    /// Garden style, e.g. `japanese_zen`.
    pub garden_style: String,
    /// Only sent when more than one design is requested.
    #[serde(skip_serializing_if = "omit_single")]
    pub num_images: Option<u32>,
}

impl GenerateLandscapingDesignsRequest {
    /// Creates a request for a single landscaping design.
    pub fn new<U, Y, G>(input_image_url: U, yard_type: Y, garden_style: G) -> Self
    where
        U: Into<String>,
        Y: Into<String>,
        G: Into<String>,
    {
        Self {
            input_image_url: input_image_url.into(),
            yard_type: yard_type.into(),
            garden_style: garden_style.into(),
            num_images: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = Some(num_images);
        self
    }
}

impl Validate for GenerateLandscapingDesignsRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("yard_type", &self.yard_type)?;
        require("garden_style", &self.garden_style)
    }
}

impl Api {
    /// Replaces the sky in an exterior photo.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the exterior photo.
    /// * `sky_type` - A [`SkyType`] or its wire name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if either argument is empty. Unknown sky
    /// names are passed through for the service to reject.
    pub async fn replace_sky_behind_house<U, S>(
        &self,
        input_image_url: U,
        sky_type: S,
    ) -> Result<ApiResponse>
    where
        U: Into<String>,
        S: Into<String>,
    {
        let request = ReplaceSkyBehindHouseRequest {
            input_image_url: input_image_url.into(),
            sky_type: sky_type.into(),
        };
        self.post_json(Operation::ReplaceSkyBehindHouse, &request)
            .await
    }

    /// Generates landscaping designs for a yard photo.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the URL, yard type or garden style is
    /// empty, otherwise a transport or API error if the request fails.
    pub async fn generate_landscaping_designs(
        &self,
        request: &GenerateLandscapingDesignsRequest,
    ) -> Result<ApiResponse> {
        self.post_json(Operation::GenerateLandscapingDesigns, request)
            .await
    }
}
