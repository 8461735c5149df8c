use std::str::FromStr;

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    request::{omit, omit_single, require},
    catalog, Api, ApiResponse, Operation, Result, UnknownValue, Validate,
};

/// Struct representing a kitchen or bathroom remodel request.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RemodelRequest {
    /// URL of the current kitchen or bathroom photo.
    pub input_image_url: String,
    /// Design aesthetic for the remodel.
    pub design_style: String,
    /// Number of designs to generate (1-4). Only sent when more than one is requested.
    #[serde(skip_serializing_if = "omit_single")]
    pub num_images: Option<u32>,
    /// Resolution multiplier (1-4).
    #[serde(skip_serializing_if = "omit")]
    pub scale_factor: Option<u32>,
}

impl RemodelRequest {
    /// Creates a request for a single remodel design.
    ///
    /// # Arguments
    ///
    /// * `input_image_url` - URL of the kitchen or bathroom photo.
    /// * `design_style` - Design aesthetic, e.g. `modern`.
    pub fn new<U, D>(input_image_url: U, design_style: D) -> Self
    where
        U: Into<String>,
        D: Into<String>,
    {
        Self {
            input_image_url: input_image_url.into(),
            design_style: design_style.into(),
            num_images: None,
            scale_factor: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = Some(num_images);
        self
    }

    pub fn with_scale_factor(&mut self, scale_factor: u32) -> &mut Self {
        self.scale_factor = Some(scale_factor);
        self
    }
}

impl Validate for RemodelRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("design_style", &self.design_style)
    }
}

/// Camera perspective of a sketch render.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenderType {
    Perspective,
    Isometric,
}

impl RenderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderType::Perspective => "perspective",
            RenderType::Isometric => "isometric",
        }
    }
}

impl FromStr for RenderType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "perspective" => Ok(RenderType::Perspective),
            "isometric" => Ok(RenderType::Isometric),
            _ => Err(UnknownValue {
                field: "render_type",
                value: s.to_string(),
                expected: catalog::RENDER_TYPES,
            }),
        }
    }
}

/// Struct representing a request to turn a sketch or floor plan into a 3D render.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SketchTo3dRenderRequest {
    /// URL of the sketch or floor plan.
    pub input_image_url: String,
    /// Design aesthetic of the render.
    pub design_style: String,
    /// Number of renders to generate (1-4). Only sent when more than one is requested.
    #[serde(skip_serializing_if = "omit_single")]
    pub num_images: Option<u32>,
    /// Resolution multiplier (1-8).
    #[serde(skip_serializing_if = "omit")]
    pub scale_factor: Option<u32>,
    /// Camera perspective, chosen by the service if unset.
    pub render_type: Option<RenderType>,
}

impl SketchTo3dRenderRequest {
    pub fn new<U, D>(input_image_url: U, design_style: D) -> Self
    where
        U: Into<String>,
        D: Into<String>,
    {
        Self {
            input_image_url: input_image_url.into(),
            design_style: design_style.into(),
            num_images: None,
            scale_factor: None,
            render_type: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = Some(num_images);
        self
    }

    pub fn with_scale_factor(&mut self, scale_factor: u32) -> &mut Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub fn with_render_type(&mut self, render_type: RenderType) -> &mut Self {
        self.render_type = Some(render_type);
        self
    }
}

impl Validate for SketchTo3dRenderRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("design_style", &self.design_style)
    }
}

impl Api {
    /// Generates kitchen remodel designs.
    ///
    /// # Arguments
    ///
    /// * `request` - The kitchen photo, style and optional image count and scale.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the URL or style is empty, otherwise a
    /// transport or API error if the request fails.
    pub async fn remodel_kitchen(&self, request: &RemodelRequest) -> Result<ApiResponse> {
        self.post_json(Operation::RemodelKitchen, request).await
    }

    /// Generates bathroom remodel designs. Takes the same request as
    /// [`Api::remodel_kitchen`].
    pub async fn remodel_bathroom(&self, request: &RemodelRequest) -> Result<ApiResponse> {
        self.post_json(Operation::RemodelBathroom, request).await
    }

    /// Converts a sketch or floor plan into a rendered 3D image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingField`] if the URL or style is empty.
    pub async fn sketch_to_3d_render(
        &self,
        request: &SketchTo3dRenderRequest,
    ) -> Result<ApiResponse> {
        self.post_json(Operation::SketchTo3dRender, request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn single_image_count_is_not_sent() {
        let mut request = RemodelRequest::new("https://x/kitchen.png", "modern");
        request.with_num_images(1);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"input_image_url": "https://x/kitchen.png", "design_style": "modern"})
        );
    }

    #[test]
    fn remodel_options_are_sent_when_set() {
        let mut request = RemodelRequest::new("https://x/bath.png", "coastal");
        request.with_num_images(3).with_scale_factor(2);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "input_image_url": "https://x/bath.png",
                "design_style": "coastal",
                "num_images": 3,
                "scale_factor": 2
            })
        );
    }

    #[test]
    fn render_type_uses_wire_names() {
        let mut request = SketchTo3dRenderRequest::new("https://x/plan.png", "scandinavian");
        request.with_render_type(RenderType::Isometric);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "input_image_url": "https://x/plan.png",
                "design_style": "scandinavian",
                "render_type": "isometric"
            })
        );
        assert_eq!(RenderType::Perspective.as_str(), "perspective");
    }

    #[test]
    fn render_type_parses_catalog_values() {
        for value in catalog::RENDER_TYPES {
            assert_eq!(value.parse::<RenderType>().unwrap().as_str(), *value);
        }
        assert_eq!(
            "oblique".parse::<RenderType>().unwrap_err().field,
            "render_type"
        );
    }
}
