use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
    request::{omit, require},
    Api, ApiResponse, ImageSource, Operation, Result, UploadRequest, Validate,
};

/// Struct representing a virtual staging request for an image reachable by URL.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateDesignsForRoomRequest {
    /// URL of the room photo to stage.
    pub input_image_url: String,
    /// Type of room, e.g. `livingroom` or `bedroom`.
    pub room_type: String,
    /// Design aesthetic, e.g. `modern` or `scandinavian`.
    pub design_style: String,
    /// Number of designs to generate (1-4). Always sent.
    pub num_images: u32,
    /// Resolution multiplier (1-8).
    #[serde(skip_serializing_if = "omit")]
    pub scale_factor: Option<u32>,
    /// Predefined color palette, e.g. `COLOR_SCHEME_5`.
    #[serde(skip_serializing_if = "omit")]
    pub color_scheme: Option<String>,
    /// Seasonal or thematic decor, e.g. `SPECIALITY_DECOR_2`.
    #[serde(skip_serializing_if = "omit")]
    pub speciality_decor: Option<String>,
    /// Masking data returned by a previous request.
    #[serde(skip_serializing_if = "omit")]
    pub mask_info: Option<String>,
    /// Custom text directive for the generation.
    #[serde(skip_serializing_if = "omit")]
    pub prompt: Option<String>,
    /// Seed for reproducible results. `0` is a valid seed and is sent.
    pub seed: Option<i64>,
    /// Prompt adherence (1-20, server default 15).
    #[serde(skip_serializing_if = "omit")]
    pub guidance_scale: Option<f64>,
    /// Quality/speed balance (1-75, server default 50).
    #[serde(skip_serializing_if = "omit")]
    pub num_inference_steps: Option<u32>,
    /// URL of an image whose style should be followed.
    #[serde(skip_serializing_if = "omit")]
    pub design_style_image_url: Option<String>,
    /// How strongly the style image is followed (0-1, server default 0.82).
    #[serde(skip_serializing_if = "omit")]
    pub design_style_image_strength: Option<f64>,
    /// How far the design may stray from the input (0-1, server default 0.39).
    #[serde(skip_serializing_if = "omit")]
    pub design_creativity: Option<f64>,
    /// Callback configuration for asynchronous delivery.
    #[serde(skip_serializing_if = "omit")]
    pub webhooks_data: Option<String>,
    /// JSON string describing furniture and accessories to place.
    #[serde(skip_serializing_if = "omit")]
    pub decor_items: Option<String>,
}

impl GenerateDesignsForRoomRequest {
    /// Creates a request for a single design with every optional setting left to the
    /// server.
    pub fn new<U, R, D>(input_image_url: U, room_type: R, design_style: D) -> Self
    where
        U: Into<String>,
        R: Into<String>,
        D: Into<String>,
    {
        Self {
            input_image_url: input_image_url.into(),
            room_type: room_type.into(),
            design_style: design_style.into(),
            num_images: 1,
            scale_factor: None,
            color_scheme: None,
            speciality_decor: None,
            mask_info: None,
            prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
            design_style_image_url: None,
            design_style_image_strength: None,
            design_creativity: None,
            webhooks_data: None,
            decor_items: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = num_images;
        self
    }

    pub fn with_scale_factor(&mut self, scale_factor: u32) -> &mut Self {
        self.scale_factor = Some(scale_factor);
        self
    }

    pub fn with_color_scheme(&mut self, color_scheme: String) -> &mut Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    pub fn with_speciality_decor(&mut self, speciality_decor: String) -> &mut Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    /// Reuses the mask of an earlier generation so the same regions are redesigned.
    pub fn with_mask_info(&mut self, mask_info: String) -> &mut Self {
        self.mask_info = Some(mask_info);
        self
    }

    pub fn with_prompt(&mut self, prompt: String) -> &mut Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_seed(&mut self, seed: i64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_guidance_scale(&mut self, guidance_scale: f64) -> &mut Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    pub fn with_num_inference_steps(&mut self, num_inference_steps: u32) -> &mut Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }

    /// Sets a reference image whose style the design should follow, and how strongly.
    pub fn with_design_style_image(&mut self, url: String, strength: Option<f64>) -> &mut Self {
        self.design_style_image_url = Some(url);
        self.design_style_image_strength = strength;
        self
    }

    pub fn with_design_creativity(&mut self, design_creativity: f64) -> &mut Self {
        self.design_creativity = Some(design_creativity);
        self
    }

    pub fn with_webhooks_data(&mut self, webhooks_data: String) -> &mut Self {
        self.webhooks_data = Some(webhooks_data);
        self
    }

    pub fn with_decor_items(&mut self, decor_items: String) -> &mut Self {
        self.decor_items = Some(decor_items);
        self
    }
}

impl Validate for GenerateDesignsForRoomRequest {
    fn validate(&self) -> Result<()> {
        require("input_image_url", &self.input_image_url)?;
        require("room_type", &self.room_type)?;
        require("design_style", &self.design_style)
    }
}

/// Struct representing a request for designs generated without an input image.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateInspirationalDesignsRequest {
    pub room_type: String,
    pub design_style: String,
    /// Number of designs to generate (1-4). Always sent.
    pub num_images: u32,
    #[serde(skip_serializing_if = "omit")]
    pub color_scheme: Option<String>,
    #[serde(skip_serializing_if = "omit")]
    pub speciality_decor: Option<String>,
    #[serde(skip_serializing_if = "omit")]
    pub prompt: Option<String>,
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "omit")]
    pub guidance_scale: Option<f64>,
    /// Quality/speed balance (1-75, server default 35).
    #[serde(skip_serializing_if = "omit")]
    pub num_inference_steps: Option<u32>,
}

impl GenerateInspirationalDesignsRequest {
    pub fn new<R, D>(room_type: R, design_style: D) -> Self
    where
        R: Into<String>,
        D: Into<String>,
    {
        Self {
            room_type: room_type.into(),
            design_style: design_style.into(),
            num_images: 1,
            color_scheme: None,
            speciality_decor: None,
            prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = num_images;
        self
    }

    pub fn with_color_scheme(&mut self, color_scheme: String) -> &mut Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    pub fn with_speciality_decor(&mut self, speciality_decor: String) -> &mut Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    pub fn with_prompt(&mut self, prompt: String) -> &mut Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_seed(&mut self, seed: i64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_guidance_scale(&mut self, guidance_scale: f64) -> &mut Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    pub fn with_num_inference_steps(&mut self, num_inference_steps: u32) -> &mut Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }
}

impl Validate for GenerateInspirationalDesignsRequest {
    fn validate(&self) -> Result<()> {
        require("room_type", &self.room_type)?;
        require("design_style", &self.design_style)
    }
}

/// Struct representing a legacy design request that uploads the room photo.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateDesignsRequest {
    #[serde(skip)]
    pub input_image: ImageSource,
    pub room_type: String,
    pub design_style: String,
    /// Number of designs to generate. Always sent; zero is replaced by one.
    pub num_images: u32,
    /// Number of captions to generate per design.
    #[serde(skip_serializing_if = "omit")]
    pub num_captions: Option<u32>,
    #[serde(skip_serializing_if = "omit")]
    pub color_scheme: Option<String>,
    #[serde(skip_serializing_if = "omit")]
    pub speciality_decor: Option<String>,
    #[serde(skip_serializing_if = "omit")]
    pub prompt: Option<String>,
    pub seed: Option<i64>,
    #[serde(skip_serializing_if = "omit")]
    pub guidance_scale: Option<f64>,
    #[serde(skip_serializing_if = "omit")]
    pub num_inference_steps: Option<u32>,
}

impl GenerateDesignsRequest {
    /// Creates a request for one design of the given image.
    ///
    /// # Arguments
    ///
    /// * `input_image` - A file path, URL, or image bytes. See [`ImageSource`].
    /// * `room_type` - Type of room shown in the image.
    /// * `design_style` - Design aesthetic to apply.
    pub fn new<I, R, D>(input_image: I, room_type: R, design_style: D) -> Self
    where
        I: Into<ImageSource>,
        R: Into<String>,
        D: Into<String>,
    {
        Self {
            input_image: input_image.into(),
            room_type: room_type.into(),
            design_style: design_style.into(),
            num_images: 1,
            num_captions: None,
            color_scheme: None,
            speciality_decor: None,
            prompt: None,
            seed: None,
            guidance_scale: None,
            num_inference_steps: None,
        }
    }

    pub fn with_num_images(&mut self, num_images: u32) -> &mut Self {
        self.num_images = num_images.max(1);
        self
    }

    pub fn with_num_captions(&mut self, num_captions: u32) -> &mut Self {
        self.num_captions = Some(num_captions);
        self
    }

    pub fn with_color_scheme(&mut self, color_scheme: String) -> &mut Self {
        self.color_scheme = Some(color_scheme);
        self
    }

    pub fn with_speciality_decor(&mut self, speciality_decor: String) -> &mut Self {
        self.speciality_decor = Some(speciality_decor);
        self
    }

    pub fn with_prompt(&mut self, prompt: String) -> &mut Self {
        self.prompt = Some(prompt);
        self
    }

    pub fn with_seed(&mut self, seed: i64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_guidance_scale(&mut self, guidance_scale: f64) -> &mut Self {
        self.guidance_scale = Some(guidance_scale);
        self
    }

    pub fn with_num_inference_steps(&mut self, num_inference_steps: u32) -> &mut Self {
        self.num_inference_steps = Some(num_inference_steps);
        self
    }
}

impl Validate for GenerateDesignsRequest {
    fn validate(&self) -> Result<()> {
        require("room_type", &self.room_type)?;
        require("design_style", &self.design_style)
    }
}

impl UploadRequest for GenerateDesignsRequest {
    fn into_image(self) -> ImageSource {
        self.input_image
    }
}

/// Struct representing a request for marketing captions.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateImageCaptionsRequest {
    pub room_type: String,
    pub design_style: String,
    pub num_captions: u32,
}

impl Validate for GenerateImageCaptionsRequest {
    fn validate(&self) -> Result<()> {
        require("room_type", &self.room_type)?;
        require("design_style", &self.design_style)
    }
}

impl Api {
    /// Generates virtual staging designs for a room photo reachable by URL.
    ///
    /// # Arguments
    ///
    /// * `request` - The photo, room type, design style and optional tuning parameters.
    ///
    /// # Returns
    ///
    /// A `Result` containing the generated images on success, or an error if the request
    /// failed or the API reported an error.
    pub async fn generate_designs_for_room(
        &self,
        request: &GenerateDesignsForRoomRequest,
    ) -> Result<ApiResponse> {
        self.post_json(Operation::GenerateDesignsForRoom, request)
            .await
    }

    /// Generates room designs from a room type and style alone, without an input image.
    pub async fn generate_inspirational_designs(
        &self,
        request: &GenerateInspirationalDesignsRequest,
    ) -> Result<ApiResponse> {
        self.post_json(Operation::GenerateInspirationalDesigns, request)
            .await
    }

    /// Generates designs by uploading the room photo. Prefer
    /// [`Api::generate_designs_for_room`] when the photo is reachable by URL.
    ///
    /// # Errors
    ///
    /// Besides the usual transport and API errors, fails with [`crate::Error::SourceFetch`]
    /// if the input image cannot be read or downloaded.
    pub async fn generate_designs(&self, request: GenerateDesignsRequest) -> Result<ApiResponse> {
        self.post_multipart(Operation::GenerateDesigns, request)
            .await
    }

    /// Generates captions describing a room of the given type and style.
    pub async fn generate_image_captions<R, D>(
        &self,
        room_type: R,
        design_style: D,
        num_captions: Option<u32>,
    ) -> Result<ApiResponse>
    where
        R: Into<String>,
        D: Into<String>,
    {
        let request = GenerateImageCaptionsRequest {
            room_type: room_type.into(),
            design_style: design_style.into(),
            num_captions: num_captions.unwrap_or(1),
        };
        self.post_json(Operation::GenerateImageCaptions, &request)
            .await
    }
}
