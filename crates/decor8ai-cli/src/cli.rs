use std::path::PathBuf;

use clap::builder::{PossibleValuesParser, TypedValueParser};
use decor8ai_api::{
    catalog, GenerateDesignsForRoomRequest, GenerateDesignsRequest,
    GenerateInspirationalDesignsRequest, GenerateLandscapingDesignsRequest, RemodelRequest,
    RenderType, SketchTo3dRenderRequest, SkyType,
};

/// Command line client for the Decor8 AI interior design API.
///
/// The API key is read from `DECOR8AI_API_KEY` or the `api_key` entry of a config file.
#[derive(Debug, clap::Parser)]
#[command(name = "decor8ai", version)]
pub struct Cli {
    /// Extra TOML config file, read after `/etc/decor8ai/config.toml` and `./decor8ai.toml`.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Overrides the API base URL from every config source.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Directory to write base64 image payloads from the response to.
    #[arg(short, long, global = true)]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the known values of a request parameter.
    List {
        #[arg(value_enum)]
        catalog: Catalog,
    },
    #[command(flatten)]
    Call(Call),
}

/// Subcommands that send a request to the API.
#[derive(Debug, clap::Subcommand)]
pub enum Call {
    /// Stage a room photo reachable by URL.
    GenerateDesignsForRoom(DesignsForRoom),
    /// Generate room designs without an input photo.
    GenerateInspirationalDesigns(InspirationalDesigns),
    /// Stage a room photo by uploading it.
    GenerateDesigns(UploadDesigns),
    /// Generate marketing captions for a room.
    GenerateImageCaptions {
        #[arg(long)]
        room_type: String,
        #[arg(long)]
        design_style: String,
        #[arg(long)]
        num_captions: Option<u32>,
    },
    /// Prime the walls of a room photo reachable by URL.
    PrimeWallsForRoom {
        #[arg(long)]
        input_image_url: String,
    },
    /// Prime the walls of a room photo by uploading it.
    PrimeTheRoomWalls {
        /// Path or http(s) URL of the image.
        #[arg(long)]
        image: String,
    },
    /// Repaint the walls of a room.
    ChangeWallColor {
        #[arg(long)]
        input_image_url: String,
        /// Hex color, e.g. `#FF5733`.
        #[arg(long)]
        wall_color_hex_code: String,
    },
    /// Repaint the cabinets of a kitchen.
    ChangeKitchenCabinetsColor {
        #[arg(long)]
        input_image_url: String,
        #[arg(long)]
        cabinet_color_hex_code: String,
    },
    /// Remodel a kitchen.
    RemodelKitchen(Remodel),
    /// Remodel a bathroom.
    RemodelBathroom(Remodel),
    /// Replace the sky behind a house.
    ReplaceSkyBehindHouse {
        #[arg(long)]
        input_image_url: String,
        #[arg(
            long,
            value_parser = PossibleValuesParser::new(catalog::SKY_TYPES)
                .try_map(|value| value.parse::<SkyType>()),
        )]
        sky_type: SkyType,
    },
    /// Generate landscaping designs for a yard.
    GenerateLandscapingDesigns(Landscaping),
    /// Turn a sketch or floor plan into a 3D render.
    #[command(name = "sketch-to-3d-render")]
    SketchTo3dRender(SketchRender),
    /// Remove furniture and objects from a room.
    RemoveObjectsFromRoom {
        #[arg(long)]
        input_image_url: String,
        #[arg(long)]
        mask_image_url: Option<String>,
    },
    /// Upscale an image.
    UpscaleImage {
        /// Path or http(s) URL of the image.
        #[arg(long)]
        image: String,
        #[arg(long)]
        scale_factor: Option<u32>,
    },
}

#[derive(Debug, clap::Args)]
pub struct DesignsForRoom {
    #[arg(long)]
    pub input_image_url: String,
    #[arg(long)]
    pub room_type: String,
    #[arg(long)]
    pub design_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
    #[arg(long)]
    pub scale_factor: Option<u32>,
    #[arg(long)]
    pub color_scheme: Option<String>,
    #[arg(long)]
    pub speciality_decor: Option<String>,
    #[arg(long)]
    pub mask_info: Option<String>,
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long)]
    pub seed: Option<i64>,
    #[arg(long)]
    pub guidance_scale: Option<f64>,
    #[arg(long)]
    pub num_inference_steps: Option<u32>,
    #[arg(long)]
    pub design_style_image_url: Option<String>,
    #[arg(long, requires = "design_style_image_url")]
    pub design_style_image_strength: Option<f64>,
    #[arg(long)]
    pub design_creativity: Option<f64>,
    #[arg(long)]
    pub webhooks_data: Option<String>,
    /// JSON description of the furniture and accessories to place.
    #[arg(long)]
    pub decor_items: Option<String>,
}

impl From<DesignsForRoom> for GenerateDesignsForRoomRequest {
    fn from(args: DesignsForRoom) -> Self {
        let mut request =
            GenerateDesignsForRoomRequest::new(args.input_image_url, args.room_type, args.design_style);
        if let Some(n) = args.num_images {
            request.with_num_images(n);
        }
        if let Some(scale_factor) = args.scale_factor {
            request.with_scale_factor(scale_factor);
        }
        if let Some(color_scheme) = args.color_scheme {
            request.with_color_scheme(color_scheme);
        }
        if let Some(speciality_decor) = args.speciality_decor {
            request.with_speciality_decor(speciality_decor);
        }
        if let Some(mask_info) = args.mask_info {
            request.with_mask_info(mask_info);
        }
        if let Some(prompt) = args.prompt {
            request.with_prompt(prompt);
        }
        if let Some(seed) = args.seed {
            request.with_seed(seed);
        }
        if let Some(guidance_scale) = args.guidance_scale {
            request.with_guidance_scale(guidance_scale);
        }
        if let Some(steps) = args.num_inference_steps {
            request.with_num_inference_steps(steps);
        }
        if let Some(url) = args.design_style_image_url {
            request.with_design_style_image(url, args.design_style_image_strength);
        }
        if let Some(creativity) = args.design_creativity {
            request.with_design_creativity(creativity);
        }
        if let Some(webhooks_data) = args.webhooks_data {
            request.with_webhooks_data(webhooks_data);
        }
        if let Some(decor_items) = args.decor_items {
            request.with_decor_items(decor_items);
        }
        request
    }
}

#[derive(Debug, clap::Args)]
pub struct InspirationalDesigns {
    #[arg(long)]
    pub room_type: String,
    #[arg(long)]
    pub design_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
    #[arg(long)]
    pub color_scheme: Option<String>,
    #[arg(long)]
    pub speciality_decor: Option<String>,
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long)]
    pub seed: Option<i64>,
    #[arg(long)]
    pub guidance_scale: Option<f64>,
    #[arg(long)]
    pub num_inference_steps: Option<u32>,
}

impl From<InspirationalDesigns> for GenerateInspirationalDesignsRequest {
    fn from(args: InspirationalDesigns) -> Self {
        let mut request = GenerateInspirationalDesignsRequest::new(args.room_type, args.design_style);
        if let Some(n) = args.num_images {
            request.with_num_images(n);
        }
        if let Some(color_scheme) = args.color_scheme {
            request.with_color_scheme(color_scheme);
        }
        if let Some(speciality_decor) = args.speciality_decor {
            request.with_speciality_decor(speciality_decor);
        }
        if let Some(prompt) = args.prompt {
            request.with_prompt(prompt);
        }
        if let Some(seed) = args.seed {
            request.with_seed(seed);
        }
        if let Some(guidance_scale) = args.guidance_scale {
            request.with_guidance_scale(guidance_scale);
        }
        if let Some(steps) = args.num_inference_steps {
            request.with_num_inference_steps(steps);
        }
        request
    }
}

#[derive(Debug, clap::Args)]
pub struct UploadDesigns {
    /// Path or http(s) URL of the room photo.
    #[arg(long)]
    pub image: String,
    #[arg(long)]
    pub room_type: String,
    #[arg(long)]
    pub design_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
    #[arg(long)]
    pub num_captions: Option<u32>,
    #[arg(long)]
    pub color_scheme: Option<String>,
    #[arg(long)]
    pub speciality_decor: Option<String>,
    #[arg(long)]
    pub prompt: Option<String>,
    #[arg(long)]
    pub seed: Option<i64>,
    #[arg(long)]
    pub guidance_scale: Option<f64>,
    #[arg(long)]
    pub num_inference_steps: Option<u32>,
}

impl From<UploadDesigns> for GenerateDesignsRequest {
    fn from(args: UploadDesigns) -> Self {
        let mut request = GenerateDesignsRequest::new(args.image, args.room_type, args.design_style);
        if let Some(n) = args.num_images {
            request.with_num_images(n);
        }
        if let Some(n) = args.num_captions {
            request.with_num_captions(n);
        }
        if let Some(color_scheme) = args.color_scheme {
            request.with_color_scheme(color_scheme);
        }
        if let Some(speciality_decor) = args.speciality_decor {
            request.with_speciality_decor(speciality_decor);
        }
        if let Some(prompt) = args.prompt {
            request.with_prompt(prompt);
        }
        if let Some(seed) = args.seed {
            request.with_seed(seed);
        }
        if let Some(guidance_scale) = args.guidance_scale {
            request.with_guidance_scale(guidance_scale);
        }
        if let Some(steps) = args.num_inference_steps {
            request.with_num_inference_steps(steps);
        }
        request
    }
}

#[derive(Debug, clap::Args)]
pub struct Remodel {
    #[arg(long)]
    pub input_image_url: String,
    #[arg(long)]
    pub design_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
    #[arg(long)]
    pub scale_factor: Option<u32>,
}

impl From<Remodel> for RemodelRequest {
    fn from(args: Remodel) -> Self {
        RemodelRequest {
            input_image_url: args.input_image_url,
            design_style: args.design_style,
            num_images: args.num_images,
            scale_factor: args.scale_factor,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct Landscaping {
    #[arg(long)]
    pub input_image_url: String,
    #[arg(long, value_parser = PossibleValuesParser::new(catalog::YARD_TYPES))]
    pub yard_type: String,
    #[arg(long)]
    pub garden_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
}

impl From<Landscaping> for GenerateLandscapingDesignsRequest {
    fn from(args: Landscaping) -> Self {
        GenerateLandscapingDesignsRequest {
            input_image_url: args.input_image_url,
            yard_type: args.yard_type,
            garden_style: args.garden_style,
            num_images: args.num_images,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct SketchRender {
    #[arg(long)]
    pub input_image_url: String,
    #[arg(long)]
    pub design_style: String,
    #[arg(long)]
    pub num_images: Option<u32>,
    #[arg(long)]
    pub scale_factor: Option<u32>,
    #[arg(
        long,
        value_parser = PossibleValuesParser::new(catalog::RENDER_TYPES)
            .try_map(|value| value.parse::<RenderType>()),
    )]
    pub render_type: Option<RenderType>,
}

impl From<SketchRender> for SketchTo3dRenderRequest {
    fn from(args: SketchRender) -> Self {
        SketchTo3dRenderRequest {
            input_image_url: args.input_image_url,
            design_style: args.design_style,
            num_images: args.num_images,
            scale_factor: args.scale_factor,
            render_type: args.render_type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Catalog {
    RoomTypes,
    DesignStyles,
    ColorSchemes,
    SpecialityDecors,
    SkyTypes,
    YardTypes,
    GardenStyles,
    RenderTypes,
}

impl Catalog {
    pub fn values(self) -> &'static [&'static str] {
        match self {
            Catalog::RoomTypes => catalog::ROOM_TYPES,
            Catalog::DesignStyles => catalog::DESIGN_STYLES,
            Catalog::ColorSchemes => catalog::COLOR_SCHEMES,
            Catalog::SpecialityDecors => catalog::SPECIALITY_DECORS,
            Catalog::SkyTypes => catalog::SKY_TYPES,
            Catalog::YardTypes => catalog::YARD_TYPES,
            Catalog::GardenStyles => catalog::GARDEN_STYLES,
            Catalog::RenderTypes => catalog::RENDER_TYPES,
        }
    }
}
