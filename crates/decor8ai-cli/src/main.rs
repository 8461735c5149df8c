use anyhow::Context;
use clap::Parser;
use decor8ai_api::{Api, ApiResponse};
use tracing::{debug, metadata::LevelFilter};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod config;
mod output;

use cli::{Call, Cli, Command};
use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()
        .context("Failed to parse filter from env")?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    let cli = Cli::parse();

    let call = match cli.command {
        Command::List { catalog } => {
            for value in catalog.values() {
                println!("{value}");
            }
            return Ok(());
        }
        Command::Call(call) => call,
    };

    let mut config: Config = Config::figment(cli.config.as_deref())
        .extract()
        .context("Invalid configuration")?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    debug!(base_url = %config.base_url, timeout_secs = ?config.timeout_secs, "loaded configuration");

    let client_config = config
        .client_config()
        .context("Invalid configuration, set DECOR8AI_API_KEY or api_key in a config file")?;
    let api = Api::new(client_config).context("Failed to create API client")?;

    let response = run(&api, call).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("Failed to serialize response")?
    );

    if let Some(dir) = cli.output_dir {
        output::save_images(&dir, &response)?;
    }

    Ok(())
}

async fn run(api: &Api, call: Call) -> anyhow::Result<ApiResponse> {
    let response = match call {
        Call::GenerateDesignsForRoom(args) => {
            api.generate_designs_for_room(&args.into()).await
        }
        Call::GenerateInspirationalDesigns(args) => {
            api.generate_inspirational_designs(&args.into()).await
        }
        Call::GenerateDesigns(args) => api.generate_designs(args.into()).await,
        Call::GenerateImageCaptions {
            room_type,
            design_style,
            num_captions,
        } => {
            api.generate_image_captions(room_type, design_style, num_captions)
                .await
        }
        Call::PrimeWallsForRoom { input_image_url } => {
            api.prime_walls_for_room(input_image_url).await
        }
        Call::PrimeTheRoomWalls { image } => api.prime_the_room_walls(image).await,
        Call::ChangeWallColor {
            input_image_url,
            wall_color_hex_code,
        } => {
            api.change_wall_color(input_image_url, wall_color_hex_code)
                .await
        }
        Call::ChangeKitchenCabinetsColor {
            input_image_url,
            cabinet_color_hex_code,
        } => {
            api.change_kitchen_cabinets_color(input_image_url, cabinet_color_hex_code)
                .await
        }
        Call::RemodelKitchen(args) => api.remodel_kitchen(&args.into()).await,
        Call::RemodelBathroom(args) => api.remodel_bathroom(&args.into()).await,
        Call::ReplaceSkyBehindHouse {
            input_image_url,
            sky_type,
        } => api.replace_sky_behind_house(input_image_url, sky_type).await,
        Call::GenerateLandscapingDesigns(args) => {
            api.generate_landscaping_designs(&args.into()).await
        }
        Call::SketchTo3dRender(args) => api.sketch_to_3d_render(&args.into()).await,
        Call::RemoveObjectsFromRoom {
            input_image_url,
            mask_image_url,
        } => {
            api.remove_objects_from_room(input_image_url, mask_image_url)
                .await
        }
        Call::UpscaleImage {
            image,
            scale_factor,
        } => api.upscale_image(image, scale_factor).await,
    };
    response.context("Decor8 AI request failed")
}
