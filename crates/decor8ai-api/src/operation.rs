use std::fmt;

/// How an operation's request body is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// `application/json` body.
    Json,
    /// `multipart/form-data` body with an `input_image` upload.
    Multipart,
}

/// Every endpoint of the Decor8 AI API known to this client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GenerateDesignsForRoom,
    GenerateInspirationalDesigns,
    GenerateDesigns,
    PrimeWallsForRoom,
    PrimeTheRoomWalls,
    ChangeWallColor,
    ChangeKitchenCabinetsColor,
    RemodelKitchen,
    RemodelBathroom,
    ReplaceSkyBehindHouse,
    GenerateLandscapingDesigns,
    RemoveObjectsFromRoom,
    UpscaleImage,
    SketchTo3dRender,
    GenerateImageCaptions,
}

impl Operation {
    pub const ALL: [Operation; 15] = [
        Operation::GenerateDesignsForRoom,
        Operation::GenerateInspirationalDesigns,
        Operation::GenerateDesigns,
        Operation::PrimeWallsForRoom,
        Operation::PrimeTheRoomWalls,
        Operation::ChangeWallColor,
        Operation::ChangeKitchenCabinetsColor,
        Operation::RemodelKitchen,
        Operation::RemodelBathroom,
        Operation::ReplaceSkyBehindHouse,
        Operation::GenerateLandscapingDesigns,
        Operation::RemoveObjectsFromRoom,
        Operation::UpscaleImage,
        Operation::SketchTo3dRender,
        Operation::GenerateImageCaptions,
    ];

    /// The path appended to the base URL.
    pub fn path(self) -> &'static str {
        match self {
            Operation::GenerateDesignsForRoom => "/generate_designs_for_room",
            Operation::GenerateInspirationalDesigns => "/generate_inspirational_designs",
            Operation::GenerateDesigns => "/generate_designs",
            Operation::PrimeWallsForRoom => "/prime_walls_for_room",
            Operation::PrimeTheRoomWalls => "/prime_the_room_walls",
            Operation::ChangeWallColor => "/change_wall_color",
            Operation::ChangeKitchenCabinetsColor => "/change_kitchen_cabinets_color",
            Operation::RemodelKitchen => "/remodel_kitchen",
            Operation::RemodelBathroom => "/remodel_bathroom",
            Operation::ReplaceSkyBehindHouse => "/replace_sky_behind_house",
            Operation::GenerateLandscapingDesigns => "/generate_landscaping_designs",
            Operation::RemoveObjectsFromRoom => "/remove_objects_from_room",
            Operation::UpscaleImage => "/upscale_image",
            Operation::SketchTo3dRender => "/sketch_to_3d_render",
            Operation::GenerateImageCaptions => "/generate_image_captions",
        }
    }

    pub fn encoding(self) -> Encoding {
        match self {
            Operation::GenerateDesigns | Operation::PrimeTheRoomWalls | Operation::UpscaleImage => {
                Encoding::Multipart
            }
            _ => Encoding::Json,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}
