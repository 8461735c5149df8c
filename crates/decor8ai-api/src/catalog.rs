//! Parameter values known to be accepted by the Decor8 AI API.
//!
//! The client does not check values against these lists; they are provided for building
//! user interfaces and for validation by callers that want it.

/// Values for `room_type`.
pub const ROOM_TYPES: &[&str] = &[
    "livingroom", "kitchen", "diningroom", "bedroom", "bathroom",
    "kidsroom", "familyroom", "readingnook", "sunroom", "walkincloset",
    "mudroom", "toyroom", "office", "foyer", "powderroom",
    "laundryroom", "gym", "basement", "garage", "balcony",
    "cafe", "homebar", "study_room", "front_porch", "back_porch",
    "back_patio", "openplan", "boardroom", "meetingroom", "openworkspace",
    "privateoffice",
];

/// Values for `design_style`.
pub const DESIGN_STYLES: &[&str] = &[
    "minimalist", "scandinavian", "industrial", "boho",
    "traditional", "artdeco", "midcenturymodern", "coastal",
    "tropical", "eclectic", "contemporary", "frenchcountry",
    "rustic", "shabbychic", "vintage", "country",
    "modern", "asian_zen", "hollywoodregency", "bauhaus",
    "mediterranean", "farmhouse", "victorian", "gothic",
    "moroccan", "southwestern", "transitional", "maximalist",
    "arabic", "japandi", "retrofuturism", "artnouveau",
    "urbanmodern", "wabi_sabi", "grandmillennial", "coastalgrandmother",
    "newtraditional", "cottagecore", "luxemodern", "high_tech",
    "organicmodern", "tuscan", "cabin", "desertmodern",
    "global", "industrialchic", "modernfarmhouse", "europeanclassic",
    "neotraditional", "warmminimalist",
];

/// Values for `color_scheme`.
pub const COLOR_SCHEMES: &[&str] = &[
    "COLOR_SCHEME_0", "COLOR_SCHEME_1", "COLOR_SCHEME_2", "COLOR_SCHEME_3",
    "COLOR_SCHEME_4", "COLOR_SCHEME_5", "COLOR_SCHEME_6", "COLOR_SCHEME_7",
    "COLOR_SCHEME_8", "COLOR_SCHEME_9", "COLOR_SCHEME_10", "COLOR_SCHEME_11",
    "COLOR_SCHEME_12", "COLOR_SCHEME_13", "COLOR_SCHEME_14", "COLOR_SCHEME_15",
    "COLOR_SCHEME_16", "COLOR_SCHEME_17", "COLOR_SCHEME_18", "COLOR_SCHEME_19",
    "COLOR_SCHEME_20",
];

/// Values for `speciality_decor`.
pub const SPECIALITY_DECORS: &[&str] = &[
    "SPECIALITY_DECOR_0", "SPECIALITY_DECOR_1", "SPECIALITY_DECOR_2",
    "SPECIALITY_DECOR_3", "SPECIALITY_DECOR_4", "SPECIALITY_DECOR_5",
    "SPECIALITY_DECOR_6", "SPECIALITY_DECOR_7",
];

/// Values for `sky_type`.
pub const SKY_TYPES: &[&str] = &[
    "day", "dusk", "night",
];

/// Values for `yard_type`.
pub const YARD_TYPES: &[&str] = &[
    "Front Yard", "Backyard", "Side Yard",
];

/// Values for `garden_style`.
pub const GARDEN_STYLES: &[&str] = &[
    "japanese_zen", "mediterranean", "english_cottage",
    "tropical", "desert", "modern_minimalist",
    "french_formal", "coastal", "woodland",
    "prairie", "rock_garden", "water_garden",
    "herb_garden", "cutting_garden", "pollinator",
    "xeriscape", "edible_landscape", "moon_garden",
    "rain_garden", "sensory", "native_plant",
    "cottage_style", "formal_parterre", "naturalistic",
    "contemporary", "asian_fusion", "rustic_farmhouse",
    "urban_modern", "sustainable", "wildlife_habitat",
    "four_season",
];

/// Values for `render_type`.
pub const RENDER_TYPES: &[&str] = &[
    "perspective", "isometric",
];

/// Returns `true` if `value` is one of the known values in `catalog`.
pub fn is_known(catalog: &[&str], value: &str) -> bool {
    catalog.contains(&value)
}
