use crate::constants::{DEFAULT_STYLESHEET_URL, MAX_FONT, MIN_FONT};
use crate::models::TagCloudConfig;

pub const DEFAULT_TAG_CLOUD_CONFIG: &TagCloudConfig = &TagCloudConfig {
    min_font: MIN_FONT,
    max_font: MAX_FONT,
    stylesheet_url: DEFAULT_STYLESHEET_URL,
};
