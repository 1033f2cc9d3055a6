use tincture::{Color, InterpolationFunction};

use crate::config::Config;
use crate::error::Result;

/// The interpolation function for the configured working space. Fails for unknown names before
/// any color is computed.
pub fn get_interpolation(config: &Config) -> Result<InterpolationFunction<Color>> {
    Ok(Color::create_lerp(&config.colorspace)?)
}
