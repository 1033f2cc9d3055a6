use std::env;

use clap::ArgMatches;
use log::debug;

use tincture::WorkingSpace;

pub const COLORSPACE_VAR: &str = "TINCTURE_COLORSPACE";

#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the interpolation working space. Not validated here, an unknown name is
    /// reported when the interpolation function is built.
    pub colorspace: String,
}

impl Config {
    /// Settings of a subcommand. The working space is taken from `--colorspace`, then from the
    /// environment, then the default.
    pub fn from_matches(matches: &ArgMatches) -> Config {
        let from_args = matches
            .try_get_one::<String>("colorspace")
            .ok()
            .flatten()
            .cloned();

        let colorspace = from_args
            .or_else(|| env::var(COLORSPACE_VAR).ok())
            .unwrap_or_else(|| WorkingSpace::default().to_string());
        debug!("interpolating in '{colorspace}'");

        Config { colorspace }
    }
}
