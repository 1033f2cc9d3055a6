use std::io::{self, BufRead};

use clap::ArgMatches;

use tincture::{Color, Signalable};

use crate::error::{Result, TinctureError};

/// Keyword standing for a missing interpolation endpoint.
const MISSING_ENDPOINT: &str = "none";

pub fn color_from_str(text: &str) -> Result<Color> {
    Color::parse(text.into()).map_err(|_| TinctureError::ColorParseError(text.to_string()))
}

/// Colors given as positional arguments, or one color per non-empty line of standard input
/// if there are none.
pub fn color_args(matches: &ArgMatches) -> Result<Vec<Color>> {
    match matches.get_many::<String>("color") {
        Some(args) => args.map(|arg| color_from_str(arg)).collect(),
        None => {
            let stdin = io::stdin();
            let mut colors = Vec::new();
            for line in stdin.lock().lines() {
                let line = line?;
                if !line.trim().is_empty() {
                    colors.push(color_from_str(&line)?);
                }
            }
            Ok(colors)
        }
    }
}

/// An interpolation endpoint. `none` yields `None`.
pub fn endpoint_arg(matches: &ArgMatches, name: &'static str) -> Result<Option<Color>> {
    let text = matches
        .get_one::<String>(name)
        .ok_or(TinctureError::MissingArgument(name))?;

    if text.trim().eq_ignore_ascii_case(MISSING_ENDPOINT) {
        Ok(None)
    } else {
        color_from_str(text).map(Some)
    }
}
