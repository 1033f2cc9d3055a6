use crate::commands::prelude::*;

use tincture::Format;

pub struct FormatCommand;

impl ColorCommand for FormatCommand {
    fn run(
        &self,
        out: &mut Output,
        matches: &ArgMatches,
        _config: &Config,
        color: &Color,
    ) -> Result<()> {
        let format_type = matches
            .get_one::<String>("type")
            .ok_or(TinctureError::MissingArgument("type"))?
            .to_lowercase();

        let output = match format_type.as_str() {
            "hex" => color.to_rgb_hex_string(true),
            "rgb" => color.to_rgb_string(Format::Spaces),
            "hsl" => color.to_hsl_string(Format::Spaces),
            "lab" => color.to_lab_string(Format::Spaces),
            "lch" => color.to_lch_string(Format::Spaces),
            "oklab" => color.to_oklab_string(Format::Spaces),
            "oklch" => color.to_oklch_string(Format::Spaces),
            _ => return out.show_color(color),
        };

        out.show_line(&output)
    }
}
