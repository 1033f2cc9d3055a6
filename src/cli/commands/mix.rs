use crate::colorspace::get_interpolation;
use crate::commands::io::endpoint_arg;
use crate::commands::prelude::*;

pub struct MixCommand;

impl GenericCommand for MixCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let interpolation = get_interpolation(config)?;

        let fraction = *matches
            .get_one::<f64>("fraction")
            .ok_or(TinctureError::MissingArgument("fraction"))?;
        let from = endpoint_arg(matches, "from")?;
        let to = endpoint_arg(matches, "to")?;

        let mixed = interpolation(from.as_ref(), to.as_ref(), fraction);
        out.show_color(&mixed)
    }
}
