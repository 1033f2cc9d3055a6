use std::rc::Rc;

use crate::colorspace::get_interpolation;
use crate::commands::io::endpoint_arg;
use crate::commands::prelude::*;

use tincture::SignalContext;

pub struct GradientCommand;

impl GenericCommand for GradientCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let interpolation = get_interpolation(config)?;

        let count = *matches
            .get_one::<usize>("number")
            .ok_or(TinctureError::MissingArgument("number"))?;
        if count < 2 {
            return Err(TinctureError::GradientNumberMustBeLargerThanOne(count));
        }

        let from = endpoint_arg(matches, "from")?;
        let to = endpoint_arg(matches, "to")?;

        let progress = SignalContext::<f64>::new().create_signal(0.0)?;
        let color = SignalContext::with_interpolation(Rc::clone(&interpolation))
            .create_neutral_signal();

        let position = progress.clone();
        color.set_fallible_expression(move || {
            Ok(interpolation(from.as_ref(), to.as_ref(), position.get()?))
        });

        for i in 0..count {
            progress.set(i as f64 / (count - 1) as f64)?;
            color.invalidate();
            out.show_color(&color.get()?)?;
        }

        Ok(())
    }
}
