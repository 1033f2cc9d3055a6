use crate::config::Config;
use crate::error::{Result, TinctureError};
use crate::output::Output;

use clap::ArgMatches;

use tincture::Color;

mod format;
mod gradient;
mod io;
mod mix;

pub mod prelude {
    pub use super::{ColorCommand, GenericCommand};
    pub use crate::config::Config;
    pub use crate::error::{Result, TinctureError};
    pub use crate::output::Output;
    pub use clap::ArgMatches;
    pub use tincture::Color;
}

use format::FormatCommand;
use gradient::GradientCommand;
use mix::MixCommand;

pub trait GenericCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()>;
}

pub trait ColorCommand {
    fn run(
        &self,
        out: &mut Output,
        matches: &ArgMatches,
        config: &Config,
        color: &Color,
    ) -> Result<()>;
}

pub enum Command {
    WithColor(Box<dyn ColorCommand>),
    Generic(Box<dyn GenericCommand>),
}

impl Command {
    pub fn from_string(command: &str) -> Result<Command> {
        match command {
            "format" => Ok(Command::WithColor(Box::new(FormatCommand))),
            "mix" => Ok(Command::Generic(Box::new(MixCommand))),
            "gradient" => Ok(Command::Generic(Box::new(GradientCommand))),
            _ => Err(TinctureError::UnknownCommand(command.to_string())),
        }
    }

    pub fn execute(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        match self {
            Command::Generic(cmd) => cmd.run(out, matches, config),
            Command::WithColor(cmd) => {
                for color in io::color_args(matches)? {
                    cmd.run(out, matches, config, &color)?;
                }

                Ok(())
            }
        }
    }
}
