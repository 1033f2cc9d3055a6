use std::io::Write;

use crate::error::Result;

use tincture::{Color, Signalable};

pub struct Output<'a> {
    pub handle: &'a mut dyn Write,
}

impl Output<'_> {
    pub fn new(handle: &mut dyn Write) -> Output {
        Output { handle }
    }

    /// Print a color in its canonical form.
    pub fn show_color(&mut self, color: &Color) -> Result<()> {
        self.show_line(&color.serialize())
    }

    pub fn show_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.handle, "{line}")?;
        Ok(())
    }
}
