use crate::error::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const INSTRUCTIONS: &str = "\
=========== CNEFE2JOSM ===========
Converts IBGE/CNEFE address listings for use in JOSM.

Instructions
  1. Give the path of a TXT file with IBGE/CNEFE data.
  * Supported encodings: UTF-8 or Windows-1250.
  2. Choose the address listing layout of that file.
  3. The file is converted into a CSV formatted for JOSM.
  * JOSM requires the OpenData plugin.
  4. The CSV is saved with the same name in the same folder as the TXT file.";

pub const LAYOUT_MENU: &str = "\
Choose the address listing layout to convert:
  1 = By district/sub-district
  2 = By census sector
  ENTER or any other key = quit";

/// Console questions for the values not given on the command line
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn show_instructions(&mut self) -> Result<()> {
        writeln!(self.output, "{}\n", INSTRUCTIONS)?;
        Ok(())
    }

    /// Answer to `question` without its line terminator, or `None` at end of input
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Source file path; empty or missing answer means no file
    pub fn ask_path(&mut self) -> Result<Option<PathBuf>> {
        let answer = self.ask("File to convert: ")?;
        Ok(answer.filter(|a| !a.is_empty()).map(PathBuf::from))
    }

    /// Layout selector; end of input counts as an empty choice
    pub fn ask_layout(&mut self) -> Result<String> {
        writeln!(self.output, "\n{}\n", LAYOUT_MENU)?;
        Ok(self.ask("Option: ")?.unwrap_or_default())
    }
}
