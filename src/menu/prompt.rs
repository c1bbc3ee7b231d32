use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::{MenuChoice, MENU_TEXT};
use crate::error::AppError;

/// Line-oriented prompting over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Show the menu and read a choice. `None` at end of input; non-numeric
    /// text is [`AppError::InvalidNumber`].
    pub fn read_choice(&mut self) -> Result<Option<MenuChoice>, AppError> {
        writeln!(self.output, "{MENU_TEXT}")?;
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        self.read_line()?.map(|line| MenuChoice::parse(&line)).transpose()
    }

    /// Print `prompt` on its own line and read the answer verbatim.
    pub fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String, AppError> {
        writeln!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()?.ok_or(AppError::UnexpectedEof(field))
    }

    /// Like [`ask`](Self::ask), parsing the trimmed answer.
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T, AppError> {
        let answer = self.ask(prompt, field)?;
        let parsed = answer.trim().parse::<T>();
        parsed.map_err(|_| AppError::InvalidNumber { field, input: answer })
    }
}
