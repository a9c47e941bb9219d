//! Interactive menu session
//!
//! Reads choices line by line and re-prompts on anything it cannot use.
//! End of input ends the session at whatever point it happens.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::app::config::MenuConfig;
use crate::convert::convert;
use crate::tables::{list_categories, list_units};
use crate::types::*;

const EXIT: &str = "exit";

pub struct Menu<R, W> {
    input: R,
    output: W,
    prompt: String,
    default_category: Option<Category>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, config: &MenuConfig) -> Self {
        Self {
            input,
            output,
            prompt: config.prompt.clone(),
            default_category: config.default_category,
        }
    }

    /// Run conversions until the user picks `exit` or input runs out.
    ///
    /// Returns the number of completed conversions.
    pub fn run(&mut self) -> io::Result<usize> {
        let mut completed = 0;
        while self.run_once()?.is_some() {
            completed += 1;
        }
        Ok(completed)
    }

    /// One pass through the menu: category, units, value, result
    pub fn run_once(&mut self) -> io::Result<Option<Measurement>> {
        let Some(category) = self.choose_category()? else {
            return Ok(None);
        };

        let units = list_units(category);
        self.print_units(&units)?;

        let Some(from) = self.choose_unit("from", &units)? else {
            return Ok(None);
        };
        let Some(to) = self.choose_unit("to", &units)? else {
            return Ok(None);
        };

        loop {
            let Some(value) = self.read_value()? else {
                return Ok(None);
            };

            match convert(category, &from, &to, value) {
                Ok(result) => {
                    writeln!(self.output, "Converted value: {}", DisplayValue(result))?;
                    return Ok(Some(Measurement::new(result, to)));
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    fn choose_category(&mut self) -> io::Result<Option<Category>> {
        let categories = list_categories();
        let mut entries = vec![EXIT.to_string()];
        entries.extend(categories.iter().map(|c| c.to_string()));

        let width = entries.iter().map(String::len).max().unwrap_or(0) + 4;
        writeln!(self.output, "{}", "_".repeat(width))?;
        for (index, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{index}) {}", title_case(entry))?;
        }
        writeln!(self.output, "{}", "-".repeat(width))?;
        if let Some(default) = self.default_category {
            writeln!(self.output, "(enter for {default})")?;
        }

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = normalize_unit_name(&line);

            if choice.is_empty() {
                if let Some(default) = self.default_category {
                    return Ok(Some(default));
                }
            } else if let Ok(index) = choice.parse::<usize>() {
                match index {
                    0 => return Ok(None),
                    i if i <= categories.len() => return Ok(Some(categories[i - 1])),
                    _ => {}
                }
            } else if choice == EXIT {
                return Ok(None);
            } else if let Ok(category) = choice.parse() {
                return Ok(Some(category));
            }

            writeln!(self.output, "404 Not found!")?;
        }
    }

    fn print_units(&mut self, units: &[String]) -> io::Result<()> {
        let width = units.iter().map(String::len).max().unwrap_or(0) + 4;
        writeln!(self.output, "{}", "_".repeat(width))?;
        for (index, unit) in units.iter().enumerate() {
            writeln!(self.output, "{}) {unit}", index + 1)?;
        }
        writeln!(self.output, "{}", "-".repeat(width))
    }

    /// Pick a unit by name or by its 1-based position in the list
    fn choose_unit(&mut self, side: &str, units: &[String]) -> io::Result<Option<String>> {
        loop {
            writeln!(self.output, "Choose \"{side}\" unit:")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let choice = normalize_unit_name(&line);

            let unit = match choice.parse::<usize>() {
                Ok(n) if (1..=units.len()).contains(&n) => Some(&units[n - 1]),
                _ => units.iter().find(|u| **u == choice),
            };

            match unit {
                Some(unit) => {
                    debug!(side, unit = unit.as_str(), "unit chosen");
                    return Ok(Some(unit.clone()));
                }
                None => writeln!(self.output, "Unit not found!")?,
            }
        }
    }

    fn read_value(&mut self) -> io::Result<Option<f64>> {
        loop {
            writeln!(self.output, "Choose value:")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match line.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Some(value)),
                _ => writeln!(self.output, "Must be a number!")?,
            }
        }
    }

    /// Show the prompt and read one line; `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", self.prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
