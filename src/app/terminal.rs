use crate::domain::model::{SubmitOutcome, Submission, TableSnapshot};
use crate::domain::ports::FormSurface;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const FIELD_PROMPTS: [&str; 8] = [
    "Inventory/Registry Number",
    "Title of the Artwork",
    "Artist/Author",
    "Year or Period of Creation (e.g. 1990 or 1980-1990)",
    "Technique/Materials",
    "Dimensions (e.g. 30x40 cm)",
    "Place of Production",
    "Provenance/History",
];

/// Line-oriented form surface over any reader/writer pair. Production use
/// wraps stdin/stdout; tests drive it with in-memory buffers.
pub struct TerminalSurface<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSurface<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written to the surface so far. Used by tests driving the
    /// surface over in-memory buffers.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Returns the line without its trailing newline, or None on EOF.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_line()
    }
}

impl<R: BufRead, W: Write> FormSurface for TerminalSurface<R, W> {
    fn next_submission(&mut self) -> Result<Option<Submission>> {
        writeln!(self.output)?;
        write!(
            self.output,
            "Press Enter to register a new artwork, or type 'q' to quit: "
        )?;
        self.output.flush()?;
        match self.read_line()? {
            None => return Ok(None),
            Some(line) if line.trim().eq_ignore_ascii_case("q") => return Ok(None),
            Some(_) => {}
        }

        let mut fields: Vec<String> = Vec::with_capacity(FIELD_PROMPTS.len());
        for label in FIELD_PROMPTS {
            match self.prompt(label)? {
                // EOF in the middle of the form discards the partial entry.
                None => return Ok(None),
                Some(value) => fields.push(value),
            }
        }

        let mut fields = fields.into_iter();
        Ok(Some(Submission {
            inventory_number: fields.next().unwrap_or_default(),
            title: fields.next().unwrap_or_default(),
            artist: fields.next().unwrap_or_default(),
            year_or_period: fields.next().unwrap_or_default(),
            technique: fields.next().unwrap_or_default(),
            dimensions: fields.next().unwrap_or_default(),
            place_of_production: fields.next().unwrap_or_default(),
            provenance: fields.next().unwrap_or_default(),
        }))
    }

    fn show_outcome(&mut self, outcome: &SubmitOutcome) -> Result<()> {
        match outcome {
            SubmitOutcome::Accepted => {
                writeln!(self.output, "{}", crate::core::submission::SUCCESS_MESSAGE)?;
            }
            SubmitOutcome::Rejected(warnings) => {
                for warning in warnings {
                    writeln!(self.output, "{}", warning)?;
                }
            }
        }
        Ok(())
    }

    fn show_table(&mut self, table: &TableSnapshot) -> Result<()> {
        let mut widths: Vec<usize> = table
            .columns
            .iter()
            .map(|c| c.chars().count())
            .collect();
        for row in &table.rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        writeln!(self.output, "\nRegistered Artworks:")?;
        let header: Vec<String> = table
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect();
        writeln!(self.output, "{}", header.join(" | "))?;
        writeln!(
            self.output,
            "{}",
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-")
        )?;
        for row in &table.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
                .collect();
            writeln!(self.output, "{}", cells.join(" | "))?;
        }
        Ok(())
    }

    fn offer_export(&mut self) -> Result<bool> {
        write!(self.output, "📥 Download CSV? [y/N]: ")?;
        self.output.flush()?;
        match self.read_line()? {
            None => Ok(false),
            Some(answer) => {
                let answer = answer.trim();
                Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
            }
        }
    }
}
