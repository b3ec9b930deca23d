//! Line-oriented prompting over any reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use catcollector_core::EntityId;

/// Prompt helper used by the menu and the per-roster forms.
///
/// Every read flushes the pending label first. End of input surfaces as an
/// `UnexpectedEof` error so callers can unwind the session.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Write one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    /// Show `label` and read one trimmed line.
    pub fn line(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }

    /// Read a line, `None` when it is blank.
    pub fn optional(&mut self, label: &str) -> io::Result<Option<String>> {
        let line = self.line(label)?;
        Ok((!line.is_empty()).then_some(line))
    }

    /// Ask until the answer parses and falls inside `range`.
    pub fn number_in<T>(&mut self, label: &str, range: RangeInclusive<T>) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let line = self.line(label)?;
            match parse_in(&line, &range) {
                Some(v) => return Ok(v),
                None => self.out_of_range(&range)?,
            }
        }
    }

    /// Like [`Prompter::number_in`], but a blank answer keeps `current`.
    pub fn number_or_keep<T>(&mut self, label: &str, range: RangeInclusive<T>, current: T) -> io::Result<T>
    where
        T: FromStr + PartialOrd + Display + Copy,
    {
        loop {
            let Some(line) = self.optional(label)? else {
                return Ok(current);
            };
            match parse_in(&line, &range) {
                Some(v) => return Ok(v),
                None => self.out_of_range(&range)?,
            }
        }
    }

    /// Non-negative finite decimal; a blank answer keeps `current` when given.
    pub fn score(&mut self, label: &str, current: Option<f64>) -> io::Result<f64> {
        loop {
            let line = self.line(label)?;
            if line.is_empty() {
                if let Some(current) = current {
                    return Ok(current);
                }
            }
            match line.parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => return Ok(v),
                _ => self.say("Please enter a number of zero or more.")?,
            }
        }
    }

    /// `y`/`yes` in any casing confirms; anything else declines.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.line(label)?.to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }

    /// Parse an identifier; reports and returns `None` when it is malformed.
    pub fn entity_id(&mut self, label: &str) -> io::Result<Option<EntityId>> {
        let line = self.line(label)?;
        match line.parse::<EntityId>() {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                self.say(err)?;
                Ok(None)
            }
        }
    }

    /// File path; blank means `default`.
    pub fn path_or(&mut self, label: &str, default: &Path) -> io::Result<PathBuf> {
        Ok(self
            .optional(label)?
            .map(PathBuf::from)
            .unwrap_or_else(|| default.to_path_buf()))
    }

    fn out_of_range<T: Display>(&mut self, range: &RangeInclusive<T>) -> io::Result<()> {
        self.say(format!(
            "Please enter a whole number between {} and {}.",
            range.start(),
            range.end()
        ))
    }
}

fn parse_in<T>(line: &str, range: &RangeInclusive<T>) -> Option<T>
where
    T: FromStr + PartialOrd,
{
    line.parse::<T>().ok().filter(|v| range.contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn transcript(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_parts().1).unwrap()
    }

    #[test]
    fn line_trims_and_echoes_label() {
        let mut p = prompter("  Mr. Goose  \n");
        assert_eq!(p.line("Name: ").unwrap(), "Mr. Goose");
        assert_eq!(transcript(p), "Name: ");
    }

    #[test]
    fn closed_input_is_eof() {
        let mut p = prompter("");
        let err = p.line("Name: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn number_in_reprompts_until_valid() {
        let mut p = prompter("eleven\n11\n0\n7\n");
        assert_eq!(p.number_in("Speed: ", 1u32..=10).unwrap(), 7);
        let out = transcript(p);
        assert_eq!(out.matches("between 1 and 10").count(), 3);
    }

    #[test]
    fn blank_keeps_current_value() {
        let mut p = prompter("\n42\n");
        assert_eq!(p.number_or_keep("Luck: ", 0u32..=100, 13).unwrap(), 13);
        assert_eq!(p.number_or_keep("Luck: ", 0u32..=100, 13).unwrap(), 42);
    }

    #[test]
    fn score_rejects_negative_and_nan() {
        let mut p = prompter("-1\nNaN\n12.5\n\n");
        assert_eq!(p.score("Score: ", None).unwrap(), 12.5);
        assert_eq!(p.score("Score: ", Some(3.0)).unwrap(), 3.0);
    }

    #[test]
    fn confirm_accepts_y_and_yes_only() {
        let mut p = prompter("Y\nyes\nn\nsure\n");
        assert!(p.confirm("? ").unwrap());
        assert!(p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
        assert!(!p.confirm("? ").unwrap());
    }

    #[test]
    fn entity_id_reports_malformed_input() {
        let id = EntityId::new();
        let mut p = prompter(&format!("{id}\nnot-a-guid\n"));
        assert_eq!(p.entity_id("ID: ").unwrap(), Some(id));
        assert_eq!(p.entity_id("ID: ").unwrap(), None);
        assert!(transcript(p).contains("invalid identifier"));
    }

    #[test]
    fn blank_path_uses_default() {
        let mut p = prompter("\nother.json\n");
        let default = Path::new("players.json");
        assert_eq!(p.path_or("File: ", default).unwrap(), PathBuf::from("players.json"));
        assert_eq!(p.path_or("File: ", default).unwrap(), PathBuf::from("other.json"));
    }
}
