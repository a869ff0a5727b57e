use crate::ansi::{RESET, strip_escapes};
use crate::mapping::Rule;
use std::io::{self, BufRead, Write};

/// summary of one [`Colorizer::run`]
#[derive(Debug, Default)]
pub struct ColorizeReport {
    pub lines_read: usize,
    pub lines_colored: usize,
    /// the error that ended the loop early, if reading failed before end of stream
    pub read_error: Option<io::Error>,
}

/// Applies the first matching rule to each line of a stream.
pub struct Colorizer {
    rules: Vec<Rule>,
}

impl Colorizer {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// First rule, in priority order, whose keyword occurs in the visible text of `line`.
    ///
    /// Escape sequences are removed before matching so that colored input never matches
    /// on its own directives.
    pub fn find_rule(&self, line: &str) -> Option<&Rule> {
        let normalized = strip_escapes(line).to_uppercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    /// Write `line` and a newline to `out`, wrapped in the matching rule's color.
    ///
    /// Returns whether a rule matched. Unmatched lines are written byte for byte.
    pub fn render<W: Write>(&self, line: &[u8], out: &mut W) -> io::Result<bool> {
        let text = String::from_utf8_lossy(line);
        match self.find_rule(&text) {
            Some(rule) => {
                out.write_all(rule.color.as_bytes())?;
                out.write_all(line)?;
                out.write_all(RESET.as_bytes())?;
                out.write_all(b"\n")?;
                Ok(true)
            }
            None => {
                out.write_all(line)?;
                out.write_all(b"\n")?;
                Ok(false)
            }
        }
    }

    /// Colorize `input` line by line into `output`, flushing after every line.
    ///
    /// Stops at end of stream or at the first read error; a read error is kept in the
    /// report instead of being returned. Write and flush errors are returned.
    pub fn run<R, W>(&self, mut input: R, mut output: W) -> io::Result<ColorizeReport>
    where
        R: BufRead,
        W: Write,
    {
        let mut report = ColorizeReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    log::debug!("Read failed after {} line(s): {}", report.lines_read, e);
                    report.read_error = Some(e);
                    break;
                }
            }

            report.lines_read += 1;
            if self.render(trim_line_ending(&buf), &mut output)? {
                report.lines_colored += 1;
            }
            output.flush()?;
        }

        output.flush()?;
        log::debug!(
            "Colorized {} of {} line(s)",
            report.lines_colored,
            report.lines_read
        );

        Ok(report)
    }
}

/// strip a trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
