use std::io::{BufRead, Write};

use fibwatch_core::NumberRange;
use tracing::debug;

use crate::errors::PromptError;

/// Interactive reader for the Fibonacci index.
///
/// With `validate` set, keeps asking until the number falls inside `range`.
/// Without it, the first integer entered is returned as-is.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    range: NumberRange,
    validate: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, range: NumberRange, validate: bool) -> Self {
        Self { input, output, range, validate }
    }

    /// Prompt until an acceptable number is entered.
    pub fn read_number(&mut self) -> Result<i32, PromptError> {
        loop {
            writeln!(self.output)?;
            write!(self.output, "Input a number {}: ? ", self.range)?;
            self.output.flush()?;

            let n = loop {
                match self.read_int()? {
                    Some(n) => break n,
                    // only the message; the next line is read without a new prompt
                    None => writeln!(self.output, "Error: Format error, input again please.")?,
                }
            };

            if !self.validate || self.range.contains(n) {
                return Ok(n);
            }

            debug!(value = n, range = %self.range, "rejected out-of-range input");
            writeln!(self.output)?;
            writeln!(self.output, "The number must be on range {}.", self.range)?;
        }
    }

    /// Read one line and parse it. `Ok(None)` means the line was not an integer.
    fn read_int(&mut self) -> Result<Option<i32>, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }

        match line.trim().parse::<i32>() {
            Ok(n) => Ok(Some(n)),
            Err(e) => {
                debug!(input = line.trim(), "failed to parse number: {}", e);
                Ok(None)
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}


// Unit tests for Prompter
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const RANGE_MSG: &str = "The number must be on range [1-45].";

    fn prompt(input: &str, validate: bool) -> (Result<i32, PromptError>, String) {
        let mut p = Prompter::new(Cursor::new(input.to_string()), Vec::new(), NumberRange::default(), validate);
        let result = p.read_number();
        let out = String::from_utf8(p.into_output()).unwrap();
        (result, out)
    }

    #[test]
    fn valid_first_entry_prompts_once() {
        let (n, out) = prompt("10\n", true);
        assert_eq!(n.unwrap(), 10);
        assert_eq!(out, "\nInput a number [1-45]: ? ");
    }

    #[test]
    fn zero_then_one_reports_range_once() {
        let (n, out) = prompt("0\n1\n", true);
        assert_eq!(n.unwrap(), 1);
        assert_eq!(out.matches(RANGE_MSG).count(), 1);
        assert_eq!(
            out,
            "\nInput a number [1-45]: ? \nThe number must be on range [1-45].\n\nInput a number [1-45]: ? "
        );
    }

    #[test]
    fn upper_bound_is_inclusive() {
        let (n, out) = prompt("46\n45\n", true);
        assert_eq!(n.unwrap(), 45);
        assert_eq!(out.matches(RANGE_MSG).count(), 1);
    }

    #[test]
    fn negative_input_is_out_of_range() {
        let (n, out) = prompt("-4\n2\n", true);
        assert_eq!(n.unwrap(), 2);
        assert_eq!(out.matches(RANGE_MSG).count(), 1);
    }

    #[test]
    fn without_validation_first_integer_wins() {
        let (n, out) = prompt("0\n", false);
        assert_eq!(n.unwrap(), 0);
        assert!(!out.contains(RANGE_MSG));

        let (n, _) = prompt("99\n", false);
        assert_eq!(n.unwrap(), 99);
    }

    #[test]
    fn malformed_input_reads_next_line_without_prompting() {
        let (n, out) = prompt("abc\n 7 \n", true);
        assert_eq!(n.unwrap(), 7);
        assert_eq!(
            out,
            "\nInput a number [1-45]: ? Error: Format error, input again please.\n"
        );
    }

    #[test]
    fn malformed_then_out_of_range_then_valid() {
        let (n, out) = prompt("x\n-1\n46\n45\n", true);
        assert_eq!(n.unwrap(), 45);
        assert_eq!(out.matches("Error: Format error, input again please.").count(), 1);
        assert_eq!(out.matches(RANGE_MSG).count(), 2);
        assert_eq!(out.matches("Input a number [1-45]: ? ").count(), 3);
    }

    #[test]
    fn eof_before_valid_number_is_an_error() {
        let (n, _) = prompt("", true);
        assert!(matches!(n, Err(PromptError::Eof)));

        let (n, out) = prompt("50\n", true);
        assert!(matches!(n, Err(PromptError::Eof)));
        assert!(out.contains(RANGE_MSG));
    }

    #[test]
    fn custom_range_shows_in_prompt() {
        let range = NumberRange::new(5, 9).unwrap();
        let mut p = Prompter::new(Cursor::new("4\n9\n"), Vec::new(), range, true);
        assert_eq!(p.read_number().unwrap(), 9);
        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Input a number [5-9]: ? "));
        assert!(out.contains("The number must be on range [5-9]."));
    }
}
