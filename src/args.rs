//! Raw selections from the command line, completed by interactive prompts

use crate::config::{SortAlgorithm, SortConfig, SortOrder};
use crate::error::{SortContext, SortResult};
use std::io::{BufRead, Write};
use tracing::debug;

pub const ALGORITHM_PROMPT: &str =
    "Choose sort method (1 - bubble sort, 2 - quick sort, 3 - shell sort, 4 - slow sort): ";
pub const DIRECTION_PROMPT: &str = "Choose sort direction (1 - ascending, 2 - descending): ";
pub const BYTES_PROMPT: &str = "Enter the number of bytes to read from the file: ";

/// Command line arguments before prompting
#[derive(Debug, Clone, Default)]
pub struct SortArgs {
    pub algorithm: Option<String>,
    pub direction: Option<String>,
    pub bytes: Option<String>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub debug: bool,
}

impl SortArgs {
    /// True when no prompt is needed to build a configuration
    pub fn is_complete(&self) -> bool {
        self.algorithm.is_some() && self.direction.is_some() && self.bytes.is_some()
    }

    /// Build a configuration, prompting on `output` and reading answers from
    /// `input` for every selection missing from the command line
    pub fn resolve<R: BufRead, W: Write>(
        self,
        input: &mut R,
        output: &mut W,
    ) -> SortResult<SortConfig> {
        // All three answers are collected before any is checked
        let algorithm = match self.algorithm {
            Some(value) => value,
            None => prompt(input, output, ALGORITHM_PROMPT)?,
        };
        let direction = match self.direction {
            Some(value) => value,
            None => prompt(input, output, DIRECTION_PROMPT)?,
        };
        let bytes = match self.bytes {
            Some(value) => value,
            None => prompt(input, output, BYTES_PROMPT)?,
        };

        let algorithm: SortAlgorithm = algorithm.parse()?;
        let order = SortOrder::from_selector(&direction);
        let byte_limit = parse_byte_count(&bytes);

        let mut config = SortConfig::new()
            .with_algorithm(algorithm)
            .with_order(order)
            .with_byte_limit(byte_limit)
            .with_debug(self.debug);

        if let Some(input_file) = self.input {
            config = config.with_input_file(input_file);
        }
        if let Some(output_file) = self.output {
            config = config.with_output_file(output_file);
        }

        config.validate()?;
        Ok(config)
    }
}

/// Parse the byte count answer the way an unsigned stream extraction does
///
/// Leading digits are used and the rest ignored; no digits at all gives 0.
/// A leading `-` wraps the value modulo 2^N, and a count too large for
/// `usize` saturates, so both read the whole file.
pub fn parse_byte_count(value: &str) -> usize {
    let value = value.trim();
    let (negative, rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        debug!(answer = value, "byte count unreadable, using 0");
        return 0;
    }

    match rest[..digits_len].parse::<usize>() {
        Ok(count) if negative => count.wrapping_neg(),
        Ok(count) => count,
        Err(_) => usize::MAX,
    }
}

/// Print `message` and read one trimmed answer line; end of input reads as
/// an empty answer
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> SortResult<String> {
    output
        .write_all(message.as_bytes())
        .and_then(|_| output.flush())
        .with_context(|| "writing prompt".to_string())?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .with_context(|| "reading answer".to_string())?;
    if read == 0 {
        debug!(prompt = message.trim_end(), "no answer before end of input");
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;
    use std::io::Cursor;

    #[test]
    fn test_resolve_from_prompts() {
        let mut answers = Cursor::new("3\n2\n128\n");
        let mut shown = Vec::new();

        let config = SortArgs::default()
            .resolve(&mut answers, &mut shown)
            .expect("Failed to resolve prompted config");

        assert_eq!(config.algorithm, SortAlgorithm::Shell);
        assert_eq!(config.order, SortOrder::Descending);
        assert_eq!(config.byte_limit, 128);
        assert_eq!(config.input_file, "sort.txt");

        let shown = String::from_utf8(shown).expect("prompts are UTF-8");
        assert!(shown.starts_with(ALGORITHM_PROMPT));
        assert!(shown.contains(DIRECTION_PROMPT));
        assert!(shown.ends_with(BYTES_PROMPT));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let args = SortArgs {
            algorithm: Some("bubble".to_string()),
            direction: Some("1".to_string()),
            bytes: Some("10".to_string()),
            input: Some("numbers.txt".to_string()),
            output: Some("sorted.txt".to_string()),
            debug: true,
        };
        assert!(args.is_complete());

        let mut answers = Cursor::new("");
        let mut shown = Vec::new();
        let config = args
            .resolve(&mut answers, &mut shown)
            .expect("Failed to resolve flag config");

        assert!(shown.is_empty());
        assert_eq!(config.algorithm, SortAlgorithm::Bubble);
        assert_eq!(config.order, SortOrder::Ascending);
        assert_eq!(config.input_file, "numbers.txt");
        assert_eq!(config.output_file, "sorted.txt");
        assert!(config.debug);
    }

    #[test]
    fn test_unknown_direction_is_descending() {
        let args = SortArgs {
            algorithm: Some("2".to_string()),
            bytes: Some("10".to_string()),
            ..Default::default()
        };

        let mut answers = Cursor::new("7\n");
        let config = args
            .resolve(&mut answers, &mut Vec::new())
            .expect("Failed to resolve config");

        assert_eq!(config.order, SortOrder::Descending);
    }

    #[test]
    fn test_invalid_algorithm_after_all_prompts() {
        let mut answers = Cursor::new("5\n1\n10\n");
        let mut shown = Vec::new();
        let result = SortArgs::default().resolve(&mut answers, &mut shown);

        assert!(matches!(result, Err(SortError::InvalidAlgorithm { .. })));
        let shown = String::from_utf8(shown).expect("prompts are UTF-8");
        assert!(shown.ends_with(BYTES_PROMPT));
    }

    #[test]
    fn test_byte_count_parsing() {
        assert_eq!(parse_byte_count(" 42 "), 42);
        assert_eq!(parse_byte_count("+7"), 7);
        assert_eq!(parse_byte_count("12abc"), 12);
        assert_eq!(parse_byte_count("lots"), 0);
        assert_eq!(parse_byte_count(""), 0);
        assert_eq!(parse_byte_count("-4"), usize::MAX - 3);
        assert_eq!(parse_byte_count("99999999999999999999999"), usize::MAX);
    }

    #[test]
    fn test_unreadable_byte_count_reads_nothing() {
        let mut answers = Cursor::new("2\n1\nlots\n");
        let config = SortArgs::default()
            .resolve(&mut answers, &mut Vec::new())
            .expect("unreadable byte count is not an error");

        assert_eq!(config.byte_limit, 0);
    }

    #[test]
    fn test_end_of_input_reads_as_empty_answers() {
        // Algorithm and direction given, byte count prompt hits end of input
        let mut answers = Cursor::new("1\n2\n");
        let config = SortArgs::default()
            .resolve(&mut answers, &mut Vec::new())
            .expect("missing byte count is not an error");
        assert_eq!(config.byte_limit, 0);

        // Nothing at all: the empty algorithm answer is rejected
        let result = SortArgs::default().resolve(&mut Cursor::new(""), &mut Vec::new());
        assert!(matches!(result, Err(SortError::InvalidAlgorithm { .. })));
    }
}
