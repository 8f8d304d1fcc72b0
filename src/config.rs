//! Configuration management for sort operations

use crate::bubble_sort::BubbleSort;
use crate::error::{SortError, SortResult};
use crate::quick_sort::QuickSort;
use crate::record::Record;
use crate::shell_sort::ShellSort;
use crate::slow_sort::SlowSort;
use crate::Sorter;
use std::str::FromStr;

/// Default input file read by the driver
pub const DEFAULT_INPUT_FILE: &str = "sort.txt";
/// Default output file written by the driver
pub const DEFAULT_OUTPUT_FILE: &str = "sortsort.txt";
/// Extension the input file must carry
pub const DEFAULT_EXTENSION: &str = "txt";

/// Sorting algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    /// Adjacent-pair exchange, O(n²)
    Bubble,
    /// Lomuto partition around the last element
    Quick,
    /// Gapped insertion sort with halving gaps
    Shell,
    /// Multiply-and-surrender slow sort, exponential
    Slow,
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Quick,
        SortAlgorithm::Shell,
        SortAlgorithm::Slow,
    ];

    /// Map the numeric menu selector (1-4) to an algorithm
    pub fn from_selector(selector: i64) -> SortResult<Self> {
        match selector {
            1 => Ok(SortAlgorithm::Bubble),
            2 => Ok(SortAlgorithm::Quick),
            3 => Ok(SortAlgorithm::Shell),
            4 => Ok(SortAlgorithm::Slow),
            other => Err(SortError::invalid_algorithm(&other.to_string())),
        }
    }

    /// The strategy implementing this algorithm
    pub fn sorter(&self) -> &'static dyn Sorter {
        match self {
            SortAlgorithm::Bubble => &BubbleSort,
            SortAlgorithm::Quick => &QuickSort,
            SortAlgorithm::Shell => &ShellSort,
            SortAlgorithm::Slow => &SlowSort,
        }
    }
}

impl SortOrder {
    /// Map the direction selector: "1" is ascending, anything else descending
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "1" | "asc" | "ascending" => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }

    /// True when `a` must come after `b` in this order
    #[inline]
    pub fn out_of_order(&self, a: Record, b: Record) -> bool {
        match self {
            SortOrder::Ascending => a.key() > b.key(),
            SortOrder::Descending => a.key() < b.key(),
        }
    }

    /// True when `a` must come strictly before `b` in this order
    #[inline]
    pub fn precedes(&self, a: Record, b: Record) -> bool {
        match self {
            SortOrder::Ascending => a.key() < b.key(),
            SortOrder::Descending => a.key() > b.key(),
        }
    }

    /// Check that a slice is sorted in this order
    pub fn is_sorted(&self, records: &[Record]) -> bool {
        records.windows(2).all(|w| !self.out_of_order(w[0], w[1]))
    }
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Algorithm used for the run
    pub algorithm: SortAlgorithm,
    /// Sort order (ascending or descending)
    pub order: SortOrder,
    /// Only the first `byte_limit` bytes of the input are parsed
    pub byte_limit: usize,
    /// Input file path
    pub input_file: String,
    /// Output file path
    pub output_file: String,
    /// Extension the input path must end with (without the dot)
    pub expected_extension: String,
    /// Debug mode (verbose diagnostics)
    pub debug: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            algorithm: SortAlgorithm::Quick,
            order: SortOrder::Ascending,
            byte_limit: usize::MAX,
            input_file: DEFAULT_INPUT_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            expected_extension: DEFAULT_EXTENSION.to_string(),
            debug: false,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort algorithm
    pub fn with_algorithm(mut self, algorithm: SortAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Set the number of input bytes considered
    pub fn with_byte_limit(mut self, byte_limit: usize) -> Self {
        self.byte_limit = byte_limit;
        self
    }

    /// Set input file
    pub fn with_input_file(mut self, input_file: impl Into<String>) -> Self {
        self.input_file = input_file.into();
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: impl Into<String>) -> Self {
        self.output_file = output_file.into();
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.input_file.is_empty() {
            return Err(SortError::invalid_config("input file path is empty"));
        }

        if self.output_file.is_empty() {
            return Err(SortError::invalid_config("output file path is empty"));
        }

        if self.expected_extension.is_empty() || self.expected_extension.contains('.') {
            return Err(SortError::invalid_config(&format!(
                "invalid expected extension: {:?}",
                self.expected_extension
            )));
        }

        if self.input_file == self.output_file {
            return Err(SortError::invalid_config(
                "input and output must be different files",
            ));
        }

        Ok(())
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(selector) = s.parse::<i64>() {
            return Self::from_selector(selector);
        }
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "quick" => Ok(SortAlgorithm::Quick),
            "shell" => Ok(SortAlgorithm::Shell),
            "slow" => Ok(SortAlgorithm::Slow),
            _ => Err(SortError::invalid_algorithm(s)),
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Slow => "slow",
        };
        write!(f, "{name}")
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        };
        write!(f, "{name}")
    }
}
