use crate::config::{SortAlgorithm, SortConfig, SortOrder};
use crate::error::{SortContext, SortResult};
use crate::ingest::{check_file_format, read_records};
use crate::record::Record;
use itertools::Itertools;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one completed run
#[derive(Debug, Clone)]
pub struct SortReport {
    /// Records in their final order
    pub records: Vec<Record>,
    /// Wall-clock time of the sort call alone
    pub elapsed: Duration,
}

/// Drives one read → sort → write run for a resolved configuration
pub struct SortDriver {
    config: SortConfig,
}

impl SortDriver {
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    /// Execute the run, writing progress messages to `out`
    ///
    /// Fails before anything is written to the output file when the input
    /// path has the wrong extension or cannot be read.
    pub fn run<W: Write>(&self, out: &mut W) -> SortResult<SortReport> {
        let config = &self.config;
        config.validate()?;

        debug!(
            algorithm = %config.algorithm,
            order = %config.order,
            byte_limit = config.byte_limit,
            input = %config.input_file,
            output = %config.output_file,
            "starting run"
        );

        check_file_format(&config.input_file, &config.expected_extension)?;
        writeln!(out, "File read successfully.")?;

        let mut records = read_records(Path::new(&config.input_file), config.byte_limit)?;
        writeln!(out, "Records read from input file: {}", records.len())?;

        let elapsed = sort_records(config.algorithm, config.order, &mut records);
        if config.debug {
            debug!(sorted = config.order.is_sorted(&records), "order verified");
        }
        writeln!(out, "Sort time: {} nanoseconds", elapsed.as_nanos())?;
        writeln!(out, "Sorted data: {}", format_records(&records))?;

        write_records(Path::new(&config.output_file), &records)?;
        writeln!(out, "Sorted data written to {}", config.output_file)?;
        out.flush()?;

        Ok(SortReport { records, elapsed })
    }
}

/// Sort `records` in place and return how long the sort alone took
pub fn sort_records(
    algorithm: SortAlgorithm,
    order: SortOrder,
    records: &mut [Record],
) -> Duration {
    let sorter = algorithm.sorter();

    let start = Instant::now();
    sorter.sort(records, order);
    let elapsed = start.elapsed();

    info!(
        algorithm = sorter.name(),
        %order,
        records = records.len(),
        ?elapsed,
        "sort finished"
    );
    elapsed
}

/// Render records space-separated, without a trailing separator
pub fn format_records(records: &[Record]) -> String {
    records.iter().join(" ")
}

/// Write records to `path` in the same form as [`format_records`]
pub fn write_records(path: &Path, records: &[Record]) -> SortResult<()> {
    let name = path.to_string_lossy();
    let file = File::create(path).with_output_context(&name)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(format_records(records).as_bytes())
        .with_output_context(&name)?;
    writer.flush().with_output_context(&name)?;

    debug!(file = %name, records = records.len(), "output written");
    Ok(())
}
