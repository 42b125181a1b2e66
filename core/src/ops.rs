//! File-level operations: compress/decompress a file, compress a directory.
//!
//! Every path argument goes through `utils::clean_path` before it touches the
//! filesystem, and default output names are derived from the cleaned input.
//! All calls are synchronous and own their buffers.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, error, info};

use crate::archive::serialize_directory_counted;
use crate::compression::{self, Algorithm, DEFAULT_LEVEL};
use crate::telemetry::{OperationReport, Stage, StageTimer};
use crate::types::{InputError, OpsError};
use crate::utils::{
    clean_path, default_archive_path, default_compressed_path, default_decompressed_path,
    resolve_output_path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressParams {
    pub algorithm: Algorithm,
    /// zstd: 1-22 (unchecked), brotli: clamped to 0-11, lz4/snappy: ignored.
    pub level: i32,
}

impl Default for CompressParams {
    fn default() -> Self {
        Self { algorithm: Algorithm::Zstd, level: DEFAULT_LEVEL }
    }
}

impl CompressParams {
    pub fn new(algorithm: Algorithm, level: i32) -> Self {
        Self { algorithm, level }
    }

    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self { algorithm, ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecompressParams {
    pub algorithm: Algorithm,
}

impl DecompressParams {
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

/// Compress one file, returning the path written.
///
/// Without `output_path` the output is `<input>.<tag>`.
pub fn compress_file(
    input_path: &str,
    output_path: Option<&str>,
    algorithm: Algorithm,
    level: i32,
) -> Result<String, OpsError> {
    compress_file_with_report(input_path, output_path, CompressParams::new(algorithm, level))
        .map(|(path, _)| path)
}

pub fn compress_file_with_report(
    input_path: &str,
    output_path: Option<&str>,
    params: CompressParams,
) -> Result<(String, OperationReport), OpsError> {
    let CompressParams { algorithm, level } = params;
    debug!(input = input_path, algorithm = algorithm.display_name(), level, "starting file compression");

    let normalized = clean_path(input_path);
    let mut timer = StageTimer::new();

    let result = (|| -> Result<(String, OperationReport), OpsError> {
        let data = read_input_file(&normalized, &mut timer)?;
        let compressed = timer.time(Stage::Compress, || compression::compress(&data, algorithm, level))?;

        let output = resolve_output_path(output_path, || default_compressed_path(&normalized, algorithm));
        write_output(&output, &compressed, &mut timer)?;
        timer.finish();

        let report = OperationReport::from_timer(algorithm, data.len(), compressed.len(), &timer)
            .with_output_path(output.as_str());
        Ok((output, report))
    })();

    finish("file compression", &normalized, result)
}

/// Decompress one file, returning the path written.
///
/// Without `output_path` a trailing `.<tag>` is replaced by `.decompressed`,
/// otherwise `.decompressed` is appended.
pub fn decompress_file(
    input_path: &str,
    output_path: Option<&str>,
    algorithm: Algorithm,
) -> Result<String, OpsError> {
    decompress_file_with_report(input_path, output_path, DecompressParams::new(algorithm))
        .map(|(path, _)| path)
}

pub fn decompress_file_with_report(
    input_path: &str,
    output_path: Option<&str>,
    params: DecompressParams,
) -> Result<(String, OperationReport), OpsError> {
    let DecompressParams { algorithm } = params;
    debug!(input = input_path, algorithm = algorithm.display_name(), "starting file decompression");

    let normalized = clean_path(input_path);
    let mut timer = StageTimer::new();

    let result = (|| -> Result<(String, OperationReport), OpsError> {
        let data = read_input_file(&normalized, &mut timer)?;
        let decompressed = timer.time(Stage::Decompress, || compression::decompress(&data, algorithm))?;

        let output = resolve_output_path(output_path, || default_decompressed_path(&normalized, algorithm));
        write_output(&output, &decompressed, &mut timer)?;
        timer.finish();

        let report = OperationReport::from_timer(algorithm, data.len(), decompressed.len(), &timer)
            .with_output_path(output.as_str());
        Ok((output, report))
    })();

    finish("file decompression", &normalized, result)
}

/// Archive every regular file under a directory and compress the archive.
///
/// Without `output_path` the output is `<dir>.archive.<tag>`.
pub fn compress_directory(
    directory_path: &str,
    output_path: Option<&str>,
    algorithm: Algorithm,
    level: i32,
) -> Result<String, OpsError> {
    compress_directory_with_report(directory_path, output_path, CompressParams::new(algorithm, level))
        .map(|(path, _)| path)
}

pub fn compress_directory_with_report(
    directory_path: &str,
    output_path: Option<&str>,
    params: CompressParams,
) -> Result<(String, OperationReport), OpsError> {
    let CompressParams { algorithm, level } = params;
    debug!(directory = directory_path, algorithm = algorithm.display_name(), level, "starting directory compression");

    let normalized = clean_path(directory_path);
    let mut timer = StageTimer::new();

    let result = (|| -> Result<(String, OperationReport), OpsError> {
        let (stream, entries) = timer.time(Stage::Archive, || serialize_directory_counted(Path::new(&normalized)))?;
        let compressed = timer.time(Stage::Compress, || compression::compress(&stream, algorithm, level))?;

        let output = resolve_output_path(output_path, || default_archive_path(&normalized, algorithm));
        write_output(&output, &compressed, &mut timer)?;
        timer.finish();

        let report = OperationReport::from_timer(algorithm, stream.len(), compressed.len(), &timer)
            .with_output_path(output.as_str())
            .with_entries(entries);
        Ok((output, report))
    })();

    finish("directory compression", &normalized, result)
}

fn read_input_file(path: &str, timer: &mut StageTimer) -> Result<Vec<u8>, OpsError> {
    let input = Path::new(path);
    let meta = fs::metadata(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => OpsError::from(InputError::NotFound { path: input.to_path_buf() }),
        _ => OpsError::io(input, e),
    })?;
    if !meta.is_file() {
        return Err(InputError::NotAFile { path: input.to_path_buf() }.into());
    }
    timer
        .time(Stage::Read, || fs::read(input))
        .map_err(|e| OpsError::io(input, e))
}

fn write_output(path: &str, data: &[u8], timer: &mut StageTimer) -> Result<(), OpsError> {
    timer
        .time(Stage::Write, || fs::write(path, data))
        .map_err(|e| OpsError::io(path, e))
}

fn finish(
    operation: &str,
    input: &str,
    result: Result<(String, OperationReport), OpsError>,
) -> Result<(String, OperationReport), OpsError> {
    match &result {
        Ok((output, report)) => info!(
            operation,
            input,
            output = output.as_str(),
            bytes_in = report.bytes_in,
            bytes_out = report.bytes_out,
            ratio_percent = %format!("{:.2}", report.ratio_percent),
            total_ms = report.elapsed.as_millis() as u64,
            read_ms = report.stage_ms(Stage::Read),
            write_ms = report.stage_ms(Stage::Write),
            "{operation} finished"
        ),
        Err(e) => error!(operation, input, error = %e, "{operation} failed"),
    }
    result
}
