use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::{info, trace};
use serde::Serialize;

use seglap_core::models::SegmentId;
use seglap_io::{
    Delimiter, LengthUnit, OutputFormat, OverlapWrite, ReadOptions, STDIO_PATH,
    get_dynamic_reader_w_stdin, get_dynamic_writer_w_stdout, read_raw_records,
};
use seglap_overlaprs::{CalculateOptions, ScannerType, calculate};

use crate::config::{IdType, OverlapConfig};

/// Suffix appended to the input path when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = ".overlap";

///
/// Everything one run of the `overlap` command needs, after merging the
/// command line, the optional config file and the defaults.
///
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapSettings {
    pub input: String,
    pub output: String,
    pub id_type: IdType,
    pub read: ReadOptions,
    pub calculate: CalculateOptions,
    pub format: OutputFormat,
    pub unit: LengthUnit,
}

impl OverlapSettings {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let config = match matches.get_one::<String>("config") {
            Some(path) => OverlapConfig::try_from(Path::new(path))
                .with_context(|| format!("Failed to read config file: {}", path))?,
            None => OverlapConfig::default(),
        };

        let input = matches
            .get_one::<String>("input")
            .cloned()
            .context("A path to an input file is required.")?;

        let output = matches.get_one::<String>("output").cloned().unwrap_or_else(|| {
            if input == STDIO_PATH {
                STDIO_PATH.to_string()
            } else {
                format!("{}{}", input, DEFAULT_OUTPUT_SUFFIX)
            }
        });

        let delimiter = matches
            .get_one::<Delimiter>("delimiter")
            .copied()
            .or(config.delimiter)
            .unwrap_or_else(|| Delimiter::from_path(Path::new(&input)));

        let read = ReadOptions {
            delimiter,
            has_header: matches.get_flag("header") || config.header.unwrap_or(false),
            comment: config.comment.or(ReadOptions::default().comment),
        };

        let defaults = CalculateOptions::default();
        let calculate = CalculateOptions {
            minimum_shared_segments: matches
                .get_one::<usize>("min-shared")
                .copied()
                .or(config.minimum_shared_segments)
                .unwrap_or(defaults.minimum_shared_segments),
            scanner: matches
                .get_one::<ScannerType>("scanner")
                .copied()
                .or(config.scanner)
                .unwrap_or(defaults.scanner),
            require_segments: matches.get_flag("require-segments")
                || config.require_segments.unwrap_or(defaults.require_segments),
            parallel: matches.get_flag("parallel") || config.parallel.unwrap_or(defaults.parallel),
        };

        let format = matches
            .get_one::<OutputFormat>("format")
            .copied()
            .or(config.format)
            .unwrap_or_else(|| OutputFormat::from_path(Path::new(&output)));

        Ok(OverlapSettings {
            id_type: matches
                .get_one::<IdType>("id-type")
                .copied()
                .or(config.id_type)
                .unwrap_or_default(),
            unit: matches
                .get_one::<LengthUnit>("unit")
                .copied()
                .or(config.unit)
                .unwrap_or_default(),
            input,
            output,
            read,
            calculate,
            format,
        })
    }
}

pub fn run_overlap(matches: &ArgMatches) -> Result<()> {
    let settings = OverlapSettings::from_matches(matches)?;

    match settings.id_type {
        IdType::Int => run_with_ids::<i64>(&settings),
        IdType::String => run_with_ids::<String>(&settings),
    }
}

fn run_with_ids<I>(settings: &OverlapSettings) -> Result<()>
where
    I: SegmentId + Serialize,
{
    let reader = get_dynamic_reader_w_stdin(&settings.input)
        .with_context(|| format!("Could not read file {}", settings.input))?;
    let records = read_raw_records(reader, &settings.read)
        .with_context(|| format!("Could not read records from {}", settings.input))?;
    info!(
        "Read {} records from {} ({} separated)",
        records.len(),
        settings.input,
        settings.read.delimiter
    );

    let overlaps = calculate::<I, _>(records, &settings.calculate)
        .with_context(|| format!("Could not compute overlaps for {}", settings.input))?;

    for overlap in &overlaps {
        trace!(
            "Overlap starting from {} and ending at {} (length: {}) shared by {} segments: {:?}",
            overlap.start,
            overlap.end,
            settings.unit.format(overlap.length),
            overlap.segment_count,
            overlap.segments
        );
    }

    let mut writer = get_dynamic_writer_w_stdout(&settings.output)
        .with_context(|| format!("Could not create output file {}", settings.output))?;
    overlaps
        .write_format(&mut writer, settings.format, settings.unit)
        .with_context(|| format!("Could not write overlaps to {}", settings.output))?;
    writer
        .finish()
        .with_context(|| format!("Could not finish writing {}", settings.output))?;

    info!(
        "Wrote {} overlaps to {} as {}",
        overlaps.len(),
        settings.output,
        settings.format
    );

    Ok(())
}
