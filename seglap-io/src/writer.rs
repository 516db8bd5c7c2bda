use std::fmt::{self, Display};
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};

use seglap_core::models::{OverlapRecord, SegmentId};

use crate::error::Result;
use crate::reader::Delimiter;
use crate::utils::get_dynamic_writer;

/// Column names of the overlap table, in output order.
pub const OVERLAP_COLUMNS: [&str; 5] = [
    "overlap_length",
    "overlap_start",
    "overlap_end",
    "segment_count",
    "segment_list",
];

const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;
const SECONDS_PER_YEAR: f64 = 60.0 * 60.0 * 8760.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Tsv,
    Csv,
    Json,
}

impl OutputFormat {
    /// Pick a format from the file name, falling back to TSV.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default()
            .to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);

        if name.ends_with(".json") {
            OutputFormat::Json
        } else if name.ends_with(".csv") {
            OutputFormat::Csv
        } else {
            OutputFormat::Tsv
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tsv" => Ok(OutputFormat::Tsv),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format: {}. Valid options are 'tsv', 'csv' or 'json'",
                s
            )),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tsv => write!(f, "tsv"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

///
/// Unit the overlap length is reported in.
///
/// `Days` and `Years` read segment bounds as unix seconds. A year is 8760
/// hours. Only the length column is converted; start and end are written as
/// they were read.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    #[default]
    Raw,
    Days,
    Years,
}

impl LengthUnit {
    pub fn convert(self, length: f64) -> f64 {
        match self {
            LengthUnit::Raw => length,
            LengthUnit::Days => length / SECONDS_PER_DAY,
            LengthUnit::Years => length / SECONDS_PER_YEAR,
        }
    }

    /// Format a length for a text table: as-is for raw values, two decimals
    /// once converted.
    pub fn format(self, length: f64) -> String {
        match self {
            LengthUnit::Raw => length.to_string(),
            _ => format!("{:.2}", self.convert(length)),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(LengthUnit::Raw),
            "days" | "day" => Ok(LengthUnit::Days),
            "years" | "year" => Ok(LengthUnit::Years),
            _ => Err(format!(
                "Invalid length unit: {}. Valid options are 'raw', 'days' or 'years'",
                s
            )),
        }
    }
}

#[derive(Serialize)]
struct OverlapRow<'a, I: Serialize> {
    overlap_length: f64,
    overlap_start: f64,
    overlap_end: f64,
    segment_count: usize,
    segment_list: &'a [I],
}

pub trait OverlapWrite {
    ///
    /// Write overlaps as a delimited table with a header row.
    ///
    /// # Arguments
    /// - writer: where to write to
    /// - delimiter: the column separator
    /// - unit: the unit for the length column
    fn write_delimited<W: Write>(
        &self,
        writer: W,
        delimiter: Delimiter,
        unit: LengthUnit,
    ) -> Result<()>;

    ///
    /// Write overlaps as a JSON array of objects.
    fn write_json<W: Write>(&self, writer: W, unit: LengthUnit) -> Result<()>;

    fn write_tsv<W: Write>(&self, writer: W, unit: LengthUnit) -> Result<()> {
        self.write_delimited(writer, Delimiter::Tab, unit)
    }

    fn write_csv<W: Write>(&self, writer: W, unit: LengthUnit) -> Result<()> {
        self.write_delimited(writer, Delimiter::Comma, unit)
    }

    fn write_format<W: Write>(&self, writer: W, format: OutputFormat, unit: LengthUnit) -> Result<()> {
        match format {
            OutputFormat::Tsv => self.write_tsv(writer, unit),
            OutputFormat::Csv => self.write_csv(writer, unit),
            OutputFormat::Json => self.write_json(writer, unit),
        }
    }

    ///
    /// Write overlaps to disk, gzip'd when the path ends in `.gz`.
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_to_path<P: AsRef<Path>>(
        &self,
        path: P,
        format: OutputFormat,
        unit: LengthUnit,
    ) -> Result<()> {
        let mut writer = get_dynamic_writer(path.as_ref())?;
        self.write_format(&mut writer, format, unit)?;
        writer.finish()
    }
}

impl<I> OverlapWrite for [OverlapRecord<I>]
where
    I: SegmentId + Serialize,
{
    fn write_delimited<W: Write>(
        &self,
        writer: W,
        delimiter: Delimiter,
        unit: LengthUnit,
    ) -> Result<()> {
        let mut table = WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);

        table.write_record(OVERLAP_COLUMNS)?;
        for record in self {
            let segment_list = record
                .segments
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            table.write_record([
                unit.format(record.length),
                record.start.to_string(),
                record.end.to_string(),
                record.segment_count.to_string(),
                segment_list,
            ])?;
        }

        table.flush()?;
        Ok(())
    }

    fn write_json<W: Write>(&self, mut writer: W, unit: LengthUnit) -> Result<()> {
        let rows: Vec<OverlapRow<'_, I>> = self
            .iter()
            .map(|record| OverlapRow {
                overlap_length: unit.convert(record.length),
                overlap_start: record.start,
                overlap_end: record.end,
                segment_count: record.segment_count,
                segment_list: &record.segments,
            })
            .collect();

        serde_json::to_writer_pretty(&mut writer, &rows)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    use pretty_assertions::assert_eq;
    use rstest::*;

    use crate::utils::get_dynamic_reader;

    #[fixture]
    fn overlaps() -> Vec<OverlapRecord<String>> {
        vec![
            OverlapRecord::new(5.0, 10.0, vec!["a".to_string(), "b".to_string()]),
            OverlapRecord::new(10.0, 12.5, vec!["a".to_string(), "c".to_string()]),
        ]
    }

    fn render(overlaps: &[OverlapRecord<String>], format: OutputFormat, unit: LengthUnit) -> String {
        let mut buffer = Vec::new();
        overlaps.write_format(&mut buffer, format, unit).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[rstest]
    fn test_write_tsv(overlaps: Vec<OverlapRecord<String>>) {
        assert_eq!(
            render(&overlaps, OutputFormat::Tsv, LengthUnit::Raw),
            "overlap_length\toverlap_start\toverlap_end\tsegment_count\tsegment_list\n\
             5\t5\t10\t2\ta,b\n\
             2.5\t10\t12.5\t2\ta,c\n"
        );
    }

    #[rstest]
    fn test_write_csv_quotes_segment_list(overlaps: Vec<OverlapRecord<String>>) {
        assert_eq!(
            render(&overlaps, OutputFormat::Csv, LengthUnit::Raw),
            "overlap_length,overlap_start,overlap_end,segment_count,segment_list\n\
             5,5,10,2,\"a,b\"\n\
             2.5,10,12.5,2,\"a,c\"\n"
        );
    }

    #[rstest]
    fn test_write_json(overlaps: Vec<OverlapRecord<String>>) {
        let rendered = render(&overlaps, OutputFormat::Json, LengthUnit::Raw);
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["overlap_start"], 5.0);
        assert_eq!(value[0]["segment_count"], 2);
        assert_eq!(value[1]["segment_list"], serde_json::json!(["a", "c"]));
    }

    #[rstest]
    fn test_json_integer_ids_stay_numbers() {
        let overlaps = vec![OverlapRecord::new(0.0, 1.0, vec![1_i64, 2])];
        let mut buffer = Vec::new();
        overlaps.write_json(&mut buffer, LengthUnit::Raw).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["segment_list"], serde_json::json!([1, 2]));
    }

    #[rstest]
    fn test_years_unit_formats_two_decimals() {
        let year = 60.0 * 60.0 * 8760.0;
        let overlaps = vec![OverlapRecord::new(0.0, 1.5 * year, vec![1_i64, 2])];
        let mut buffer = Vec::new();
        overlaps.write_tsv(&mut buffer, LengthUnit::Years).unwrap();

        let rendered = String::from_utf8(buffer).unwrap();
        assert_eq!(rendered.lines().nth(1).unwrap(), "1.50\t0\t47304000\t2\t1,2");
    }

    #[rstest]
    #[case(LengthUnit::Raw, 172800.0, 172800.0)]
    #[case(LengthUnit::Days, 172800.0, 2.0)]
    #[case(LengthUnit::Years, 31536000.0, 1.0)]
    fn test_length_unit_convert(#[case] unit: LengthUnit, #[case] length: f64, #[case] expected: f64) {
        assert_eq!(unit.convert(length), expected);
    }

    #[rstest]
    #[case("out.tsv", OutputFormat::Tsv)]
    #[case("out.csv", OutputFormat::Csv)]
    #[case("out.json.gz", OutputFormat::Json)]
    #[case("unix_tuples.txt.overlap", OutputFormat::Tsv)]
    fn test_output_format_from_path(#[case] name: &str, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::from_path(Path::new(name)), expected);
    }

    #[rstest]
    fn test_write_to_gzipped_path(overlaps: Vec<OverlapRecord<String>>) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("overlaps.tsv.gz");

        overlaps
            .write_to_path(&path, OutputFormat::Tsv, LengthUnit::Raw)
            .unwrap();

        let mut content = String::new();
        get_dynamic_reader(&path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content.lines().count(), 3);
        assert!(content.ends_with("2.5\t10\t12.5\t2\ta,c\n"));
    }
}
