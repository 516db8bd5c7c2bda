use std::str::FromStr;

use clap::{Arg, ArgAction, Command, arg, value_parser};

use seglap_io::{Delimiter, LengthUnit, OutputFormat};
use seglap_overlaprs::ScannerType;

use crate::config::IdType;

pub const OVERLAP_CMD: &str = "overlap";

pub fn create_overlap_cli() -> Command {
    Command::new(OVERLAP_CMD)
        .about("Find every pair of segment endpoints shared by several segments")
        .arg_required_else_help(true)
        .arg(arg!(<input> "Segment file with `id start end` per line (plain or .gz, `-` for stdin)"))
        .arg(arg!([output] "Where to write the overlaps (default: <input>.overlap, `-` for stdout)"))
        .arg(
            Arg::new("min-shared")
                .short('m')
                .long("min-shared")
                .value_parser(value_parser!(usize))
                .help("Minimum number of segments two points must share [default: 2]"),
        )
        .arg(
            arg!(--scanner <scanner>)
                .required(false)
                .value_parser(ScannerType::from_str)
                .help("Which scan strategy to use (pairwise or sweep) [default: sweep]"),
        )
        .arg(
            Arg::new("id-type")
                .long("id-type")
                .value_parser(IdType::from_str)
                .help("Parse segment ids as integers or strings (int or string) [default: int]"),
        )
        .arg(
            arg!(-d --delimiter <delimiter>)
                .required(false)
                .value_parser(Delimiter::from_str)
                .help("Input field separator (tab or comma) [default: from file extension]"),
        )
        .arg(
            arg!(--header "Skip the first non-comment line of the input")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-f --format <format>)
                .required(false)
                .value_parser(OutputFormat::from_str)
                .help("Output format (tsv, csv or json) [default: from output extension]"),
        )
        .arg(
            arg!(-u --unit <unit>)
                .required(false)
                .value_parser(LengthUnit::from_str)
                .help("Unit of the reported length; days and years read bounds as unix seconds [default: raw]"),
        )
        .arg(
            arg!(--parallel "Spread the work over all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("require-segments")
                .long("require-segments")
                .action(ArgAction::SetTrue)
                .help("Fail when the input holds no segments"),
        )
        .arg(
            arg!(-c --config <config>)
                .required(false)
                .help("TOML file with default settings for this command"),
        )
}
