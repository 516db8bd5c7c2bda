mod config;
mod overlap;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seglap";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find the spans where labeled numeric segments overlap.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Increase logging verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            arg!(-q --quiet "Disable logging")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(overlap::cli::create_overlap_cli())
}

/// Set up env_logger from `-v` repetitions. `RUST_LOG` still wins when set.
fn init_logging(matches: &ArgMatches) {
    if matches.get_flag("quiet") {
        return;
    }

    let log_level = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // OVERLAP
        //
        Some((overlap::cli::OVERLAP_CMD, matches)) => {
            overlap::handlers::run_overlap(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
