use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coordkit::convert::{DEFAULT_INPUT, DEFAULT_OUTPUT};
use coordkit::{convert_driver_file, parse_coordinates, Coord3d, Coord3dArray, Result, Winding};

#[derive(Debug, Parser)]
#[clap(
    name = "coordkit",
    about = "Tools for KML coordinate strings and driver location CSVs",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[clap(
        name = "parse",
        about = "Parse coordinate text and report its points and winding order"
    )]
    Parse {
        /// File holding the coordinate text (stdin when omitted)
        #[clap(value_parser)]
        input: Option<PathBuf>,

        /// Reject malformed tokens instead of skipping them
        #[clap(long, action)]
        strict: bool,

        /// Append the first point when the ring is not closed
        #[clap(long, action)]
        close_loop: bool,

        /// Reverse the ring if needed so it winds cw or ccw
        #[clap(long, value_parser)]
        winding: Option<Winding>,

        /// Print JSON instead of coordinate text
        #[clap(long, action)]
        json: bool,
    },

    #[clap(
        name = "convert",
        about = "Convert a degrees-minutes-seconds driver CSV to decimal degrees"
    )]
    Convert {
        /// Input CSV with Lat, Long and Driverid columns
        #[clap(long, value_parser, default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Output CSV
        #[clap(long, value_parser, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    points: &'a Coord3dArray,
    winding: Option<Winding>,
    closed: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    match args.command {
        Commands::Parse {
            input,
            strict,
            close_loop,
            winding,
            json,
        } => {
            let text = match &input {
                Some(path) => fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mut array = if strict {
                Coord3dArray::from_text(&text)?
            } else {
                parse_coordinates(&text)?.into_iter().map(Coord3d::from).collect()
            };
            info!(points = array.len(), "parsed coordinates");

            if close_loop {
                array.close_loop();
            }
            if let Some(target) = winding {
                if array.ensure_winding(target) {
                    info!(winding = %target, "reversed winding order");
                }
            }

            let report = ParseReport {
                points: &array,
                winding: array.winding(),
                closed: array.first_equals_last().unwrap_or(false),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.points);
                match report.winding {
                    Some(w) => println!("winding: {}", w),
                    None => println!("winding: none"),
                }
                println!("closed: {}", report.closed);
            }
        }
        Commands::Convert { input, output } => {
            let summary = convert_driver_file(&input, &output)?;
            println!("{} rows written to {}", summary.rows, output.display());
        }
    }

    Ok(())
}
