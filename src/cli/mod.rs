//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use indicatif::ProgressBar;

use crate::par::station::{DEFAULT_ID, DEFAULT_LATITUDE, DEFAULT_LONGITUDE, DEFAULT_STATION_TYPE};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a CLIGEN .par file from 15 minute climate data
    Convert(ConvertArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Input 15 minute climate data file (*.csv)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output parameter file (*.par). Defaults to the input path with a .par extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Station name. Defaults to the input file name
    #[arg(long)]
    pub name: Option<String>,

    /// Station id
    #[arg(long, default_value = DEFAULT_ID)]
    pub id: String,

    #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_hyphen_values = true)]
    pub latitude: f64,

    #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Station elevation in feet
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub elevation: f64,

    /// CLIGEN station type
    #[arg(long, default_value_t = DEFAULT_STATION_TYPE, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub station_type: u8,
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn should_parse_convert_defaults() {
        let cli = Cli::try_parse_from(["cligen-par", "convert", "-i", "station.csv"]).unwrap();
        let Commands::Convert(args) = cli.command;

        assert_eq!(args.input, PathBuf::from("station.csv"));
        assert_eq!(args.output, None);
        assert_eq!(args.id, "000000 0");
        assert_eq!(args.latitude, 46.73);
        assert_eq!(args.longitude, -117.0);
        assert_eq!(args.station_type, 3);
    }

    #[test]
    fn should_parse_station_overrides() {
        let cli = Cli::try_parse_from([
            "cligen-par",
            "convert",
            "--input",
            "a.csv",
            "--output",
            "b.par",
            "--name",
            "SOTONERA",
            "--longitude",
            "-0.5",
            "--station-type",
            "1",
        ])
        .unwrap();
        let Commands::Convert(args) = cli.command;

        assert_eq!(args.output, Some(PathBuf::from("b.par")));
        assert_eq!(args.name.as_deref(), Some("SOTONERA"));
        assert_eq!(args.longitude, -0.5);
        assert_eq!(args.station_type, 1);
    }

    #[test]
    fn should_reject_bad_station_type() {
        let result = Cli::try_parse_from([
            "cligen-par", "convert", "-i", "a.csv", "--station-type", "7",
        ]);

        assert!(result.is_err());
    }
}
