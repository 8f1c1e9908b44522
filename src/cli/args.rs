use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::models::Country;

#[derive(Parser, Debug)]
#[command(name = "georesolve")]
#[command(about = "Coordinate system and DMS conversion for East African survey data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Write logs as JSON lines")]
    pub log_json: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file [default: ./georesolve.toml when present]"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a coordinate pair between reference systems
    Convert {
        #[arg(long, help = "Country context [default: from settings]")]
        country: Option<Country>,

        #[arg(short, long, help = "Source CRS id [default: from settings]")]
        from: Option<String>,

        #[arg(short, long, help = "Target CRS id [default: from settings]")]
        to: Option<String>,

        #[arg(help = "Longitude or easting", allow_negative_numbers = true)]
        x: String,

        #[arg(help = "Latitude or northing", allow_negative_numbers = true)]
        y: String,
    },

    /// Convert decimal degrees to degrees-minutes-seconds
    ToDms {
        #[arg(help = "Latitude in decimal degrees", allow_negative_numbers = true)]
        latitude: String,

        #[arg(help = "Longitude in decimal degrees", allow_negative_numbers = true)]
        longitude: String,
    },

    /// Convert degrees-minutes-seconds to decimal degrees
    ToDecimal {
        #[arg(
            long,
            num_args = 4,
            value_names = ["DEG", "MIN", "SEC", "N|S"],
            allow_negative_numbers = true
        )]
        lat: Vec<String>,

        #[arg(
            long,
            num_args = 4,
            value_names = ["DEG", "MIN", "SEC", "E|W"],
            allow_negative_numbers = true
        )]
        lon: Vec<String>,
    },

    /// List the supported coordinate reference systems
    ListCrs,
}
