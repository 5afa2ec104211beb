// Clap definitions in derive style

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gizzo_bingo::WeightMode;
use gizzo_bingo::builder::SongsConfig;
use gizzo_bingo::generator::CardConfig;
use gizzo_bingo::weights::DEFAULT_REFERENCE_YEAR;

#[derive(Parser)]
#[command(name = "gizzo_bingo", version, about)]
pub struct Cli {
    /// Set the level of verbosity
    /// -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a bingo card PDF
    Card {
        /// Output file name, without extension
        #[arg(short = 'f', long, default_value = "output")]
        filename: String,

        /// Word across the top of the card, one letter per column
        #[arg(short = 't', long = "top-word", default_value = "GIZZO")]
        top_word: String,

        /// Leave album covers off the card
        #[arg(long = "no-album-covers", default_value_t = false)]
        no_album_covers: bool,

        /// How songs are weighted when drawn
        #[arg(short = 'w', long, value_enum, default_value_t = WeightMode::Hybrid)]
        weight: WeightMode,

        /// Seed for a reproducible card
        #[arg(short = 's', long)]
        seed: Option<u64>,

        /// Song table
        #[arg(long, default_value = "data/song_data.csv")]
        songs: PathBuf,

        /// Directory holding <prefix>.jpg covers and the watermark
        #[arg(long = "covers-dir", default_value = "album_covers")]
        covers_dir: PathBuf,

        /// Directory the PDF is written to
        #[arg(long = "output-dir", default_value = "output")]
        output_dir: PathBuf,
    },

    /// Build the song table from saved album pages
    Songs {
        /// Album index CSV (prefix, full album, Year)
        #[arg(long, default_value = "data/album_data.csv")]
        index: PathBuf,

        /// Directory with the saved <prefix>.htm pages
        #[arg(long = "data-dir", default_value = "data")]
        data_dir: PathBuf,

        /// Where album covers are copied to
        #[arg(long = "covers-dir", default_value = "album_covers")]
        covers_dir: PathBuf,

        /// Song table to write
        #[arg(short = 'o', long, default_value = "data/song_data.csv")]
        out: PathBuf,

        /// Year release years are measured against
        #[arg(long = "reference-year", default_value_t = DEFAULT_REFERENCE_YEAR)]
        reference_year: i32,

        /// Do not copy album covers
        #[arg(long = "skip-covers", default_value_t = false)]
        skip_covers: bool,
    },
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

pub enum Job {
    Card(CardConfig),
    Songs(SongsConfig),
}

impl From<Commands> for Job {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Card {
                filename,
                top_word,
                no_album_covers,
                weight,
                seed,
                songs,
                covers_dir,
                output_dir,
            } => Job::Card(CardConfig {
                filename,
                top_word,
                album_covers: !no_album_covers,
                weight,
                seed,
                songs,
                covers_dir,
                output_dir,
            }),
            Commands::Songs {
                index,
                data_dir,
                covers_dir,
                out,
                reference_year,
                skip_covers,
            } => Job::Songs(SongsConfig {
                index,
                data_dir,
                covers_dir,
                out,
                reference_year,
                copy_covers: !skip_covers,
            }),
        }
    }
}
