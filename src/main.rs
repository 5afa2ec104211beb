#![allow(clippy::uninlined_format_args)]

mod cli;

use clap::Parser;
use gizzo_bingo::{builder, generator};
use log::{error, info};

use crate::cli::{Cli, Job};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let result = match Job::from(cli.command) {
        Job::Card(config) => generator::generate(&config).map(|path| {
            println!("Bingo card saved to {}", path.display());
        }),
        Job::Songs(config) => builder::build(&config).map(|catalog| {
            info!("Song table ready at {:?}", config.out);
            println!(
                "Song table built with {} songs: {}",
                catalog.len(),
                config.out.display()
            );
        }),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
