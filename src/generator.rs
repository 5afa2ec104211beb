//! The card pipeline: song table in, one PDF out.

use std::path::PathBuf;

use log::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::render::{self, Banner, PAGE_SIZE, RenderOptions, Surface, SvgSurface};
use crate::sample::{BingoCard, WeightMode};

#[derive(Debug, Clone)]
pub struct CardConfig {
    /// Output file name without extension.
    pub filename: String,
    pub top_word: String,
    pub album_covers: bool,
    pub weight: WeightMode,
    pub seed: Option<u64>,
    pub songs: PathBuf,
    pub covers_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for CardConfig {
    fn default() -> Self {
        CardConfig {
            filename: "output".to_string(),
            top_word: "GIZZO".to_string(),
            album_covers: true,
            weight: WeightMode::default(),
            seed: None,
            songs: PathBuf::from("data/song_data.csv"),
            covers_dir: PathBuf::from("album_covers"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl CardConfig {
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.pdf", self.filename))
    }
}

/// Builds the card in memory and writes `<output_dir>/<filename>.pdf`.
pub fn generate(config: &CardConfig) -> Result<PathBuf> {
    // Validate the banner before doing any work.
    let banner = Banner::new(&config.top_word)?;
    let catalog = Catalog::load(&config.songs)?;

    let card = BingoCard::deal(&catalog, config.weight, config.seed)?;
    info!(
        "Dealt card with {} weighting (seed: {:?})",
        card.mode(),
        card.seed()
    );

    let options = RenderOptions {
        banner,
        album_covers: config.album_covers,
        covers_dir: config.covers_dir.clone(),
    };
    let mut surface = SvgSurface::new(PAGE_SIZE, PAGE_SIZE);
    render::draw_card(&mut surface, &card, &catalog, &options)?;

    let path = config.output_path();
    surface.save(&path)?;
    Ok(path)
}
