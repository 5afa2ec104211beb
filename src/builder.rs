//! The song table pipeline: album index and saved pages in, weighted song table out.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::album::{Album, read_index};
use crate::catalog::Catalog;
use crate::error::Result;
use crate::fs::copy_cover;
use crate::metadata::read_page;
use crate::song::Song;
use crate::weights::{DEFAULT_REFERENCE_YEAR, assign_weights, parse_plays};

/// Titles containing any of these are alternate cuts and left out of the table.
const EXCLUDED_VARIANTS: &[&str] = &["(Extended Mix)"];

#[derive(Debug, Clone)]
pub struct SongsConfig {
    pub index: PathBuf,
    /// Holds `<prefix>.htm` pages and their `<prefix>_files` folders.
    pub data_dir: PathBuf,
    pub covers_dir: PathBuf,
    pub out: PathBuf,
    pub reference_year: i32,
    pub copy_covers: bool,
}

impl Default for SongsConfig {
    fn default() -> Self {
        SongsConfig {
            index: PathBuf::from("data/album_data.csv"),
            data_dir: PathBuf::from("data"),
            covers_dir: PathBuf::from("album_covers"),
            out: PathBuf::from("data/song_data.csv"),
            reference_year: DEFAULT_REFERENCE_YEAR,
            copy_covers: true,
        }
    }
}

fn is_excluded(title: &str) -> bool {
    EXCLUDED_VARIANTS.iter().any(|v| title.contains(v))
}

/// Songs of one album, read from its saved page.
pub fn album_songs(config: &SongsConfig, album: &Album) -> Result<Vec<Song>> {
    let tracks = read_page(&config.data_dir.join(album.page_file()))?;

    let mut songs = Vec::with_capacity(tracks.len());
    for track in tracks {
        if is_excluded(&track.title) {
            warn!("Dropping variant '{}' from {}", track.title, album.prefix);
            continue;
        }
        let plays = parse_plays(&track.plays)?;
        debug!("{} / {}: {} plays", album.prefix, track.title, plays);
        songs.push(Song::new(track.title, plays, album));
    }
    Ok(songs)
}

/// Builds the catalog from the index without writing anything.
pub fn build_catalog(config: &SongsConfig) -> Result<Catalog> {
    let albums = read_index(&config.index)?;

    let mut songs = Vec::new();
    for album in &albums {
        let mut album_songs = album_songs(config, album)?;
        info!("{}: {} songs", album.name, album_songs.len());
        songs.append(&mut album_songs);
    }

    assign_weights(&mut songs, config.reference_year)?;
    let catalog = Catalog::new(songs)?;

    if config.copy_covers {
        for album in &albums {
            copy_cover(&config.data_dir, &config.covers_dir, &album.prefix)?;
        }
        info!("Copied {} covers to {:?}", albums.len(), config.covers_dir);
    }

    Ok(catalog)
}

/// Builds the catalog and writes the song table to `config.out`.
pub fn build(config: &SongsConfig) -> Result<Catalog> {
    let catalog = build_catalog(config)?;
    catalog.save(&config.out)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extended_mixes_are_excluded() {
        assert!(is_excluded("Iron Lung (Extended Mix)"));
        assert!(!is_excluded("Iron Lung"));
    }
}
