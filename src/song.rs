use serde::{Deserialize, Serialize};

use crate::album::Album;

/// One row of the song data table.
///
/// Column order matches the table written by the `songs` subcommand:
/// `title, plays, prefix, album_display_name, year, year_weight, popularity_weight, hybrid_weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub plays: f64,
    pub prefix: String,
    pub album_display_name: String,
    pub year: i32,

    #[serde(default)]
    pub year_weight: f64,
    #[serde(default)]
    pub popularity_weight: f64,
    #[serde(default)]
    pub hybrid_weight: f64,
}

impl Song {
    /// A song of `album` with its weights still unset.
    pub fn new(title: impl Into<String>, plays: f64, album: &Album) -> Self {
        Song {
            title: title.into(),
            plays,
            prefix: album.prefix.clone(),
            album_display_name: album.name.clone(),
            year: album.year,
            year_weight: 0.0,
            popularity_weight: 0.0,
            hybrid_weight: 0.0,
        }
    }
}
