use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::fs::read_text;

/// One row of the album index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Album {
    pub prefix: String,

    #[serde(rename = "full album")]
    pub name: String,

    #[serde(rename = "Year")]
    pub year: i32,
}

impl Album {
    /// File name of the saved album page inside the data directory.
    pub fn page_file(&self) -> String {
        format!("{}.htm", self.prefix)
    }
}

/// Reads the album index (`prefix`, `full album`, `Year`).
///
/// The index is usually exported from a spreadsheet, so Latin-1 files are accepted too.
pub fn read_index(path: &Path) -> Result<Vec<Album>> {
    let text = read_text(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut albums = Vec::new();
    for record in reader.deserialize::<Album>() {
        let album = record.map_err(|e| Error::csv(path, e))?;
        debug!("Indexed album {} ({}, {})", album.prefix, album.name, album.year);
        albums.push(album);
    }

    info!("Album index loaded with {} albums.", albums.len());
    Ok(albums)
}
