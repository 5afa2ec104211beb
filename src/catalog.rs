use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::info;

use crate::error::{Error, Result};
use crate::fs::write_file;
use crate::song::Song;

/// Album details needed to label a song on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumRef<'a> {
    pub display_name: &'a str,
    pub prefix: &'a str,
}

/// The song table, with titles checked for uniqueness.
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Vec<Song>,
    by_title: HashMap<String, usize>,
}

impl Catalog {
    /// Builds the catalog, failing on the first title seen twice.
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        let mut by_title = HashMap::with_capacity(songs.len());

        for (index, song) in songs.iter().enumerate() {
            let key = song.title.trim().to_string();
            if by_title.insert(key, index).is_some() {
                return Err(Error::DuplicateTitle(song.title.clone()));
            }
        }

        Ok(Catalog { songs, by_title })
    }

    /// Loads a song table written by the `songs` subcommand.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| Error::csv(path, e))?;

        let songs = reader
            .deserialize::<Song>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::csv(path, e))?;

        info!("Song table loaded with {} songs.", songs.len());
        Catalog::new(songs)
    }

    /// Writes the table; the whole file is serialized before anything touches disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new().has_headers(true).from_writer(Vec::new());
        for song in &self.songs {
            writer.serialize(song).map_err(|e| Error::csv(path, e))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::io(path, e.into_error()))?;

        write_file(path, &bytes)?;
        info!("Wrote {} songs to {:?}", self.songs.len(), path);
        Ok(())
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Song> {
        self.by_title.get(title.trim()).map(|&i| &self.songs[i])
    }

    /// Album display name and cover prefix for a title on the card.
    pub fn album_of(&self, title: &str) -> Result<AlbumRef<'_>> {
        let song = self
            .get(title)
            .ok_or_else(|| Error::UnknownSong(title.to_string()))?;

        Ok(AlbumRef {
            display_name: &song.album_display_name,
            prefix: &song.prefix,
        })
    }
}
