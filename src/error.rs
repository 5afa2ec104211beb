use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed page {path:?}: {message}")]
    Page { path: PathBuf, message: String },

    #[error("Invalid play count: {0:?}")]
    PlayCount(String),

    #[error(
        "Album '{prefix}' was released in {year}, year weighting needs a reference year after it (got {reference})"
    )]
    ReferenceYear {
        prefix: String,
        year: i32,
        reference: i32,
    },

    #[error("Cannot normalize {column}: {message}")]
    DegenerateWeights {
        column: &'static str,
        message: String,
    },

    #[error("Duplicate song title in catalog: '{0}'")]
    DuplicateTitle(String),

    #[error("Catalog has {found} songs, a card needs at least {needed}")]
    CatalogTooSmall { needed: usize, found: usize },

    #[error("Unknown weighting mode '{0}' (expected popularity, year, hybrid or none)")]
    WeightMode(String),

    #[error("Weighted sampling failed: {0}")]
    Sampling(String),

    #[error("Banner '{0}' is shorter than 5 characters")]
    BannerTooShort(String),

    #[error("Missing image asset {0:?}")]
    MissingAsset(PathBuf),

    #[error("Unknown song '{0}'")]
    UnknownSong(String),

    #[error("Document conversion failed: {0}")]
    Document(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Error::Csv {
            path: path.into(),
            source,
        }
    }
}
