pub mod album;
pub mod builder;
pub mod catalog;
pub mod error;
pub mod fs;
pub mod generator;
pub mod metadata;
pub mod render;
pub mod sample;
pub mod song;
pub mod utils;
pub mod weights;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use sample::{BingoCard, WeightMode};
pub use song::Song;
