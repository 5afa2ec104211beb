//! Drawing songs for a card and placing them on the 5×5 grid.

use std::fmt;
use std::str::FromStr;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::song::Song;

pub const GRID_SIZE: usize = 5;
/// Songs drawn per card. The draw for the centre position is thrown away.
pub const DRAW_SIZE: usize = GRID_SIZE * GRID_SIZE;
pub const CENTER: usize = GRID_SIZE / 2;
pub const FREE_SPACE: &str = "FREE SPACE";

/// Which weight column biases the draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum WeightMode {
    Popularity,
    Year,
    #[default]
    Hybrid,
    /// Every song equally likely.
    #[value(name = "none")]
    Uniform,
}

impl WeightMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightMode::Popularity => "popularity",
            WeightMode::Year => "year",
            WeightMode::Hybrid => "hybrid",
            WeightMode::Uniform => "none",
        }
    }

    /// Selection weight of a song under this mode.
    pub fn weight_of(self, song: &Song) -> f64 {
        match self {
            WeightMode::Popularity => song.popularity_weight,
            WeightMode::Year => song.year_weight,
            WeightMode::Hybrid => song.hybrid_weight,
            WeightMode::Uniform => 1.0,
        }
    }
}

impl fmt::Display for WeightMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "popularity" => Ok(WeightMode::Popularity),
            "year" => Ok(WeightMode::Year),
            "hybrid" => Ok(WeightMode::Hybrid),
            "none" => Ok(WeightMode::Uniform),
            other => Err(Error::WeightMode(other.to_string())),
        }
    }
}

/// Random source for one card: reproducible with a seed, entropy-seeded without.
pub fn card_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draws `DRAW_SIZE` distinct titles without replacement, in selection order.
///
/// Each song gets the key `ln(u) / w` with `u` uniform in (0, 1) and `w` its weight;
/// the largest keys win. Taking keys in log space keeps tiny weights from collapsing
/// to ties. Songs with zero weight are never drawn.
pub fn draw<'a, R: Rng>(
    catalog: &'a Catalog,
    mode: WeightMode,
    rng: &mut R,
) -> Result<Vec<&'a str>> {
    let songs = catalog.songs();
    if songs.len() < DRAW_SIZE {
        return Err(Error::CatalogTooSmall {
            needed: DRAW_SIZE,
            found: songs.len(),
        });
    }

    let mut keyed: Vec<(f64, &Song)> = Vec::with_capacity(songs.len());
    for song in songs {
        let weight = mode.weight_of(song);
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::Sampling(format!(
                "invalid {} weight {} for '{}'",
                mode, weight, song.title
            )));
        }
        if weight == 0.0 {
            continue;
        }
        let u: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
        keyed.push((u.ln() / weight, song));
    }

    if keyed.len() < DRAW_SIZE {
        return Err(Error::CatalogTooSmall {
            needed: DRAW_SIZE,
            found: keyed.len(),
        });
    }

    keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
    keyed.truncate(DRAW_SIZE);

    debug!("Drew {} songs with {} weighting", keyed.len(), mode);
    Ok(keyed.into_iter().map(|(_, s)| s.title.as_str()).collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Song(String),
    FreeSpace,
}

impl Cell {
    pub fn label(&self) -> &str {
        match self {
            Cell::Song(title) => title,
            Cell::FreeSpace => FREE_SPACE,
        }
    }
}

/// A dealt card: the grid plus how it was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BingoCard {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
    discarded: String,
    mode: WeightMode,
    seed: Option<u64>,
}

impl BingoCard {
    /// Draws and lays out a card from the catalog.
    pub fn deal(catalog: &Catalog, mode: WeightMode, seed: Option<u64>) -> Result<Self> {
        let mut rng = card_rng(seed);
        let titles = draw(catalog, mode, &mut rng)?;
        BingoCard::from_draw(&titles, mode, seed)
    }

    /// Places a full draw row-major and puts the free space over the centre draw.
    pub fn from_draw(titles: &[&str], mode: WeightMode, seed: Option<u64>) -> Result<Self> {
        if titles.len() != DRAW_SIZE {
            return Err(Error::CatalogTooSmall {
                needed: DRAW_SIZE,
                found: titles.len(),
            });
        }

        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| {
                if row == CENTER && col == CENTER {
                    Cell::FreeSpace
                } else {
                    Cell::Song(titles[row * GRID_SIZE + col].to_string())
                }
            })
        });
        let discarded = titles[CENTER * GRID_SIZE + CENTER].to_string();
        debug!("Centre draw '{}' replaced by {}", discarded, FREE_SPACE);

        Ok(BingoCard {
            cells,
            discarded,
            mode,
            seed,
        })
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Titles shown on the card, row-major, without the free space.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().flatten().filter_map(|cell| match cell {
            Cell::Song(title) => Some(title.as_str()),
            Cell::FreeSpace => None,
        })
    }

    /// The song drawn for the centre, which the free space hides.
    pub fn discarded(&self) -> &str {
        &self.discarded
    }

    pub fn mode(&self) -> WeightMode {
        self.mode
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
