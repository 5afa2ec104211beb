//! Play count parsing and the three normalized weight columns of the song table.

use log::debug;

use crate::error::{Error, Result};
use crate::song::Song;

/// Year the play counts were collected in; release years are measured against it.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Parses a play count as shown on a music page: `"57"`, `"12K plays"`, `"3.4M"`, `"1,204 plays"`.
pub fn parse_plays(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let count = trimmed
        .strip_suffix(" plays")
        .or_else(|| trimmed.strip_suffix(" play"))
        .unwrap_or(trimmed)
        .trim();

    let multiplier = match count.chars().last().map(|c| c.to_ascii_uppercase()) {
        Some('K') => 1_000.0,
        Some('M') => 1_000_000.0,
        Some('B') => 1_000_000_000.0,
        _ => 1.0,
    };

    let digits: String = count
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let value: f64 = digits
        .parse()
        .map_err(|_| Error::PlayCount(raw.to_string()))?;

    Ok(value * multiplier)
}

/// Scales `values` so they sum to 1.
pub fn normalize(values: &[f64], column: &'static str) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::DegenerateWeights {
            column,
            message: "no songs".to_string(),
        });
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(Error::DegenerateWeights {
            column,
            message: format!("invalid raw weight {}", bad),
        });
    }

    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Err(Error::DegenerateWeights {
            column,
            message: "all raw weights are zero".to_string(),
        });
    }

    Ok(values.iter().map(|v| v / total).collect())
}

/// Fills `year_weight`, `popularity_weight` and `hybrid_weight` for every song.
///
/// Each column sums to 1 afterwards. Fails if any album is not strictly older
/// than `reference_year`.
pub fn assign_weights(songs: &mut [Song], reference_year: i32) -> Result<()> {
    let mut recency = Vec::with_capacity(songs.len());
    for song in songs.iter() {
        if song.year >= reference_year {
            return Err(Error::ReferenceYear {
                prefix: song.prefix.clone(),
                year: song.year,
                reference: reference_year,
            });
        }
        recency.push(1.0 / f64::from(reference_year - song.year));
    }
    let plays: Vec<f64> = songs.iter().map(|s| s.plays).collect();

    let year = normalize(&recency, "year_weight")?;
    let popularity = normalize(&plays, "popularity_weight")?;

    for (song, (y, p)) in songs.iter_mut().zip(year.into_iter().zip(popularity)) {
        song.year_weight = y;
        song.popularity_weight = p;
        song.hybrid_weight = (y + p) / 2.0;
    }

    debug!(
        "Weighted {} songs against reference year {}",
        songs.len(),
        reference_year
    );
    Ok(())
}
