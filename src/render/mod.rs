//! Card layout, drawn onto any [`Surface`].
//!
//! Coordinates are points on a 12in square page, origin top-left, y pointing down.

pub mod svg;

use std::path::{Path, PathBuf};

use log::debug;

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::fs::cover_path;
use crate::sample::{BingoCard, CENTER, Cell, FREE_SPACE, GRID_SIZE};
use crate::utils::wrap;

pub use svg::SvgSurface;

pub const PAGE_SIZE: f32 = 864.0;
pub const CELL_SIZE: f32 = 130.0;
const BOARD_SIZE: f32 = CELL_SIZE * GRID_SIZE as f32;
const BOARD_LEFT: f32 = (PAGE_SIZE - BOARD_SIZE) / 2.0;
const BOARD_TOP: f32 = 130.0;
const GRID_LINE_WIDTH: f32 = 2.5;

const TITLE_WRAP: usize = 14;
const ALBUM_WRAP: usize = 16;
const LINE_SPACING: f32 = 1.2;

const COVER_OPACITY: f32 = 0.25;
const COVER_INSET: f32 = 6.0;
const WATERMARK: &str = "gator.jpg";
const WATERMARK_SIZE: f32 = 40.0;

pub const BANNER_LEN: usize = 5;
const ATTRIBUTION: &str = "https://github.com/reeserich/king_gizz_bingo";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Square of side `size` centred on `center`.
    pub fn centered(center: Point, size: f32) -> Self {
        Rect {
            x: center.x - size / 2.0,
            y: center.y - size / 2.0,
            width: size,
            height: size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn css(self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::White => "#ffffff",
        }
    }
}

/// How a label is painted. Text is always centred horizontally on its anchor point,
/// which sits on the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub italic: bool,
    pub color: Color,
    /// Stroke width of a black outline painted under the fill.
    pub outline: Option<f32>,
}

impl TextStyle {
    /// White text with a black outline, readable over cover art.
    pub const fn outlined(size: f32, outline: f32) -> Self {
        TextStyle {
            size,
            italic: false,
            color: Color::White,
            outline: Some(outline),
        }
    }

    pub const fn plain(size: f32) -> Self {
        TextStyle {
            size,
            italic: false,
            color: Color::Black,
            outline: None,
        }
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

const TITLE_STYLE: TextStyle = TextStyle::outlined(14.0, 2.0);
const ALBUM_STYLE: TextStyle = TextStyle::outlined(10.0, 1.0).italic();
const FREE_SPACE_STYLE: TextStyle = TextStyle::outlined(14.0, 2.0);
const BANNER_STYLE: TextStyle = TextStyle::outlined(74.0, 4.0);
const CAPTION_STYLE: TextStyle = TextStyle::plain(14.0);
const ATTRIBUTION_STYLE: TextStyle = TextStyle::plain(14.0).italic();

/// A drawing backend for cards.
pub trait Surface {
    fn line(&mut self, from: Point, to: Point, width: f32);

    fn text(&mut self, at: Point, text: &str, style: &TextStyle);

    /// Places the image file at `path` inside `area`. A missing file is an error.
    fn image(&mut self, path: &Path, area: Rect, opacity: f32) -> Result<()>;

    /// Writes the finished document to `path`.
    fn save(self, path: &Path) -> Result<()>
    where
        Self: Sized;
}

/// The five letters written above the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner([char; BANNER_LEN]);

impl Banner {
    /// Takes the first five characters of `word`; fewer than five is an error.
    pub fn new(word: &str) -> Result<Self> {
        let mut letters = [' '; BANNER_LEN];
        let mut chars = word.chars();
        for slot in letters.iter_mut() {
            *slot = chars
                .next()
                .ok_or_else(|| Error::BannerTooShort(word.to_string()))?;
        }
        if chars.next().is_some() {
            debug!("Banner '{}' truncated to five letters", word);
        }
        Ok(Banner(letters))
    }

    pub fn letters(&self) -> &[char; BANNER_LEN] {
        &self.0
    }
}

impl Default for Banner {
    fn default() -> Self {
        Banner(['G', 'I', 'Z', 'Z', 'O'])
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub banner: Banner,
    /// Draw album covers behind songs and the watermark in the centre.
    pub album_covers: bool,
    pub covers_dir: PathBuf,
}

fn cell_center(row: usize, col: usize) -> Point {
    Point::new(
        BOARD_LEFT + (col as f32 + 0.5) * CELL_SIZE,
        BOARD_TOP + (row as f32 + 0.5) * CELL_SIZE,
    )
}

/// Draws the whole card onto `surface`.
pub fn draw_card<S: Surface>(
    surface: &mut S,
    card: &BingoCard,
    catalog: &Catalog,
    options: &RenderOptions,
) -> Result<()> {
    draw_grid(surface);

    for (row, cells) in card.rows().iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Song(title) => draw_song(surface, row, col, title, catalog, options)?,
                Cell::FreeSpace => draw_free_space(surface, options)?,
            }
        }
    }

    draw_banner(surface, &options.banner);
    draw_caption(surface, card);
    Ok(())
}

fn draw_grid<S: Surface>(surface: &mut S) {
    let right = BOARD_LEFT + BOARD_SIZE;
    let bottom = BOARD_TOP + BOARD_SIZE;

    for i in 0..=GRID_SIZE {
        let offset = i as f32 * CELL_SIZE;
        surface.line(
            Point::new(BOARD_LEFT + offset, BOARD_TOP),
            Point::new(BOARD_LEFT + offset, bottom),
            GRID_LINE_WIDTH,
        );
        surface.line(
            Point::new(BOARD_LEFT, BOARD_TOP + offset),
            Point::new(right, BOARD_TOP + offset),
            GRID_LINE_WIDTH,
        );
    }
}

fn draw_song<S: Surface>(
    surface: &mut S,
    row: usize,
    col: usize,
    title: &str,
    catalog: &Catalog,
    options: &RenderOptions,
) -> Result<()> {
    let album = catalog.album_of(title)?;
    let center = cell_center(row, col);

    if options.album_covers {
        let cover = cover_path(&options.covers_dir, album.prefix);
        surface.image(
            &cover,
            Rect::centered(center, CELL_SIZE - 2.0 * COVER_INSET),
            COVER_OPACITY,
        )?;
    }

    // Title sits above the centre line, the album name hangs below it.
    let title_lines = wrap(title, TITLE_WRAP);
    let step = TITLE_STYLE.size * LINE_SPACING;
    let last_baseline = center.y - 4.0;
    for (i, line) in title_lines.iter().enumerate() {
        let from_bottom = (title_lines.len() - 1 - i) as f32;
        surface.text(
            Point::new(center.x, last_baseline - from_bottom * step),
            line,
            &TITLE_STYLE,
        );
    }

    let step = ALBUM_STYLE.size * LINE_SPACING;
    let first_baseline = center.y + 0.05 * CELL_SIZE + ALBUM_STYLE.size;
    for (i, line) in wrap(album.display_name, ALBUM_WRAP).iter().enumerate() {
        surface.text(
            Point::new(center.x, first_baseline + i as f32 * step),
            line,
            &ALBUM_STYLE,
        );
    }

    Ok(())
}

fn draw_free_space<S: Surface>(surface: &mut S, options: &RenderOptions) -> Result<()> {
    let center = cell_center(CENTER, CENTER);

    if options.album_covers {
        let watermark = Point::new(center.x, center.y + 0.1 * CELL_SIZE);
        surface.image(
            &options.covers_dir.join(WATERMARK),
            Rect::centered(watermark, WATERMARK_SIZE),
            1.0,
        )?;
    }

    let baseline = center.y - 0.25 * CELL_SIZE + FREE_SPACE_STYLE.size * 0.35;
    surface.text(
        Point::new(center.x, baseline),
        FREE_SPACE,
        &FREE_SPACE_STYLE,
    );
    Ok(())
}

fn draw_banner<S: Surface>(surface: &mut S, banner: &Banner) {
    let baseline = BOARD_TOP - 0.25 * CELL_SIZE + BANNER_STYLE.size * 0.35;
    for (col, letter) in banner.letters().iter().enumerate() {
        let x = cell_center(0, col).x;
        surface.text(
            Point::new(x, baseline),
            &letter.to_string(),
            &BANNER_STYLE,
        );
    }
}

fn draw_caption<S: Surface>(surface: &mut S, card: &BingoCard) {
    let seed = card
        .seed()
        .map_or_else(|| "None".to_string(), |s| s.to_string());
    let caption = format!(
        "Generated with KGLW Bingo Generator (weighting: {}, seed: {})",
        card.mode(),
        seed
    );

    let x = PAGE_SIZE / 2.0;
    let bottom = BOARD_TOP + BOARD_SIZE;
    surface.text(Point::new(x, bottom + 0.25 * CELL_SIZE + 5.0), &caption, &CAPTION_STYLE);
    surface.text(
        Point::new(x, bottom + 0.5 * CELL_SIZE + 5.0),
        ATTRIBUTION,
        &ATTRIBUTION_STYLE,
    );
}
