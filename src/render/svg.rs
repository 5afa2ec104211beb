//! SVG backend, exported to PDF through `svg2pdf`.

use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{debug, info};
use svg2pdf::usvg::{self, fontdb};

use super::{Point, Rect, Surface, TextStyle};
use crate::error::{Error, Result};
use crate::fs::write_file;

const FONT_FAMILY: &str = "DejaVu Sans, Helvetica, Arial, sans-serif";

/// Collects drawing calls as SVG elements.
pub struct SvgSurface {
    width: f32,
    height: f32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f32, height: f32) -> Self {
        SvgSurface {
            width,
            height,
            body: String::new(),
        }
    }

    /// The complete SVG document, on a white page.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 512);
        let _ = writeln!(
            svg,
            "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' width='{w:.0}pt' height='{h:.0}pt' viewBox='0 0 {w:.0} {h:.0}'>",
            w = self.width,
            h = self.height
        );
        let _ = writeln!(
            svg,
            "  <rect width='{:.0}' height='{:.0}' fill='#ffffff'/>",
            self.width, self.height
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Converts the document to PDF bytes, outlining text with the system fonts.
    pub fn to_pdf(&self) -> Result<Vec<u8>> {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        debug!("Loaded {} font faces", fonts.len());

        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fonts);

        let tree = usvg::Tree::from_str(&self.to_svg(), &options)
            .map_err(|e| Error::Document(e.to_string()))?;

        svg2pdf::to_pdf(
            &tree,
            svg2pdf::ConversionOptions::default(),
            svg2pdf::PageOptions::default(),
        )
        .map_err(|e| Error::Document(e.to_string()))
    }
}

impl Surface for SvgSurface {
    fn line(&mut self, from: Point, to: Point, width: f32) {
        let _ = writeln!(
            self.body,
            "  <line x1='{:.2}' y1='{:.2}' x2='{:.2}' y2='{:.2}' stroke='#000000' stroke-width='{}' stroke-linecap='square'/>",
            from.x, from.y, to.x, to.y, width
        );
    }

    fn text(&mut self, at: Point, text: &str, style: &TextStyle) {
        let mut attrs = format!(
            "x='{:.2}' y='{:.2}' text-anchor='middle' font-family='{}' font-size='{}' fill='{}'",
            at.x,
            at.y,
            FONT_FAMILY,
            style.size,
            style.color.css()
        );
        if style.italic {
            attrs.push_str(" font-style='italic'");
        }
        if let Some(outline) = style.outline {
            let _ = write!(
                attrs,
                " stroke='#000000' stroke-width='{}' stroke-linejoin='round' paint-order='stroke'",
                outline
            );
        }

        let _ = writeln!(self.body, "  <text {}>{}</text>", attrs, escape_text(text));
    }

    fn image(&mut self, path: &Path, area: Rect, opacity: f32) -> Result<()> {
        if !path.is_file() {
            return Err(Error::MissingAsset(path.to_path_buf()));
        }
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;

        let _ = writeln!(
            self.body,
            "  <image x='{:.2}' y='{:.2}' width='{:.2}' height='{:.2}' opacity='{}' preserveAspectRatio='xMidYMid meet' xlink:href='data:{};base64,{}'/>",
            area.x,
            area.y,
            area.width,
            area.height,
            opacity,
            mime_type(path),
            STANDARD.encode(bytes)
        );
        Ok(())
    }

    fn save(self, path: &Path) -> Result<()> {
        let pdf = self.to_pdf()?;
        write_file(path, &pdf)?;
        info!("Card written to {:?}", path);
        Ok(())
    }
}

fn mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Color;

    #[test]
    fn writes_outlined_text() {
        let mut surface = SvgSurface::new(864.0, 864.0);
        surface.text(
            Point::new(10.0, 20.0),
            "Fishing for Fishies & <Friends>",
            &TextStyle::outlined(14.0, 2.0).italic(),
        );

        let svg = surface.to_svg();
        assert!(svg.contains("Fishing for Fishies &amp; &lt;Friends&gt;"));
        assert!(svg.contains("paint-order='stroke'"));
        assert!(svg.contains("font-style='italic'"));
        assert!(svg.contains(&format!("fill='{}'", Color::White.css())));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn plain_text_has_no_stroke() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.text(Point::new(1.0, 1.0), "caption", &TextStyle::plain(14.0));
        assert!(!surface.to_svg().contains("stroke="));
    }

    #[test]
    fn inlines_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nmi.jpg");
        std::fs::write(&path, b"not really a jpeg").unwrap();

        let mut surface = SvgSurface::new(100.0, 100.0);
        surface
            .image(&path, Rect::centered(Point::new(50.0, 50.0), 20.0), 0.25)
            .unwrap();

        let svg = surface.to_svg();
        assert!(svg.contains("data:image/jpeg;base64,"));
        assert!(svg.contains(&STANDARD.encode(b"not really a jpeg")));
        assert!(svg.contains("opacity='0.25'"));
    }

    #[test]
    fn missing_image_fails_loudly() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let err = surface
            .image(
                Path::new("album_covers/missing.jpg"),
                Rect::centered(Point::new(50.0, 50.0), 20.0),
                1.0,
            )
            .unwrap_err();
        assert!(matches!(err, Error::MissingAsset(_)));
    }

    #[test]
    fn converts_lines_to_pdf() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.line(Point::new(0.0, 0.0), Point::new(100.0, 100.0), 2.5);

        let pdf = surface.to_pdf().unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }
}
