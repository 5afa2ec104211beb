//! Extraction of `(title, plays)` rows from saved YouTube Music album pages.

use std::path::Path;

use log::{debug, warn};
use scraper::{Html, Selector};

use crate::error::{Error, Result};
use crate::fs::read_text;

/// Track title cells; the full title is kept in the `title` attribute.
const TITLE_SELECTOR: &str =
    "yt-formatted-string.title.complex-string.ytmusic-responsive-list-item-renderer";

/// Secondary columns of a track row; on album pages these hold the play count.
const PLAYS_SELECTOR: &str = "yt-formatted-string.flex-column.ytmusic-responsive-list-item-renderer";

/// A track as listed on an album page, before play counts are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTrack {
    pub title: String,
    pub plays: String,
}

/// Reads and parses one saved album page.
pub fn read_page(path: &Path) -> Result<Vec<PageTrack>> {
    let html = read_text(path)?;
    parse_page(&html).map_err(|message| Error::Page {
        path: path.to_path_buf(),
        message,
    })
}

/// Pairs every track title on the page with its play count string, in page order.
pub fn parse_page(html: &str) -> std::result::Result<Vec<PageTrack>, String> {
    let document = Html::parse_document(html);
    let title_selector = Selector::parse(TITLE_SELECTOR).map_err(|e| e.to_string())?;
    let plays_selector = Selector::parse(PLAYS_SELECTOR).map_err(|e| e.to_string())?;

    let titles = attribute_values(&document, &title_selector);
    let plays = attribute_values(&document, &plays_selector);

    if titles.is_empty() {
        return Err("no track titles found".to_string());
    }
    if titles.len() != plays.len() {
        return Err(format!(
            "found {} track titles but {} play counts",
            titles.len(),
            plays.len()
        ));
    }

    debug!("Parsed {} tracks from page", titles.len());
    Ok(titles
        .into_iter()
        .zip(plays)
        .map(|(title, plays)| PageTrack { title, plays })
        .collect())
}

fn attribute_values(document: &Html, selector: &Selector) -> Vec<String> {
    document
        .select(selector)
        .filter_map(|element| match element.value().attr("title") {
            Some(value) => Some(value.trim().to_string()),
            None => {
                warn!("Skipping element without a title attribute");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, plays: &str) -> String {
        format!(
            r#"<ytmusic-responsive-list-item-renderer class="style-scope ytmusic-shelf-renderer">
  <div class="title-column style-scope ytmusic-responsive-list-item-renderer">
    <yt-formatted-string class="title style-scope ytmusic-responsive-list-item-renderer complex-string" title="{title}">{title}</yt-formatted-string>
  </div>
  <div class="fixed-columns style-scope ytmusic-responsive-list-item-renderer">
    <yt-formatted-string class="flex-column style-scope ytmusic-responsive-list-item-renderer" title="{plays}">{plays}</yt-formatted-string>
  </div>
</ytmusic-responsive-list-item-renderer>"#
        )
    }

    fn page(rows: &[(&str, &str)]) -> String {
        let body: String = rows.iter().map(|(t, p)| row(t, p)).collect();
        format!("<html><body><div id=\"contents\">{body}</div></body></html>")
    }

    #[test]
    fn pairs_titles_with_plays() {
        let html = page(&[
            ("Robot Stop", "4.1M plays"),
            ("Big Fig Wasp", "1.9M plays"),
            ("Gamma Knife", "2.2M plays"),
        ]);

        let tracks = parse_page(&html).unwrap();
        assert_eq!(tracks.len(), 3);
        assert_eq!(
            tracks[1],
            PageTrack {
                title: "Big Fig Wasp".to_string(),
                plays: "1.9M plays".to_string(),
            }
        );
    }

    #[test]
    fn decodes_entities_in_titles() {
        let html = page(&[("Fishing for Fishies &amp; Friends", "12K plays")]);
        let tracks = parse_page(&html).unwrap();
        assert_eq!(tracks[0].title, "Fishing for Fishies & Friends");
    }

    #[test]
    fn mismatched_columns_are_malformed() {
        let mut html = page(&[("Robot Stop", "4.1M plays")]);
        html = html.replace("flex-column", "other-column");
        assert!(parse_page(&html).is_err());
    }

    #[test]
    fn empty_page_is_malformed() {
        assert!(parse_page("<html><body></body></html>").is_err());
    }

    #[test]
    fn read_page_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.htm");
        std::fs::write(&path, "<html></html>").unwrap();

        match read_page(&path) {
            Err(Error::Page { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
