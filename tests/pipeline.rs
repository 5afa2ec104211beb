use std::fs;
use std::path::Path;

use gizzo_bingo::builder::{self, SongsConfig};
use gizzo_bingo::generator::{self, CardConfig};
use gizzo_bingo::sample::{CENTER, Cell};
use gizzo_bingo::{BingoCard, Catalog, Error, Song, WeightMode};

fn page(tracks: &[(String, &str)]) -> String {
    let rows: String = tracks
        .iter()
        .map(|(title, plays)| {
            format!(
                r#"<ytmusic-responsive-list-item-renderer>
  <yt-formatted-string class="title style-scope ytmusic-responsive-list-item-renderer complex-string" title="{title}"></yt-formatted-string>
  <yt-formatted-string class="flex-column style-scope ytmusic-responsive-list-item-renderer" title="{plays}"></yt-formatted-string>
</ytmusic-responsive-list-item-renderer>"#
            )
        })
        .collect();
    format!("<html><body>{rows}</body></html>")
}

/// Two albums of 14 songs each, one with an extended mix that gets dropped.
fn write_fixture(root: &Path) -> SongsConfig {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    fs::write(
        data.join("album_data.csv"),
        "prefix,full album,Year\nnmi,Nonagon Infinity,2016\nfmb,Flying Microtonal Banana,2017\n",
    )
    .unwrap();

    for (prefix, plays) in [("nmi", "1.2M plays"), ("fmb", "850K plays")] {
        let mut tracks: Vec<(String, &str)> = (1..=14)
            .map(|i| (format!("{} Track {}", prefix.to_uppercase(), i), plays))
            .collect();
        tracks.push((format!("{} Track 1 (Extended Mix)", prefix.to_uppercase()), "12K plays"));
        fs::write(data.join(format!("{}.htm", prefix)), page(&tracks)).unwrap();

        let files = data.join(format!("{}_files", prefix));
        fs::create_dir_all(&files).unwrap();
        fs::write(files.join("unnamed.jpg"), b"cover").unwrap();
    }

    SongsConfig {
        index: data.join("album_data.csv"),
        data_dir: data.clone(),
        covers_dir: root.join("album_covers"),
        out: data.join("song_data.csv"),
        ..Default::default()
    }
}

#[test]
fn builds_weighted_song_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());

    let catalog = builder::build(&config).unwrap();
    assert_eq!(catalog.len(), 28);
    assert!(catalog.songs().iter().all(|s| !s.title.contains("Extended Mix")));

    let loaded = Catalog::load(&config.out).unwrap();
    assert_eq!(loaded.songs(), catalog.songs());

    let columns: [fn(&Song) -> f64; 3] = [
        |s| s.year_weight,
        |s| s.popularity_weight,
        |s| s.hybrid_weight,
    ];
    for column in columns {
        let total: f64 = loaded.songs().iter().map(column).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    let song = loaded.get("NMI Track 3").unwrap();
    assert_eq!(song.plays, 1_200_000.0);
    assert_eq!(song.album_display_name, "Nonagon Infinity");
    assert_eq!(song.year, 2016);

    assert!(config.covers_dir.join("nmi.jpg").is_file());
    assert!(config.covers_dir.join("fmb.jpg").is_file());
}

#[test]
fn reference_year_clash_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = SongsConfig {
        reference_year: 2017,
        ..write_fixture(dir.path())
    };

    let err = builder::build(&config).unwrap_err();
    assert!(matches!(err, Error::ReferenceYear { year: 2017, .. }));
    assert!(!config.out.exists());
    assert!(!config.covers_dir.exists());
}

#[test]
fn missing_page_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    fs::remove_file(config.data_dir.join("fmb.htm")).unwrap();

    assert!(matches!(builder::build(&config), Err(Error::Io { .. })));
}

#[test]
fn seeded_cards_repeat() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_fixture(dir.path());
    let catalog = builder::build(&config).unwrap();

    let a = BingoCard::deal(&catalog, WeightMode::Hybrid, Some(2024)).unwrap();
    let b = BingoCard::deal(&catalog, WeightMode::Hybrid, Some(2024)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cell(CENTER, CENTER), &Cell::FreeSpace);
}

#[test]
fn generates_card_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let songs = write_fixture(dir.path());
    builder::build(&songs).unwrap();

    let config = CardConfig {
        filename: "test_card".to_string(),
        album_covers: false,
        seed: Some(7),
        songs: songs.out.clone(),
        covers_dir: songs.covers_dir.clone(),
        output_dir: dir.path().join("output"),
        ..Default::default()
    };

    let path = generator::generate(&config).unwrap();
    assert_eq!(path, dir.path().join("output").join("test_card.pdf"));
    assert!(fs::read(&path).unwrap().starts_with(b"%PDF"));
}

#[test]
fn missing_watermark_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let songs = write_fixture(dir.path());
    builder::build(&songs).unwrap();

    // Covers were copied, but there is no gator.jpg watermark.
    let config = CardConfig {
        seed: Some(1),
        songs: songs.out.clone(),
        covers_dir: songs.covers_dir.clone(),
        output_dir: dir.path().join("output"),
        ..Default::default()
    };

    assert!(matches!(
        generator::generate(&config),
        Err(Error::MissingAsset(path)) if path.ends_with("gator.jpg")
    ));
    assert!(!config.output_path().exists());
}

#[test]
fn small_catalog_cannot_deal() {
    let dir = tempfile::tempdir().unwrap();
    let songs = write_fixture(dir.path());
    let catalog = builder::build(&songs).unwrap();

    let trimmed = Catalog::new(catalog.songs()[..24].to_vec()).unwrap();
    assert!(matches!(
        BingoCard::deal(&trimmed, WeightMode::Uniform, Some(3)),
        Err(Error::CatalogTooSmall { found: 24, .. })
    ));
}
