use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::error::{Error, Result};

/// Where a saved YouTube Music page keeps its album cover, relative to the data directory.
const SAVED_COVER: &str = "unnamed.jpg";

/// Reads a text file as UTF-8, falling back to Latin-1 for files that are not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            debug!("{:?} is not UTF-8, decoding as Latin-1", path);
            // Every Latin-1 byte maps to the code point of the same value.
            Ok(err.into_bytes().into_iter().map(char::from).collect())
        }
    }
}

/// Writes `contents` to `path` in one go, creating missing parent directories.
pub fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Cover art path for an album prefix inside a covers directory.
pub fn cover_path(covers_dir: &Path, prefix: &str) -> PathBuf {
    covers_dir.join(format!("{}.jpg", prefix))
}

/// Copies the cover saved alongside `<prefix>.htm` into `<covers_dir>/<prefix>.jpg`.
pub fn copy_cover(data_dir: &Path, covers_dir: &Path, prefix: &str) -> Result<PathBuf> {
    let source = data_dir.join(format!("{}_files", prefix)).join(SAVED_COVER);
    let target = cover_path(covers_dir, prefix);

    fs::create_dir_all(covers_dir).map_err(|e| Error::io(covers_dir, e))?;
    fs::copy(&source, &target).map_err(|e| Error::io(&source, e))?;

    debug!("Copied cover {:?} -> {:?}", source, target);
    Ok(target)
}
