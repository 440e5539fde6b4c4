//! Checksum index over an osu! Songs folder.
//!
//! Replays reference their beatmap by the MD5 of the `.osu` file, so the
//! library hashes every difficulty it can find, including those still packed
//! in `.osz` archives. The index only lives for the current run.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use md5::{Digest, Md5};
use tracing::{debug, info, warn};
use zip::ZipArchive;

use super::Beatmap;
use crate::error::{Error, Result};

/// Where an indexed `.osu` file can be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeatmapSource {
    File(PathBuf),
    Archive { archive: PathBuf, entry: String },
}

#[derive(Debug, Default)]
pub struct BeatmapLibrary {
    index: HashMap<String, BeatmapSource>,
}

impl BeatmapLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recursively hash every `.osu` file and `.osz` entry under `songs_dir`.
    pub fn scan<P: AsRef<Path>>(songs_dir: P) -> Result<Self> {
        let songs_dir = songs_dir.as_ref();
        if !songs_dir.is_dir() {
            return Err(Error::SongsDirNotFound(songs_dir.to_path_buf()));
        }

        let mut library = Self::new();
        library.scan_dir(songs_dir)?;
        info!(
            "Indexed {} beatmaps under {}",
            library.len(),
            songs_dir.display()
        );
        Ok(library)
    }

    fn scan_dir(&mut self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            // Symlinked folders are not followed, so link cycles cannot recurse
            let (path, file_type) = match entry.and_then(|e| Ok((e.path(), e.file_type()?))) {
                Ok(found) => found,
                Err(e) => {
                    warn!("Failed to read entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                if let Err(e) = self.scan_dir(&path) {
                    warn!("Failed to scan {}: {}", path.display(), e);
                }
                continue;
            }

            let result = match extension_lowercase(&path).as_deref() {
                Some("osu") => self.index_file(&path),
                Some("osz") => self.index_archive(&path),
                _ => Ok(()),
            };
            if let Err(e) = result {
                warn!("Skipping {}: {}", path.display(), e);
            }
        }
        Ok(())
    }

    fn index_file(&mut self, path: &Path) -> Result<()> {
        let bytes = fs::read(path)?;
        self.insert(md5_hex(&bytes), BeatmapSource::File(path.to_path_buf()));
        Ok(())
    }

    fn index_archive(&mut self, path: &Path) -> Result<()> {
        let mut archive = ZipArchive::new(File::open(path)?)?;
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() || !entry.name().to_ascii_lowercase().ends_with(".osu") {
                continue;
            }
            let name = entry.name().to_string();
            let mut bytes = Vec::new();
            entry.read_to_end(&mut bytes)?;
            self.insert(
                md5_hex(&bytes),
                BeatmapSource::Archive {
                    archive: path.to_path_buf(),
                    entry: name,
                },
            );
        }
        Ok(())
    }

    /// Register a source under a checksum. Later duplicates are ignored.
    pub fn insert(&mut self, md5: String, source: BeatmapSource) {
        if let Some(existing) = self.index.get(&md5) {
            debug!("Duplicate beatmap {} ({:?}), keeping {:?}", md5, source, existing);
            return;
        }
        self.index.insert(md5, source);
    }

    pub fn source(&self, md5: &str) -> Option<&BeatmapSource> {
        self.index.get(&md5.to_ascii_lowercase())
    }

    /// Load and parse the beatmap with the given checksum, if indexed.
    pub fn lookup(&self, md5: &str) -> Result<Option<Beatmap>> {
        let Some(source) = self.source(md5) else {
            return Ok(None);
        };

        let bytes = match source {
            BeatmapSource::File(path) => fs::read(path)?,
            BeatmapSource::Archive { archive, entry } => {
                let mut archive = ZipArchive::new(File::open(archive)?)?;
                let mut file = archive.by_name(entry)?;
                let mut bytes = Vec::new();
                file.read_to_end(&mut bytes)?;
                bytes
            }
        };

        Beatmap::parse(&String::from_utf8_lossy(&bytes)).map(Some)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

/// Lowercase hex MD5, the form replays store.
pub fn md5_hex(bytes: &[u8]) -> String {
    format!("{:x}", Md5::digest(bytes))
}

fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MAP: &str = "osu file format v14\n[Metadata]\nTitle:Loose\n[HitObjects]\n10,20,300,1\n";

    #[test]
    fn test_md5_hex() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            BeatmapLibrary::scan(&missing),
            Err(Error::SongsDirNotFound(_))
        ));
    }

    #[test]
    fn test_scan_nested_files() {
        let dir = tempfile::tempdir().unwrap();
        let set_dir = dir.path().join("123 Artist - Loose");
        fs::create_dir(&set_dir).unwrap();
        fs::write(set_dir.join("map [Hard].osu"), MAP).unwrap();
        fs::write(set_dir.join("audio.mp3"), b"not a map").unwrap();

        let library = BeatmapLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.len(), 1);

        let hash = md5_hex(MAP.as_bytes());
        let map = library.lookup(&hash).unwrap().unwrap();
        assert_eq!(map.title, "Loose");
        assert_eq!(map.hit_objects.len(), 1);

        // Checksums are matched case-insensitively
        assert!(library.lookup(&hash.to_uppercase()).unwrap().is_some());
        assert!(library.lookup("0000").unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlinked_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let set_dir = dir.path().join("123 Artist - Loose");
        fs::create_dir(&set_dir).unwrap();
        fs::write(set_dir.join("map [Hard].osu"), MAP).unwrap();
        // Link back to the Songs root: following it would recurse forever
        std::os::unix::fs::symlink(dir.path(), set_dir.join("loop")).unwrap();

        let library = BeatmapLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert_eq!(
            library.source(&md5_hex(MAP.as_bytes())),
            Some(&BeatmapSource::File(set_dir.join("map [Hard].osu")))
        );
    }

    #[test]
    fn test_scan_osz_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("456 Packed.osz");
        {
            let file = File::create(&archive_path).unwrap();
            let mut zip = zip::ZipWriter::new(file);
            let options = zip::write::SimpleFileOptions::default();
            zip.start_file("packed [Normal].osu", options).unwrap();
            zip.write_all(MAP.as_bytes()).unwrap();
            zip.start_file("bg.jpg", options).unwrap();
            zip.write_all(b"jpeg").unwrap();
            zip.finish().unwrap();
        }

        let library = BeatmapLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.len(), 1);

        let hash = md5_hex(MAP.as_bytes());
        assert!(matches!(
            library.source(&hash),
            Some(BeatmapSource::Archive { entry, .. }) if entry == "packed [Normal].osu"
        ));
        let map = library.lookup(&hash).unwrap().unwrap();
        assert_eq!(map.title, "Loose");
    }

    #[test]
    fn test_corrupt_archive_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.osz"), b"not a zip").unwrap();
        fs::write(dir.path().join("ok.osu"), MAP).unwrap();

        let library = BeatmapLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.len(), 1);
    }
}
