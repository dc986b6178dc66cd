//! Saving the résumé to disk

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::Result;

const MAX_SUFFIX: u32 = 999;

/// Copy `source` into `download_dir` as `file_name`, never replacing an
/// existing file: `cv.pdf` becomes `cv (1).pdf`, `cv (2).pdf`, ...
pub fn save_copy(source: &Path, download_dir: &Path, file_name: &str) -> Result<PathBuf> {
    if !source.is_file() {
        return Err(CoreError::AssetMissing(source.to_path_buf()));
    }

    std::fs::create_dir_all(download_dir)?;

    let mut input = File::open(source)?;
    let (target, bytes) = write_unique(&mut input, download_dir, file_name)?;

    tracing::info!(
        source = %source.display(),
        target = %target.display(),
        bytes,
        "Saved résumé"
    );

    Ok(target)
}

/// Write `input` to a new file in `dir`. A failed write leaves no file behind.
fn write_unique(input: &mut impl Read, dir: &Path, file_name: &str) -> Result<(PathBuf, u64)> {
    let (mut output, target) = create_unique(dir, file_name)?;

    match std::io::copy(input, &mut output) {
        Ok(bytes) => Ok((target, bytes)),
        Err(e) => {
            drop(output);
            if let Err(remove_err) = std::fs::remove_file(&target) {
                tracing::warn!(
                    target = %target.display(),
                    error = %remove_err,
                    "Could not remove partial résumé copy"
                );
            }
            Err(e.into())
        }
    }
}

fn create_unique(dir: &Path, file_name: &str) -> Result<(File, PathBuf)> {
    for n in 0..=MAX_SUFFIX {
        let candidate = dir.join(numbered_name(file_name, n));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((file, candidate)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    Err(CoreError::Io(std::io::Error::new(
        ErrorKind::AlreadyExists,
        format!("too many copies of {file_name}"),
    )))
}

fn numbered_name(file_name: &str, n: u32) -> String {
    if n == 0 {
        return file_name.to_string();
    }

    let path = Path::new(file_name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem} ({n}).{ext}"),
        None => format!("{stem} ({n})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_name() {
        assert_eq!(numbered_name("cv.pdf", 0), "cv.pdf");
        assert_eq!(numbered_name("cv.pdf", 2), "cv (2).pdf");
        assert_eq!(numbered_name("README", 1), "README (1)");
        assert_eq!(
            numbered_name("Resume - Google Docs.pdf", 1),
            "Resume - Google Docs (1).pdf"
        );
    }

    #[test]
    fn test_copy_never_overwrites() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let source = assets.path().join("cv.pdf");
        std::fs::write(&source, b"%PDF-1.4 new").unwrap();

        let existing = downloads.path().join("cv.pdf");
        std::fs::write(&existing, b"keep me").unwrap();

        let saved = save_copy(&source, downloads.path(), "cv.pdf").unwrap();
        assert_eq!(saved, downloads.path().join("cv (1).pdf"));
        assert_eq!(std::fs::read(&existing).unwrap(), b"keep me");
        assert_eq!(std::fs::read(&saved).unwrap(), b"%PDF-1.4 new");

        let again = save_copy(&source, downloads.path(), "cv.pdf").unwrap();
        assert_eq!(again, downloads.path().join("cv (2).pdf"));
    }

    #[test]
    fn test_creates_download_dir() {
        let assets = tempfile::tempdir().unwrap();
        let downloads = tempfile::tempdir().unwrap();
        let source = assets.path().join("cv.pdf");
        std::fs::write(&source, b"pdf").unwrap();

        let nested = downloads.path().join("a/b");
        let saved = save_copy(&source, &nested, "cv.pdf").unwrap();
        assert_eq!(saved, nested.join("cv.pdf"));
    }

    /// Yields some bytes, then fails
    struct BrokenReader {
        sent: bool,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.sent {
                return Err(std::io::Error::new(ErrorKind::Other, "disk went away"));
            }
            self.sent = true;
            let chunk = b"%PDF-1.4 partial";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_failed_copy_leaves_no_file() {
        let downloads = tempfile::tempdir().unwrap();

        let result = write_unique(&mut BrokenReader { sent: false }, downloads.path(), "cv.pdf");
        assert!(matches!(result, Err(CoreError::Io(_))));

        let leftovers: Vec<_> = std::fs::read_dir(downloads.path()).unwrap().collect();
        assert!(leftovers.is_empty());

        // The next attempt still gets the plain name
        let (target, bytes) =
            write_unique(&mut &b"%PDF"[..], downloads.path(), "cv.pdf").unwrap();
        assert_eq!(target, downloads.path().join("cv.pdf"));
        assert_eq!(bytes, 4);
    }

    #[test]
    fn test_missing_asset() {
        let downloads = tempfile::tempdir().unwrap();
        let result = save_copy(Path::new("/nonexistent/cv.pdf"), downloads.path(), "cv.pdf");
        assert!(matches!(result, Err(CoreError::AssetMissing(_))));
    }
}
