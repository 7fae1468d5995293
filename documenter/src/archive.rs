use std::fs::{self, File};
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::errors::{Error, ErrorKind};

/// An archive unpacked into a scoped directory. Dropping the value removes
/// the directory tree, including after a partial extraction.
pub struct ExtractDir {
    path: PathBuf,
}

impl ExtractDir {
    /// Unpacks every entry of the archive at `archive_path` into `dir`.
    pub fn extract(archive_path: &Path, dir: &Path) -> Result<ExtractDir, Error> {
        let file = File::open(archive_path).map_err(|e| {
            if e.kind() == IoErrorKind::NotFound {
                Error::new(ErrorKind::ArchiveNotFound(archive_path.to_path_buf()))
            } else {
                Error::new(ErrorKind::Io(e.to_string()))
            }
        })?;
        let mut archive =
            ZipArchive::new(file).map_err(|e| Error::new(ErrorKind::ArchiveInvalid(e.to_string())))?;
        // The guard must exist before any entry lands on disk so that an
        // error mid-extraction still tears the directory down.
        let extracted = ExtractDir {
            path: dir.to_path_buf(),
        };
        archive
            .extract(&extracted.path)
            .map_err(|e| Error::new(ErrorKind::ArchiveInvalid(e.to_string())))?;
        Ok(extracted)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ExtractDir {
    fn drop(&mut self) {
        // The directory may not exist if extraction failed before creating
        // it; there is nothing useful to do with a removal error here.
        let _ = fs::remove_dir_all(&self.path);
    }
}
