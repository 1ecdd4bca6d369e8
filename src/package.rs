use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use zip::result::ZipError;
use zip::ZipArchive;

use crate::errors::PackageError;

/// An opened QTI content package. The archive handle lives for the whole
/// run; entries are read fully into memory one at a time.
pub struct QtiPackage {
    archive: ZipArchive<File>,
}

impl QtiPackage {
    pub fn open(path: &Path) -> Result<Self, PackageError> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PackageError::ArchiveNotFound(path.to_path_buf())
            } else {
                PackageError::ArchiveUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let archive = ZipArchive::new(file).map_err(|source| PackageError::ArchiveUnreadable {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

        Ok(Self { archive })
    }

    /// Reads one named entry as UTF-8 text.
    pub fn read(&mut self, name: &str) -> Result<String, PackageError> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(PackageError::EntryMissing(name.to_owned()))
            }
            Err(source) => {
                return Err(PackageError::EntryUnreadable {
                    name: name.to_owned(),
                    source: source.into(),
                })
            }
        };

        let mut raw = String::new();
        entry
            .read_to_string(&mut raw)
            .map_err(|source| PackageError::EntryUnreadable {
                name: name.to_owned(),
                source,
            })?;
        Ok(raw)
    }
}
