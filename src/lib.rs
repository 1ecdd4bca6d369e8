pub mod errors;
pub mod extract;
pub mod models;
pub mod names;
pub mod package;
pub mod utils;
pub mod views;

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PackageError;
use crate::package::QtiPackage;

/// Extracts every question in the package at `archive` and writes the HTML
/// review document beside it, returning the output path. Extraction runs to
/// completion before anything is written.
pub fn export(archive: &Path) -> Result<PathBuf, PackageError> {
    let mut package = QtiPackage::open(archive)?;
    let resources = extract::manifest::process(&mut package)?;

    let total: usize = resources.iter().map(|r| r.mcqs().count()).sum();
    tracing::info!(
        "extracted {total} questions from {} resources",
        resources.len()
    );

    let markup = views::document(&resources);
    let out = utils::output_path(archive);
    fs::write(&out, markup.into_string()).map_err(|source| PackageError::WriteOutput {
        path: out.clone(),
        source,
    })?;

    Ok(out)
}
