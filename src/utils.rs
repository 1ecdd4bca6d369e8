use std::path::{Path, PathBuf};

use crate::names;

/// Output path for a given input archive: the input's own file name with
/// `.html` appended, placed beside the input (`pkg.zip` -> `pkg.zip.html`).
pub fn output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{name}{}", names::OUTPUT_SUFFIX))
}
