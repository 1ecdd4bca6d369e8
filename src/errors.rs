use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures. Any of these aborts the run before the output file is
/// written.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("archive not found: {}", .0.display())]
    ArchiveNotFound(PathBuf),

    #[error("could not read archive {}", .path.display())]
    ArchiveUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive has no entry named {0}")]
    EntryMissing(String),

    #[error("could not read archive entry {name}")]
    EntryUnreadable {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest not usable: {0}")]
    ManifestFormat(String),

    #[error("resource file {name} is not well-formed XML")]
    ResourceXml {
        name: String,
        #[source]
        source: roxmltree::Error,
    },

    #[error("could not write output file {}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-item extraction failures. The resource loader catches these and
/// records a skip; they never abort the run.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("question not in expected format: {reason}")]
    Question { reason: String },

    #[error("choices not in expected format: {reason}")]
    Choice { reason: String },
}

/// A formatted-text node missing one of its required fields. Wrapped into
/// [`ItemError::Question`] or [`ItemError::Choice`] at the call site.
#[derive(Debug, Error)]
#[error("text node missing {0}")]
pub struct MalformedNode(pub &'static str);
