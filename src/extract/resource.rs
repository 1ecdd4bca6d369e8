use roxmltree::Document;

use crate::errors::PackageError;
use crate::models::{ItemOutcome, ManifestEntry, Resource};
use crate::package::QtiPackage;

use super::{child, children, mcq};

/// Reads the entry's file from the package and extracts every item in it.
///
/// A malformed item becomes a recorded skip rather than a failure: one bad
/// question must not discard the rest of the package. A missing item list
/// is an empty resource, not an error.
pub fn load(entry: ManifestEntry, package: &mut QtiPackage) -> Result<Resource, PackageError> {
    let raw = package.read(&entry.file)?;
    let doc = Document::parse(&raw).map_err(|source| PackageError::ResourceXml {
        name: entry.file.clone(),
        source,
    })?;

    let root = doc.root_element();
    let section = (root.tag_name().name() == "questestinterop")
        .then_some(root)
        .and_then(|r| child(r, "assessment"))
        .and_then(|a| child(a, "section"));

    let mut items = Vec::new();
    if let Some(section) = section {
        for (index, item) in children(section, "item").enumerate() {
            match mcq::from_item(item) {
                Ok(mcq) => items.push(ItemOutcome::Extracted(mcq)),
                Err(error) => {
                    tracing::warn!("skipping item {index} in {}: {error}", entry.file);
                    items.push(ItemOutcome::Skipped { index, error });
                }
            }
        }
    }

    Ok(Resource { entry, items })
}
