use roxmltree::{Document, Node};

use crate::errors::PackageError;
use crate::models::{ManifestEntry, Resource};
use crate::names;
use crate::package::QtiPackage;

use super::{attr, child, children, resource};

/// Walks `imsmanifest.xml` and loads one resource per declared entry, in
/// manifest order. A missing or unusable manifest is fatal.
pub fn process(package: &mut QtiPackage) -> Result<Vec<Resource>, PackageError> {
    let raw = match package.read(names::MANIFEST_FILE) {
        Err(PackageError::EntryMissing(_)) => {
            return Err(PackageError::ManifestFormat(format!(
                "{} not present in archive",
                names::MANIFEST_FILE
            )))
        }
        other => other?,
    };

    let doc = Document::parse(&raw)
        .map_err(|e| PackageError::ManifestFormat(format!("not well-formed XML: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() != "manifest" {
        return Err(PackageError::ManifestFormat(format!(
            "root element is <{}>, expected <manifest>",
            root.tag_name().name()
        )));
    }
    let list = child(root, "resources")
        .ok_or_else(|| PackageError::ManifestFormat("manifest has no resources list".to_owned()))?;

    let mut resources = Vec::new();
    for node in children(list, "resource") {
        let entry = manifest_entry(node)?;
        tracing::debug!("loading resource {} from {}", entry.identifier, entry.file);
        resources.push(resource::load(entry, package)?);
    }

    Ok(resources)
}

fn manifest_entry(node: Node) -> Result<ManifestEntry, PackageError> {
    let required = |name: &str| {
        attr(node, name).map(str::to_owned).ok_or_else(|| {
            PackageError::ManifestFormat(format!("resource element missing {name} attribute"))
        })
    };

    Ok(ManifestEntry {
        file: required("file")?,
        title: required("title")?,
        identifier: required("identifier")?,
        resource_type: required("type")?,
        base: required("base")?,
    })
}
