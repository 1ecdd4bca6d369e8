//! Fixed names from the IMS content-packaging and QTI contracts. These are
//! external interface constants, not tunables.

/// Package index, always at the archive root.
pub const MANIFEST_FILE: &str = "imsmanifest.xml";

/// `class` attribute value marking a presentation flow as the question block.
pub const QUESTION_BLOCK: &str = "QUESTION_BLOCK";

/// `class` attribute value marking a presentation flow as the response block.
pub const RESPONSE_BLOCK: &str = "RESPONSE_BLOCK";

/// `title` of the response condition that names the correct identifier.
pub const CORRECT_TITLE: &str = "correct";

/// `type` attribute value on a formatted-text node whose payload is HTML.
pub const HTML_FORMAT: &str = "HTML";

/// Suffix appended to the input file name to form the output file name.
pub const OUTPUT_SUFFIX: &str = ".html";
