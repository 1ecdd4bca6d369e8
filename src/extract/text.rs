use roxmltree::Node;
use scraper::Html;

use crate::errors::MalformedNode;
use crate::names;

/// Returns the plain text of a formatted-text node. A node declaring itself
/// HTML has its markup stripped and entities resolved; any other format is
/// returned verbatim.
pub fn clean(node: Node) -> Result<String, MalformedNode> {
    let format = super::attr(node, "type").ok_or(MalformedNode("type attribute"))?;
    let payload = node.text().ok_or(MalformedNode("text payload"))?;

    if format == names::HTML_FORMAT {
        Ok(strip_html(payload))
    } else {
        Ok(payload.to_owned())
    }
}

fn strip_html(payload: &str) -> String {
    Html::parse_fragment(payload).root_element().text().collect()
}
