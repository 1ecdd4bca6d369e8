//! Pulls questions out of parsed QTI XML. Every lookup goes through the
//! helpers below, so each call site states whether a field is required
//! (`ok_or_else`) or optional (the `Option` stands).

pub mod manifest;
pub mod mcq;
pub mod resource;
pub mod text;

use roxmltree::Node;

/// Element children with the given local name, in document order. QTI and
/// content-packaging files mix default, `bb:` and `xml:` namespaces, so
/// matching ignores the namespace.
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// First element child with the given local name.
pub(crate) fn child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    children(node, name).next()
}

/// Attribute value looked up by local name, prefix-agnostic.
pub(crate) fn attr<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value())
}
