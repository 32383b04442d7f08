//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node};

use crate::error::{Result, StitchError};

/// Parse XML text into a document.
///
/// # Arguments
/// * `text` - Raw XML document text
///
/// # Returns
/// Parsed document borrowing from `text`
///
/// # Errors
/// Returns `MalformedDocument` if the text is not well-formed XML.
///
/// # Examples
/// ```
/// use omni_stitch::xml::parse_document;
///
/// assert!(parse_document("<rspec/>").is_ok());
/// assert!(parse_document("<rspec>").is_err());
/// ```
pub fn parse_document(text: &str) -> Result<Document<'_>> {
    Ok(Document::parse(text)?)
}

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Local tag name (e.g., "rspec" for `<rspec xmlns="...">`)
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use omni_stitch::xml::get_tag_name;
///
/// let xml = r#"<rspec xmlns="http://www.geni.net/resources/rspec/3"><link/></rspec>"#;
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_tag_name(doc.root_element()), "rspec");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name, in document order.
///
/// Matching is exact and case-sensitive on the local name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// Iterator over matching child elements
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use omni_stitch::xml::find_children;
///
/// let xml = r#"<path><hop id="1"/><other/><hop id="2"/><Hop id="3"/></path>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let hops: Vec<_> = find_children(doc.root_element(), "hop").collect();
/// assert_eq!(hops.len(), 2);
/// assert_eq!(hops[1].attribute("id"), Some("2"));
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get the text content of a node, trimmed.
///
/// All direct text children are joined, so comments or processing
/// instructions between text runs do not hide any of it.
///
/// # Arguments
/// * `node` - Node to get text from
///
/// # Returns
/// Trimmed text content, or empty string if no text
pub fn get_text(node: Node<'_, '_>) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Get an attribute value from a node.
///
/// # Arguments
/// * `node` - Node to get attribute from
/// * `name` - Attribute name
///
/// # Returns
/// Attribute value, or `None` if not found
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Get an attribute value that the element must carry.
///
/// # Arguments
/// * `node` - Element to get attribute from
/// * `name` - Required attribute name
///
/// # Returns
/// Attribute value
///
/// # Errors
/// Returns `SchemaViolation` naming the element and the missing attribute.
pub fn require_attribute<'a>(node: Node<'a, '_>, name: &str) -> Result<&'a str> {
    get_attribute(node, name)
        .ok_or_else(|| StitchError::missing_attribute(get_tag_name(node), name))
}

/// Check if a node has a specific tag name.
///
/// # Arguments
/// * `node` - Node to check
/// * `tag` - Expected tag name
///
/// # Returns
/// `true` if the node is an element with the specified tag name
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
