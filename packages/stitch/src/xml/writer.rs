//! Owned element tree and XML rendering.

use std::borrow::Cow;

use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

use crate::config::RenderOptions;
use crate::error::Result;

/// An XML element under construction.
///
/// Attributes keep insertion order so rendered output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an attribute, replacing any previous value with the same name.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Builder form of [`Element::set_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Append a child element after the existing children.
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Set the text content of the element.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Builder form of [`Element::set_text`].
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }
}

/// Render an element tree as a complete XML document.
///
/// The output starts with an XML declaration. Attribute values and text
/// content are escaped, including whitespace characters a parser would
/// otherwise normalize, so every value reads back unchanged.
///
/// # Errors
/// Returns `Render` if the writer fails, or `Encoding` if the output is not
/// valid UTF-8.
///
/// # Examples
/// ```
/// use omni_stitch::config::RenderOptions;
/// use omni_stitch::xml::{render, Element};
///
/// let mut root = Element::new("rspec");
/// root.append_child(Element::new("link").with_attribute("id", "L1"));
///
/// let xml = render(&root, &RenderOptions::compact()).unwrap();
/// assert!(xml.ends_with(r#"<rspec><link id="L1"/></rspec>"#));
/// ```
pub fn render(root: &Element, options: &RenderOptions) -> Result<String> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_element(&mut writer, root)?;

    let mut bytes = writer.into_inner();
    if options.indent.is_some() {
        bytes.push(b'\n');
    }
    Ok(String::from_utf8(bytes)?)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute(Attribute {
            key: QName(name.as_bytes()),
            value: Cow::Owned(escape_attribute(value).into_bytes()),
        });
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::from_escaped(escape_text(text))))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

/// Escape an attribute value.
///
/// Attribute-value normalization turns literal newlines, carriage returns
/// and tabs into spaces, so they are written as character references.
fn escape_attribute(value: &str) -> String {
    escape(value)
        .replace('\n', "&#10;")
        .replace('\r', "&#13;")
        .replace('\t', "&#9;")
}

/// Escape text content.
///
/// Line-ending normalization turns a literal carriage return into a newline.
fn escape_text(text: &str) -> String {
    escape(text).replace('\r', "&#13;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = Element::new("link");
        element.set_attribute("id", "L1");
        element.set_attribute("id", "L2");

        assert_eq!(element.attribute("id"), Some("L2"));
    }

    #[test]
    fn test_render_compact() {
        let root = Element::new("path")
            .with_attribute("id", "P1")
            .with_text("ignored");
        let xml = render(&root, &RenderOptions::compact()).unwrap();

        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><path id="P1">ignored</path>"#
        );
    }

    #[test]
    fn test_render_escapes_attribute_values() {
        let root = Element::new("stitching").with_attribute("lastUpdateTime", "a<b & \"c\"");
        let xml = render(&root, &RenderOptions::default()).unwrap();

        let doc = Document::parse(&xml).unwrap();
        assert_eq!(
            doc.root_element().attribute("lastUpdateTime"),
            Some("a<b & \"c\"")
        );
    }

    #[test]
    fn test_render_keeps_whitespace_in_attribute_values() {
        let root = Element::new("stitching").with_attribute("lastUpdateTime", "a\nb\tc\rd");
        let xml = render(&root, &RenderOptions::compact()).unwrap();

        assert!(xml.contains(r#"lastUpdateTime="a&#10;b&#9;c&#13;d""#));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(
            doc.root_element().attribute("lastUpdateTime"),
            Some("a\nb\tc\rd")
        );
    }

    #[test]
    fn test_render_keeps_carriage_return_in_text() {
        let root = Element::new("nextHop").with_text("a\rb<c");
        let xml = render(&root, &RenderOptions::compact()).unwrap();

        assert!(xml.ends_with("<nextHop>a&#13;b&lt;c</nextHop>"));
        let doc = Document::parse(&xml).unwrap();
        assert_eq!(doc.root_element().text(), Some("a\rb<c"));
    }

    #[test]
    fn test_render_pretty_is_reparseable() {
        let mut hop = Element::new("hop").with_attribute("id", "H1");
        hop.append_child(Element::new("nextHop").with_text("H2"));
        let mut path = Element::new("path").with_attribute("id", "P1");
        path.append_child(hop);

        let xml = render(&path, &RenderOptions::pretty(4)).unwrap();
        assert!(xml.contains('\n'));

        let doc = Document::parse(&xml).unwrap();
        let hop = doc.root_element().first_element_child().unwrap();
        assert_eq!(hop.attribute("id"), Some("H1"));
        assert_eq!(
            hop.first_element_child()
                .and_then(|n| n.text())
                .map(str::trim),
            Some("H2")
        );
    }

    #[test]
    fn test_children_keep_order() {
        let mut root = Element::new("rspec");
        for id in ["L1", "L2", "L3"] {
            root.append_child(Element::new("link").with_attribute("id", id));
        }

        let ids: Vec<_> = root
            .children()
            .iter()
            .filter_map(|c| c.attribute("id"))
            .collect();
        assert_eq!(ids, vec!["L1", "L2", "L3"]);
    }
}
