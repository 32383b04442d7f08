//! Stitching-aware RSpec parser.
//!
//! Parsing is a pure function from document text to an [`RSpec`]. Nothing is
//! retained between calls, so a single [`RSpecParser`] can be shared freely
//! across threads.

use roxmltree::Node as XmlNode;

use crate::config::{
    LAST_UPDATE_TIME_ATTR, LINK_TAG, NODE_TAG, PATH_TAG, RSPEC_TAG, STITCHING_TAG, TYPE_ATTR,
};
use crate::error::{Result, StitchError};
use crate::model::{Link, Node, Path, RSpec, Stitching, XmlEntity};
use crate::xml::{element_children, get_attribute, get_tag_name, has_tag, parse_document};

/// Parse an RSpec document.
///
/// The document must contain exactly one `rspec` element. Its `node`, `link`
/// and `stitching` children are turned into entities in document order; any
/// other child is ignored.
///
/// # Arguments
/// * `xml` - Raw RSpec document text
///
/// # Returns
/// The parsed `RSpec`
///
/// # Errors
/// - `MalformedDocument` if the text is not well-formed XML.
/// - `SchemaViolation` if the `rspec` element count is not one, or a
///   recognized element lacks a required attribute.
///
/// # Examples
/// ```
/// use omni_stitch::parse;
///
/// let rspec = parse(r#"<rspec><link id="L1"><interface id="I1"/></link></rspec>"#).unwrap();
/// assert_eq!(rspec.links[0].id, "L1");
/// assert!(rspec.stitching.is_none());
/// ```
pub fn parse(xml: &str) -> Result<RSpec> {
    let doc = parse_document(xml)?;

    let rspecs: Vec<_> = doc
        .descendants()
        .filter(|n| has_tag(*n, RSPEC_TAG))
        .collect();

    match rspecs.as_slice() {
        [rspec] => parse_rspec_element(*rspec),
        other => Err(StitchError::schema(
            RSPEC_TAG,
            format!(
                "expected exactly one {RSPEC_TAG} element, got {}",
                other.len()
            ),
        )),
    }
}

/// Stateless parser value.
///
/// Equivalent to calling [`parse`]; provided for callers that hold a parser
/// alongside other collaborators.
#[derive(Debug, Clone, Copy, Default)]
pub struct RSpecParser;

impl RSpecParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse an RSpec document. See [`parse`].
    ///
    /// # Errors
    /// Same as [`parse`].
    pub fn parse(&self, xml: &str) -> Result<RSpec> {
        parse(xml)
    }
}

/// Build an RSpec from its root element.
///
/// When several `stitching` children are present, the last one wins.
///
/// # Arguments
/// * `element` - The `rspec` element
///
/// # Returns
/// `RSpec` with nodes and links in document order and the last stitching
/// extension, if any
///
/// # Errors
/// Returns `SchemaViolation` if `element` is not an `rspec` element or a
/// child entity cannot be built.
pub fn parse_rspec_element(element: XmlNode<'_, '_>) -> Result<RSpec> {
    let tag = get_tag_name(element);
    if !tag.eq_ignore_ascii_case(RSPEC_TAG) {
        return Err(StitchError::schema(
            tag,
            format!("expected <{RSPEC_TAG}> element"),
        ));
    }

    let mut rspec = RSpec {
        namespace: element.tag_name().namespace().map(String::from),
        kind: get_attribute(element, TYPE_ATTR).map(String::from),
        ..RSpec::default()
    };

    for child in element_children(element) {
        match get_tag_name(child) {
            NODE_TAG => {
                tracing::debug!("Parsing node");
                rspec.nodes.push(Node::from_element(child)?);
            }
            LINK_TAG => {
                tracing::debug!("Parsing link");
                rspec.links.push(Link::from_element(child)?);
            }
            STITCHING_TAG => {
                tracing::debug!("Parsing stitching");
                let stitching = parse_stitching(child)?;
                if rspec.stitching.replace(stitching).is_some() {
                    tracing::debug!("Multiple stitching elements, keeping the last one");
                }
            }
            other => tracing::trace!(tag = other, "Ignoring unrecognized element"),
        }
    }

    Ok(rspec)
}

/// Build the stitching extension from its element.
///
/// `lastUpdateTime` is copied verbatim without any date handling. Children
/// other than `path` are ignored.
///
/// # Arguments
/// * `element` - The `stitching` element
///
/// # Returns
/// `Stitching` with paths in document order
///
/// # Errors
/// Returns `SchemaViolation` if a path or hop cannot be built.
pub fn parse_stitching(element: XmlNode<'_, '_>) -> Result<Stitching> {
    let paths = element_children(element)
        .filter(|child| get_tag_name(*child) == PATH_TAG)
        .map(Path::from_element)
        .collect::<Result<Vec<_>>>()?;

    Ok(Stitching {
        namespace: element.tag_name().namespace().map(String::from),
        last_update_time: get_attribute(element, LAST_UPDATE_TIME_ATTR).map(String::from),
        paths,
    })
}
