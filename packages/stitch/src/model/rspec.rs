//! The RSpec root container.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::{Link, Node, Stitching, XmlEntity};
use crate::config::{RSPEC_TAG, TYPE_ATTR, XMLNS_ATTR};
use crate::error::Result;
use crate::index::TopologyIndex;
use crate::parser::parse_rspec_element;
use crate::xml::Element;

/// A parsed resource specification.
///
/// Owns every entity of one document. Nodes and links keep document order;
/// at most one stitching extension is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RSpec {
    /// Default namespace of the root element, re-emitted as `xmlns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Value of the `type` attribute (request, manifest, advertisement).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub nodes: Vec<Node>,

    pub links: Vec<Link>,

    pub stitching: Option<Stitching>,
}

impl RSpec {
    /// Find a link by identifier.
    #[must_use]
    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Find a node by identifier.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Build an identifier index over this RSpec.
    #[must_use]
    pub fn index(&self) -> TopologyIndex<'_> {
        TopologyIndex::new(self)
    }
}

impl XmlEntity for RSpec {
    const TAG: &'static str = RSPEC_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        parse_rspec_element(node)
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        if let Some(namespace) = &self.namespace {
            element.set_attribute(XMLNS_ATTR, namespace);
        }
        if let Some(kind) = &self.kind {
            element.set_attribute(TYPE_ATTR, kind);
        }
        for node in &self.nodes {
            element.append_child(node.to_element());
        }
        for link in &self.links {
            element.append_child(link.to_element());
        }
        if let Some(stitching) = &self.stitching {
            element.append_child(stitching.to_element());
        }
        element
    }
}
