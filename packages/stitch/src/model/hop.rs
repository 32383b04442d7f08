//! Hops: aggregate-local segments of a stitching path.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::XmlEntity;
use crate::config::{HOP_TAG, ID_ATTR, LINK_TAG, NEXT_HOP_TAG};
use crate::error::Result;
use crate::xml::{find_child, get_text, require_attribute, Element};

/// Reference from a hop to the link or interface it traverses.
///
/// Only the identifier is kept; the target is resolved through the
/// topology index and may belong to another aggregate's document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopLink {
    pub id: String,
}

/// One segment of an inter-domain circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<HopLink>,

    /// Identifier of the following hop, verbatim.
    ///
    /// The last hop of a path conventionally carries the text `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop: Option<String>,
}

impl Hop {
    /// Create a hop with no link reference and no successor.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link: None,
            next_hop: None,
        }
    }

    /// Identifier of the link or interface this hop traverses.
    #[must_use]
    pub fn link_id(&self) -> Option<&str> {
        self.link.as_ref().map(|l| l.id.as_str())
    }
}

impl XmlEntity for Hop {
    const TAG: &'static str = HOP_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        let id = require_attribute(node, ID_ATTR)?.to_string();

        let link = find_child(node, LINK_TAG)
            .map(|link| {
                require_attribute(link, ID_ATTR).map(|id| HopLink { id: id.to_string() })
            })
            .transpose()?;

        let next_hop = find_child(node, NEXT_HOP_TAG).map(get_text);

        Ok(Self { id, link, next_hop })
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::TAG).with_attribute(ID_ATTR, &self.id);
        if let Some(link) = &self.link {
            element.append_child(Element::new(LINK_TAG).with_attribute(ID_ATTR, &link.id));
        }
        if let Some(next_hop) = &self.next_hop {
            element.append_child(Element::new(NEXT_HOP_TAG).with_text(next_hop));
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StitchError;
    use roxmltree::Document;

    #[test]
    fn test_hop_full() {
        let xml = r#"<hop id="2">
            <link id="urn:publicid:IDN+ion.internet2.edu+interface+rtr.newy:xe-0/0/3:protogeni">
                <trafficEngineeringMetric>10</trafficEngineeringMetric>
                <capacity>1000000</capacity>
            </link>
            <nextHop>3</nextHop>
        </hop>"#;
        let doc = Document::parse(xml).unwrap();
        let hop = Hop::from_element(doc.root_element()).unwrap();

        assert_eq!(hop.id, "2");
        assert_eq!(
            hop.link_id(),
            Some("urn:publicid:IDN+ion.internet2.edu+interface+rtr.newy:xe-0/0/3:protogeni")
        );
        assert_eq!(hop.next_hop.as_deref(), Some("3"));
    }

    #[test]
    fn test_hop_next_hop_after_comment() {
        let xml = r#"<hop id="1"><nextHop><!-- generated -->2</nextHop></hop>"#;
        let doc = Document::parse(xml).unwrap();
        let hop = Hop::from_element(doc.root_element()).unwrap();

        assert_eq!(hop.next_hop.as_deref(), Some("2"));
    }

    #[test]
    fn test_hop_minimal() {
        let doc = Document::parse(r#"<hop id="H1"/>"#).unwrap();
        let hop = Hop::from_element(doc.root_element()).unwrap();

        assert_eq!(hop, Hop::new("H1"));
    }

    #[test]
    fn test_hop_link_without_id() {
        let doc = Document::parse(r#"<hop id="H1"><link/></hop>"#).unwrap();
        let err = Hop::from_element(doc.root_element()).unwrap_err();

        assert!(matches!(
            err,
            StitchError::SchemaViolation { ref tag, .. } if tag == "link"
        ));
    }

    #[test]
    fn test_hop_to_element() {
        let hop = Hop {
            id: "H1".to_string(),
            link: Some(HopLink {
                id: "L1".to_string(),
            }),
            next_hop: Some("null".to_string()),
        };
        let element = hop.to_element();

        assert_eq!(element.attribute("id"), Some("H1"));
        assert_eq!(element.children()[0].tag(), "link");
        assert_eq!(element.children()[0].attribute("id"), Some("L1"));
        assert_eq!(element.children()[1].tag(), "nextHop");
        assert_eq!(element.children()[1].text(), Some("null"));
    }
}
