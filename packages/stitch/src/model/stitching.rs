//! The stitching extension.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::{Path, XmlEntity};
use crate::config::{LAST_UPDATE_TIME_ATTR, STITCHING_TAG, XMLNS_ATTR};
use crate::error::Result;
use crate::parser::parse_stitching;
use crate::xml::Element;

/// Document-level extension describing multi-aggregate circuits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stitching {
    /// Namespace of the extension element, re-emitted as `xmlns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Opaque `lastUpdateTime` value.
    ///
    /// No longer interpreted. Kept verbatim so documents with non-standard
    /// timestamps survive a round trip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,

    /// Paths in document order.
    pub paths: Vec<Path>,
}

impl Stitching {
    /// Find a path by identifier.
    #[must_use]
    pub fn path(&self, id: &str) -> Option<&Path> {
        self.paths.iter().find(|p| p.id == id)
    }
}

impl XmlEntity for Stitching {
    const TAG: &'static str = STITCHING_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        parse_stitching(node)
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::TAG);
        if let Some(namespace) = &self.namespace {
            element.set_attribute(XMLNS_ATTR, namespace);
        }
        if let Some(last_update_time) = &self.last_update_time {
            element.set_attribute(LAST_UPDATE_TIME_ATTR, last_update_time);
        }
        for path in &self.paths {
            element.append_child(path.to_element());
        }
        element
    }
}
