//! Stitching paths.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::{Hop, XmlEntity};
use crate::config::{HOP_TAG, ID_ATTR, PATH_TAG};
use crate::error::Result;
use crate::xml::{find_children, require_attribute, Element};

/// An end-to-end circuit across aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub id: String,

    /// Hops in traversal order.
    pub hops: Vec<Hop>,
}

impl Path {
    /// Find a hop in this path by identifier.
    #[must_use]
    pub fn hop(&self, id: &str) -> Option<&Hop> {
        self.hops.iter().find(|h| h.id == id)
    }

    /// Follow the `nextHop` reference of `hop` within this path.
    ///
    /// Returns `None` for the last hop, or when the successor is not part of
    /// this path.
    #[must_use]
    pub fn next_hop(&self, hop: &Hop) -> Option<&Hop> {
        hop.next_hop.as_deref().and_then(|id| self.hop(id))
    }
}

impl XmlEntity for Path {
    const TAG: &'static str = PATH_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        let id = require_attribute(node, ID_ATTR)?.to_string();
        let hops = find_children(node, HOP_TAG)
            .map(Hop::from_element)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(path = %id, hops = hops.len(), "Parsed path");
        Ok(Self { id, hops })
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::TAG).with_attribute(ID_ATTR, &self.id);
        for hop in &self.hops {
            element.append_child(hop.to_element());
        }
        element
    }
}
