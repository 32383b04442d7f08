//! Interfaces on nodes and links.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::XmlEntity;
use crate::config::{ID_ATTR, INTERFACE_TAG};
use crate::error::Result;
use crate::xml::{find_children, require_attribute, Element};

/// The entity an interface is declared on.
///
/// Held by identifier only; the owner is looked up, never shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum InterfaceOwner {
    Node(String),
    Link(String),
}

impl InterfaceOwner {
    /// Identifier of the owning node or link.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Node(id) | Self::Link(id) => id,
        }
    }
}

/// Attachment point on a node or link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    /// Interface identifier.
    pub id: String,

    /// Node or link the interface was declared on.
    ///
    /// Implied by nesting in the document, so it is not rendered as an
    /// attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<InterfaceOwner>,
}

impl Interface {
    /// Create a free-standing interface.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: None,
        }
    }

    /// Attach the owner back-reference.
    #[must_use]
    pub fn with_owner(mut self, owner: InterfaceOwner) -> Self {
        self.owner = Some(owner);
        self
    }
}

impl XmlEntity for Interface {
    const TAG: &'static str = INTERFACE_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        let id = require_attribute(node, ID_ATTR)?;
        Ok(Self::new(id))
    }

    fn to_element(&self) -> Element {
        Element::new(Self::TAG).with_attribute(ID_ATTR, &self.id)
    }
}

/// Build the `interface` children of a node or link, in document order.
pub(super) fn collect_interfaces(
    node: XmlNode<'_, '_>,
    owner: &InterfaceOwner,
) -> Result<Vec<Interface>> {
    find_children(node, INTERFACE_TAG)
        .map(|child| Interface::from_element(child).map(|i| i.with_owner(owner.clone())))
        .collect()
}
