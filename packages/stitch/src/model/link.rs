//! Network links between interfaces.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::interface::collect_interfaces;
use super::{Interface, InterfaceOwner, XmlEntity};
use crate::config::{ID_ATTR, LINK_TAG};
use crate::error::Result;
use crate::xml::{require_attribute, Element};

/// A network connection between two or more interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub id: String,

    /// Interfaces in document order.
    pub interfaces: Vec<Interface>,
}

impl Link {
    /// Find an interface on this link by identifier.
    #[must_use]
    pub fn interface(&self, id: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.id == id)
    }
}

impl XmlEntity for Link {
    const TAG: &'static str = LINK_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        let id = require_attribute(node, ID_ATTR)?.to_string();
        let interfaces = collect_interfaces(node, &InterfaceOwner::Link(id.clone()))?;
        tracing::debug!(link = %id, interfaces = interfaces.len(), "Parsed link");
        Ok(Self { id, interfaces })
    }

    fn to_element(&self) -> Element {
        let mut element = Element::new(Self::TAG).with_attribute(ID_ATTR, &self.id);
        for interface in &self.interfaces {
            element.append_child(interface.to_element());
        }
        element
    }
}
