//! Compute and network nodes.

use roxmltree::Node as XmlNode;
use serde::Serialize;

use super::interface::collect_interfaces;
use super::{Interface, InterfaceOwner, XmlEntity};
use crate::config::{ID_ATTR, NODE_TAG};
use crate::error::Result;
use crate::xml::{require_attribute, Element};

/// A computational or network resource with its interfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: String,
    pub interfaces: Vec<Interface>,
}

impl XmlEntity for Node {
    const TAG: &'static str = NODE_TAG;

    fn from_element(node: XmlNode<'_, '_>) -> Result<Self> {
        let id = require_attribute(node, ID_ATTR)?.to_string();
        let interfaces = collect_interfaces(node, &InterfaceOwner::Node(id.clone()))?;
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
