//! In-memory RSpec object model.
//!
//! Every entity is built from a parsed XML element and can render itself
//! back into an [`Element`]. Entities are immutable after construction and
//! owned by the [`RSpec`] that contains them; references between them (hop to
//! link, interface to owner) are identifiers, resolved through
//! [`crate::index::TopologyIndex`].

mod hop;
mod interface;
mod link;
mod node;
mod path;
mod rspec;
mod stitching;

use roxmltree::Node as XmlNode;

use crate::error::Result;
use crate::xml::Element;

pub use hop::{Hop, HopLink};
pub use interface::{Interface, InterfaceOwner};
pub use link::Link;
pub use node::Node;
pub use path::Path;
pub use rspec::RSpec;
pub use stitching::Stitching;

/// Symmetric conversion between an entity and its XML element.
///
/// `from_element` reads required attributes and nested entities in document
/// order; `to_element` emits the canonical tag with children in stored order.
/// Parsing the output of `to_element` yields an equal entity.
pub trait XmlEntity: Sized {
    /// Canonical tag name of the entity.
    const TAG: &'static str;

    /// Build the entity from an element carrying [`Self::TAG`].
    ///
    /// # Errors
    /// Returns `SchemaViolation` if a required attribute or child is missing.
    fn from_element(node: XmlNode<'_, '_>) -> Result<Self>;

    /// Render the entity as an element tree.
    fn to_element(&self) -> Element;
}
