//! Tag names, attribute names and rendering options for RSpec documents.

/// Root element of every RSpec document.
pub const RSPEC_TAG: &str = "rspec";

/// Compute or network node.
pub const NODE_TAG: &str = "node";

/// Network link between interfaces.
pub const LINK_TAG: &str = "link";

/// Interface on a node or link.
pub const INTERFACE_TAG: &str = "interface";

/// Stitching extension container.
pub const STITCHING_TAG: &str = "stitching";

/// End-to-end circuit inside the stitching extension.
pub const PATH_TAG: &str = "path";

/// Aggregate-local segment of a path.
pub const HOP_TAG: &str = "hop";

/// Child of a hop naming the following hop.
pub const NEXT_HOP_TAG: &str = "nextHop";

/// Identifier attribute shared by all entities.
pub const ID_ATTR: &str = "id";

/// RSpec type attribute (request, manifest, advertisement).
pub const TYPE_ATTR: &str = "type";

/// Default namespace declaration.
pub const XMLNS_ATTR: &str = "xmlns";

/// Stitching timestamp attribute.
///
/// Its value is no longer interpreted; it is carried through verbatim.
pub const LAST_UPDATE_TIME_ATTR: &str = "lastUpdateTime";

/// Indentation width used for pretty-printed output.
pub const DEFAULT_INDENT: usize = 2;

/// Options controlling how an RSpec is rendered to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of spaces per nesting level, or `None` for compact output.
    pub indent: Option<usize>,
}

impl RenderOptions {
    /// Render without any whitespace between elements.
    #[must_use]
    pub fn compact() -> Self {
        Self { indent: None }
    }

    /// Render with the given indentation width.
    #[must_use]
    pub fn pretty(indent: usize) -> Self {
        Self {
            indent: Some(indent),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::pretty(DEFAULT_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default_is_pretty() {
        assert_eq!(RenderOptions::default().indent, Some(DEFAULT_INDENT));
    }

    #[test]
    fn test_render_options_compact() {
        assert_eq!(RenderOptions::compact().indent, None);
    }
}
