//! RSpec serializer.
//!
//! The inverse of [`crate::parser`]: renders an [`RSpec`] into a document that
//! parses back to an equal value.

use crate::config::RenderOptions;
use crate::error::Result;
use crate::model::{RSpec, XmlEntity};
use crate::xml;

/// Render an RSpec as a pretty-printed XML document.
///
/// # Errors
/// Returns `Render` or `Encoding` if the writer fails.
///
/// # Examples
/// ```
/// use omni_stitch::{parse, render};
///
/// let rspec = parse(r#"<rspec><link id="L1"/></rspec>"#).unwrap();
/// let xml = render(&rspec).unwrap();
/// assert_eq!(parse(&xml).unwrap(), rspec);
/// ```
pub fn render(rspec: &RSpec) -> Result<String> {
    render_with(rspec, &RenderOptions::default())
}

/// Render an RSpec with explicit formatting options.
///
/// Nodes come first, then links, then the stitching extension if present,
/// each in stored order.
///
/// # Errors
/// Returns `Render` or `Encoding` if the writer fails.
pub fn render_with(rspec: &RSpec, options: &RenderOptions) -> Result<String> {
    tracing::debug!(
        nodes = rspec.nodes.len(),
        links = rspec.links.len(),
        stitching = rspec.stitching.is_some(),
        "Rendering RSpec"
    );
    xml::render(&rspec.to_element(), options)
}
