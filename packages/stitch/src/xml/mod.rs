//! XML utilities.
//!
//! The read side navigates a `roxmltree` document; the write side builds an
//! owned [`Element`] tree and renders it with `quick-xml`.

mod utils;
mod writer;

pub use utils::{
    element_children, find_child, find_children, get_attribute, get_tag_name, get_text,
    has_tag, parse_document, require_attribute,
};
pub use writer::{render, Element};
