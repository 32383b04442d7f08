//! Omni stitching - parse and render stitching-aware GENI RSpecs.
//!
//! This crate turns an RSpec XML document, optionally carrying the stitching
//! extension that describes multi-aggregate circuits, into an immutable
//! object graph, and renders that graph back into an equivalent document.
//!
//! # Example
//!
//! ```
//! use omni_stitch::{parse, render};
//!
//! let xml = r#"<rspec>
//!   <link id="L1"><interface id="I1"/></link>
//!   <stitching lastUpdateTime="t0">
//!     <path id="P1"><hop id="H1"/><hop id="H2"/></path>
//!   </stitching>
//! </rspec>"#;
//!
//! let rspec = parse(xml).unwrap();
//! let stitching = rspec.stitching.as_ref().unwrap();
//! assert_eq!(stitching.paths[0].hops[1].id, "H2");
//!
//! let rendered = render(&rspec).unwrap();
//! assert_eq!(parse(&rendered).unwrap(), rspec);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Tag names and rendering options
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML reading and writing utilities
//! - [`model`]: Entity types (RSpec, Node, Link, Interface, Stitching, Path, Hop)
//! - [`parser`]: Document parser
//! - [`serializer`]: Document renderer
//! - [`index`]: Identifier lookup and hop reference resolution
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod xml;

// Re-export main functions
pub use parser::{parse, RSpecParser};
pub use serializer::{render, render_with};

// Re-export commonly used items
pub use config::RenderOptions;
pub use error::{Result, StitchError};
pub use index::{DanglingHop, HopTarget, TopologyIndex};
pub use model::{
    Hop, HopLink, Interface, InterfaceOwner, Link, Node, Path, RSpec, Stitching, XmlEntity,
};
