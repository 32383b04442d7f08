//! Identifier lookup over a parsed RSpec.
//!
//! Hops name the link or interface they traverse by identifier only. The
//! index resolves those weak references without introducing shared
//! ownership between entities.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Hop, Interface, Link, Node, RSpec};

/// The entity a hop's link reference resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopTarget<'a> {
    Link(&'a Link),
    Interface(&'a Interface),
}

impl HopTarget<'_> {
    /// Identifier of the resolved entity.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Link(link) => &link.id,
            Self::Interface(interface) => &interface.id,
        }
    }
}

/// A hop whose link reference does not match any link or interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingHop {
    pub path_id: String,
    pub hop_id: String,
    pub link_id: String,
}

/// Borrowed lookup tables keyed by identifier.
///
/// When an identifier is declared more than once, the first declaration in
/// document order is kept.
#[derive(Debug)]
pub struct TopologyIndex<'a> {
    rspec: &'a RSpec,
    nodes: HashMap<&'a str, &'a Node>,
    links: HashMap<&'a str, &'a Link>,
    interfaces: HashMap<&'a str, &'a Interface>,
}

impl<'a> TopologyIndex<'a> {
    /// Build the index for an RSpec.
    #[must_use]
    pub fn new(rspec: &'a RSpec) -> Self {
        let mut nodes = HashMap::new();
        let mut links = HashMap::new();
        let mut interfaces = HashMap::new();

        for node in &rspec.nodes {
            nodes.entry(node.id.as_str()).or_insert(node);
            for interface in &node.interfaces {
                interfaces.entry(interface.id.as_str()).or_insert(interface);
            }
        }
        for link in &rspec.links {
            links.entry(link.id.as_str()).or_insert(link);
            for interface in &link.interfaces {
                interfaces.entry(interface.id.as_str()).or_insert(interface);
            }
        }

        Self {
            rspec,
            nodes,
            links,
            interfaces,
        }
    }

    #[must_use]
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    #[must_use]
    pub fn link(&self, id: &str) -> Option<&'a Link> {
        self.links.get(id).copied()
    }

    /// Look up an interface declared on any node or link.
    #[must_use]
    pub fn interface(&self, id: &str) -> Option<&'a Interface> {
        self.interfaces.get(id).copied()
    }

    /// Resolve the link reference of a hop.
    ///
    /// Links take precedence over interfaces with the same identifier.
    /// Returns `None` when the hop has no reference or it does not resolve.
    #[must_use]
    pub fn resolve_hop(&self, hop: &Hop) -> Option<HopTarget<'a>> {
        let id = hop.link_id()?;
        self.link(id)
            .map(HopTarget::Link)
            .or_else(|| self.interface(id).map(HopTarget::Interface))
    }

    /// List hops whose link reference resolves to nothing in this RSpec.
    ///
    /// Stitching hops often name links local to other aggregates, so this is
    /// a diagnostic rather than an error.
    #[must_use]
    pub fn dangling_hops(&self) -> Vec<DanglingHop> {
        let Some(stitching) = &self.rspec.stitching else {
            return Vec::new();
        };

        stitching
            .paths
            .iter()
            .flat_map(|path| path.hops.iter().map(move |hop| (path, hop)))
            .filter_map(|(path, hop)| {
                let link_id = hop.link_id()?;
                if self.resolve_hop(hop).is_some() {
                    return None;
                }
                Some(DanglingHop {
                    path_id: path.id.clone(),
                    hop_id: hop.id.clone(),
                    link_id: link_id.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    const TOPOLOGY: &str = r#"<rspec>
        <node id="N1"><interface id="N1:if0"/></node>
        <node id="N2"><interface id="N2:if0"/></node>
        <link id="L1"><interface id="N1:if0"/><interface id="N2:if0"/></link>
        <link id="L1"><interface id="dup"/></link>
        <stitching lastUpdateTime="t0">
            <path id="P1">
                <hop id="1"><link id="L1"/><nextHop>2</nextHop></hop>
                <hop id="2"><link id="N2:if0"/><nextHop>3</nextHop></hop>
                <hop id="3"><link id="urn:remote"/><nextHop>null</nextHop></hop>
                <hop id="4"/>
            </path>
        </stitching>
    </rspec>"#;

    #[test]
    fn test_index_lookups() {
        let rspec = parse(TOPOLOGY).unwrap();
        let index = rspec.index();

        assert_eq!(index.node("N2").map(|n| n.id.as_str()), Some("N2"));
        assert!(index.node("N3").is_none());
        assert!(index.interface("N1:if0").is_some());
        assert!(index.interface("missing").is_none());
    }

    #[test]
    fn test_index_first_declaration_wins() {
        let rspec = parse(TOPOLOGY).unwrap();
        let index = rspec.index();

        let link = index.link("L1").unwrap();
        assert_eq!(link.interfaces.len(), 2);
    }

    #[test]
    fn test_interface_declared_on_node_first() {
        let rspec = parse(TOPOLOGY).unwrap();
        let index = rspec.index();

        let interface = index.interface("N1:if0").unwrap();
        assert_eq!(
            interface.owner.as_ref().map(|o| o.id()),
            Some("N1")
        );
    }

    #[test]
    fn test_resolve_hop() {
        let rspec = parse(TOPOLOGY).unwrap();
        let index = rspec.index();
        let path = &rspec.stitching.as_ref().unwrap().paths[0];

        assert!(matches!(
            index.resolve_hop(&path.hops[0]),
            Some(HopTarget::Link(link)) if link.id == "L1"
        ));
        assert!(matches!(
            index.resolve_hop(&path.hops[1]),
            Some(HopTarget::Interface(interface)) if interface.id == "N2:if0"
        ));
        assert_eq!(index.resolve_hop(&path.hops[2]), None);
        assert_eq!(index.resolve_hop(&path.hops[3]), None);
    }

    #[test]
    fn test_dangling_hops() {
        let rspec = parse(TOPOLOGY).unwrap();
        let dangling = rspec.index().dangling_hops();

        assert_eq!(
            dangling,
            vec![DanglingHop {
                path_id: "P1".to_string(),
                hop_id: "3".to_string(),
                link_id: "urn:remote".to_string(),
            }]
        );
    }

    #[test]
    fn test_dangling_hops_without_stitching() {
        let rspec = parse(r#"<rspec><link id="L1"/></rspec>"#).unwrap();
        assert!(rspec.index().dangling_hops().is_empty());
    }
}
