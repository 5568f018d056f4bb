// ── Identity resolver ──
//
// One map from normalized identity to node, built once over switches and
// hosts together. A miss is always an error: an unresolved endpoint means
// the link or device data references a node the switch/device lists never
// reported.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::model::{Identity, Node, NodeKind};

/// Identity → node lookup over one graph's node set.
#[derive(Debug)]
pub struct Resolver<'a> {
    by_identity: HashMap<&'a Identity, &'a Node>,
}

impl<'a> Resolver<'a> {
    /// Index `nodes` by identity.
    ///
    /// Fails with [`CoreError::DuplicateIdentity`] if two nodes share an
    /// identity, including a switch and a host.
    pub fn new(nodes: &'a [Node]) -> Result<Self, CoreError> {
        let mut by_identity = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if by_identity.insert(&node.identity, node).is_some() {
                return Err(CoreError::DuplicateIdentity {
                    identity: node.identity.to_string(),
                    kind: node.kind,
                });
            }
        }
        Ok(Self { by_identity })
    }

    pub fn get(&self, identity: &Identity) -> Option<&'a Node> {
        self.by_identity.get(identity).copied()
    }

    /// Resolve a raw identifier to a node of the given kind.
    ///
    /// `record` describes where the identifier came from and is only
    /// evaluated on failure.
    pub fn resolve(
        &self,
        raw: &str,
        kind: NodeKind,
        record: impl FnOnce() -> String,
    ) -> Result<&'a Node, CoreError> {
        match self.get(&Identity::new(raw)) {
            Some(node) if node.kind == kind => Ok(node),
            _ => Err(CoreError::UnresolvedEndpoint {
                identifier: raw.to_owned(),
                record: record(),
            }),
        }
    }

    /// Label for a raw identifier of the given kind.
    pub fn label(
        &self,
        raw: &str,
        kind: NodeKind,
        record: impl FnOnce() -> String,
    ) -> Result<&'a str, CoreError> {
        self.resolve(raw, kind, record).map(|n| n.label.as_str())
    }
}
