// Mininet script rendering
//
// Produces a self-contained Python script that rebuilds the topology under
// Mininet and hands control of the cloned switches to a remote OpenFlow
// controller.

use std::fmt::Write as _;

use super::{SwitchAttrs, TopologyBuilder};
use crate::error::CoreError;
use crate::model::Graph;

const HEADER: &str = r#"#!/usr/bin/env python
"""Cloned network topology generated by netclone.

Run with: sudo -E python <this file>
"""

from mininet.cli import CLI
from mininet.log import setLogLevel
from mininet.net import Mininet
from mininet.node import RemoteController
from mininet.topo import Topo


class ClonedTopology(Topo):
    def build(self):
"#;

/// A [`TopologyBuilder`] that emits Mininet `Topo.build()` statements.
///
/// Node handles are the Python variable names, which are the graph labels.
#[derive(Debug, Clone)]
pub struct MininetScript {
    controller_host: String,
    controller_port: u16,
    statements: Vec<String>,
}

impl MininetScript {
    /// Start a script whose emulated switches connect to the OpenFlow
    /// controller at `controller_host:controller_port`.
    pub fn new(controller_host: impl Into<String>, controller_port: u16) -> Self {
        Self {
            controller_host: controller_host.into(),
            controller_port,
            statements: Vec::new(),
        }
    }

    /// Render a whole graph in one go.
    pub fn from_graph(
        graph: &Graph,
        controller_host: impl Into<String>,
        controller_port: u16,
    ) -> Result<String, CoreError> {
        let mut script = Self::new(controller_host, controller_port);
        graph.build_into(&mut script)?;
        Ok(script.render())
    }

    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);

        if self.statements.is_empty() {
            out.push_str("        pass\n");
        }
        for statement in &self.statements {
            let _ = writeln!(out, "        {statement}");
        }

        let _ = write!(
            out,
            r#"

def run():
    net = Mininet(topo=ClonedTopology(), controller=None)
    net.addController(RemoteController('c0', ip={host}, port={port}))
    net.start()
    CLI(net)
    net.stop()


if __name__ == '__main__':
    setLogLevel('info')
    run()
"#,
            host = py_str(&self.controller_host),
            port = self.controller_port,
        );

        out
    }
}

impl TopologyBuilder for MininetScript {
    type Handle = String;

    fn add_switch(&mut self, label: &str, attrs: &SwitchAttrs<'_>) -> String {
        self.statements.push(format!(
            "{label} = self.addSwitch({}, dpid={})",
            py_str(label),
            py_str(attrs.dpid)
        ));
        label.to_owned()
    }

    fn add_host(&mut self, label: &str) -> String {
        self.statements
            .push(format!("{label} = self.addHost({})", py_str(label)));
        label.to_owned()
    }

    fn add_link(&mut self, a: &String, b: &String, port_a: Option<u32>, port_b: Option<u32>) {
        let mut statement = format!("self.addLink({a}, {b}");
        if let Some(port) = port_a {
            let _ = write!(statement, ", port1={port}");
        }
        if let Some(port) = port_b {
            let _ = write!(statement, ", port2={port}");
        }
        statement.push(')');
        self.statements.push(statement);
    }
}

/// Single-quoted Python string literal.
fn py_str(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
