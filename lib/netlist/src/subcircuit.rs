use crate::Device;
use rustc_hash::FxHashSet;
use serde::Serialize;

/// A parsed `.SUBCKT` definition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Subcircuit {
    pub name: String,
    pub ports: Vec<String>,
    pub devices: Vec<Device>,
}

impl Subcircuit {
    /// Creates an empty subcircuit.
    pub fn new(name: impl Into<String>, ports: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ports,
            devices: Vec::new(),
        }
    }

    /// Returns all nets in order of first appearance. Ports come first, followed by the internal
    /// nets in the order in which the devices reference them.
    pub fn nets(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        let mut result = Vec::new();
        let device_nets = self.devices.iter().flat_map(|d| d.nets.iter());
        for net in self.ports.iter().chain(device_nets) {
            if seen.insert(net.as_str()) {
                result.push(net.as_str());
            }
        }
        result
    }

    pub fn is_port(&self, net: &str) -> bool {
        self.ports.iter().any(|p| p == net)
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
