use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MosPolarity {
    Nmos,
    Pmos,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BjtPolarity {
    Npn,
    Pnp,
}

/// The kind of a device card, as given by the first letter of its name and, for active devices,
/// by its model name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceKind {
    Mosfet(MosPolarity),
    Bjt(BjtPolarity),
    Resistor,
    Capacitor,
    Inductor,
    Diode,
    VoltageSource,
    CurrentSource,
    /// An instance of another subcircuit. Holds the (lower-cased) name of the subcircuit.
    Instance(String),
}

impl DeviceKind {
    /// The value of the `ckt:type` literal attached to devices of this kind.
    pub fn type_label(&self) -> String {
        match self {
            DeviceKind::Mosfet(MosPolarity::Nmos) => "NMOS".to_owned(),
            DeviceKind::Mosfet(MosPolarity::Pmos) => "PMOS".to_owned(),
            DeviceKind::Bjt(BjtPolarity::Npn) => "NPN".to_owned(),
            DeviceKind::Bjt(BjtPolarity::Pnp) => "PNP".to_owned(),
            DeviceKind::Resistor => "RES".to_owned(),
            DeviceKind::Capacitor => "CAP".to_owned(),
            DeviceKind::Inductor => "IND".to_owned(),
            DeviceKind::Diode => "DIODE".to_owned(),
            DeviceKind::VoltageSource => "VSRC".to_owned(),
            DeviceKind::CurrentSource => "ISRC".to_owned(),
            DeviceKind::Instance(subcircuit) => subcircuit.to_uppercase(),
        }
    }
}

impl Display for DeviceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.type_label())
    }
}

/// A single device card of a subcircuit.
///
/// `nets` holds the connected nets in terminal order (e.g., drain, gate, source, bulk for a
/// MOSFET). A net may appear more than once, for example a diode-connected transistor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Device {
    pub name: String,
    pub kind: DeviceKind,
    pub nets: Vec<String>,
    pub model: Option<String>,
}

impl Device {
    /// Returns the connected nets without repetitions, in terminal order.
    pub fn distinct_nets(&self) -> Vec<&str> {
        let mut result: Vec<&str> = Vec::with_capacity(self.nets.len());
        for net in &self.nets {
            if !result.contains(&net.as_str()) {
                result.push(net);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_labels() {
        assert_eq!(DeviceKind::Mosfet(MosPolarity::Pmos).type_label(), "PMOS");
        assert_eq!(DeviceKind::Bjt(BjtPolarity::Pnp).type_label(), "PNP");
        assert_eq!(DeviceKind::Instance("inv".to_owned()).type_label(), "INV");
    }

    #[test]
    fn distinct_nets_keeps_terminal_order() {
        let device = Device {
            name: "m1".to_owned(),
            kind: DeviceKind::Mosfet(MosPolarity::Nmos),
            nets: vec!["out".into(), "out".into(), "vss".into(), "vss".into()],
            model: Some("nch".to_owned()),
        };
        assert_eq!(device.distinct_nets(), vec!["out", "vss"]);
    }
}
