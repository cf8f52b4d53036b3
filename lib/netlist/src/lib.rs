//! Device/net model of a SPICE subcircuit and a parser that builds it from netlist text.

mod device;
mod error;
mod parser;
mod subcircuit;

pub use device::{BjtPolarity, Device, DeviceKind, MosPolarity};
pub use error::NetlistParseError;
pub use parser::{find_subcircuit_name, parse_subcircuit};
pub use subcircuit::Subcircuit;
