//! Translates SPICE subcircuit definitions into SPARQL queries that match the same device/net
//! topology in a circuit graph.

mod query;
mod template;
mod translate;
pub mod vocab;

pub use query::build_topology_query;
pub use template::INVERTER_TEMPLATE;
pub use translate::{translate, SubcircuitDefinition, Translation, TranslationSource};
