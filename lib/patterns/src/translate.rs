use crate::{build_topology_query, INVERTER_TEMPLATE};
use circuit_analyzer_netlist::parse_subcircuit;
use serde::{Deserialize, Serialize};

/// A named subcircuit as submitted by a client.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SubcircuitDefinition {
    /// Identifier of the subcircuit, echoed back as the pattern name.
    pub name: String,
    /// The netlist text. Either a full `.SUBCKT` ... `.ENDS` block or only its device cards.
    pub text: String,
}

/// The result of translating a [SubcircuitDefinition].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub pattern: String,
    pub sparql: String,
    #[serde(skip)]
    pub source: TranslationSource,
}

/// Where the SPARQL of a [Translation] comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationSource {
    /// Derived from the parsed device/net topology.
    #[default]
    Topology,
    /// The fixed [INVERTER_TEMPLATE], used when the netlist has no usable devices.
    Template,
}

/// Translates a subcircuit into a SPARQL query.
///
/// This never fails: netlists that cannot be parsed, or that contain no devices, are answered
/// with the [INVERTER_TEMPLATE].
pub fn translate(definition: &SubcircuitDefinition) -> Translation {
    let (sparql, source) = match parse_subcircuit(&definition.name, &definition.text) {
        Ok(subcircuit) if !subcircuit.is_empty() => {
            tracing::debug!(
                pattern = %definition.name,
                devices = subcircuit.devices.len(),
                "Derived pattern from netlist topology"
            );
            (
                build_topology_query(&subcircuit).to_string(),
                TranslationSource::Topology,
            )
        }
        Ok(_) => {
            tracing::debug!(pattern = %definition.name, "Netlist has no devices, using template");
            (INVERTER_TEMPLATE.to_owned(), TranslationSource::Template)
        }
        Err(error) => {
            tracing::warn!(
                pattern = %definition.name,
                %error,
                "Could not parse netlist, using template"
            );
            (INVERTER_TEMPLATE.to_owned(), TranslationSource::Template)
        }
    };

    Translation {
        pattern: definition.name.clone(),
        sparql,
        source,
    }
}
