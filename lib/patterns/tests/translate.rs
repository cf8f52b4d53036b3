#![cfg(test)]

use circuit_analyzer_patterns::vocab::ckt;
use circuit_analyzer_patterns::{
    translate, SubcircuitDefinition, TranslationSource, INVERTER_TEMPLATE,
};
use spargebra::Query;

const NAND2: &str = "
* two-input NAND
.SUBCKT NAND2 a b y vdd vss
MP1 y a vdd vdd pch_3v3 w=2u l=0.35u
MP2 y b vdd vdd pch_3v3 w=2u l=0.35u
MN1 y a mid vss nch_3v3 w=2u l=0.35u
MN2 mid b vss vss nch_3v3 w=2u l=0.35u
.ENDS NAND2
";

fn definition(name: &str, text: &str) -> SubcircuitDefinition {
    SubcircuitDefinition {
        name: name.to_owned(),
        text: text.to_owned(),
    }
}

#[allow(deprecated, reason = "Parsing is only used to check the generated syntax")]
fn parse(sparql: &str) -> Query {
    Query::parse(sparql, None).unwrap()
}

#[test]
fn unparsable_text_falls_back_to_template() {
    let translation = translate(&definition("INV1", "arbitrary or empty string"));
    assert_eq!(translation.pattern, "INV1");
    assert_eq!(translation.sparql, INVERTER_TEMPLATE);
    assert_eq!(translation.source, TranslationSource::Template);
}

#[test]
fn empty_text_falls_back_to_template() {
    let translation = translate(&definition("INV1", ""));
    assert_eq!(translation.pattern, "INV1");
    assert_eq!(translation.sparql, INVERTER_TEMPLATE);
}

#[test]
fn template_is_valid_sparql() {
    parse(INVERTER_TEMPLATE);
}

#[test]
fn nand_topology() {
    let translation = translate(&definition("NAND2", NAND2));
    assert_eq!(translation.pattern, "NAND2");
    assert_eq!(translation.source, TranslationSource::Topology);

    let sparql = &translation.sparql;
    assert!(!sparql.is_empty());
    parse(sparql);

    assert_eq!(sparql.matches("\"PMOS\"").count(), 2);
    assert_eq!(sparql.matches("\"NMOS\"").count(), 2);
    assert!(sparql.contains(ckt::NAMESPACE));
    assert!(sparql.contains("?n_mid"));
    assert!(sparql.contains("FILTER"));

    // The internal net is matched but not projected.
    let select = sparql.split("WHERE").next().unwrap();
    assert!(select.contains("?d_mp1"));
    assert!(select.contains("?n_y"));
    assert!(!select.contains("?n_mid"));
}

#[test]
fn pattern_echoes_requested_name() {
    let translation = translate(&definition("my_nand", NAND2));
    assert_eq!(translation.pattern, "my_nand");
    assert_eq!(translation.source, TranslationSource::Topology);
}

#[test]
fn hierarchical_instances() {
    let text = "
.subckt buf in out vdd vss
xinv1 in mid vdd vss inv
xinv2 mid out vdd vss inv
c1 out vss 10f
.ends
";
    let translation = translate(&definition("buf", text));
    parse(&translation.sparql);
    assert_eq!(translation.sparql.matches("\"INV\"").count(), 2);
    assert!(translation.sparql.contains("\"CAP\""));
}

#[test]
fn serializes_only_pattern_and_sparql() {
    let translation = translate(&definition("INV1", ""));
    let json = serde_json::to_value(&translation).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["pattern"], "INV1");
    assert_eq!(object["sparql"], INVERTER_TEMPLATE);
}
