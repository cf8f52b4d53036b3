/// Pattern of a CMOS inverter: a PMOS and an NMOS device sharing their input and output nets.
///
/// Returned for netlists that carry no devices to derive a pattern from.
pub const INVERTER_TEMPLATE: &str = r#"PREFIX ckt: <http://example.org/ckt#>
SELECT DISTINCT ?dev ?in ?out WHERE {
  ?pm a ckt:Device ; ckt:type "PMOS" ; ckt:connectsTo ?in, ?out .
  ?nm a ckt:Device ; ckt:type "NMOS" ; ckt:connectsTo ?in, ?out .
  FILTER(?pm != ?nm)
}"#;
