use crate::vocab::ckt;
use circuit_analyzer_netlist::Subcircuit;
use oxrdf::vocab::rdf;
use oxrdf::{Literal, NamedNodeRef, Variable};
use rustc_hash::{FxHashMap, FxHashSet};
use spargebra::algebra::{Expression, GraphPattern};
use spargebra::term::{TermPattern, TriplePattern};
use spargebra::Query;

/// Builds a `SELECT DISTINCT` query that matches the device/net topology of `subcircuit`.
///
/// Each device becomes a `ckt:Device` node with its type label and one `ckt:connectsTo` edge per
/// distinct net. Devices that share a type label are required to bind to different nodes. The
/// projection holds all device variables followed by the variables of the ports that are
/// connected to at least one device (or of all nets, if there is no such port).
pub fn build_topology_query(subcircuit: &Subcircuit) -> Query {
    let mut names = VariableNames::default();

    let mut patterns = Vec::new();
    let mut devices = Vec::with_capacity(subcircuit.devices.len());
    let mut nets: FxHashMap<&str, Variable> = FxHashMap::default();
    let mut net_order = Vec::new();

    for device in &subcircuit.devices {
        let device_var = names.fresh("d", &device.name);
        let label = device.kind.type_label();

        patterns.push(triple(&device_var, rdf::TYPE, ckt::DEVICE.into_owned()));
        patterns.push(triple(
            &device_var,
            ckt::TYPE,
            Literal::new_simple_literal(label.as_str()),
        ));
        for net in device.distinct_nets() {
            let net_var = nets
                .entry(net)
                .or_insert_with(|| {
                    net_order.push(net);
                    names.fresh("n", net)
                })
                .clone();
            patterns.push(triple(&device_var, ckt::CONNECTS_TO, net_var));
        }

        devices.push((device_var, label));
    }

    let mut pattern = GraphPattern::Bgp { patterns };
    if let Some(expr) = distinct_devices_filter(&devices) {
        pattern = GraphPattern::Filter {
            expr,
            inner: Box::new(pattern),
        };
    }

    let port_nets: Vec<&str> = net_order
        .iter()
        .copied()
        .filter(|net| subcircuit.is_port(net))
        .collect();
    let projected_nets = if port_nets.is_empty() {
        net_order
    } else {
        port_nets
    };

    let variables = devices
        .into_iter()
        .map(|(var, _)| var)
        .chain(projected_nets.iter().filter_map(|net| nets.get(net).cloned()))
        .collect();

    Query::Select {
        dataset: None,
        pattern: GraphPattern::Distinct {
            inner: Box::new(GraphPattern::Project {
                inner: Box::new(pattern),
                variables,
            }),
        },
        base_iri: None,
    }
}

fn triple(
    subject: &Variable,
    predicate: NamedNodeRef<'_>,
    object: impl Into<TermPattern>,
) -> TriplePattern {
    TriplePattern {
        subject: subject.clone().into(),
        predicate: predicate.into_owned().into(),
        object: object.into(),
    }
}

/// `?a != ?b` for every pair of devices with the same type label, joined with `&&`.
fn distinct_devices_filter(devices: &[(Variable, String)]) -> Option<Expression> {
    let mut result: Option<Expression> = None;
    for (i, (left, left_label)) in devices.iter().enumerate() {
        for (right, right_label) in &devices[i + 1..] {
            if left_label != right_label {
                continue;
            }
            let not_equal = Expression::Not(Box::new(Expression::Equal(
                Box::new(Expression::Variable(left.clone())),
                Box::new(Expression::Variable(right.clone())),
            )));
            result = Some(match result {
                None => not_equal,
                Some(previous) => Expression::And(Box::new(previous), Box::new(not_equal)),
            });
        }
    }
    result
}

/// Hands out SPARQL variable names that are valid and unique within one query.
#[derive(Default)]
struct VariableNames {
    used: FxHashSet<String>,
}

impl VariableNames {
    fn fresh(&mut self, prefix: &str, name: &str) -> Variable {
        let sanitized: String = name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect();
        let base = format!("{prefix}_{sanitized}");

        let mut candidate = base.clone();
        let mut suffix = 1;
        while self.used.contains(&candidate) {
            suffix += 1;
            candidate = format!("{base}_{suffix}");
        }
        self.used.insert(candidate.clone());
        Variable::new_unchecked(candidate)
    }
}
