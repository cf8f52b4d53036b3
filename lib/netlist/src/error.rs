use thiserror::Error;

/// An error raised while reading a SPICE netlist.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NetlistParseError {
    #[error("line {line}: unknown device '{name}'")]
    UnknownDevice { line: usize, name: String },
    #[error("line {line}: device '{name}' needs at least {expected} nets, found {found}")]
    MissingNets {
        line: usize,
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: device '{name}' has no model name")]
    MissingModel { line: usize, name: String },
    #[error("line {line}: cannot tell the polarity of MOSFET model '{model}'")]
    UnknownPolarity { line: usize, model: String },
    #[error("line {line}: .SUBCKT card without a name")]
    UnnamedSubcircuit { line: usize },
    #[error("line {line}: continuation line without a preceding card")]
    DanglingContinuation { line: usize },
}
