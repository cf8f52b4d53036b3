use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "circuit-analyzer", arg_required_else_help = true)]
/// Circuit Analyzer: translates SPICE subcircuits into SPARQL patterns and runs them against a triple-store
pub struct Args {
    /// Log debug output
    ///
    /// The RUST_LOG environment variable takes precedence over this flag.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Circuit Analyzer HTTP server
    Serve {
        /// Host and port to listen to
        #[arg(short, long, default_value = "localhost:8000", value_hint = ValueHint::Hostname)]
        bind: String,
        /// Allows cross-origin requests
        #[arg(long)]
        cors: bool,
        /// SPARQL query endpoint of the triple-store
        ///
        /// Defaults to the FUSEKI_QUERY_ENDPOINT environment variable, then to
        /// http://fuseki:3030/dataset/query.
        #[arg(long, value_hint = ValueHint::Url)]
        endpoint: Option<String>,
        /// Timeout for queries forwarded to the triple-store, in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
    /// Translate a SPICE subcircuit into a SPARQL query and print it
    Translate {
        /// File holding the netlist
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// Name of the subcircuit to translate
        ///
        /// By default the first .SUBCKT definition of the netlist is used.
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Run a SPARQL query against the triple-store and print the JSON results
    Query {
        /// File holding the query
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// SPARQL query endpoint of the triple-store
        ///
        /// Defaults to the FUSEKI_QUERY_ENDPOINT environment variable, then to
        /// http://fuseki:3030/dataset/query.
        #[arg(long, value_hint = ValueHint::Url)]
        endpoint: Option<String>,
        /// Timeout for the query, in seconds
        #[arg(long, default_value_t = 60)]
        timeout: u64,
    },
}
