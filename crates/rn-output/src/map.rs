//! Graphviz export of the network and current train positions.
//!
//! One undirected node per station, labelled with the station name and the
//! numbers of the trains currently there.  One edge per connection, coloured
//! and labelled with its line name, so lines named after colours ("red",
//! "blue") render in that colour.  Render with e.g. `neato -Tpng map.dot`.

use std::fmt;
use std::path::Path;

use tracing::info;

use rn_topology::RailNetwork;

use crate::OutputResult;

struct DotMap<'a>(&'a RailNetwork);

impl fmt::Display for DotMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let network = self.0;
        writeln!(f, "graph railnet {{")?;
        writeln!(f, "    node [shape=circle];")?;

        for station in network.stations() {
            let trains: Vec<String> = station.trains().iter().map(|t| t.0.to_string()).collect();
            let label = if trains.is_empty() {
                escape(&station.name)
            } else {
                format!("{}\\n{}", escape(&station.name), trains.join(", "))
            };
            writeln!(f, "    \"{}\" [label=\"{label}\"];", escape(&station.name))?;
        }

        for conn in network.connections() {
            let line = escape(&conn.line);
            writeln!(
                f,
                "    \"{}\" -- \"{}\" [color=\"{line}\", label=\"{line}\"];",
                escape(&conn.source),
                escape(&conn.target)
            )?;
        }
        writeln!(f, "}}")
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The network as a Graphviz `graph` document.
pub fn render_dot(network: &RailNetwork) -> String {
    DotMap(network).to_string()
}

/// Write [`render_dot`] output to `path`.
pub fn write_dot(network: &RailNetwork, path: &Path) -> OutputResult<()> {
    std::fs::write(path, render_dot(network))?;
    info!(path = %path.display(), "wrote network map");
    Ok(())
}
