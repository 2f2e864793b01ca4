//! Prompt loops over any line-based input and text output.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::debug;

use rn_core::{Connection, RandomSource};
use rn_output::write_dot;
use rn_sim::Sim;
use rn_topology::{load_connections_csv, load_stations_csv, StationSpec, TopologyResult};

use crate::input::{parse_hop_limit, parse_train_count, parse_train_id, MenuChoice};

/// Reads answers from `input` and writes prompts and results to `output`.
///
/// Generic so the interactive loop can be driven from a `Cursor` in tests.
pub struct Console<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` without a newline, flush, and read one line.
    ///
    /// # Errors
    /// Fails if the input is closed.
    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed while waiting for an answer to {:?}", text.trim());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    // ── Setup questions ───────────────────────────────────────────────────

    pub fn ask_stations(&mut self) -> Result<(PathBuf, Vec<StationSpec>)> {
        self.ask_file("Enter name of stations file: ", load_stations_csv)
    }

    pub fn ask_connections(&mut self) -> Result<(PathBuf, Vec<Connection>)> {
        self.ask_file("Enter name of connections file: ", load_connections_csv)
    }

    /// Ask until the path names an existing file that loads with at least
    /// one record.
    fn ask_file<T>(
        &mut self,
        question: &str,
        load:     impl Fn(&Path) -> TopologyResult<Vec<T>>,
    ) -> Result<(PathBuf, Vec<T>)> {
        loop {
            let path = PathBuf::from(self.prompt(question)?.trim());
            if !path.is_file() {
                self.say("This file does not exist.")?;
                continue;
            }
            match load(&path) {
                Ok(records) if !records.is_empty() => return Ok((path, records)),
                Ok(_) => debug!(path = %path.display(), "rejected empty file"),
                Err(e) => debug!(path = %path.display(), error = %e, "rejected file"),
            }
            self.say("This file cannot be interpreted.")?;
        }
    }

    pub fn ask_train_count(&mut self) -> Result<usize> {
        loop {
            match parse_train_count(&self.prompt("Enter number of trains: ")?) {
                Ok(n) => return Ok(n),
                Err(e) => self.say(e)?,
            }
        }
    }

    // ── Main menu ─────────────────────────────────────────────────────────

    /// Run the interactive menu until the user quits.  The map option
    /// writes a Graphviz file to `map_path`.
    pub fn menu<S: RandomSource>(&mut self, sim: &mut Sim<S>, map_path: &Path) -> Result<()> {
        loop {
            let choice = loop {
                match MenuChoice::parse(&self.prompt(MenuChoice::PROMPT)?) {
                    Some(c) => break c,
                    None => self.say("\nInvalid input.\n")?,
                }
            };

            match choice {
                MenuChoice::Advance => {
                    sim.step();
                    self.say("")?;
                }
                MenuChoice::TrainInfo => self.train_info(sim)?,
                MenuChoice::RouteInfo => self.route_info(sim)?,
                MenuChoice::Map => {
                    write_dot(&sim.network, map_path)
                        .with_context(|| format!("writing map to {}", map_path.display()))?;
                    self.say(format!("Rail network map written to {}.\n", map_path.display()))?;
                }
                MenuChoice::Quit => {
                    self.say("Thank you and goodbye!")?;
                    return Ok(());
                }
            }
        }
    }

    fn train_info<S: RandomSource>(&mut self, sim: &Sim<S>) -> Result<()> {
        let count = sim.network.train_count();
        let question = format!("Which train [1 - {count}]: ");
        let id = loop {
            match parse_train_id(&self.prompt(&question)?, count) {
                Ok(id) => break id,
                Err(e) => self.say(format!("\n{e}\n"))?,
            }
        };
        let summary = sim.train_summary(id)?;
        self.say(summary)
    }

    fn route_info<S: RandomSource>(&mut self, sim: &Sim<S>) -> Result<()> {
        let start = self.prompt("Select a start station: ")?;
        let end = self.prompt("Select an end station: ")?;
        let hops = loop {
            match parse_hop_limit(&self.prompt("Select timesteps: ")?) {
                Some(h) => break h,
                None => self.say("\nInvalid input. Input a valid integer.\n")?,
            }
        };

        let verdict = if sim.reachable(&start, &end, hops) { "is" } else { "is not" };
        self.say(format!(
            "\nStation {end} {verdict} reachable from station {start} within {hops} timesteps.\n"
        ))
    }
}
