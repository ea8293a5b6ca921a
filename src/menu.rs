//! Interactive console menu over a [`Session`].
//!
//! The driver is generic over its input and output so it can be scripted.

use std::io::{BufRead, Write};

use crate::algorithm::query::Representation;
use crate::config::MenuConfig;
use crate::graph::Graph;
use crate::session::Session;
use crate::{Error, Result};

const MENU: &str = "\
Menu:
1. Load graph from file
2. Generate random graph
3. Display graph
4. Dijkstra (matrix)
5. Dijkstra (list)
6. Benchmark
7. Save graph to file
8. Exit
Choice: ";

/// Menu driver reading answers from `input` and writing prompts to `output`
pub struct Menu<R, W> {
    session: Session,
    config: MenuConfig,
    input: R,
    output: W,
}

/// Whether the loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(session: Session, config: MenuConfig, input: R, output: W) -> Self {
        Menu {
            session,
            config,
            input,
            output,
        }
    }

    /// Runs until the exit option is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match self.dispatch(choice.trim()) {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                // Failed actions are reported and the menu shown again
                Err(Error::Io(err)) => return Err(Error::Io(err)),
                Err(err) => {
                    log::debug!("Menu action failed: {:?}", err);
                    writeln!(self.output, "Error: {}", err)?;
                }
            }
        }
    }

    /// Hands back the session, e.g. to inspect it after a scripted run
    pub fn into_session(self) -> Session {
        self.session
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => {
                let path = self.prompt("File name: ")?;
                let graph = self.session.load_file(path.trim())?;
                let (v, e) = (graph.vertex_count(), graph.edge_count());
                writeln!(self.output, "Loaded graph with {} vertices and {} edges.", v, e)?;
            }
            "2" => {
                let vertices: usize = self.prompt_number("Number of vertices: ")?;
                let density: u32 = self.prompt_number("Density in %: ")?;
                let graph = self.session.generate(vertices, density)?;
                let (v, e) = (graph.vertex_count(), graph.edge_count());
                writeln!(self.output, "Generated graph with {} vertices and {} edges.", v, e)?;
            }
            "3" => {
                let text = self.session.render()?;
                write!(self.output, "{}", text)?;
            }
            "4" => self.run_query(Representation::Matrix)?,
            "5" => self.run_query(Representation::List)?,
            "6" => {
                self.session.graph()?;
                let prompt = format!(
                    "Number of instances to test [{}]: ",
                    self.config.default_instances
                );
                let answer = self.prompt(&prompt)?;
                let instances = if answer.trim().is_empty() {
                    self.config.default_instances
                } else {
                    parse_number(&answer)?
                };

                let report = self.session.benchmark(instances)?;
                writeln!(
                    self.output,
                    "Average time (matrix) over {} instances: {:.6} seconds",
                    report.instances,
                    report.matrix.average.as_secs_f64()
                )?;
                writeln!(
                    self.output,
                    "Average time (list) over {} instances: {:.6} seconds",
                    report.instances,
                    report.list.average.as_secs_f64()
                )?;
            }
            "7" => {
                self.session.graph()?;
                let path = self.prompt("File name: ")?;
                self.session.save(path.trim())?;
                writeln!(self.output, "Graph saved.")?;
            }
            "8" => {
                writeln!(self.output, "Exiting.")?;
                return Ok(Flow::Exit);
            }
            _ => writeln!(self.output, "Invalid choice. Try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn run_query(&mut self, representation: Representation) -> Result<()> {
        self.session.graph()?;
        let source: usize = self.prompt_number("Source vertex: ")?;
        let destination: usize = self.prompt_number("Destination vertex: ")?;

        let query = self.session.shortest_path(representation, source, destination)?;
        match query.distance {
            Some(distance) => writeln!(
                self.output,
                "Shortest path from {} to {} is {}",
                source, destination, distance
            )?,
            None => writeln!(
                self.output,
                "There is no path from {} to {}",
                source, destination
            )?,
        }
        if let Some(path) = &query.path {
            let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            writeln!(self.output, "Path: {}", hops.join(" -> "))?;
        }
        writeln!(
            self.output,
            "Execution time ({}): {:.6} seconds",
            representation,
            query.elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()?.ok_or_else(|| {
            Error::InvalidParameter("input ended before an answer was given".to_string())
        })
    }

    fn prompt_number<T: std::str::FromStr>(&mut self, text: &str) -> Result<T> {
        let answer = self.prompt(text)?;
        parse_number(&answer)
    }
}

fn parse_number<T: std::str::FromStr>(answer: &str) -> Result<T> {
    let trimmed = answer.trim();
    trimmed
        .parse()
        .map_err(|_| Error::InvalidParameter(format!("{:?} is not a valid number", trimmed)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Session) {
        let mut output = Vec::new();
        let mut menu = Menu::new(
            Session::seeded(3),
            MenuConfig::default(),
            Cursor::new(script.as_bytes()),
            &mut output,
        );
        menu.run().unwrap();
        let session = menu.into_session();
        (String::from_utf8(output).unwrap(), session)
    }

    #[test]
    fn test_query_before_graph_reports_error() {
        let (out, _) = run_script("4\n8\n");
        assert!(out.contains("No graph has been loaded"), "{}", out);
        assert!(out.ends_with("Exiting.\n"));
    }

    #[test]
    fn test_generate_and_query_both_representations() {
        let (out, session) = run_script("2\n8\n50\n4\n0\n0\n5\n0\n0\n8\n");
        assert!(out.contains("Generated graph with 8 vertices"), "{}", out);
        assert!(out.contains("Execution time (matrix)"), "{}", out);
        assert!(out.contains("Execution time (list)"), "{}", out);
        assert_eq!(out.matches("Shortest path from 0 to 0 is 0").count(), 2);
        assert!(session.has_graph());
    }

    #[test]
    fn test_out_of_range_vertex_is_reported() {
        let (out, _) = run_script("2\n3\n100\n5\n0\n7\n8\n");
        assert!(out.contains("Vertex 7 is out of range"), "{}", out);
    }

    #[test]
    fn test_oversized_generate_is_reported() {
        let (out, session) = run_script("2\n3000000000\n0\n8\n");
        assert!(out.contains("do not fit in an adjacency matrix"), "{}", out);
        assert!(!session.has_graph());
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (out, _) = run_script("9\n");
        assert!(out.contains("Invalid choice"));
    }

    #[test]
    fn test_benchmark_uses_default_instances() {
        let (out, _) = run_script("2\n6\n50\n6\n\n8\n");
        assert!(out.contains("Average time (matrix) over 10 instances"), "{}", out);
        assert!(out.contains("Average time (list) over 10 instances"), "{}", out);
    }
}
