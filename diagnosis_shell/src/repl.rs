//! The interactive read-eval-print loop.

use anyhow::Result;
use diagnosis_core::{
    display_label, format_confidence, normalize_label, DiagnosticSession, NodeRole,
};
use process_catalog::Catalog;
use std::io::{BufRead, Write};

use crate::commands::{Command, GraphFormat, HELP};
use crate::config::ShellConfig;

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Terminal front end bound to one diagnostic session.
pub struct Shell {
    session: DiagnosticSession,
    catalog: Catalog,
    config: ShellConfig,
}

impl Shell {
    pub fn new(session: DiagnosticSession, catalog: Catalog, config: ShellConfig) -> Self {
        Self {
            session,
            catalog,
            config,
        }
    }

    pub fn session(&self) -> &DiagnosticSession {
        &self.session
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        writeln!(output, "Manufacturing Process Diagnosis")?;
        writeln!(output, "Type `help` for commands, `indicators` to start.")?;

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }
            if self.execute(Command::parse(&line), &mut output)? == Flow::Quit {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }

    /// Run a single command against the session.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::Add(label) => self.add(&label, out)?,
            Command::Pick(n) => {
                let label = n
                    .checked_sub(1)
                    .and_then(|i| self.catalog.indicators().nth(i))
                    .map(str::to_string);
                match label {
                    Some(label) => self.add(&label, out)?,
                    None => writeln!(out, "No indicator number {}; see `indicators`.", n)?,
                }
            }
            Command::Indicators => self.print_indicators(out)?,
            Command::Facts => {
                let facts = self.session.engine().facts_in_order();
                if facts.is_empty() {
                    writeln!(out, "No indicators selected.")?;
                } else {
                    writeln!(out, "Selected Indicators:")?;
                    for fact in facts {
                        writeln!(out, "  {}", display_label(fact))?;
                    }
                }
            }
            Command::Clear => {
                self.session.clear_indicators();
                writeln!(out, "Cleared all indicators.")?;
            }
            Command::Analyze => {
                let report = self.session.analyze();
                write!(out, "{}", report)?;
                if report.is_empty() {
                    writeln!(out)?;
                }
                if self.config.show_hints {
                    self.print_hints(out)?;
                }
            }
            Command::History => {
                let history = self.session.history();
                if history.is_empty() {
                    writeln!(out, "Analysis history is empty.")?;
                }
                for entry in history {
                    writeln!(out, "{}", entry.trim_end())?;
                }
            }
            Command::Graph(format) => self.print_graph(format, out)?,
            Command::Rules => {
                for rule in self.session.engine().rules() {
                    let conditions: Vec<&str> =
                        rule.conditions().iter().map(String::as_str).collect();
                    writeln!(
                        out,
                        "#{} {} -> {} ({})",
                        rule.id(),
                        conditions.join(" + "),
                        rule.conclusion(),
                        format_confidence(rule.confidence())
                    )?;
                }
            }
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => {
                writeln!(out, "Goodbye.")?;
                return Ok(Flow::Quit);
            }
            Command::Empty => {}
            Command::Invalid(message) => writeln!(out, "{}", message)?,
        }
        Ok(Flow::Continue)
    }

    fn add<W: Write>(&mut self, label: &str, out: &mut W) -> Result<()> {
        let Some(normalized) = normalize_label(label) else {
            return Ok(());
        };
        if self.session.add_indicator(label) {
            writeln!(out, "Selected: {}", display_label(&normalized))?;
        } else {
            writeln!(out, "Already selected: {}", display_label(&normalized))?;
        }
        Ok(())
    }

    fn print_indicators<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.catalog.categories().is_empty() {
            writeln!(out, "This catalog lists no indicators; use `add <indicator>`.")?;
            return Ok(());
        }

        let selected = self.session.engine().current_facts();
        let mut number = 1;
        for category in self.catalog.categories() {
            writeln!(out, "{}:", category.name)?;
            for indicator in &category.indicators {
                let mark = if selected.contains(indicator) { "*" } else { " " };
                writeln!(out, " {}{:>2}. {}", mark, number, display_label(indicator))?;
                number += 1;
            }
        }
        Ok(())
    }

    /// Point out rules that are one indicator short of firing.
    fn print_hints<W: Write>(&self, out: &mut W) -> Result<()> {
        let engine = self.session.engine();
        for rule in engine.rules() {
            if rule.conditions().len() < 2 {
                continue;
            }
            if let Some(missing) = engine.missing_conditions(rule.id()) {
                if let [only] = missing.as_slice() {
                    writeln!(
                        out,
                        "Hint: also observing {} would indicate {}",
                        display_label(only),
                        display_label(rule.conclusion())
                    )?;
                }
            }
        }
        Ok(())
    }

    fn print_graph<W: Write>(&self, format: GraphFormat, out: &mut W) -> Result<()> {
        let engine = self.session.engine();
        match format {
            GraphFormat::Json => writeln!(out, "{}", engine.graph_snapshot().to_json()?)?,
            GraphFormat::Dot => write!(out, "{}", engine.graph_snapshot().to_dot())?,
            GraphFormat::Text => {
                let graph = engine.graph();
                for node in graph.nodes() {
                    if graph.node_role(node) == Some(NodeRole::Indicator) {
                        continue;
                    }
                    writeln!(
                        out,
                        "{} <- {}",
                        display_label(node),
                        graph.conditions_of(node).join(", ")
                    )?;
                }
            }
        }
        Ok(())
    }
}
