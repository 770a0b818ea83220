//! Shell command parsing.

/// Output format for the `graph` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphFormat {
    /// One line per conclusion with the indicators pointing at it.
    #[default]
    Text,
    Json,
    Dot,
}

/// A parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a free-form indicator label.
    Add(String),
    /// Add the n-th catalog indicator (1-based, as listed by `indicators`).
    Pick(usize),
    Indicators,
    Facts,
    Clear,
    Analyze,
    History,
    Graph(GraphFormat),
    Rules,
    Help,
    Quit,
    /// Blank line.
    Empty,
    /// Anything that could not be parsed, with a message for the user.
    Invalid(String),
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Empty,
            "add" | "a" => {
                if rest.is_empty() {
                    Command::Invalid("usage: add <indicator>".to_string())
                } else {
                    Command::Add(rest.to_string())
                }
            }
            "pick" | "p" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Command::Pick(n),
                _ => Command::Invalid("usage: pick <number from `indicators`>".to_string()),
            },
            "indicators" | "list" => Command::Indicators,
            "facts" | "selected" => Command::Facts,
            "clear" => Command::Clear,
            "analyze" | "analyse" | "run" => Command::Analyze,
            "history" | "log" => Command::History,
            "graph" => match rest.to_lowercase().as_str() {
                "" | "text" => Command::Graph(GraphFormat::Text),
                "json" => Command::Graph(GraphFormat::Json),
                "dot" => Command::Graph(GraphFormat::Dot),
                other => Command::Invalid(format!("unknown graph format '{}'", other)),
            },
            "rules" => Command::Rules,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Command::Invalid(format!("unknown command '{}', try `help`", other)),
        }
    }
}

pub const HELP: &str = "\
Commands:
  indicators          list the catalog indicators with their numbers
  pick <n>            add indicator number n
  add <indicator>     add any indicator by name
  facts               show the selected indicators
  clear               clear all selected indicators
  analyze             run the analysis
  history             show the activity log
  graph [json|dot]    show the indicator -> conclusion graph
  rules               list the registered rules
  help                show this message
  quit                leave the shell
";
