/// Line-oriented command loop over a `Document<String>`.
use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use linepad_config::AppConfig;
use linepad_core::history::Direction;
use linepad_core::Document;

const HELP: &str = "\
Commands:
  add <text>            append an element
  add-none              append an absent element
  insert <pos> <text>   insert before position
  edit <pos> <text>     overwrite an element
  delete <pos>          remove an element
  get <pos>             print one element
  find <text>           list positions holding <text>
  find-none             list positions holding absent elements
  undo | redo           step through history
  undo-all | redo-all   rewind or replay everything
  show                  print the list
  history               print recorded changes
  help                  print this help
  quit                  leave";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    AddNone,
    Insert(usize, String),
    Edit(usize, String),
    Delete(usize),
    Get(usize),
    Find(String),
    FindNone,
    Undo,
    Redo,
    UndoAll,
    RedoAll,
    Show,
    History,
    Help,
    Quit,
}

impl Command {
    /// Whether the command can change the document.
    fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add(_)
                | Self::AddNone
                | Self::Insert(..)
                | Self::Edit(..)
                | Self::Delete(_)
                | Self::Undo
                | Self::Redo
                | Self::UndoAll
                | Self::RedoAll
        )
    }
}

fn parse_position(raw: &str) -> Result<usize> {
    raw.parse().with_context(|| format!("invalid position '{raw}'"))
}

/// Splits `<pos> <text>`; the text keeps its inner spacing.
fn position_and_text(rest: &str) -> Result<(usize, String)> {
    let (pos, text) = rest
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected <pos> <text>"))?;
    Ok((parse_position(pos)?, text.trim_start().to_string()))
}

fn non_empty(rest: &str, usage: &str) -> Result<String> {
    if rest.is_empty() {
        bail!("usage: {usage}");
    }
    Ok(rest.to_string())
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb {
            "add" => Self::Add(non_empty(rest, "add <text>")?),
            "add-none" => Self::AddNone,
            "insert" => {
                let (pos, text) = position_and_text(rest)?;
                Self::Insert(pos, text)
            }
            "edit" => {
                let (pos, text) = position_and_text(rest)?;
                Self::Edit(pos, text)
            }
            "delete" => Self::Delete(parse_position(rest)?),
            "get" => Self::Get(parse_position(rest)?),
            "find" => Self::Find(non_empty(rest, "find <text>")?),
            "find-none" => Self::FindNone,
            "undo" => Self::Undo,
            "redo" => Self::Redo,
            "undo-all" => Self::UndoAll,
            "redo-all" => Self::RedoAll,
            "show" => Self::Show,
            "history" => Self::History,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(command)
    }
}

/// Interactive session state: one document plus display settings.
pub struct Repl {
    doc: Document<String>,
    prompt: String,
    show_status: bool,
}

impl Repl {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            doc: Document::with_config(config.history_config()),
            prompt: config.prompt.clone(),
            show_status: config.show_status,
        }
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// Bad input is reported and the prompt is shown again.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();
        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    writeln!(out, "error: {e:#}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(&command, out) {
                writeln!(out, "error: {e:#}")?;
            }
        }
        Ok(())
    }

    /// Runs one command against the document.
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range positions or failed writes.
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<()> {
        match command {
            Command::Add(text) => self.doc.add(text.clone()),
            Command::AddNone => self.doc.add(None),
            Command::Insert(pos, text) => self.doc.insert_at(*pos, text.clone())?,
            Command::Edit(pos, text) => self.doc.edit_at(*pos, text.clone())?,
            Command::Delete(pos) => self.doc.delete_at(*pos)?,
            Command::Get(pos) => match self.doc.get(*pos)? {
                Some(text) => writeln!(out, "[{pos}]:{text}")?,
                None => writeln!(out, "[{pos}]:(none)")?,
            },
            Command::Find(text) => print_positions(out, &self.doc.find(Some(text)))?,
            Command::FindNone => print_positions(out, &self.doc.find(None))?,
            Command::Undo => self.step(out, Direction::Undo)?,
            Command::Redo => self.step(out, Direction::Redo)?,
            Command::UndoAll => self.doc.undo_all(),
            Command::RedoAll => self.doc.redo_all(),
            Command::Show => self.print_status(out)?,
            Command::History => self.print_history(out)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => {}
        }

        if self.show_status && command.mutates() {
            self.print_status(out)?;
        }
        Ok(())
    }

    fn step<W: Write>(&mut self, out: &mut W, direction: Direction) -> Result<()> {
        let available = match direction {
            Direction::Undo => self.doc.can_undo(),
            Direction::Redo => self.doc.can_redo(),
        };
        if !available {
            writeln!(out, "nothing to {direction}")?;
            return Ok(());
        }
        match direction {
            Direction::Undo => self.doc.undo(),
            Direction::Redo => self.doc.redo(),
        }
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.doc.render())?;
        writeln!(
            out,
            "Can undo: {}  Can redo: {}",
            self.doc.can_undo(),
            self.doc.can_redo()
        )?;
        Ok(())
    }

    fn print_history<W: Write>(&self, out: &mut W) -> Result<()> {
        let history = self.doc.history();
        match history.config().max_depth {
            Some(depth) => writeln!(out, "depth cap: {depth}")?,
            None => writeln!(out, "depth cap: none")?,
        }
        if history.is_empty() {
            writeln!(out, "no history")?;
            return Ok(());
        }
        let cursor = history.cursor();
        for (index, record) in history.records().enumerate() {
            let marker = if Some(index) == cursor { '>' } else { ' ' };
            writeln!(out, "{marker} {index}: {record}")?;
        }
        Ok(())
    }
}

fn print_positions<W: Write>(out: &mut W, positions: &[usize]) -> Result<()> {
    if positions.is_empty() {
        writeln!(out, "not found")?;
    } else {
        let joined: Vec<String> = positions.iter().map(ToString::to_string).collect();
        writeln!(out, "found at: {}", joined.join(", "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn quiet_config() -> AppConfig {
        AppConfig {
            show_status: false,
            prompt: String::new(),
            ..AppConfig::default()
        }
    }

    fn run_script(config: &AppConfig, script: &str) -> String {
        let mut repl = Repl::new(config);
        let mut out = Vec::new();
        repl.run(Cursor::new(script), &mut out).expect("run");
        String::from_utf8(out).expect("utf8")
    }

    // ── Parsing ────────────────────────────────────────────────────────

    fn parse(line: &str) -> Command {
        line.parse().expect("parse")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("add hello world"), Command::Add("hello world".into()));
        assert_eq!(
            parse("insert 2  two words"),
            Command::Insert(2, "two words".into())
        );
        assert_eq!(parse("edit 0 x"), Command::Edit(0, "x".into()));
        assert_eq!(parse("delete 3"), Command::Delete(3));
        assert_eq!(parse("find-none"), Command::FindNone);
        assert_eq!(parse("  undo-all "), Command::UndoAll);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("add".parse::<Command>().is_err());
        assert!("insert x A".parse::<Command>().is_err());
        assert!("insert 1".parse::<Command>().is_err());
        assert!("delete -1".parse::<Command>().is_err());
        let err = "frobnicate".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "unknown command 'frobnicate' (try 'help')");
    }

    // ── Session ────────────────────────────────────────────────────────

    #[test]
    fn test_session_with_status() {
        let config = AppConfig {
            prompt: String::new(),
            ..AppConfig::default()
        };
        let out = run_script(&config, "add A\nadd B\nundo\n");
        assert_eq!(
            out,
            "List: [0]:A\nCan undo: true  Can redo: false\n\
             List: [0]:A <-> [1]:B\nCan undo: true  Can redo: false\n\
             List: [0]:A\nCan undo: true  Can redo: true\n\n"
        );
    }

    #[test]
    fn test_bad_input_reprompts() {
        let config = AppConfig {
            show_status: false,
            prompt: "> ".to_string(),
            ..AppConfig::default()
        };
        let out = run_script(&config, "bogus\ndelete 0\nadd A\nquit\nadd B\n");
        assert_eq!(
            out,
            "> error: unknown command 'bogus' (try 'help')\n\
             > error: position 0 out of range (valid: [0, 0))\n\
             > > "
        );
    }

    #[test]
    fn test_get_find_and_history() {
        let out = run_script(
            &quiet_config(),
            "add A\nadd-none\nadd A\nedit 2 B\nundo\nget 1\nfind A\nfind Z\nhistory\n",
        );
        assert_eq!(
            out,
            "[1]:(none)\n\
             found at: 0, 2\n\
             not found\n\
             depth cap: none\n  \
             0: insert @0: A\n  \
             1: insert @1: (none)\n\
             > 2: insert @2: A\n  \
             3: edit @2: A -> B\n\n"
        );
    }

    #[test]
    fn test_undo_redo_messages() {
        let out = run_script(
            &quiet_config(),
            "undo\nredo\nadd A\nundo-all\nredo-all\nshow\n",
        );
        assert_eq!(
            out,
            "nothing to undo\nnothing to redo\nList: [0]:A\nCan undo: true  Can redo: false\n\n"
        );
    }

    #[test]
    fn test_bounded_history_from_config() {
        let config = AppConfig {
            max_history_depth: Some(1),
            ..quiet_config()
        };
        let out = run_script(&config, "add A\nadd B\nundo-all\nshow\nhistory\n");
        assert_eq!(
            out,
            "List: [0]:A\nCan undo: false  Can redo: true\n\
             depth cap: 1\n  \
             0: insert @1: B\n\n"
        );
    }

    #[test]
    fn test_find_none_matches_only_absent_elements() {
        let out = run_script(
            &quiet_config(),
            "find-none\nadd A\nadd-none\nadd B\nadd-none\nfind-none\n",
        );
        assert_eq!(out, "not found\nfound at: 1, 3\n\n");
    }

    #[test]
    fn test_undo_stops_at_empty_history() {
        let out = run_script(&quiet_config(), "add A\nundo\nundo\nredo\nredo\nshow\n");
        assert_eq!(
            out,
            "nothing to undo\nnothing to redo\nList: [0]:A\nCan undo: true  Can redo: false\n\n"
        );
    }
}
