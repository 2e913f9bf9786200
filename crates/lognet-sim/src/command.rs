//! Text commands accepted by the CLI.

use lognet_core::{Color, NodeId};

use crate::error::{Result, SimError};

/// Parse an `ID=COLOR` assignment, e.g. `A=red`.
pub fn parse_assignment(s: &str) -> Result<(NodeId, Color)> {
    let (id, color) = s
        .split_once('=')
        .ok_or_else(|| SimError::InvalidCommand(format!("expected ID=COLOR, got {s:?}")))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(SimError::InvalidCommand(format!("missing node id in {s:?}")));
    }
    Ok((NodeId::from(id), color.parse()?))
}

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Set(NodeId, Color),
    Show,
    Conflicts,
    History,
    Verify,
    Reset,
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };

        let command = match verb.to_lowercase().as_str() {
            "set" => {
                let (Some(id), Some(color), None) = (words.next(), words.next(), words.next())
                else {
                    return Err(SimError::InvalidCommand(
                        "usage: set <node> <color>".to_string(),
                    ));
                };
                ReplCommand::Set(NodeId::from(id), color.parse()?)
            }
            "show" => ReplCommand::Show,
            "conflicts" => ReplCommand::Conflicts,
            "history" => ReplCommand::History,
            "verify" => ReplCommand::Verify,
            "reset" => ReplCommand::Reset,
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" => ReplCommand::Quit,
            other if other.contains('=') => {
                let (id, color) = parse_assignment(line.trim())?;
                ReplCommand::Set(id, color)
            }
            other => {
                return Err(SimError::InvalidCommand(format!(
                    "unknown command {other:?} (try help)"
                )))
            }
        };
        Ok(Some(command))
    }
}

pub const HELP: &str = "\
commands:
  set <node> <color>   recolor a node (also: <node>=<color>)
  show                 print the graph
  conflicts            print current conflicts
  history              print the change history
  verify               seal the history and check its hash
  reset                restore the seed and clear history
  quit                 leave";
