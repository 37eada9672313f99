use crate::error::SimError;
use crate::grid::Coordinate;
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

/// Command keyword, matched case-sensitively
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CommandKind {
    Place,
    Block,
    Explore,
    Report,
}

impl CommandKind {
    pub fn keyword(self) -> &'static str {
        match self {
            CommandKind::Place => "PLACE",
            CommandKind::Block => "BLOCK",
            CommandKind::Explore => "EXPLORE",
            CommandKind::Report => "REPORT",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "PLACE" => Some(CommandKind::Place),
            "BLOCK" => Some(CommandKind::Block),
            "EXPLORE" => Some(CommandKind::Explore),
            "REPORT" => Some(CommandKind::Report),
            _ => None,
        }
    }
}

/// A parsed script instruction. Only REPORT goes without a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Command {
    Place(Coordinate),
    Block(Coordinate),
    Explore(Coordinate),
    Report,
}

impl Command {
    fn with_coordinate(kind: CommandKind, coordinate: Coordinate) -> Self {
        match kind {
            CommandKind::Place => Command::Place(coordinate),
            CommandKind::Block => Command::Block(coordinate),
            CommandKind::Explore => Command::Explore(coordinate),
            CommandKind::Report => Command::Report,
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Place(_) => CommandKind::Place,
            Command::Block(_) => CommandKind::Block,
            Command::Explore(_) => CommandKind::Explore,
            Command::Report => CommandKind::Report,
        }
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match *self {
            Command::Place(c) | Command::Block(c) | Command::Explore(c) => Some(c),
            Command::Report => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinate() {
            Some(coordinate) => write!(f, "{} {}", self.kind().keyword(), coordinate),
            None => write!(f, "{}", self.kind().keyword()),
        }
    }
}

/// Commands in script order, built once per run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn first(&self) -> Option<&Command> {
        self.commands.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    pub fn as_slice(&self) -> &[Command] {
        &self.commands
    }
}

impl<'a> IntoIterator for &'a CommandQueue {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

fn parse_error(line_no: usize, line: &str, reason: &str) -> SimError {
    SimError::Parse {
        line_no,
        line: line.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a `row,col` payload. Fields after the second are ignored; signed
/// values parse here and are left to the bounds check.
fn parse_coordinate(payload: &str) -> Result<Coordinate, String> {
    let mut fields = payload.split(',');
    let row = fields.next().unwrap_or_default();
    let col = fields
        .next()
        .ok_or_else(|| format!("expected row,col but found {:?}", payload))?;
    if fields.next().is_some() {
        debug!("ignoring extra fields in {:?}", payload);
    }
    Ok(Coordinate::new(parse_index(row)?, parse_index(col)?))
}

fn parse_index(text: &str) -> Result<i32, String> {
    text.parse::<i32>()
        .map_err(|_| format!("{:?} is not an integer coordinate", text))
}

/// Parse one script line.
///
/// Returns `Ok(None)` when the line is not a command (it is skipped), and an
/// error when a PLACE/BLOCK/EXPLORE line carries no `row,col` integer pair.
/// REPORT matches as a prefix, so `REPORTS` and `REPORT now` both report.
pub fn parse_line(line_no: usize, raw: &str) -> Result<Option<Command>, SimError> {
    let line = raw.trim();
    if line.starts_with(CommandKind::Report.keyword()) {
        if line.len() > CommandKind::Report.keyword().len() {
            debug!("line {}: ignoring text after REPORT", line_no);
        }
        return Ok(Some(Command::Report));
    }

    let mut words = line.split_whitespace();
    let kind = match words.next().and_then(CommandKind::from_keyword) {
        Some(kind) => kind,
        None => return Ok(None),
    };

    let payload = words
        .next()
        .ok_or_else(|| parse_error(line_no, line, "missing coordinate pair"))?;
    if words.next().is_some() {
        debug!("line {}: ignoring text after {}", line_no, payload);
    }
    let coordinate =
        parse_coordinate(payload).map_err(|reason| parse_error(line_no, line, &reason))?;

    Ok(Some(Command::with_coordinate(kind, coordinate)))
}

/// Turn raw script lines into the ordered command queue.
///
/// Unknown lines are skipped with a warning. If at least one command was
/// recognized but none of them is a PLACE, `PLACE 0,0` goes to the front.
/// Input with no recognized command yields an empty queue.
pub fn build_queue<S: AsRef<str>>(lines: &[S]) -> Result<CommandQueue, SimError> {
    let mut commands = Vec::new();
    let mut has_place = false;

    for (i, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        match parse_line(i + 1, raw)? {
            Some(command) => {
                has_place |= command.kind() == CommandKind::Place;
                commands.push(command);
            }
            None => warn!(
                "line {}: {:?} is not a valid command, skipping it",
                i + 1,
                raw.trim()
            ),
        }
    }

    if !commands.is_empty() && !has_place {
        warn!("no PLACE command found, adding default PLACE 0,0");
        commands.insert(0, Command::Place(Coordinate::new(0, 0)));
    }

    Ok(CommandQueue { commands })
}
