//! Classification of raw command-line arguments into recognized commands.
//!
//! Classification is a membership test, not positional parsing: a command is
//! considered present when its token appears anywhere in the argument list.
//! Several commands may be flagged at once; [`ParsedCommands::selected`]
//! resolves that by the fixed priority order of [`Command::ALL`].

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    Help,
    Add,
    New,
    Remove,
    Edit,
    List,
}

impl Command {
    /// The closed command set, in priority order.
    pub const ALL: [Command; 7] = [
        Command::Init,
        Command::Help,
        Command::Add,
        Command::New,
        Command::Remove,
        Command::Edit,
        Command::List,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Command::Init => "init",
            Command::Help => "help",
            Command::Add => "add",
            Command::New => "new",
            Command::Remove => "remove",
            Command::Edit => "edit",
            Command::List => "list",
        }
    }

    /// Short spellings accepted in addition to [`Command::token`], only as
    /// the first argument.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Command::Init => &["i"],
            Command::Help => &["h"],
            _ => &[],
        }
    }

    /// Matches `argument` found at `position` in the argument list.
    pub fn matches_at(self, argument: &str, position: usize) -> bool {
        self.token() == argument || (position == 0 && self.aliases().contains(&argument))
    }

    pub fn from_token(argument: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|command| command.token() == argument)
    }

    fn from_argument(argument: &str, position: usize) -> Option<Command> {
        Command::ALL
            .into_iter()
            .find(|command| command.matches_at(argument, position))
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.token())
    }
}

/// Presence flag for every command of [`Command::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommands {
    flags: IndexMap<Command, bool>,
}

impl ParsedCommands {
    pub fn is_set(&self, command: Command) -> bool {
        self.flags.get(&command).copied().unwrap_or(false)
    }

    /// The first flagged command in priority order.
    pub fn selected(&self) -> Option<Command> {
        self.flags
            .iter()
            .find_map(|(command, set)| set.then_some(*command))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Command, bool)> + '_ {
        self.flags.iter().map(|(command, set)| (*command, *set))
    }
}

impl Display for ParsedCommands {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (command, set) in self.iter() {
            if !first {
                formatter.write_str(" ")?;
            }
            write!(formatter, "{command}:{set}")?;
            first = false;
        }
        Ok(())
    }
}

/// Flags every command whose token appears verbatim at any argument position.
///
/// Aliases count only as the first argument. Unrecognized arguments are
/// ignored. Never fails.
pub fn classify<S: AsRef<str>>(arguments: &[S]) -> ParsedCommands {
    let mut flags: IndexMap<Command, bool> =
        Command::ALL.into_iter().map(|command| (command, false)).collect();

    for (position, argument) in arguments.iter().enumerate() {
        if let Some(command) = Command::from_argument(argument.as_ref(), position) {
            flags.insert(command, true);
        }
    }

    ParsedCommands { flags }
}

/// Arguments following the first occurrence of `command`.
pub fn operands<S: AsRef<str>>(command: Command, arguments: &[S]) -> &[S] {
    match arguments
        .iter()
        .enumerate()
        .position(|(position, argument)| command.matches_at(argument.as_ref(), position))
    {
        Some(index) => &arguments[index + 1..],
        None => &[],
    }
}
