//! Interactive command table for the Pokedex session
//!
//! The fixed set of commands the user can type at the prompt, with the
//! metadata `help` prints. Dispatch itself lives on `App`.

/// A command recognized by the session prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Displays the command listing
    Help,
    /// Ends the session
    Exit,
    /// Next page of location areas
    Map,
    /// Previous page of location areas
    MapBack,
    /// Lists Pokemon encounterable in one area
    Explore,
    /// Attempts to catch a Pokemon
    Catch,
    /// Shows details of a caught Pokemon
    Inspect,
    /// Lists everything caught this session
    Pokedex,
}

/// All commands, in the order `help` lists them
const ALL_COMMANDS: [Command; 8] = [
    Command::Help,
    Command::Map,
    Command::MapBack,
    Command::Explore,
    Command::Catch,
    Command::Inspect,
    Command::Pokedex,
    Command::Exit,
];

impl Command {
    /// Returns a slice containing every command variant.
    pub fn all() -> &'static [Command] {
        &ALL_COMMANDS
    }

    /// Parses the first token of a cleaned input line into a command.
    ///
    /// Returns `None` for anything outside the fixed table.
    pub fn parse(name: &str) -> Option<Command> {
        match name {
            "help" => Some(Command::Help),
            "exit" => Some(Command::Exit),
            "map" => Some(Command::Map),
            "mapb" => Some(Command::MapBack),
            "explore" => Some(Command::Explore),
            "catch" => Some(Command::Catch),
            "inspect" => Some(Command::Inspect),
            "pokedex" => Some(Command::Pokedex),
            _ => None,
        }
    }

    /// The token that invokes this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    /// Invocation form shown by `help`, including arguments
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Explore => "explore <area>",
            Command::Catch => "catch <pokemon>",
            Command::Inspect => "inspect <pokemon>",
            other => other.name(),
        }
    }

    /// One-line description shown by `help`
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Display the next page of location areas",
            Command::MapBack => "Display the previous page of location areas",
            Command::Explore => "List the Pokemon found in a location area",
            Command::Catch => "Throw a Pokeball at a Pokemon",
            Command::Inspect => "Show details of a caught Pokemon",
            Command::Pokedex => "List every Pokemon you have caught",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("map"), Some(Command::Map));
        assert_eq!(Command::parse("mapb"), Some(Command::MapBack));
        assert_eq!(Command::parse("explore"), Some(Command::Explore));
        assert_eq!(Command::parse("catch"), Some(Command::Catch));
        assert_eq!(Command::parse("inspect"), Some(Command::Inspect));
        assert_eq!(Command::parse("pokedex"), Some(Command::Pokedex));
    }

    #[test]
    fn test_parse_unknown_command_returns_none() {
        assert_eq!(Command::parse("fly"), None);
        assert_eq!(Command::parse(""), None);
        // Input is lowercased before parsing; raw uppercase is not a command
        assert_eq!(Command::parse("MAP"), None);
    }

    #[test]
    fn test_every_command_parses_from_its_own_name() {
        for command in Command::all() {
            assert_eq!(Command::parse(command.name()), Some(*command));
        }
    }

    #[test]
    fn test_all_lists_each_command_once() {
        let all = Command::all();
        assert_eq!(all.len(), 8);
        for (i, command) in all.iter().enumerate() {
            assert!(!all[i + 1..].contains(command));
        }
    }

    #[test]
    fn test_usage_includes_argument_placeholders() {
        assert_eq!(Command::Explore.usage(), "explore <area>");
        assert_eq!(Command::Catch.usage(), "catch <pokemon>");
        assert_eq!(Command::Inspect.usage(), "inspect <pokemon>");
        assert_eq!(Command::Map.usage(), "map");
    }
}
