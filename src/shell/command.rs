//! Command keywords understood by the shell.

/// Every command the shell dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Load,
    CreateTable,
    Insert,
    Select,
    Help,
    Exit,
    Invalid,
}

impl Command {
    /// The keyword a user types for this command.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Create => "create",
            Command::Load => "load",
            Command::CreateTable => "create_table",
            Command::Insert => "insert",
            Command::Select => "select",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Invalid => "invalid",
        }
    }
}

/// Map the first word of a line to a command, `Invalid` for anything
/// unrecognized.
pub fn parse_command(word: &str) -> Command {
    match word {
        "create" => Command::Create,
        "load" => Command::Load,
        "create_table" => Command::CreateTable,
        "insert" => Command::Insert,
        "select" => Command::Select,
        "help" => Command::Help,
        "exit" => Command::Exit,
        _ => Command::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(parse_command("create"), Command::Create);
        assert_eq!(parse_command("load"), Command::Load);
        assert_eq!(parse_command("create_table"), Command::CreateTable);
        assert_eq!(parse_command("insert"), Command::Insert);
        assert_eq!(parse_command("select"), Command::Select);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("exit"), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        assert_eq!(parse_command("drop"), Command::Invalid);
        assert_eq!(parse_command(""), Command::Invalid);
        assert_eq!(parse_command("CREATE"), Command::Invalid); // case-sensitive
    }

    #[test]
    fn test_keywords_roundtrip() {
        for cmd in [
            Command::Create,
            Command::Load,
            Command::CreateTable,
            Command::Insert,
            Command::Select,
            Command::Help,
            Command::Exit,
        ] {
            assert_eq!(parse_command(cmd.keyword()), cmd);
        }
    }
}
