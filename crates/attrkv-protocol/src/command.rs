use std::fmt::Write;

/// A parsed protocol command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Put {
        key: String,
        pairs: Vec<(String, String)>,
    },
    Get {
        key: String,
    },
    Delete {
        key: String,
    },
    Search {
        attribute: String,
        value: String,
    },
    Keys,
    Help,
    Exit,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Put { .. } => "put",
            Self::Get { .. } => "get",
            Self::Delete { .. } => "delete",
            Self::Search { .. } => "search",
            Self::Keys => "keys",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    /// Returns `true` for commands that modify the store.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Put { .. } | Self::Delete { .. })
    }
}

/// Usage line and summary for one command.
#[derive(Clone, Copy, Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "put",
        usage: "put <key> <name> <value> [<name> <value> ...]",
        summary: "replace the attributes stored under a key",
    },
    CommandSpec {
        name: "get",
        usage: "get <key>",
        summary: "show the attributes stored under a key",
    },
    CommandSpec {
        name: "delete",
        usage: "delete <key>",
        summary: "remove a key",
    },
    CommandSpec {
        name: "search",
        usage: "search <name> <value>",
        summary: "list keys whose attribute equals a value",
    },
    CommandSpec {
        name: "keys",
        usage: "keys",
        summary: "list all keys",
    },
    CommandSpec {
        name: "help",
        usage: "help",
        summary: "show this message",
    },
    CommandSpec {
        name: "exit",
        usage: "exit",
        summary: "quit",
    },
];

pub(crate) fn usage(name: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|spec| spec.name == name)
        .map(|spec| spec.usage)
        .unwrap_or("")
}

/// Multi-line help listing every command.
pub fn help_text() -> String {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut out = String::from("Commands:\n");
    for spec in COMMANDS {
        let _ = writeln!(out, "  {:width$}  {}", spec.usage, spec.summary);
    }
    out.push_str(
        "\nValues are typed on first use: true/false are booleans, anything \
         numeric is a number,\neverything else is a string. An attribute keeps \
         its type for the life of the store.",
    );
    out
}
