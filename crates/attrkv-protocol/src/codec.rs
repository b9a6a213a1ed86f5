use crate::command::{usage, Command};
use crate::error::{ProtocolError, ProtocolResult};

/// Codec for the line protocol.
pub struct CommandCodec;

impl CommandCodec {
    /// Decode one input line.
    ///
    /// Returns `Ok(None)` for a line with no tokens. Command names are
    /// case-sensitive.
    pub fn decode(line: &str) -> ProtocolResult<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match name {
            "put" => Self::decode_put(args)?,
            "get" => {
                let [key] = Self::exact::<1>("get", args)?;
                Command::Get { key }
            }
            "delete" => {
                let [key] = Self::exact::<1>("delete", args)?;
                Command::Delete { key }
            }
            "search" => {
                let [attribute, value] = Self::exact::<2>("search", args)?;
                Command::Search { attribute, value }
            }
            "keys" => {
                Self::exact::<0>("keys", args)?;
                Command::Keys
            }
            "help" => {
                Self::exact::<0>("help", args)?;
                Command::Help
            }
            "exit" => {
                Self::exact::<0>("exit", args)?;
                Command::Exit
            }
            other => return Err(ProtocolError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }

    /// `put <key>` followed by one or more name/value pairs.
    fn decode_put(args: &[&str]) -> ProtocolResult<Command> {
        let Some((&key, rest)) = args.split_first() else {
            return Err(ProtocolError::IncorrectParams);
        };
        if rest.is_empty() || rest.len() % 2 != 0 {
            return Err(ProtocolError::IncorrectParams);
        }
        let pairs = rest
            .chunks_exact(2)
            .map(|pair| (pair[0].to_string(), pair[1].to_string()))
            .collect();
        Ok(Command::Put {
            key: key.to_string(),
            pairs,
        })
    }

    fn exact<const N: usize>(
        command: &'static str,
        args: &[&str],
    ) -> ProtocolResult<[String; N]> {
        let args: [&str; N] = args.try_into().map_err(|_| ProtocolError::WrongArity {
            command,
            usage: usage(command),
        })?;
        Ok(args.map(str::to_string))
    }
}
