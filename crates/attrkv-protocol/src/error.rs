use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),

    #[error("wrong number of arguments for '{command}', usage: {usage}")]
    WrongArity {
        command: &'static str,
        usage: &'static str,
    },

    /// `put` without a key and at least one complete name/value pair.
    #[error("Number of params is incorrect")]
    IncorrectParams,
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
