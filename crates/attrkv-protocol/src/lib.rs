//! The attrkv line protocol.
//!
//! One command per line, tokens separated by whitespace. The first token
//! selects the command:
//!
//! ```text
//! put <key> <name> <value> [<name> <value> ...]
//! get <key>
//! delete <key>
//! search <name> <value>
//! keys
//! help
//! exit
//! ```
//!
//! [`CommandCodec::decode`] turns a line into a [`Command`]. Rendering
//! replies is left to the caller.

pub mod codec;
pub mod command;
pub mod error;

pub use codec::CommandCodec;
pub use command::{help_text, Command, CommandSpec, COMMANDS};
pub use error::{ProtocolError, ProtocolResult};
