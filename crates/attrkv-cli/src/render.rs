use attrkv_protocol::ProtocolError;
use attrkv_store::{Entry, StoreError};
use serde_json::json;

use crate::cli::OutputFormat;

/// The outcome of one command, before rendering.
#[derive(Debug)]
pub enum Reply {
    PutDone,
    PutRejected(StoreError),
    Entry { key: String, entry: Option<Entry> },
    Deleted,
    /// Output of `keys` and `search`.
    Keys(Vec<String>),
    Help(String),
    Invalid(ProtocolError),
    Exit,
}

pub fn render(reply: &Reply, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(reply),
        OutputFormat::Json => render_json(reply),
    }
}

fn render_text(reply: &Reply) -> String {
    match reply {
        Reply::PutDone => "Put is done".to_string(),
        Reply::PutRejected(StoreError::DataType { .. }) => "Data Type Error".to_string(),
        Reply::Entry { key, entry: None } => format!("No entry found for {key}"),
        Reply::Entry {
            entry: Some(entry), ..
        } => entry
            .sorted()
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join(", "),
        Reply::Deleted => "Delete is done".to_string(),
        Reply::Keys(keys) => keys.join(","),
        Reply::Help(text) => text.clone(),
        Reply::Invalid(err @ ProtocolError::IncorrectParams) => err.to_string(),
        Reply::Invalid(err) => format!("(error) {err}"),
        Reply::Exit => String::new(),
    }
}

fn render_json(reply: &Reply) -> String {
    let value = match reply {
        Reply::PutDone | Reply::Deleted | Reply::Exit => json!({ "ok": true }),
        Reply::PutRejected(err) => json!({ "error": err.to_string() }),
        Reply::Entry { key, entry } => json!({ "key": key, "attributes": entry }),
        Reply::Keys(keys) => json!({ "keys": keys }),
        Reply::Help(text) => json!({ "help": text }),
        Reply::Invalid(err) => json!({ "error": err.to_string() }),
    };
    value.to_string()
}
