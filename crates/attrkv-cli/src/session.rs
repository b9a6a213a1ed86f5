use std::io::{self, BufRead, Write};

use attrkv_protocol::{help_text, Command, CommandCodec};
use attrkv_store::AttributeStore;
use tracing::debug;

use crate::config::ShellConfig;
use crate::render::{render, Reply};

/// A shell session: reads command lines, runs them against a store and
/// writes one reply line per command.
pub struct Session<'a, S: AttributeStore + ?Sized> {
    store: &'a S,
    config: ShellConfig,
}

impl<'a, S: AttributeStore + ?Sized> Session<'a, S> {
    pub fn new(store: &'a S, config: ShellConfig) -> Self {
        Self { store, config }
    }

    /// Run one decoded command.
    pub fn execute(&self, command: Command) -> Reply {
        match command {
            Command::Put { key, pairs } => match self.store.put(&key, &pairs) {
                Ok(()) => Reply::PutDone,
                Err(err) => Reply::PutRejected(err),
            },
            Command::Get { key } => {
                let entry = self.store.get(&key);
                Reply::Entry { key, entry }
            }
            Command::Delete { key } => {
                self.store.delete(&key);
                Reply::Deleted
            }
            Command::Search { attribute, value } => {
                Reply::Keys(self.store.search(&attribute, &value))
            }
            Command::Keys => Reply::Keys(self.store.keys()),
            Command::Help => Reply::Help(help_text()),
            Command::Exit => Reply::Exit,
        }
    }

    /// Read lines until `exit` or end of input.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced with U+FFFD so one
    /// bad line never ends the session.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        if !self.config.banner.is_empty() {
            writeln!(output, "{}", self.config.banner)?;
        }

        let mut buf = Vec::new();
        loop {
            if !self.config.prompt.is_empty() {
                write!(output, "{}", self.config.prompt)?;
                output.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            let reply = match CommandCodec::decode(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => {
                    debug!(command = command.name(), write = command.is_write(), "execute");
                    self.execute(command)
                }
                Err(err) => {
                    debug!(%err, line = %line.trim_end(), "rejected input");
                    Reply::Invalid(err)
                }
            };
            if matches!(reply, Reply::Exit) {
                break;
            }
            writeln!(output, "{}", render(&reply, self.config.format))?;
            output.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use attrkv_store::InMemoryAttributeStore;
    use std::io::Cursor;

    fn quiet() -> ShellConfig {
        ShellConfig {
            banner: String::new(),
            ..Default::default()
        }
    }

    fn transcript(store: &InMemoryAttributeStore, config: ShellConfig, input: &str) -> String {
        transcript_bytes(store, config, input.as_bytes())
    }

    fn transcript_bytes(store: &InMemoryAttributeStore, config: ShellConfig, input: &[u8]) -> String {
        let mut out = Vec::new();
        Session::new(store, config)
            .run(Cursor::new(input), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn example_transcript() {
        let store = InMemoryAttributeStore::new();
        let input = "\
put a x 1 y true
put b x 2 y false
search x 1
search y true
keys
put a x hello
get a
delete b
get b
keys
exit
";
        let expected = "\
Please input command and param
Put is done
Put is done
a
a
a,b
Data Type Error
x: 1.0, y: true
Delete is done
No entry found for b
a
";
        assert_eq!(transcript(&store, ShellConfig::default(), input), expected);
    }

    #[test]
    fn empty_results_print_empty_lines() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "keys\nsearch x 1\n");
        assert_eq!(out, "\n\n");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "\n   \nkeys\n");
        assert_eq!(out, "\n");
    }

    #[test]
    fn exit_stops_reading() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "exit\nput a x 1\n");
        assert!(out.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn end_of_input_without_exit() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "put a x 1");
        assert_eq!(out, "Put is done\n");
        assert_eq!(store.keys(), vec!["a"]);
    }

    #[test]
    fn malformed_lines_do_not_touch_store() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "put a x\nput a\nfrobnicate\nget\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Number of params is incorrect");
        assert_eq!(lines[1], "Number of params is incorrect");
        assert!(lines[2].starts_with("(error) unknown command"));
        assert!(lines[3].starts_with("(error) wrong number of arguments for 'get'"));
        assert!(store.is_empty());
        assert!(store.attribute_types().is_empty());
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let store = InMemoryAttributeStore::new();
        let out = transcript_bytes(&store, quiet(), b"put a x 1\nput b name caf\xE9\nkeys\nget b\n");
        assert_eq!(out, "Put is done\nPut is done\na,b\nname: caf\u{FFFD}\n");
        assert_eq!(
            store.attribute_type("name"),
            Some(attrkv_types::AttributeType::String)
        );
    }

    #[test]
    fn crlf_line_endings() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "put a x 1\r\nkeys\r\n");
        assert_eq!(out, "Put is done\na\n");
    }

    #[test]
    fn help_prints_usage() {
        let store = InMemoryAttributeStore::new();
        let out = transcript(&store, quiet(), "help\n");
        assert!(out.starts_with("Commands:"));
        assert!(out.contains("search <name> <value>"));
    }

    #[test]
    fn prompt_precedes_each_read() {
        let store = InMemoryAttributeStore::new();
        let config = ShellConfig {
            prompt: "> ".into(),
            ..quiet()
        };
        let out = transcript(&store, config, "keys\n");
        // One prompt before `keys`, one before end of input.
        assert_eq!(out, "> \n> ");
    }

    #[test]
    fn json_transcript() {
        let store = InMemoryAttributeStore::new();
        let config = ShellConfig {
            format: OutputFormat::Json,
            ..quiet()
        };
        let out = transcript(&store, config, "put a x 1\nget a\nkeys\nput a x no\n");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], r#"{"ok":true}"#);
        assert_eq!(lines[1], r#"{"attributes":{"x":1.0},"key":"a"}"#);
        assert_eq!(lines[2], r#"{"keys":["a"]}"#);
        assert!(lines[3].contains("data type error"));
    }

    #[test]
    fn works_through_trait_object() {
        let store = InMemoryAttributeStore::new();
        let dyn_store: &dyn AttributeStore = &store;
        let session = Session::new(dyn_store, quiet());
        let reply = session.execute(Command::Put {
            key: "k".into(),
            pairs: vec![("n".into(), "3".into())],
        });
        assert!(matches!(reply, Reply::PutDone));
        assert!(matches!(
            session.execute(Command::Keys),
            Reply::Keys(keys) if keys == vec!["k".to_string()]
        ));
    }
}
