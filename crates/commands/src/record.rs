//! One entry of the command table.

use serde::Deserialize;

use crate::keys::Shortcut;
use crate::mode::Mode;

/// A command as written in a command file, before validation.
///
/// Exactly six PascalCase fields; unknown fields are rejected.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub(crate) struct RawRecord {
    pub key: String,
    pub name: String,
    pub state: String,
    pub shortcut: String,
    pub long_cmd: String,
    pub help: String,
}

/// A validated command: which mode it activates and how the user reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    key: String,
    name: String,
    mode: Mode,
    shortcut: Option<Shortcut>,
    long_cmd: String,
    help: String,
}

impl CommandRecord {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        mode: Mode,
        shortcut: Option<Shortcut>,
        long_cmd: impl Into<String>,
        help: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            mode,
            shortcut,
            long_cmd: long_cmd.into(),
            help: help.into(),
        }
    }

    /// Unique record id.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn shortcut(&self) -> Option<Shortcut> {
        self.shortcut
    }

    pub fn shortcut_code(&self) -> Option<u32> {
        self.shortcut.map(|s| s.code())
    }

    /// Text typed after `:` to reach this command; empty if none.
    pub fn long_cmd(&self) -> &str {
        &self.long_cmd
    }

    pub fn help(&self) -> &str {
        &self.help
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_record_parses_six_fields() {
        let json = r#"{
            "Key": "close",
            "Name": "Close tab",
            "State": "CLOSE_TAB",
            "Shortcut": "c",
            "LongCmd": "close-tab",
            "Help": "Close the tab at INDEX (default: current)"
        }"#;
        let raw: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(raw.key, "close");
        assert_eq!(raw.state, "CLOSE_TAB");
        assert_eq!(raw.long_cmd, "close-tab");
    }

    #[test]
    fn raw_record_rejects_unknown_field() {
        let json = r#"{"Key":"k","Name":"n","State":"QUIT","Shortcut":"","LongCmd":"q","Help":"","Extra":1}"#;
        assert!(serde_json::from_str::<RawRecord>(json).is_err());
    }

    #[test]
    fn raw_record_requires_all_fields() {
        let json = r#"{"Key":"k","Name":"n","State":"QUIT","Shortcut":"","LongCmd":"q"}"#;
        assert!(serde_json::from_str::<RawRecord>(json).is_err());
    }

    #[test]
    fn record_accessors() {
        let record = CommandRecord::new(
            "quit",
            "Quit",
            Mode::Quit,
            Shortcut::parse("Q").unwrap(),
            "quit",
            "Close the window",
        );
        assert_eq!(record.key(), "quit");
        assert_eq!(record.mode(), Mode::Quit);
        assert_eq!(record.shortcut_code(), Some('Q' as u32 | 0x0200_0000));
        assert_eq!(record.long_cmd(), "quit");
    }
}
