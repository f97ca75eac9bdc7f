//! Loading and querying the command table.
//!
//! The table is built once at startup from one or more JSON files and never
//! changes afterwards. Lookups by key, mode, long command and shortcut code
//! are all map lookups; the maps store positions into the insertion-ordered
//! record list so "first record for a mode" follows file order.

use std::path::{Path, PathBuf};

use collections::{FxHashMap, IndexMap};
use serde_json::Value;

use crate::error::LoadError;
use crate::keys::{Key, KeyEvent, Modifiers, Shortcut};
use crate::mode::Mode;
use crate::record::{CommandRecord, RawRecord};

/// The key that always enters COMMAND mode unless configured otherwise.
pub const DEFAULT_COMMAND_KEY: char = ':';

/// Command files are a few kilobytes; anything this large is a mistake.
pub const MAX_COMMAND_FILE_SIZE: u64 = 256 * 1024;

const INLINE_ORIGIN: &str = "<inline>";

/// Immutable, merged set of command records.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    records: IndexMap<String, CommandRecord>,
    by_long_cmd: FxHashMap<String, usize>,
    by_state: FxHashMap<Mode, usize>,
    by_shortcut: FxHashMap<u32, usize>,
}

impl CommandTable {
    /// Load and merge command files in order, reserving `:` for COMMAND.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, LoadError> {
        Self::load_with_command_key(paths, DEFAULT_COMMAND_KEY)
    }

    /// Load and merge command files, reserving `command_key` for COMMAND.
    pub fn load_with_command_key<P: AsRef<Path>>(
        paths: &[P],
        command_key: char,
    ) -> Result<Self, LoadError> {
        if paths.is_empty() {
            return Err(LoadError::NoFiles);
        }
        let mut builder = TableBuilder::new().command_key(command_key);
        for path in paths {
            builder.add_file(path.as_ref())?;
        }
        let table = builder.build();
        tracing::debug!(
            "Loaded {} command records from {} file(s)",
            table.len(),
            paths.len()
        );
        Ok(table)
    }

    /// Build a table from JSON text. Mostly for tests and built-in defaults.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        let mut builder = TableBuilder::new();
        builder.add_json(Path::new(INLINE_ORIGIN), text)?;
        Ok(builder.build())
    }

    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandRecord> {
        self.records.values()
    }

    pub fn find_by_key(&self, key: &str) -> Option<&CommandRecord> {
        self.records.get(key)
    }

    /// The first-loaded record that activates `mode`.
    pub fn find_by_state(&self, mode: Mode) -> Option<&CommandRecord> {
        self.by_state.get(&mode).and_then(|&i| self.at(i))
    }

    /// Exact match on the long-command string.
    pub fn find_by_long_command(&self, text: &str) -> Option<&CommandRecord> {
        if text.is_empty() {
            return None;
        }
        self.by_long_cmd.get(text).and_then(|&i| self.at(i))
    }

    pub fn find_by_shortcut(&self, code: u32) -> Option<&CommandRecord> {
        self.by_shortcut.get(&code).and_then(|&i| self.at(i))
    }

    /// Derive the idle-mode shortcut index.
    pub fn shortcut_index(&self) -> ShortcutIndex {
        ShortcutIndex::from_table(self)
    }

    fn at(&self, index: usize) -> Option<&CommandRecord> {
        self.records.get_index(index).map(|(_, record)| record)
    }
}

/// Accumulates records from several sources, rejecting collisions.
#[derive(Debug)]
pub struct TableBuilder {
    command_key: char,
    table: CommandTable,
    origins: Vec<PathBuf>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            command_key: DEFAULT_COMMAND_KEY,
            table: CommandTable::default(),
            origins: Vec::new(),
        }
    }

    /// Reserve a different key for entering COMMAND mode.
    pub fn command_key(mut self, key: char) -> Self {
        self.command_key = key;
        self
    }

    /// Read one command file and merge its records.
    pub fn add_file(&mut self, path: &Path) -> Result<(), LoadError> {
        let io_err = |source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > MAX_COMMAND_FILE_SIZE {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
                limit: MAX_COMMAND_FILE_SIZE,
            });
        }
        let text = std::fs::read_to_string(path).map_err(io_err)?;
        self.add_json(path, &text)
    }

    /// Merge records from JSON text; `origin` names the source in errors.
    ///
    /// Accepts an array of records or an object mapping each record's Key to
    /// the record.
    pub fn add_json(&mut self, origin: &Path, text: &str) -> Result<(), LoadError> {
        let value: Value = serde_json::from_str(text).map_err(|source| LoadError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        let entries: Vec<(String, Option<String>, Value)> = match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, item)| (format!("#{i}"), None, item))
                .collect(),
            Value::Object(map) => map
                .into_iter()
                .map(|(id, item)| (format!("{id:?}"), Some(id), item))
                .collect(),
            _ => {
                return Err(LoadError::Parse {
                    path: origin.to_path_buf(),
                    source: serde::de::Error::custom(
                        "expected an array or an object of command records",
                    ),
                })
            }
        };

        for (entry, id, item) in entries {
            let raw: RawRecord =
                serde_json::from_value(item).map_err(|source| LoadError::InvalidRecord {
                    path: origin.to_path_buf(),
                    entry: entry.clone(),
                    source,
                })?;
            if let Some(id) = id {
                if id != raw.key {
                    return Err(LoadError::KeyMismatch {
                        path: origin.to_path_buf(),
                        entry: id,
                        key: raw.key,
                    });
                }
            }
            let record = self.validate(raw, origin)?;
            self.add_record(record, origin)?;
        }
        Ok(())
    }

    fn validate(&self, raw: RawRecord, origin: &Path) -> Result<CommandRecord, LoadError> {
        let mode: Mode = raw.state.parse().map_err(|_| LoadError::UnknownState {
            path: origin.to_path_buf(),
            key: raw.key.clone(),
            state: raw.state.clone(),
        })?;

        let shortcut =
            Shortcut::parse(&raw.shortcut).map_err(|source| LoadError::InvalidShortcut {
                path: origin.to_path_buf(),
                key: raw.key.clone(),
                spec: raw.shortcut.clone(),
                source,
            })?;

        let reserved = Shortcut::new(Key::Char(self.command_key), Modifiers::NONE);
        if shortcut == Some(reserved) && mode != Mode::Command {
            return Err(LoadError::ReservedShortcut {
                path: origin.to_path_buf(),
                key: raw.key,
                spec: raw.shortcut,
            });
        }

        let long_cmd = raw.long_cmd.trim();
        if long_cmd.chars().any(char::is_whitespace) {
            tracing::warn!(
                "LongCmd {:?} of record {:?} contains whitespace and cannot be typed",
                long_cmd,
                raw.key
            );
        }

        Ok(CommandRecord::new(
            raw.key,
            raw.name,
            mode,
            shortcut,
            long_cmd,
            raw.help,
        ))
    }

    /// Merge one validated record.
    pub fn add_record(&mut self, record: CommandRecord, origin: &Path) -> Result<(), LoadError> {
        let table = &mut self.table;

        if let Some(existing) = table.records.get_index_of(record.key()) {
            return Err(LoadError::DuplicateKey {
                key: record.key().to_string(),
                first: self.origins[existing].clone(),
                second: origin.to_path_buf(),
            });
        }

        let long_cmd = record.long_cmd();
        if let Some(&existing) = table.by_long_cmd.get(long_cmd) {
            return Err(LoadError::DuplicateLongCommand {
                long_cmd: long_cmd.to_string(),
                first: key_at(&table.records, existing),
                second: record.key().to_string(),
            });
        }

        if let Some(shortcut) = record.shortcut() {
            if let Some(&existing) = table.by_shortcut.get(&shortcut.code()) {
                return Err(LoadError::DuplicateShortcut {
                    shortcut: shortcut.to_string(),
                    first: key_at(&table.records, existing),
                    second: record.key().to_string(),
                });
            }
        }

        let index = table.records.len();
        if !long_cmd.is_empty() {
            table.by_long_cmd.insert(long_cmd.to_string(), index);
        }
        if let Some(code) = record.shortcut_code() {
            table.by_shortcut.insert(code, index);
        }
        table.by_state.entry(record.mode()).or_insert(index);
        table.records.insert(record.key().to_string(), record);
        self.origins.push(origin.to_path_buf());
        Ok(())
    }

    pub fn build(self) -> CommandTable {
        self.table
    }
}

fn key_at(records: &IndexMap<String, CommandRecord>, index: usize) -> String {
    records
        .get_index(index)
        .map(|(key, _)| key.clone())
        .unwrap_or_default()
}

/// Shortcut code → record, for keys pressed while idle.
#[derive(Debug, Clone, Default)]
pub struct ShortcutIndex {
    by_code: FxHashMap<u32, CommandRecord>,
}

impl ShortcutIndex {
    /// Every record with a shortcut, except ones that target IDLE itself.
    pub fn from_table(table: &CommandTable) -> Self {
        let by_code = table
            .iter()
            .filter(|record| record.mode() != Mode::Idle)
            .filter_map(|record| Some((record.shortcut_code()?, record.clone())))
            .collect();
        Self { by_code }
    }

    pub fn lookup(&self, event: &KeyEvent) -> Option<&CommandRecord> {
        self.lookup_code(event.shortcut_code())
    }

    pub fn lookup_code(&self, code: u32) -> Option<&CommandRecord> {
        self.by_code.get(&code)
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}
