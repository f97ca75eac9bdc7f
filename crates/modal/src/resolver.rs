//! Matching command-line text against long commands.

use commands::{CommandRecord, CommandTable};

/// A matched command and the text left over for its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    pub record: &'a CommandRecord,
    pub argument: String,
}

/// Match `text` against the table's long commands.
///
/// The whole text is tried first; otherwise the text is split at its first
/// space, the head must match exactly and everything after that one space
/// is the argument.
pub fn resolve<'a>(table: &'a CommandTable, text: &str) -> Option<Resolution<'a>> {
    if let Some(record) = table.find_by_long_command(text) {
        return Some(Resolution {
            record,
            argument: String::new(),
        });
    }
    let (head, tail) = text.split_once(' ')?;
    table.find_by_long_command(head).map(|record| Resolution {
        record,
        argument: tail.to_string(),
    })
}
