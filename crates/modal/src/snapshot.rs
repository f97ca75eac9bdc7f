//! What survives a focus loss.

use commands::Mode;

use crate::offset::OffsetKind;

/// The mode and its half-typed argument, captured when the window loses
/// focus and replayed when it comes back.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: Mode,
    pub pending: String,
    /// Movement modes also keep how their digits are read.
    pub offset: OffsetKind,
}
