//! Error types for officekit operations.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OfficeError {
    /// Column indices are 1-based; bijective base-26 has no label for zero.
    #[error("invalid column index {0}: columns are numbered from 1")]
    InvalidIndex(u32),

    /// The label contained no letters, so there is nothing to decode.
    #[error("malformed column label {0:?}: no alphabetic characters")]
    MalformedLabel(String),

    /// The label decodes to an index larger than any representable column.
    #[error("column label {0:?} is out of range")]
    LabelOutOfRange(String),

    /// Free-slot search needs at least one appointment to anchor the working day.
    #[error("cannot compute free slots from an empty appointment list")]
    EmptySchedule,

    /// The working window is fully booked.
    #[error("no free time within the working window")]
    NoFreeTime,
}

/// Convenience alias used throughout officekit-core.
pub type Result<T> = std::result::Result<T, OfficeError>;
