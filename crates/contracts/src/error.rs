use thiserror::Error;

/// Errors raised by the guide tab selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("tab index {index} is out of range (registry has {len} sections)")]
    OutOfRange { index: usize, len: usize },
}
