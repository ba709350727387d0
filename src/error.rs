//! Frame-level error types.

use std::fmt;

use thiserror::Error;

/// The engine stacks checked for balance at frame end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StackKind {
    Id,
    Clip,
    Container,
    Layout,
}

impl fmt::Display for StackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StackKind::Id => "id",
            StackKind::Clip => "clip",
            StackKind::Container => "container",
            StackKind::Layout => "layout",
        })
    }
}

/// A frame could not be completed.
///
/// Both variants are caller bugs: a begin/end widget pair was mismatched,
/// or `end()` was called outside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("{stack} stack still holds {depth} entries at frame end; a begin/end pair is unbalanced")]
    UnbalancedStack { stack: StackKind, depth: usize },
    #[error("end() called without a matching begin()")]
    NotInFrame,
}
