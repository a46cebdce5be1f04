//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! Update functions return `None` when nothing needs to happen.

/// Commands returned by update functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    /// Request a redraw
    Redraw,
}

impl Cmd {
    /// `Some(Cmd::Redraw)` when something changed, `None` otherwise
    pub fn redraw_if(changed: bool) -> Option<Cmd> {
        changed.then_some(Cmd::Redraw)
    }
}
