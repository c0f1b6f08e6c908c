//! Callback trait for receiving parse events.

use crate::Event;

/// Receives events from [`crate::Parser::parse`].
pub trait ParseCallback<'src> {
    /// Handle one event. Return `false` to stop parsing.
    fn event(&mut self, event: Event<'src>) -> bool;
}

impl<'src> ParseCallback<'src> for Vec<Event<'src>> {
    fn event(&mut self, event: Event<'src>) -> bool {
        self.push(event);
        true
    }
}
