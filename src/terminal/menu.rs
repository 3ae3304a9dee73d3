//! Menu rendering and dispatch
//!
//! Every dashboard is a static table of labeled actions rendered by one
//! shared loop: show the header, show the numbered options, read a
//! selection, hand back the chosen action.

use crate::terminal::prompt::{self, Input, LineReader};
use crate::terminal::screen;
use crate::types::PosError;

/// A titled table of selectable actions
pub struct Menu<A: Copy + 'static> {
    title: &'static str,
    options: &'static [(&'static str, A)],
}

impl<A: Copy> Menu<A> {
    /// Create a menu over a static option table
    pub const fn new(title: &'static str, options: &'static [(&'static str, A)]) -> Self {
        Menu { title, options }
    }

    /// Render the menu and read one action
    ///
    /// Returns `None` when the operator backs out with Ctrl-D. An
    /// unrecognized selection reports the error and renders again.
    pub fn choose<S: LineReader>(&self, prompt: &mut S) -> Result<Option<A>, PosError> {
        self.choose_with(prompt, || {})
    }

    /// Render the menu plus extra context, then read one action
    ///
    /// `render_context` runs between the header and the options on every
    /// repaint, letting a dashboard keep listings (products, cart) on
    /// screen.
    pub fn choose_with<S, F>(&self, prompt: &mut S, render_context: F) -> Result<Option<A>, PosError>
    where
        S: LineReader,
        F: Fn(),
    {
        loop {
            screen::header(self.title);
            render_context();
            for (number, (label, _)) in self.options.iter().enumerate() {
                screen::option(number + 1, label);
            }

            let input = match prompt.line("Choose an option: ")? {
                Input::Line(line) => line,
                Input::Cancelled => return Ok(None),
            };

            match prompt::parse_selection(&input, self.options.len()) {
                Ok(index) => return Ok(Some(self.options[index].1)),
                Err(e) => screen::failure(&e),
            }
        }
    }
}
