//! # Mock Input for Testing
//!
//! Scripted [`LineSource`] for driving the controller without a terminal.

use super::{InputEvent, LineSource};
use anyhow::Result;
use std::collections::VecDeque;

/// Replays pre-programmed input events, then reports end of input
pub struct MockLineSource {
    events: VecDeque<InputEvent>,
    reads: usize,
}

impl MockLineSource {
    /// Create a mock source from pre-programmed events
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            reads: 0,
        }
    }

    /// Create a mock source that submits each string as a line
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            lines
                .into_iter()
                .map(|line| InputEvent::Line(line.into()))
                .collect(),
        )
    }

    /// Add an event to the end of the script
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// How many times the controller asked for input
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl LineSource for MockLineSource {
    fn read_line(&mut self) -> Result<InputEvent> {
        self.reads += 1;
        Ok(self.events.pop_front().unwrap_or(InputEvent::EndOfInput))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_script_then_ends() {
        let mut source = MockLineSource::from_lines(["PE"]);
        source.push_event(InputEvent::Interrupted);

        assert_eq!(source.read_line().unwrap(), InputEvent::Line("PE".into()));
        assert_eq!(source.read_line().unwrap(), InputEvent::Interrupted);
        assert_eq!(source.read_line().unwrap(), InputEvent::EndOfInput);
        assert_eq!(source.reads(), 3);
    }
}
