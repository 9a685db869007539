//! # Ticket Booth Testing
//!
//! Testing utilities and helpers for the ticket booth.
//!
//! This crate provides:
//! - Mock implementations of Environment traits ([`FixedClock`], [`ScriptedConsole`])
//! - A Given-When-Then harness for reducers ([`ReducerTest`])
//!
//! ## Example
//!
//! ```
//! use ticket_booth_core::environment::Console;
//! use ticket_booth_testing::ScriptedConsole;
//!
//! let mut console = ScriptedConsole::new(["Alice"]);
//! let line = console.read_line("Name: ").ok().flatten();
//! assert_eq!(line.as_deref(), Some("Alice"));
//! assert!(console.transcript_contains("Name: "));
//! ```

use chrono::{DateTime, Utc};
use ticket_booth_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use std::collections::VecDeque;
    use std::io;
    use ticket_booth_core::environment::Console;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use ticket_booth_testing::mocks::FixedClock;
    /// use ticket_booth_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-06-15 12:00:00 UTC)
    ///
    /// Midday UTC keeps the local calendar date stable for most time zones.
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-06-15T12:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Console that replays scripted input and records everything shown
    ///
    /// Prompts and written lines are captured in order in the transcript.
    /// Once the script runs out, reads report end of input.
    #[derive(Debug, Default, Clone)]
    pub struct ScriptedConsole {
        inputs: VecDeque<String>,
        transcript: Vec<String>,
        written: Vec<String>,
    }

    impl ScriptedConsole {
        /// Create a console that will answer prompts with `inputs`, in order
        pub fn new<I, S>(inputs: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                inputs: inputs.into_iter().map(Into::into).collect(),
                transcript: Vec::new(),
                written: Vec::new(),
            }
        }

        /// Prompts and output lines, interleaved in the order they happened
        #[must_use]
        pub fn transcript(&self) -> &[String] {
            &self.transcript
        }

        /// Lines written with [`Console::write_line`], without prompts
        #[must_use]
        pub fn written(&self) -> &[String] {
            &self.written
        }

        /// Whether any transcript entry contains `needle`
        #[must_use]
        pub fn transcript_contains(&self, needle: &str) -> bool {
            self.transcript.iter().any(|entry| entry.contains(needle))
        }

        /// How many written lines equal `line` exactly
        #[must_use]
        pub fn count_written(&self, line: &str) -> usize {
            self.written.iter().filter(|l| *l == line).count()
        }

        /// Scripted inputs not yet consumed
        #[must_use]
        pub fn remaining_inputs(&self) -> usize {
            self.inputs.len()
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.transcript.push(prompt.to_string());
            Ok(self.inputs.pop_front())
        }

        fn write_line(&mut self, line: &str) -> io::Result<()> {
            self.transcript.push(line.to_string());
            self.written.push(line.to_string());
            Ok(())
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, ScriptedConsole, test_clock};
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_booth_core::environment::Console;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_scripted_console_replays_inputs() -> std::io::Result<()> {
        let mut console = ScriptedConsole::new(["first", "second"]);

        assert_eq!(console.read_line("> ")?.as_deref(), Some("first"));
        console.write_line("ack")?;
        assert_eq!(console.read_line("> ")?.as_deref(), Some("second"));
        assert_eq!(console.read_line("> ")?, None);

        assert_eq!(console.transcript(), &["> ", "ack", "> ", "> "]);
        assert_eq!(console.written(), &["ack"]);
        assert_eq!(console.count_written("ack"), 1);
        assert_eq!(console.remaining_inputs(), 0);
        Ok(())
    }
}
