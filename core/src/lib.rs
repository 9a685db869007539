//! # Ticket Booth Core
//!
//! Core traits and types for the ticket booth.
//!
//! The booth is built as a small reducer-driven state machine:
//!
//! - **State**: Domain state for a feature (the sale session)
//! - **Action**: All possible inputs to a reducer (operator input, derived events)
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Description of follow-up work, executed by the [`store::Store`]
//! - **Environment**: Injected dependencies via traits ([`environment::Clock`],
//!   [`environment::Console`])
//!
//! Everything here is synchronous. The store executes effects inline, so a
//! call to [`store::Store::send`] returns once the action and every action it
//! fed back have been reduced.
//!
//! ## Example
//!
//! ```
//! use ticket_booth_core::{effect::Effect, reducer::Reducer, store::Store, SmallVec};
//!
//! struct Tally;
//!
//! impl Reducer for Tally {
//!     type State = u32;
//!     type Action = u32;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut u32, action: u32, _env: &()) -> SmallVec<[Effect<u32>; 4]> {
//!         *state += action;
//!         SmallVec::new()
//!     }
//! }
//!
//! let mut store = Store::new(0, Tally, ());
//! store.send(2);
//! store.send(3);
//! assert_eq!(store.state(|s| *s), 5);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Store runtime that owns state and executes effects
pub mod store;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action against the current state
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe follow-up work to be performed by the store.
/// They are values, not execution.
pub mod effect {
    /// Effect type - describes work to be executed after a reducer returns
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer
        Send(Box<Action>),
    }

    impl<Action> Effect<Action> {
        /// Feed `action` back into the reducer
        #[must_use]
        pub fn send(action: Action) -> Self {
            Effect::Send(Box::new(action))
        }

        /// Whether this effect does nothing when executed
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter or handed to the imperative shell.
pub mod environment {
    use chrono::{DateTime, Utc};
    use std::io::{self, BufRead, Write};

    /// Clock trait - abstracts time operations for testability
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// Production clock backed by the system time
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// Line-oriented operator console
    ///
    /// Implementations strip the trailing line terminator from input and
    /// return `Ok(None)` once input is exhausted.
    pub trait Console {
        /// Show `prompt` and read one line of input
        ///
        /// # Errors
        ///
        /// Returns the underlying I/O error if reading or writing fails.
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

        /// Write one line of output
        ///
        /// # Errors
        ///
        /// Returns the underlying I/O error if writing fails.
        fn write_line(&mut self, line: &str) -> io::Result<()>;
    }

    /// Console over the process's standard input and output
    #[derive(Debug, Default)]
    pub struct StdConsole;

    impl StdConsole {
        /// Create a console bound to stdin/stdout
        #[must_use]
        pub const fn new() -> Self {
            Self
        }
    }

    impl Console for StdConsole {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
            drop(stdout);

            read_line_lossy(&mut io::stdin().lock())
        }

        fn write_line(&mut self, line: &str) -> io::Result<()> {
            writeln!(io::stdout().lock(), "{line}")
        }
    }

    /// Read one line, replacing invalid UTF-8 with `U+FFFD`
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    pub fn read_line_lossy<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
        let mut bytes = Vec::new();
        if reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(trim_line_ending(String::from_utf8_lossy(&bytes).into_owned())))
    }

    /// Strip one trailing `\n` or `\r\n`
    #[must_use]
    pub fn trim_line_ending(mut line: String) -> String {
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        line
    }

}
