//! # generator run time support
//!
//! generator run state and the exhaustion error
//!
use std::error;
use std::fmt;

/// generator error types
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// the generator is exhausted, no more values
    Done,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Done => write!(f, "StopIteration"),
        }
    }
}

impl error::Error for Error {}

/// run state of a generator instance
///
/// `Created -> Suspended` on the first advance that yields,
/// `Suspended -> Suspended` while values remain and
/// `Created | Suspended -> Done` once the body completes.
/// `Done` is terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// not resumed yet
    Created,
    /// stopped at a yield point, can be resumed
    Suspended,
    /// body completed or cancelled
    Done,
}

impl State {
    /// is this the terminal state
    #[inline]
    pub fn is_done(self) -> bool {
        self == State::Done
    }

    /// next state after one advance, given whether the body yielded
    #[inline]
    pub(crate) fn advance(self, yielded: bool) -> State {
        match (self, yielded) {
            (State::Done, _) => State::Done,
            (_, true) => State::Suspended,
            (_, false) => State::Done,
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            State::Created => "created",
            State::Suspended => "suspended",
            State::Done => "done",
        };
        f.write_str(s)
    }
}
