//! # generator
//!
//! Rust generator implementation
//!

use std::any;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::generator::{GeneratorState, Resume};
use crate::rt::{Error, State};
use crate::scope::{Scope, ScopedBody};

/// Generator helper
pub struct Gn<T = ()> {
    dummy: PhantomData<T>,
}

/// the generator type
pub type Generator<'a, T> = GeneratorImpl<'a, T>;

impl<T> Gn<T> {
    /// create a generator from a closure body driven by a `Scope`
    ///
    /// the closure runs once per advance, variables it captures keep their
    /// values between advances
    ///
    /// ```
    /// use lazy_gen::Gn;
    ///
    /// let mut n = 0;
    /// let g = Gn::new_scoped(move |s| {
    ///     if n < 3 {
    ///         s.yield_with(n);
    ///         n += 1;
    ///     }
    /// });
    /// assert_eq!(g.collect::<Vec<_>>(), vec![0, 1, 2]);
    /// ```
    pub fn new_scoped<'a, F>(f: F) -> Generator<'a, T>
    where
        F: FnMut(&mut Scope<T>) + 'a,
        T: 'a,
    {
        GeneratorImpl::new(ScopedBody::new(f))
    }

    /// create a generator from an explicit state machine
    pub fn from_resume<'a, R>(body: R) -> Generator<'a, T>
    where
        R: Resume<Yield = T> + 'a,
    {
        GeneratorImpl::new(body)
    }
}

/// `GeneratorImpl`
pub struct GeneratorImpl<'a, T> {
    // run state
    state: State,
    // the state machine body
    body: Box<dyn Resume<Yield = T> + 'a>,
}

impl<'a, T> GeneratorImpl<'a, T> {
    /// wrap a state machine body
    pub fn new<R>(body: R) -> Self
    where
        R: Resume<Yield = T> + 'a,
    {
        GeneratorImpl {
            state: State::Created,
            body: Box::new(body),
        }
    }

    /// resume the generator
    ///
    /// returns `None` once the generator is done, the body is not run again
    #[inline]
    pub fn resume(&mut self) -> Option<T> {
        if self.is_done() {
            return None;
        }

        let ret = self.body.resume();
        let next = self.state.advance(matches!(ret, GeneratorState::Yielded(_)));
        if next != self.state {
            trace!("generator {} -> {}", self.state, next);
        }
        self.state = next;
        ret.into_option()
    }

    /// resume the generator, `Err(Error::Done)` when exhausted
    #[inline]
    pub fn produce_next(&mut self) -> Result<T, Error> {
        self.resume().ok_or(Error::Done)
    }

    /// cancel the generator
    /// the body stays at its current resumption point and is never run again
    pub fn cancel(&mut self) {
        if self.is_done() {
            return;
        }
        debug!("generator cancelled in state {}", self.state);
        self.state = State::Done;
    }

    /// is finished
    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// current run state
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }
}

impl<'a, T> Drop for GeneratorImpl<'a, T> {
    fn drop(&mut self) {
        if self.state == State::Suspended {
            debug!("generator is not done while drop");
        }
    }
}

impl<'a, T> Iterator for GeneratorImpl<'a, T> {
    type Item = T;
    // 'None' is returned when the generator is done,
    // otherwise the yielded value is returned wrapped in 'Some'
    fn next(&mut self) -> Option<T> {
        self.resume()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_done() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<'a, T> FusedIterator for GeneratorImpl<'a, T> {}

impl<'a, T> fmt::Debug for GeneratorImpl<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Generator<Output={}> {{ state: {} }}",
            any::type_name::<T>(),
            self.state
        )
    }
}
