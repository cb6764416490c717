//! # generator
//!
//! generator trait
//!

use crate::rt::Error;

/// result of resuming a generator body once
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeneratorState<Y> {
    /// the body stopped at a yield point with a value
    Yielded(Y),
    /// the body ran to its end without yielding
    Complete,
}

impl<Y> GeneratorState<Y> {
    /// convert into an `Option`, `Complete` maps to `None`
    #[inline]
    pub fn into_option(self) -> Option<Y> {
        match self {
            GeneratorState::Yielded(v) => Some(v),
            GeneratorState::Complete => None,
        }
    }
}

impl<Y> From<Option<Y>> for GeneratorState<Y> {
    fn from(v: Option<Y>) -> Self {
        match v {
            Some(v) => GeneratorState::Yielded(v),
            None => GeneratorState::Complete,
        }
    }
}

/// a resumable generator body
///
/// Implementors hold a resumption tag together with every local that must
/// survive between two yields. Each call to `resume` runs the body from the
/// saved tag to the next yield point (or to its end) and updates the tag.
///
/// The body is never resumed again after it returned `Complete` once it is
/// wrapped by [`Gn::from_resume`](crate::Gn::from_resume).
pub trait Resume {
    /// yield type
    type Yield;

    /// run to the next yield point
    fn resume(&mut self) -> GeneratorState<Self::Yield>;
}

impl<R: Resume + ?Sized> Resume for &mut R {
    type Yield = R::Yield;

    #[inline]
    fn resume(&mut self) -> GeneratorState<R::Yield> {
        (**self).resume()
    }
}

impl<R: Resume + ?Sized> Resume for Box<R> {
    type Yield = R::Yield;

    #[inline]
    fn resume(&mut self) -> GeneratorState<R::Yield> {
        (**self).resume()
    }
}

/// pull the next value out of any lazy sequence
///
/// returns `Err(Error::Done)` when the source has no more values
///
/// ```
/// use lazy_gen::{produce_next, Error, Sequence};
///
/// let a = Sequence::from(vec![1, 2]);
/// let mut itr = a.iter();
/// assert_eq!(produce_next(&mut itr), Ok(&1));
/// assert_eq!(produce_next(&mut itr), Ok(&2));
/// assert_eq!(produce_next(&mut itr), Err(Error::Done));
/// ```
#[inline]
pub fn produce_next<I>(it: &mut I) -> Result<I::Item, Error>
where
    I: Iterator + ?Sized,
{
    it.next().ok_or(Error::Done)
}
